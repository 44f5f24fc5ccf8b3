//! Weights and thresholds for the energy matrix.
//!
//! The default numbers are provisional calibrations. They are plain data so a
//! recalibration is a config change: the `[matrix]` table of `config.toml`
//! overrides any of them.

use serde::{Deserialize, Serialize};

use super::levels::{DrainSeverity, GeneratorStrength, LearningLoad, SkillLevel};
use crate::error::ConfigError;

pub const EXPERT_SKILL_WEIGHT: i32 = 2;
pub const PROFICIENT_SKILL_WEIGHT: i32 = 1;
pub const LEARNING_SKILL_WEIGHT: i32 = 0;
pub const HIGH_LEARNING_PENALTY: i32 = 2;
pub const MODERATE_LEARNING_PENALTY: i32 = 1;
pub const ENERGIZING_GROWTH_BONUS: i32 = 1;
/// Strength score at or above which a task counts as "good at".
pub const GOOD_AT_THRESHOLD: i32 = 2;

pub const SEVERE_DRAIN_WEIGHT: i32 = 3;
pub const MODERATE_DRAIN_WEIGHT: i32 = 2;
pub const MILD_DRAIN_WEIGHT: i32 = 1;
pub const CORE_NEED_GENERATOR_WEIGHT: i32 = 3;
pub const STRONG_GENERATOR_WEIGHT: i32 = 2;
pub const MODERATE_GENERATOR_WEIGHT: i32 = 1;
pub const COHERENCE_VIOLATION_PENALTY: i32 = 2;
/// Energy score strictly above which a task "energizes".
pub const ENERGIZES_THRESHOLD: i32 = 0;

pub const GREEN_MINIMUM_PERCENT: u32 = 60;
pub const RED_MAXIMUM_PERCENT: u32 = 20;
pub const YELLOW_MAXIMUM_PERCENT: u32 = 30;
/// Mutual share below which the rating is LOW regardless of other checks.
pub const LOW_MUTUAL_FLOOR_PERCENT: u32 = 40;

/// Score weights used by the quadrant calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub expert_skill: i32,
    pub proficient_skill: i32,
    pub learning_skill: i32,
    pub high_learning_penalty: i32,
    pub moderate_learning_penalty: i32,
    pub energizing_growth_bonus: i32,
    pub good_at_threshold: i32,
    pub severe_drain: i32,
    pub moderate_drain: i32,
    pub mild_drain: i32,
    pub core_need_generator: i32,
    pub strong_generator: i32,
    pub moderate_generator: i32,
    pub coherence_violation_penalty: i32,
    pub energizes_threshold: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            expert_skill: EXPERT_SKILL_WEIGHT,
            proficient_skill: PROFICIENT_SKILL_WEIGHT,
            learning_skill: LEARNING_SKILL_WEIGHT,
            high_learning_penalty: HIGH_LEARNING_PENALTY,
            moderate_learning_penalty: MODERATE_LEARNING_PENALTY,
            energizing_growth_bonus: ENERGIZING_GROWTH_BONUS,
            good_at_threshold: GOOD_AT_THRESHOLD,
            severe_drain: SEVERE_DRAIN_WEIGHT,
            moderate_drain: MODERATE_DRAIN_WEIGHT,
            mild_drain: MILD_DRAIN_WEIGHT,
            core_need_generator: CORE_NEED_GENERATOR_WEIGHT,
            strong_generator: STRONG_GENERATOR_WEIGHT,
            moderate_generator: MODERATE_GENERATOR_WEIGHT,
            coherence_violation_penalty: COHERENCE_VIOLATION_PENALTY,
            energizes_threshold: ENERGIZES_THRESHOLD,
        }
    }
}

impl ScoringWeights {
    pub fn skill(&self, level: SkillLevel) -> i32 {
        match level {
            SkillLevel::Expert => self.expert_skill,
            SkillLevel::Proficient => self.proficient_skill,
            SkillLevel::Learning => self.learning_skill,
        }
    }

    pub fn learning_penalty(&self, load: LearningLoad) -> i32 {
        match load {
            LearningLoad::High => self.high_learning_penalty,
            LearningLoad::Moderate => self.moderate_learning_penalty,
            LearningLoad::Low | LearningLoad::None => 0,
        }
    }

    pub fn drain(&self, severity: DrainSeverity) -> i32 {
        match severity {
            DrainSeverity::Severe => self.severe_drain,
            DrainSeverity::Moderate => self.moderate_drain,
            DrainSeverity::Mild => self.mild_drain,
        }
    }

    pub fn generator(&self, strength: GeneratorStrength) -> i32 {
        match strength {
            GeneratorStrength::CoreNeed => self.core_need_generator,
            GeneratorStrength::Strong => self.strong_generator,
            GeneratorStrength::Moderate => self.moderate_generator,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let magnitudes = [
            ("expert_skill", self.expert_skill),
            ("proficient_skill", self.proficient_skill),
            ("learning_skill", self.learning_skill),
            ("high_learning_penalty", self.high_learning_penalty),
            ("moderate_learning_penalty", self.moderate_learning_penalty),
            ("energizing_growth_bonus", self.energizing_growth_bonus),
            ("severe_drain", self.severe_drain),
            ("moderate_drain", self.moderate_drain),
            ("mild_drain", self.mild_drain),
            ("core_need_generator", self.core_need_generator),
            ("strong_generator", self.strong_generator),
            ("moderate_generator", self.moderate_generator),
            ("coherence_violation_penalty", self.coherence_violation_penalty),
        ];
        // Signs are applied by the calculator; stored weights are magnitudes.
        for (key, value) in magnitudes {
            if value < 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("matrix.weights.{key}"),
                    message: format!("weights are magnitudes and must be >= 0, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Percentage thresholds used by the synthesis aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SustainabilityThresholds {
    pub green_minimum: u32,
    pub red_maximum: u32,
    pub yellow_maximum: u32,
    pub low_mutual_floor: u32,
}

impl Default for SustainabilityThresholds {
    fn default() -> Self {
        Self {
            green_minimum: GREEN_MINIMUM_PERCENT,
            red_maximum: RED_MAXIMUM_PERCENT,
            yellow_maximum: YELLOW_MAXIMUM_PERCENT,
            low_mutual_floor: LOW_MUTUAL_FLOOR_PERCENT,
        }
    }
}

impl SustainabilityThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("green_minimum", self.green_minimum),
            ("red_maximum", self.red_maximum),
            ("yellow_maximum", self.yellow_maximum),
            ("low_mutual_floor", self.low_mutual_floor),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidValue {
                    key: format!("matrix.thresholds.{key}"),
                    message: format!("percentage must be <= 100, got {value}"),
                });
            }
        }
        if self.low_mutual_floor > self.green_minimum {
            return Err(ConfigError::InvalidValue {
                key: "matrix.thresholds.low_mutual_floor".into(),
                message: format!(
                    "floor ({}) must not exceed green_minimum ({})",
                    self.low_mutual_floor, self.green_minimum
                ),
            });
        }
        Ok(())
    }
}

/// Everything the calculator and aggregator can be tuned with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatrixConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub thresholds: SustainabilityThresholds,
}

impl MatrixConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}
