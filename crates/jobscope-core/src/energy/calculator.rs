//! Quadrant calculator.
//!
//! Scores one task against one profile on two independent axes:
//!
//! ```text
//! strength score = Σ skill weight of used strengths
//!                  − learning penalty
//!                  + growth bonus (energizing growth area, favorable context)
//! energy score   = Σ generator weights − Σ drain weights − coherence penalties
//! ```
//!
//! | good at (strength ≥ threshold) | energizes (energy > threshold) | Quadrant |
//! |---|---|---|
//! | yes | yes | mutual |
//! | yes | no  | sparingly |
//! | no  | yes | help_mentoring |
//! | no  | no  | burnout |
//!
//! Pure and infallible: inputs are validated when they are loaded.

use serde::{Deserialize, Serialize};

use super::config::ScoringWeights;
use super::levels::{CoherenceImpact, ConflictExposure, Level, Quadrant};
use super::profile::Profile;
use super::task::{StrengthKind, TaskCharacteristics, TaskImplication};
use super::triggers::{DrainKind, GeneratorKind};

/// Full scoring breakdown for one task, for explainable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantScore {
    pub quadrant: Quadrant,
    pub strength_score: i32,
    pub energy_score: i32,
    pub good_at: bool,
    pub energizes: bool,
    pub matched_strengths: Vec<StrengthKind>,
    pub growth_bonus_applied: bool,
    pub matched_drains: Vec<DrainKind>,
    pub matched_generators: Vec<GeneratorKind>,
    /// Pattern ids of violated coherence needs, penalized or not
    pub violated_coherence_needs: Vec<String>,
}

/// Stateless quadrant calculator carrying its weights.
#[derive(Debug, Clone, Default)]
pub struct QuadrantCalculator {
    weights: ScoringWeights,
}

impl QuadrantCalculator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn calculate(&self, task: &TaskCharacteristics, profile: &Profile) -> Quadrant {
        self.explain(task, profile).quadrant
    }

    /// Score a task and keep every matched rule.
    pub fn explain(&self, task: &TaskCharacteristics, profile: &Profile) -> QuadrantScore {
        let w = &self.weights;

        // Strength axis
        let mut matched_strengths = Vec::new();
        let mut strength_score = 0;
        for kind in task.strengths.used() {
            if let Some(strength) = profile.strength(kind) {
                strength_score += w.skill(strength.level);
                matched_strengths.push(kind);
            }
        }
        strength_score -= w.learning_penalty(task.learning_required);

        let growth_bonus_applied = profile.has_energizing_growth_area()
            && task.learning_required.is_substantial()
            && task.progress_visibility == Level::High
            && task.conflict_exposure == ConflictExposure::Low;
        if growth_bonus_applied {
            strength_score += w.energizing_growth_bonus;
        }

        // Energy axis
        let mut energy_score = 0;
        let mut matched_drains = Vec::new();
        for (kind, drain) in &profile.energy_drains {
            if kind.is_triggered_by(task) {
                energy_score -= w.drain(drain.severity);
                matched_drains.push(*kind);
            }
        }

        let mut matched_generators = Vec::new();
        for (kind, generator) in &profile.energy_generators {
            if kind.is_triggered_by(task) {
                energy_score += w.generator(generator.strength);
                matched_generators.push(*kind);
            }
        }

        let mut violated_coherence_needs = Vec::new();
        for need in &profile.coherence_needs {
            if need.is_violated_by(task) {
                if need.impact_if_violated == CoherenceImpact::SevereDrain {
                    energy_score -= w.coherence_violation_penalty;
                }
                violated_coherence_needs.push(need.pattern.clone());
            }
        }

        let good_at = strength_score >= w.good_at_threshold;
        let energizes = energy_score > w.energizes_threshold;
        let quadrant = Quadrant::from_assessment(good_at, energizes);

        tracing::debug!(
            strength_score,
            energy_score,
            quadrant = %quadrant,
            "classified task"
        );

        QuadrantScore {
            quadrant,
            strength_score,
            energy_score,
            good_at,
            energizes,
            matched_strengths,
            growth_bonus_applied,
            matched_drains,
            matched_generators,
            violated_coherence_needs,
        }
    }

    /// Annotated copies of `tasks`, each carrying its computed quadrant.
    pub fn classify_all(
        &self,
        tasks: &[TaskImplication],
        profile: &Profile,
    ) -> Vec<TaskImplication> {
        tasks
            .iter()
            .map(|task| task.with_quadrant(self.calculate(&task.characteristics, profile)))
            .collect()
    }
}

/// Classify one task with the default weights.
pub fn calculate_quadrant(characteristics: &TaskCharacteristics, profile: &Profile) -> Quadrant {
    QuadrantCalculator::default().calculate(characteristics, profile)
}
