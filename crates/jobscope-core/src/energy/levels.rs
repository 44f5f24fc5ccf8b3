//! Enumerated labels shared by the profile and task models.
//!
//! Every label is a closed enum so that malformed values are rejected when a
//! record is deserialized, never inside the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a drain depletes the evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DrainSeverity {
    Mild,
    Moderate,
    Severe,
}

/// How strongly a generator restores the evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorStrength {
    Moderate,
    Strong,
    CoreNeed,
}

/// Proficiency in a strength or growth area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Expert,
    Proficient,
    Learning,
}

/// Consequence of violating a coherence need.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceImpact {
    SevereDrain,
    ModerateDrain,
    MildDrain,
}

/// Three-step scale used by most task attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Moderate,
    Low,
}

impl Level {
    /// High or moderate.
    pub fn is_elevated(self) -> bool {
        matches!(self, Level::High | Level::Moderate)
    }
}

/// Exposure to interpersonal conflict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConflictExposure {
    High,
    Moderate,
    Low,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSpeed {
    Fast,
    Moderate,
    Slow,
}

/// How much new learning a task demands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LearningLoad {
    None,
    Low,
    Moderate,
    High,
}

impl LearningLoad {
    pub fn is_substantial(self) -> bool {
        matches!(self, LearningLoad::Moderate | LearningLoad::High)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationType {
    Solo,
    Paired,
    Team,
    CrossTeam,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimezoneSpread {
    CoLocated,
    Narrow,
    Moderate,
    Wide,
}

/// Sustainability classification of a single task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Skilled and energizing: the target state
    Mutual,
    /// Skilled but draining: tolerate in small doses
    Sparingly,
    /// Unskilled but energizing: a growth opportunity
    HelpMentoring,
    /// Unskilled and draining: eliminate
    Burnout,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Mutual,
        Quadrant::Sparingly,
        Quadrant::HelpMentoring,
        Quadrant::Burnout,
    ];

    /// Map the two assessments onto a quadrant. Total over both inputs.
    pub fn from_assessment(good_at: bool, energizes: bool) -> Self {
        match (good_at, energizes) {
            (true, true) => Quadrant::Mutual,
            (true, false) => Quadrant::Sparingly,
            (false, true) => Quadrant::HelpMentoring,
            (false, false) => Quadrant::Burnout,
        }
    }

    pub fn zone(self) -> Zone {
        match self {
            Quadrant::Mutual => Zone::Green,
            Quadrant::Sparingly | Quadrant::HelpMentoring => Zone::Yellow,
            Quadrant::Burnout => Zone::Red,
        }
    }

    pub fn is_good_at(self) -> bool {
        matches!(self, Quadrant::Mutual | Quadrant::Sparingly)
    }

    pub fn is_energizing(self) -> bool {
        matches!(self, Quadrant::Mutual | Quadrant::HelpMentoring)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::Mutual => "mutual",
            Quadrant::Sparingly => "sparingly",
            Quadrant::HelpMentoring => "help_mentoring",
            Quadrant::Burnout => "burnout",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour label of a quadrant in reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        })
    }
}

/// Overall verdict of a synthesis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SustainabilityRating {
    High,
    Medium,
    Low,
}

impl fmt::Display for SustainabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SustainabilityRating::High => "HIGH",
            SustainabilityRating::Medium => "MEDIUM",
            SustainabilityRating::Low => "LOW",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_assessment_pair_has_a_quadrant() {
        for good_at in [true, false] {
            for energizes in [true, false] {
                let q = Quadrant::from_assessment(good_at, energizes);
                assert_eq!(q.is_good_at(), good_at);
                assert_eq!(q.is_energizing(), energizes);
            }
        }
    }

    #[test]
    fn zones_follow_quadrants() {
        assert_eq!(Quadrant::Mutual.zone(), Zone::Green);
        assert_eq!(Quadrant::Sparingly.zone(), Zone::Yellow);
        assert_eq!(Quadrant::HelpMentoring.zone(), Zone::Yellow);
        assert_eq!(Quadrant::Burnout.zone(), Zone::Red);
    }

    #[test]
    fn labels_use_snake_case() {
        let q: Quadrant = serde_yaml::from_str("help_mentoring").unwrap();
        assert_eq!(q, Quadrant::HelpMentoring);
        let spread: TimezoneSpread = serde_yaml::from_str("co_located").unwrap();
        assert_eq!(spread, TimezoneSpread::CoLocated);
        let rating = serde_yaml::to_string(&SustainabilityRating::Medium).unwrap();
        assert_eq!(rating.trim(), "MEDIUM");
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_yaml::from_str::<DrainSeverity>("catastrophic").is_err());
        assert!(serde_yaml::from_str::<ConflictExposure>("some").is_err());
    }
}
