//! Closed catalogue of drain, generator and context-condition identifiers.
//!
//! Each identifier maps to exactly one predicate over [`TaskCharacteristics`]
//! through an exhaustive `match`. Profiles naming an identifier outside this
//! catalogue fail to deserialize instead of silently never matching.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::levels::{CollaborationType, ConflictExposure, DecisionSpeed, Level, TimezoneSpread};
use super::task::{StrengthKind, TaskCharacteristics};

/// Known activity patterns that deplete the evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DrainKind {
    InterpersonalConflict,
    Misalignment,
    AuthorityAmbiguity,
    InvisibleProgress,
    Micromanagement,
    SlowDecisions,
    MeetingOverload,
    CoordinationOverhead,
}

impl DrainKind {
    pub const ALL: [DrainKind; 8] = [
        DrainKind::InterpersonalConflict,
        DrainKind::Misalignment,
        DrainKind::AuthorityAmbiguity,
        DrainKind::InvisibleProgress,
        DrainKind::Micromanagement,
        DrainKind::SlowDecisions,
        DrainKind::MeetingOverload,
        DrainKind::CoordinationOverhead,
    ];

    /// Whether the task exhibits this drain's trigger condition.
    pub fn is_triggered_by(self, task: &TaskCharacteristics) -> bool {
        match self {
            DrainKind::InterpersonalConflict => matches!(
                task.conflict_exposure,
                ConflictExposure::High | ConflictExposure::Moderate
            ),
            DrainKind::Misalignment => task.alignment_clarity == Level::Low,
            DrainKind::AuthorityAmbiguity => task.authority_ambiguity.is_elevated(),
            DrainKind::InvisibleProgress => task.progress_visibility == Level::Low,
            DrainKind::Micromanagement => task.autonomy_level == Level::Low,
            DrainKind::SlowDecisions => task.decision_speed == DecisionSpeed::Slow,
            DrainKind::MeetingOverload => task.meeting_intensity == Level::High,
            DrainKind::CoordinationOverhead => {
                task.collaboration_type == CollaborationType::CrossTeam
                    && task.meeting_intensity.is_elevated()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrainKind::InterpersonalConflict => "interpersonal_conflict",
            DrainKind::Misalignment => "misalignment",
            DrainKind::AuthorityAmbiguity => "authority_ambiguity",
            DrainKind::InvisibleProgress => "invisible_progress",
            DrainKind::Micromanagement => "micromanagement",
            DrainKind::SlowDecisions => "slow_decisions",
            DrainKind::MeetingOverload => "meeting_overload",
            DrainKind::CoordinationOverhead => "coordination_overhead",
        }
    }
}

impl fmt::Display for DrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known activity patterns that restore the evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    VisibleProgress,
    ToolBuilding,
    AlignedCollaboration,
    Autonomy,
    FastDecisions,
    SystemsThinking,
    DeepFocus,
    Learning,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 8] = [
        GeneratorKind::VisibleProgress,
        GeneratorKind::ToolBuilding,
        GeneratorKind::AlignedCollaboration,
        GeneratorKind::Autonomy,
        GeneratorKind::FastDecisions,
        GeneratorKind::SystemsThinking,
        GeneratorKind::DeepFocus,
        GeneratorKind::Learning,
    ];

    pub fn is_triggered_by(self, task: &TaskCharacteristics) -> bool {
        match self {
            GeneratorKind::VisibleProgress => task.progress_visibility == Level::High,
            GeneratorKind::ToolBuilding => task.uses(StrengthKind::ToolBuilding),
            GeneratorKind::AlignedCollaboration => {
                task.alignment_clarity == Level::High
                    && matches!(
                        task.collaboration_type,
                        CollaborationType::Team | CollaborationType::Paired
                    )
            }
            GeneratorKind::Autonomy => task.autonomy_level == Level::High,
            GeneratorKind::FastDecisions => task.decision_speed == DecisionSpeed::Fast,
            GeneratorKind::SystemsThinking => task.uses(StrengthKind::SystemsThinking),
            GeneratorKind::DeepFocus => {
                task.meeting_intensity == Level::Low && !task.requires_sync_communication
            }
            GeneratorKind::Learning => task.learning_required.is_substantial(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorKind::VisibleProgress => "visible_progress",
            GeneratorKind::ToolBuilding => "tool_building",
            GeneratorKind::AlignedCollaboration => "aligned_collaboration",
            GeneratorKind::Autonomy => "autonomy",
            GeneratorKind::FastDecisions => "fast_decisions",
            GeneratorKind::SystemsThinking => "systems_thinking",
            GeneratorKind::DeepFocus => "deep_focus",
            GeneratorKind::Learning => "learning",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organizational conditions a coherence need can require or exclude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ContextCondition {
    /// No synchronous communication needed
    AsyncFirst,
    SyncRequired,
    CoLocated,
    /// Anything narrower than a wide timezone spread
    TimezoneOverlap,
    WideTimezones,
    LowMeetings,
    HighMeetings,
    HighAutonomy,
    LowAutonomy,
    FastDecisions,
    SlowDecisions,
    ClearAlignment,
    SoloWork,
    CrossTeamWork,
}

impl ContextCondition {
    pub fn holds_for(self, task: &TaskCharacteristics) -> bool {
        match self {
            ContextCondition::AsyncFirst => !task.requires_sync_communication,
            ContextCondition::SyncRequired => task.requires_sync_communication,
            ContextCondition::CoLocated => task.timezone_spread == TimezoneSpread::CoLocated,
            ContextCondition::TimezoneOverlap => task.timezone_spread != TimezoneSpread::Wide,
            ContextCondition::WideTimezones => task.timezone_spread == TimezoneSpread::Wide,
            ContextCondition::LowMeetings => task.meeting_intensity == Level::Low,
            ContextCondition::HighMeetings => task.meeting_intensity == Level::High,
            ContextCondition::HighAutonomy => task.autonomy_level == Level::High,
            ContextCondition::LowAutonomy => task.autonomy_level == Level::Low,
            ContextCondition::FastDecisions => task.decision_speed == DecisionSpeed::Fast,
            ContextCondition::SlowDecisions => task.decision_speed == DecisionSpeed::Slow,
            ContextCondition::ClearAlignment => task.alignment_clarity == Level::High,
            ContextCondition::SoloWork => task.collaboration_type == CollaborationType::Solo,
            ContextCondition::CrossTeamWork => {
                task.collaboration_type == CollaborationType::CrossTeam
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::levels::LearningLoad;
    use crate::energy::task::StrengthUsage;

    fn calm_task() -> TaskCharacteristics {
        TaskCharacteristics {
            conflict_exposure: ConflictExposure::None,
            alignment_clarity: Level::Moderate,
            authority_ambiguity: Level::Low,
            progress_visibility: Level::Moderate,
            autonomy_level: Level::Moderate,
            decision_speed: DecisionSpeed::Moderate,
            learning_required: LearningLoad::None,
            strengths: StrengthUsage::default(),
            collaboration_type: CollaborationType::Solo,
            meeting_intensity: Level::Moderate,
            requires_sync_communication: false,
            timezone_spread: TimezoneSpread::Narrow,
        }
    }

    #[test]
    fn calm_task_triggers_no_drain() {
        let task = calm_task();
        assert!(DrainKind::ALL.iter().all(|d| !d.is_triggered_by(&task)));
    }

    #[test]
    fn conflict_drain_matches_high_and_moderate() {
        let mut task = calm_task();
        for (exposure, expected) in [
            (ConflictExposure::High, true),
            (ConflictExposure::Moderate, true),
            (ConflictExposure::Low, false),
            (ConflictExposure::None, false),
        ] {
            task.conflict_exposure = exposure;
            assert_eq!(DrainKind::InterpersonalConflict.is_triggered_by(&task), expected);
        }
    }

    #[test]
    fn aligned_collaboration_needs_team_context() {
        let mut task = calm_task();
        task.alignment_clarity = Level::High;
        assert!(!GeneratorKind::AlignedCollaboration.is_triggered_by(&task));
        task.collaboration_type = CollaborationType::Paired;
        assert!(GeneratorKind::AlignedCollaboration.is_triggered_by(&task));
        task.collaboration_type = CollaborationType::CrossTeam;
        assert!(!GeneratorKind::AlignedCollaboration.is_triggered_by(&task));
    }

    #[test]
    fn tool_building_generator_follows_flag() {
        let mut task = calm_task();
        assert!(!GeneratorKind::ToolBuilding.is_triggered_by(&task));
        task.strengths.uses_tool_building = true;
        assert!(GeneratorKind::ToolBuilding.is_triggered_by(&task));
    }

    #[test]
    fn timezone_overlap_excludes_only_wide() {
        let mut task = calm_task();
        task.timezone_spread = TimezoneSpread::Moderate;
        assert!(ContextCondition::TimezoneOverlap.holds_for(&task));
        task.timezone_spread = TimezoneSpread::Wide;
        assert!(!ContextCondition::TimezoneOverlap.holds_for(&task));
        assert!(ContextCondition::WideTimezones.holds_for(&task));
    }

    #[test]
    fn unknown_drain_key_is_rejected() {
        assert!(serde_yaml::from_str::<DrainKind>("interpersonal_conflcit").is_err());
        assert_eq!(
            serde_yaml::from_str::<GeneratorKind>("visible_progress").unwrap(),
            GeneratorKind::VisibleProgress
        );
    }
}
