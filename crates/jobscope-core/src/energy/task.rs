//! Task characteristics and task implications.
//!
//! A [`TaskImplication`] is one day-to-day task attached to an evaluation
//! flag. Its characteristics are extracted upstream; every field is required.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::levels::{
    CollaborationType, ConflictExposure, DecisionSpeed, LearningLoad, Level, Quadrant,
    TimezoneSpread,
};
use crate::error::ValidationError;

/// Recognized strength names a task can exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StrengthKind {
    SystemsThinking,
    ToolBuilding,
    Debugging,
    TechnicalWriting,
    Mentoring,
    DataAnalysis,
    Infrastructure,
}

impl StrengthKind {
    pub const ALL: [StrengthKind; 7] = [
        StrengthKind::SystemsThinking,
        StrengthKind::ToolBuilding,
        StrengthKind::Debugging,
        StrengthKind::TechnicalWriting,
        StrengthKind::Mentoring,
        StrengthKind::DataAnalysis,
        StrengthKind::Infrastructure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthKind::SystemsThinking => "systems_thinking",
            StrengthKind::ToolBuilding => "tool_building",
            StrengthKind::Debugging => "debugging",
            StrengthKind::TechnicalWriting => "technical_writing",
            StrengthKind::Mentoring => "mentoring",
            StrengthKind::DataAnalysis => "data_analysis",
            StrengthKind::Infrastructure => "infrastructure",
        }
    }

    /// Resolve a free-text strength name ("Tool Building", "tool-building").
    ///
    /// Returns `None` for names with no `uses_<name>` flag; such strengths
    /// never match a task.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize_name(name);
        Self::ALL.into_iter().find(|k| k.as_str() == normalized)
    }
}

/// Canonical form of a strength or skill name: trimmed, lowercase, with
/// spaces and hyphens folded to underscores.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl fmt::Display for StrengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `uses_<strength>` flag per recognized strength.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StrengthUsage {
    pub uses_systems_thinking: bool,
    pub uses_tool_building: bool,
    pub uses_debugging: bool,
    pub uses_technical_writing: bool,
    pub uses_mentoring: bool,
    pub uses_data_analysis: bool,
    pub uses_infrastructure: bool,
}

impl StrengthUsage {
    pub fn uses(&self, kind: StrengthKind) -> bool {
        match kind {
            StrengthKind::SystemsThinking => self.uses_systems_thinking,
            StrengthKind::ToolBuilding => self.uses_tool_building,
            StrengthKind::Debugging => self.uses_debugging,
            StrengthKind::TechnicalWriting => self.uses_technical_writing,
            StrengthKind::Mentoring => self.uses_mentoring,
            StrengthKind::DataAnalysis => self.uses_data_analysis,
            StrengthKind::Infrastructure => self.uses_infrastructure,
        }
    }

    pub fn set(&mut self, kind: StrengthKind, value: bool) {
        let flag = match kind {
            StrengthKind::SystemsThinking => &mut self.uses_systems_thinking,
            StrengthKind::ToolBuilding => &mut self.uses_tool_building,
            StrengthKind::Debugging => &mut self.uses_debugging,
            StrengthKind::TechnicalWriting => &mut self.uses_technical_writing,
            StrengthKind::Mentoring => &mut self.uses_mentoring,
            StrengthKind::DataAnalysis => &mut self.uses_data_analysis,
            StrengthKind::Infrastructure => &mut self.uses_infrastructure,
        };
        *flag = value;
    }

    /// Strengths flagged on this task.
    pub fn used(&self) -> impl Iterator<Item = StrengthKind> + '_ {
        StrengthKind::ALL.into_iter().filter(|k| self.uses(*k))
    }
}

/// Flat record of the enumerated attributes of one task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCharacteristics {
    pub conflict_exposure: ConflictExposure,
    pub alignment_clarity: Level,
    pub authority_ambiguity: Level,
    pub progress_visibility: Level,
    pub autonomy_level: Level,
    pub decision_speed: DecisionSpeed,
    pub learning_required: LearningLoad,
    #[serde(flatten)]
    pub strengths: StrengthUsage,
    pub collaboration_type: CollaborationType,
    pub meeting_intensity: Level,
    pub requires_sync_communication: bool,
    pub timezone_spread: TimezoneSpread,
}

impl TaskCharacteristics {
    pub fn uses(&self, kind: StrengthKind) -> bool {
        self.strengths.uses(kind)
    }
}

/// Estimated share of working time, e.g. `"20%"` or `"20-30%"`.
///
/// Ranges resolve to their midpoint rounded down to a whole percent. The raw
/// text is kept so records round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeShare {
    raw: String,
    percent: u32,
}

impl TimeShare {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let tokens = numeric_tokens(raw);
        let value = match tokens.as_slice() {
            [] => return Err(ValidationError::InvalidTimeShare(raw.to_string())),
            [single] => *single,
            [low, high, ..] => (low + high) / 2.0,
        };
        if value > 100.0 {
            return Err(ValidationError::InvalidTimeShare(raw.to_string()));
        }
        Ok(Self {
            raw: raw.trim().to_string(),
            percent: value.floor() as u32,
        })
    }

    /// Resolved whole percentage.
    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn numeric_tokens(raw: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '.' && !current.is_empty() && !current.contains('.')) {
            current.push(c);
        } else if !current.is_empty() {
            tokens.extend(current.trim_end_matches('.').parse::<f64>().ok());
            current.clear();
        }
    }
    if !current.is_empty() {
        tokens.extend(current.trim_end_matches('.').parse::<f64>().ok());
    }
    tokens
}

impl TryFrom<String> for TimeShare {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeShare::parse(&value)
    }
}

impl From<TimeShare> for String {
    fn from(value: TimeShare) -> Self {
        value.raw
    }
}

impl fmt::Display for TimeShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A task description with its characteristics, time share and, once the
/// calculator has run, its quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskImplication {
    pub description: String,
    /// Evaluation flag this task was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub time_share: TimeShare,
    pub characteristics: TaskCharacteristics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
}

impl TaskImplication {
    pub fn new(
        description: impl Into<String>,
        time_share: TimeShare,
        characteristics: TaskCharacteristics,
    ) -> Self {
        Self {
            description: description.into(),
            flag: None,
            time_share,
            characteristics,
            quadrant: None,
        }
    }

    /// Copy annotated with a computed quadrant.
    pub fn with_quadrant(&self, quadrant: Quadrant) -> Self {
        Self {
            quadrant: Some(quadrant),
            ..self.clone()
        }
    }
}
