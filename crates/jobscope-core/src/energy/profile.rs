//! The evaluator's energy profile.
//!
//! A [`Profile`] is created once and changed only through [`Profile::update`],
//! which always bumps the version label and refreshes `last_updated`.
//! Calculations borrow it immutably; results are never written back.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use super::levels::{CoherenceImpact, DrainSeverity, GeneratorStrength, SkillLevel};
use super::task::{normalize_name, StrengthKind, TaskCharacteristics};
use super::triggers::{ContextCondition, DrainKind, GeneratorKind};
use crate::error::ValidationError;

/// `major.minor` profile version label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileVersion {
    pub major: u32,
    pub minor: u32,
}

impl ProfileVersion {
    pub const INITIAL: ProfileVersion = ProfileVersion { major: 1, minor: 0 };

    /// Next minor version: `1.0 -> 1.1`, `1.9 -> 1.10`.
    ///
    /// # Errors
    /// Returns an error when the minor part is already `u32::MAX`.
    pub fn bump(self) -> Result<Self, ValidationError> {
        let minor = self.minor.checked_add(1).ok_or_else(|| {
            ValidationError::InvalidVersion(format!("{self} has no next minor version"))
        })?;
        Ok(Self {
            major: self.major,
            minor,
        })
    }
}

impl FromStr for ProfileVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidVersion(s.to_string());
        let trimmed = s.trim().trim_start_matches('v');
        let (major, minor) = trimmed.split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for ProfileVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProfileVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VersionVisitor)
    }
}

/// Accepts only string labels. A bare YAML number has already lost its
/// trailing zeros (`1.10` reads as `1.1`), so it is refused outright.
struct VersionVisitor;

impl VersionVisitor {
    fn unquoted<E: de::Error>(number: impl fmt::Display) -> E {
        E::custom(ValidationError::invalid(
            "version",
            format!(
                "unquoted number {number} is ambiguous; quote the label, e.g. version: \"1.10\""
            ),
        ))
    }
}

impl<'de> de::Visitor<'de> for VersionVisitor {
    type Value = ProfileVersion;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quoted \"<major>.<minor>\" version label")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ProfileVersion, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ProfileVersion, E> {
        Err(Self::unquoted(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ProfileVersion, E> {
        Err(Self::unquoted(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ProfileVersion, E> {
        Err(Self::unquoted(v))
    }
}

/// An activity pattern that depletes the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyDrain {
    pub severity: DrainSeverity,
    /// Free-text label of the cause
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub description: String,
}

/// An activity pattern that restores the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyGenerator {
    pub strength: GeneratorStrength,
    #[serde(default)]
    pub description: String,
}

/// An established skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreStrength {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub description: String,
}

impl CoreStrength {
    /// The task flag this strength corresponds to, if any.
    pub fn kind(&self) -> Option<StrengthKind> {
        StrengthKind::from_name(&self.name)
    }
}

/// A skill being actively developed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthArea {
    pub name: String,
    pub current_level: SkillLevel,
    /// Whether learning this currently feels energizing
    pub energizing: bool,
    #[serde(default)]
    pub description: String,
}

/// Systemic organizational pattern the evaluator needs to function well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceNeed {
    pub pattern: String,
    #[serde(default)]
    pub requires_one_of: BTreeSet<ContextCondition>,
    #[serde(default)]
    pub incompatible_with: BTreeSet<ContextCondition>,
    pub impact_if_violated: CoherenceImpact,
    #[serde(default)]
    pub description: String,
}

impl CoherenceNeed {
    /// Violated when none of the required conditions hold, or when any
    /// incompatible condition holds.
    pub fn is_violated_by(&self, task: &TaskCharacteristics) -> bool {
        let unmet = !self.requires_one_of.is_empty()
            && !self.requires_one_of.iter().any(|c| c.holds_for(task));
        let conflicting = self.incompatible_with.iter().any(|c| c.holds_for(task));
        unmet || conflicting
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CommunicationPreferences {
    #[serde(default)]
    pub prefers_async: bool,
    #[serde(default)]
    pub max_meeting_hours_per_day: Option<u32>,
    #[serde(default)]
    pub notes: String,
}

/// The evaluator's complete energy profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub version: ProfileVersion,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub energy_drains: BTreeMap<DrainKind, EnergyDrain>,
    #[serde(default)]
    pub energy_generators: BTreeMap<GeneratorKind, EnergyGenerator>,
    #[serde(default)]
    pub core_strengths: Vec<CoreStrength>,
    #[serde(default)]
    pub growth_areas: Vec<GrowthArea>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<CommunicationPreferences>,
    #[serde(default)]
    pub coherence_needs: Vec<CoherenceNeed>,
}

impl Profile {
    /// Empty profile at version 1.0.
    pub fn new(last_updated: NaiveDate) -> Self {
        Self {
            version: ProfileVersion::INITIAL,
            last_updated,
            energy_drains: BTreeMap::new(),
            energy_generators: BTreeMap::new(),
            core_strengths: Vec::new(),
            growth_areas: Vec::new(),
            communication: None,
            coherence_needs: Vec::new(),
        }
    }

    /// Starter profile written by `profile init`.
    pub fn starter(today: NaiveDate) -> Result<Self, crate::error::CoreError> {
        let mut profile: Profile = serde_yaml::from_str(STARTER_PROFILE_YAML)?;
        profile.last_updated = today;
        profile.validate()?;
        Ok(profile)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_names("core_strengths", self.core_strengths.iter().map(|s| s.name.as_str()))?;
        check_names("growth_areas", self.growth_areas.iter().map(|g| g.name.as_str()))?;

        for need in &self.coherence_needs {
            if need.pattern.trim().is_empty() {
                return Err(ValidationError::invalid(
                    "coherence_needs.pattern",
                    "pattern id must not be empty",
                ));
            }
            if need.requires_one_of.is_empty() && need.incompatible_with.is_empty() {
                return Err(ValidationError::invalid(
                    format!("coherence_needs.{}", need.pattern),
                    "needs at least one required or incompatible condition",
                ));
            }
        }
        Ok(())
    }

    /// Apply an edit and return the next profile revision.
    ///
    /// The version is always bumped from `self` and `last_updated` set to
    /// `today`, whatever the edit does to those fields. `self` is untouched.
    pub fn update<F>(&self, today: NaiveDate, edit: F) -> Result<Profile, ValidationError>
    where
        F: FnOnce(&mut Profile),
    {
        let mut next = self.clone();
        edit(&mut next);
        next.version = self.version.bump()?;
        next.last_updated = today;
        next.validate()?;
        tracing::info!(from = %self.version, to = %next.version, "profile updated");
        Ok(next)
    }

    pub fn strength(&self, kind: StrengthKind) -> Option<&CoreStrength> {
        self.core_strengths.iter().find(|s| s.kind() == Some(kind))
    }

    pub fn has_energizing_growth_area(&self) -> bool {
        self.growth_areas.iter().any(|g| g.energizing)
    }
}

fn check_names<'a>(
    collection: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in names {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(ValidationError::invalid(
                format!("{collection}.name"),
                "name must not be empty",
            ));
        }
        if !seen.insert(key) {
            return Err(ValidationError::Duplicate {
                collection: collection.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

const STARTER_PROFILE_YAML: &str = indoc::indoc! {r#"
    version: "1.0"
    last_updated: 2024-01-01
    energy_drains:
      interpersonal_conflict:
        severity: severe
        trigger: conflict
        description: Sustained disagreement or tension between people
      misalignment:
        severity: moderate
        trigger: unclear goals
        description: Working toward goals the team has not agreed on
      authority_ambiguity:
        severity: moderate
        trigger: unclear ownership
        description: Nobody can say who decides
    energy_generators:
      visible_progress:
        strength: core_need
        description: Seeing work land and get used
      tool_building:
        strength: strong
        description: Building tools that remove toil
      aligned_collaboration:
        strength: moderate
        description: Working with a team that agrees on the goal
    core_strengths:
      - name: systems_thinking
        level: expert
        description: Seeing how parts of a system interact
      - name: tool_building
        level: expert
        description: Internal tooling and automation
      - name: technical_writing
        level: proficient
        description: Design docs and runbooks
    growth_areas:
      - name: mentoring
        current_level: learning
        energizing: true
        description: Helping others grow
    communication:
      prefers_async: true
      max_meeting_hours_per_day: 2
    coherence_needs:
      - pattern: uncertain_problem_space
        requires_one_of: [async_first, timezone_overlap]
        impact_if_violated: severe_drain
        description: Uncertain problems need either async-first culture or overlapping hours
"#};
