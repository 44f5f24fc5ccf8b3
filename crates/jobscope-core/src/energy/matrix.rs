//! Per-company energy matrix evaluation record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calculator::QuadrantCalculator;
use super::config::MatrixConfig;
use super::profile::{Profile, ProfileVersion};
use super::synthesis::{EnergySynthesis, SynthesisAggregator};
use super::task::TaskImplication;

/// Whether an evaluation was computed against the current profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAdvisory {
    Current,
    Stale {
        evaluated_with: ProfileVersion,
        current: ProfileVersion,
    },
}

/// A complete evaluation: classified tasks plus their synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMatrix {
    pub company: String,
    pub profile_version: ProfileVersion,
    pub evaluated_on: NaiveDate,
    pub tasks: Vec<TaskImplication>,
    pub synthesis: EnergySynthesis,
}

impl EnergyMatrix {
    /// Classify every task and aggregate the result.
    ///
    /// `tasks` is not modified; the record holds annotated copies.
    pub fn evaluate(
        company: impl Into<String>,
        tasks: &[TaskImplication],
        profile: &Profile,
        config: &MatrixConfig,
        today: NaiveDate,
    ) -> Self {
        let calculator = QuadrantCalculator::new(config.weights.clone());
        let aggregator = SynthesisAggregator::new(config.thresholds.clone());

        let tasks = calculator.classify_all(tasks, profile);
        let synthesis = aggregator.generate(&tasks, profile);

        Self {
            company: company.into(),
            profile_version: profile.version,
            evaluated_on: today,
            tasks,
            synthesis,
        }
    }

    /// Compare against the profile currently on file. Advisory only.
    pub fn check_profile_version(&self, current: &Profile) -> VersionAdvisory {
        if self.profile_version == current.version {
            return VersionAdvisory::Current;
        }
        tracing::warn!(
            company = %self.company,
            evaluated_with = %self.profile_version,
            current = %current.version,
            "evaluation was computed with an older profile version"
        );
        VersionAdvisory::Stale {
            evaluated_with: self.profile_version,
            current: current.version,
        }
    }
}
