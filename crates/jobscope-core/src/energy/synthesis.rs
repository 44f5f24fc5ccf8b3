//! Synthesis aggregator.
//!
//! Turns classified tasks into a time distribution per quadrant, checks it
//! against the sustainability thresholds and derives a rating.
//!
//! Percentages are the raw sums of each task's resolved time share. They are
//! never rescaled, so a distribution may total more or less than 100.

use serde::{Deserialize, Serialize};

use super::config::SustainabilityThresholds;
use super::levels::{Quadrant, SustainabilityRating, Zone};
use super::profile::Profile;
use super::task::TaskImplication;

/// Time share and task count of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantBucket {
    pub zone: Zone,
    pub percentage: u32,
    pub task_count: usize,
}

impl QuadrantBucket {
    fn empty(quadrant: Quadrant) -> Self {
        Self {
            zone: quadrant.zone(),
            percentage: 0,
            task_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantDistribution {
    pub mutual: QuadrantBucket,
    pub sparingly: QuadrantBucket,
    pub burnout: QuadrantBucket,
    pub help_mentoring: QuadrantBucket,
}

impl Default for QuadrantDistribution {
    fn default() -> Self {
        Self {
            mutual: QuadrantBucket::empty(Quadrant::Mutual),
            sparingly: QuadrantBucket::empty(Quadrant::Sparingly),
            burnout: QuadrantBucket::empty(Quadrant::Burnout),
            help_mentoring: QuadrantBucket::empty(Quadrant::HelpMentoring),
        }
    }
}

impl QuadrantDistribution {
    pub fn get(&self, quadrant: Quadrant) -> &QuadrantBucket {
        match quadrant {
            Quadrant::Mutual => &self.mutual,
            Quadrant::Sparingly => &self.sparingly,
            Quadrant::Burnout => &self.burnout,
            Quadrant::HelpMentoring => &self.help_mentoring,
        }
    }

    fn get_mut(&mut self, quadrant: Quadrant) -> &mut QuadrantBucket {
        match quadrant {
            Quadrant::Mutual => &mut self.mutual,
            Quadrant::Sparingly => &mut self.sparingly,
            Quadrant::Burnout => &mut self.burnout,
            Quadrant::HelpMentoring => &mut self.help_mentoring,
        }
    }

    /// Sparingly plus help_mentoring.
    pub fn yellow_percentage(&self) -> u32 {
        self.sparingly.percentage + self.help_mentoring.percentage
    }

    pub fn total_percentage(&self) -> u32 {
        Quadrant::ALL.iter().map(|q| self.get(*q).percentage).sum()
    }

    pub fn total_tasks(&self) -> usize {
        Quadrant::ALL.iter().map(|q| self.get(*q).task_count).sum()
    }
}

/// Outcome of the three threshold checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdChecks {
    pub meets_green_minimum: bool,
    pub exceeds_red_maximum: bool,
    pub exceeds_yellow_maximum: bool,
}

/// Aggregate verdict over all classified tasks of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySynthesis {
    pub distribution: QuadrantDistribution,
    pub thresholds: ThresholdChecks,
    pub sustainability: SustainabilityRating,
    pub decision_factors: Vec<String>,
}

/// Aggregator carrying its thresholds.
#[derive(Debug, Clone, Default)]
pub struct SynthesisAggregator {
    thresholds: SustainabilityThresholds,
}

impl SynthesisAggregator {
    pub fn new(thresholds: SustainabilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SustainabilityThresholds {
        &self.thresholds
    }

    /// Aggregate classified tasks. Tasks without a quadrant are skipped.
    pub fn generate(&self, tasks: &[TaskImplication], profile: &Profile) -> EnergySynthesis {
        let mut distribution = QuadrantDistribution::default();
        let mut unclassified = 0usize;
        for task in tasks {
            let Some(quadrant) = task.quadrant else {
                unclassified += 1;
                continue;
            };
            let bucket = distribution.get_mut(quadrant);
            bucket.percentage += task.time_share.percent();
            bucket.task_count += 1;
        }

        let thresholds = self.check(&distribution);
        let sustainability = self.rate(&distribution, &thresholds);
        let decision_factors = self.decision_factors(&distribution, &thresholds);

        tracing::info!(
            profile_version = %profile.version,
            tasks = distribution.total_tasks(),
            unclassified,
            mutual = distribution.mutual.percentage,
            burnout = distribution.burnout.percentage,
            rating = %sustainability,
            "energy synthesis generated"
        );

        EnergySynthesis {
            distribution,
            thresholds,
            sustainability,
            decision_factors,
        }
    }

    fn check(&self, distribution: &QuadrantDistribution) -> ThresholdChecks {
        let t = &self.thresholds;
        ThresholdChecks {
            meets_green_minimum: distribution.mutual.percentage >= t.green_minimum,
            exceeds_red_maximum: distribution.burnout.percentage > t.red_maximum,
            exceeds_yellow_maximum: distribution.yellow_percentage() > t.yellow_maximum,
        }
    }

    fn rate(
        &self,
        distribution: &QuadrantDistribution,
        checks: &ThresholdChecks,
    ) -> SustainabilityRating {
        if checks.exceeds_red_maximum
            || distribution.mutual.percentage < self.thresholds.low_mutual_floor
        {
            SustainabilityRating::Low
        } else if checks.meets_green_minimum && !checks.exceeds_yellow_maximum {
            SustainabilityRating::High
        } else {
            SustainabilityRating::Medium
        }
    }

    fn decision_factors(
        &self,
        distribution: &QuadrantDistribution,
        checks: &ThresholdChecks,
    ) -> Vec<String> {
        let t = &self.thresholds;
        let mut factors = Vec::new();
        if checks.exceeds_red_maximum {
            factors.push(format!(
                "REJECT: {}% burnout quadrant exceeds {}% threshold",
                distribution.burnout.percentage, t.red_maximum
            ));
        }
        if checks.exceeds_yellow_maximum {
            factors.push(format!(
                "CAUTION: {}% yellow quadrants (sparingly + help_mentoring) exceed {}% threshold",
                distribution.yellow_percentage(),
                t.yellow_maximum
            ));
        }
        if !checks.meets_green_minimum {
            factors.push(format!(
                "CAUTION: {}% mutual quadrant is below {}% minimum",
                distribution.mutual.percentage, t.green_minimum
            ));
        }
        factors
    }
}

/// Aggregate with the default thresholds.
pub fn generate_synthesis(tasks: &[TaskImplication], profile: &Profile) -> EnergySynthesis {
    SynthesisAggregator::default().generate(tasks, profile)
}
