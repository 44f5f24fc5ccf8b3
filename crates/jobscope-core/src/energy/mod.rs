//! Energy matrix engine.
//!
//! Classifies day-to-day tasks into sustainability quadrants against the
//! evaluator's [`Profile`] and aggregates them into an [`EnergySynthesis`].
//! Everything here is pure: no I/O, no shared mutable state.

mod calculator;
mod config;
mod levels;
mod matrix;
mod profile;
mod synthesis;
mod task;
mod triggers;

pub use calculator::{calculate_quadrant, QuadrantCalculator, QuadrantScore};
pub use config::{MatrixConfig, ScoringWeights, SustainabilityThresholds};
pub use config::{
    ENERGIZES_THRESHOLD, GOOD_AT_THRESHOLD, GREEN_MINIMUM_PERCENT, LOW_MUTUAL_FLOOR_PERCENT,
    RED_MAXIMUM_PERCENT, YELLOW_MAXIMUM_PERCENT,
};
pub use levels::{
    CoherenceImpact, CollaborationType, ConflictExposure, DecisionSpeed, DrainSeverity,
    GeneratorStrength, LearningLoad, Level, Quadrant, SkillLevel, SustainabilityRating,
    TimezoneSpread, Zone,
};
pub use matrix::{EnergyMatrix, VersionAdvisory};
pub use profile::{
    CoherenceNeed, CommunicationPreferences, CoreStrength, EnergyDrain, EnergyGenerator,
    GrowthArea, Profile, ProfileVersion,
};
pub use synthesis::{
    generate_synthesis, EnergySynthesis, QuadrantBucket, QuadrantDistribution,
    SynthesisAggregator, ThresholdChecks,
};
pub use task::{StrengthKind, StrengthUsage, TaskCharacteristics, TaskImplication, TimeShare};
pub use triggers::{ContextCondition, DrainKind, GeneratorKind};
