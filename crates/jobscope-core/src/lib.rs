//! # jobscope Core Library
//!
//! Core logic for jobscope, a personal job-search research tracker. Company
//! research lives in YAML records; this crate validates them and runs the
//! energy matrix over them. The `jobscope` CLI is a thin layer over it.
//!
//! ## Architecture
//!
//! - **Energy matrix**: pure classification of day-to-day tasks into
//!   sustainability quadrants, plus an aggregate time distribution and verdict
//! - **Storage**: YAML profile and per-company evaluations, TOML configuration
//!
//! ## Key Components
//!
//! - [`Profile`]: the evaluator's drains, generators, strengths and needs
//! - [`QuadrantCalculator`]: `(TaskCharacteristics, Profile) -> Quadrant`
//! - [`SynthesisAggregator`]: classified tasks -> [`EnergySynthesis`]
//! - [`EnergyMatrix`]: one company's stored evaluation
//! - [`Config`]: weights, thresholds and evaluation settings

pub mod energy;
pub mod error;
pub mod storage;

pub use energy::{
    calculate_quadrant, generate_synthesis, EnergyMatrix, EnergySynthesis, MatrixConfig, Profile,
    Quadrant, QuadrantCalculator, SustainabilityRating, SynthesisAggregator, TaskCharacteristics,
    TaskImplication,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use storage::{CompanyStore, Config, ProfileStore};
