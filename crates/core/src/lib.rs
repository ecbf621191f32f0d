//! Impact Simulation Core Library
//!
//! Estimates the consequences of an asteroid or comet striking Earth from
//! four inputs: diameter, entry speed, composition and (optionally) impact
//! angle. The entry is classified as an atmospheric airburst or a surface
//! impact, and the matching scaling laws give energy, crater size, seismic
//! magnitude, thermal radius and air-blast radii.
//!
//! ## Model
//!
//! - Homogeneous spherical body, exponential atmosphere
//! - Breakup and penetration estimates drive the airburst/surface decision
//! - Pi-group crater scaling with simple-to-complex collapse
//! - Cube-root overpressure scaling
//!
//! Every constant lives in [`ImpactModelConfig`] and can be overridden.

// Core types and utilities
pub mod core_types;
pub mod config;
pub mod error;

// Scaling laws and the calculator built on them
pub mod physics;
pub mod calculator;

// Scenario sources and output helpers
pub mod scenarios;
pub mod report;

// Re-export core types
pub use core_types::{
    AngleMode, BlastRadii, ClassificationRule, Composition, Crater, EntryClassification,
    EntryParameters, ImpactOutcome, ImpactResult, ImpactSummary, ImpactType,
};
pub use core_types::{Degrees, Joules, Kilometers, KilometersPerSecond, Megatons, Meters};

pub use calculator::{calculate_impact, ImpactCalculator};
pub use config::ImpactModelConfig;
pub use error::ImpactError;
pub use report::{format_large_number, ImpactReport};
