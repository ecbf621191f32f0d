//! Core types and utilities

pub mod composition;
pub mod entry;
pub mod impact;
pub mod units;

pub use composition::Composition;
pub use entry::{AngleMode, EntryParameters};
pub use impact::{
    BlastRadii, ClassificationRule, Crater, EntryClassification, ImpactOutcome, ImpactResult,
    ImpactSummary, ImpactType,
};
pub use units::*;
