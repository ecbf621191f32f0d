//! Physics sub-models for impact effects

pub(crate) mod atmospheric_entry;
pub(crate) mod blast_effects;
pub(crate) mod cratering;
pub(crate) mod kinetic_energy;

pub(crate) use atmospheric_entry::classify_entry;
pub(crate) use blast_effects::{
    airburst_seismic_magnitude, blast_radii, seismic_magnitude, thermal_radius,
};
pub(crate) use cratering::calculate_crater;
pub(crate) use kinetic_energy::{body_mass, kinetic_energy};

// ============================================================================
// PUBLIC RE-EXPORTS FOR VALIDATION TESTING
// ============================================================================
// Integration tests check the individual scaling laws against published
// values, so the sub-model functions are reachable from outside the crate.

/// Public re-exports of validation test functions from `atmospheric_entry`
pub mod atmospheric_entry_validation {
    pub use super::atmospheric_entry::{
        calculate_breakup_altitude, calculate_penetration_depth, classify_entry,
    };
}

/// Public re-exports of validation test functions from `cratering`
pub mod cratering_validation {
    pub use super::cratering::{calculate_final_crater, calculate_transient_crater};
}

/// Public re-exports of validation test functions from `blast_effects`
pub mod blast_effects_validation {
    pub use super::blast_effects::{blast_radii, seismic_magnitude, thermal_radius};
}
