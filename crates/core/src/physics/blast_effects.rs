//! Seismic, thermal and air-blast effects
//!
//! # Scientific References
//!
//! - Schultz, P.H., Gault, D.E. (1975). "Seismic effects from major basin
//!   formations on the Moon and Mercury" The Moon, 12, 159-177
//! - Glasstone, S., Dolan, P.J. (1977). "The Effects of Nuclear Weapons",
//!   3rd ed., cube-root overpressure scaling
//! - Collins, G.S., Melosh, H.J., Marcus, R.A. (2005). Earth Impact Effects
//!   Program, Sections 4-6

use crate::config::BlastCoefficients;
use crate::core_types::units::{Joules, Kilometers, Megatons};
use crate::core_types::BlastRadii;

/// Richter-like magnitude of the ground shaking
///
/// M = 0.67·log10(E) − 5.87
///
/// Unbounded below: tiny releases give small or negative magnitudes.
///
/// # Arguments
/// * `energy` - Energy coupled into the ground
/// * `slope` - Coefficient on log10(E)
/// * `intercept` - Additive constant
pub fn seismic_magnitude(energy: Joules, slope: f64, intercept: f64) -> f64 {
    slope * energy.log10() + intercept
}

/// Magnitude for an airburst, where only a fraction of the energy reaches the ground.
///
/// Floored at zero; a non-positive ground energy gives zero.
pub fn airburst_seismic_magnitude(ground_energy: Joules, slope: f64, intercept: f64) -> f64 {
    if *ground_energy > 0.0 {
        seismic_magnitude(ground_energy, slope, intercept).max(0.0)
    } else {
        0.0
    }
}

/// Radius at which the radiated fluence drops to the third-degree-burn threshold
///
/// r = sqrt(E / (4π·Φ))
///
/// # Arguments
/// * `energy` - Total kinetic energy
/// * `burn_fluence` - Third-degree-burn fluence threshold (J/m²)
pub fn thermal_radius(energy: Joules, burn_fluence: f64) -> Kilometers {
    let radius_m = (*energy / (4.0 * std::f64::consts::PI * burn_fluence)).sqrt();
    Kilometers::new(radius_m / 1000.0)
}

/// Overpressure radii from cube-root yield scaling
///
/// r = k·Y^(1/3), Y in kilotons, r in km
pub fn blast_radii(energy: Megatons, coefficients: &BlastCoefficients) -> BlastRadii {
    let scale = energy.to_kilotons().cube_root();
    BlastRadii {
        twenty_psi: Kilometers::new(scale * coefficients.twenty_psi),
        five_psi: Kilometers::new(scale * coefficients.five_psi),
        one_psi: Kilometers::new(scale * coefficients.one_psi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffectsModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_seismic_magnitude() {
        // 1e17 J: 0.67 × 17 − 5.87 = 5.52
        assert_relative_eq!(
            seismic_magnitude(Joules::new(1e17), 0.67, -5.87),
            5.52,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_surface_magnitude_can_be_negative() {
        // 1e6 J: 0.67 × 6 − 5.87 = −1.85
        assert!(seismic_magnitude(Joules::new(1e6), 0.67, -5.87) < 0.0);
    }

    #[test]
    fn test_airburst_magnitude_is_floored() {
        assert_eq!(airburst_seismic_magnitude(Joules::new(1e6), 0.67, -5.87), 0.0);
        assert_eq!(airburst_seismic_magnitude(Joules::new(0.0), 0.67, -5.87), 0.0);
        assert!(airburst_seismic_magnitude(Joules::new(1e15), 0.67, -5.87) > 0.0);
    }

    #[test]
    fn test_thermal_radius() {
        // Surface fluence 4e5: sqrt(3.1416e20 / (4π × 4e5)) = 7905.7 km
        let radius = thermal_radius(Joules::new(std::f64::consts::PI * 1e20), 4e5);
        assert_relative_eq!(*radius, 7905.694, epsilon = 1e-3);
    }

    #[test]
    fn test_lower_burn_threshold_reaches_farther() {
        // Radius scales with Φ^(-1/2): 4e5 J/m² reaches sqrt(1.5) times as far as 6e5
        let energy = Joules::new(1e16);
        let effects = EffectsModel::default();
        let air = thermal_radius(energy, effects.airburst_thermal_fluence);
        let surface = thermal_radius(energy, effects.surface_thermal_fluence);
        assert_relative_eq!(*surface / *air, (6.0f64 / 4.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_one_kiloton_blast_radii() {
        let effects = EffectsModel::default();
        let radii = blast_radii(Megatons::new(0.001), &effects.airburst_blast);
        assert_relative_eq!(*radii.twenty_psi, 0.74, epsilon = 1e-12);
        assert_relative_eq!(*radii.five_psi, 1.54, epsilon = 1e-12);
        assert_relative_eq!(*radii.one_psi, 3.2, epsilon = 1e-12);
    }

    #[test]
    fn test_blast_radii_scale_with_cube_root() {
        let effects = EffectsModel::default();
        let one_mt = blast_radii(Megatons::new(1.0), &effects.surface_blast);
        let eight_mt = blast_radii(Megatons::new(8.0), &effects.surface_blast);
        assert_relative_eq!(*eight_mt.one_psi / *one_mt.one_psi, 2.0, epsilon = 1e-12);
        // 1 Mt = 1000 kt → scale 10
        assert_relative_eq!(*one_mt.one_psi, 28.0, epsilon = 1e-9);
    }
}
