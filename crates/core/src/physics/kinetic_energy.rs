//! Mass and kinetic energy of a spherical impactor

use crate::core_types::units::{Joules, KgPerCubicMeter, Kilograms, Meters, MetersPerSecond};

/// Mass of a homogeneous sphere
///
/// m = (4/3)·π·r³·ρ with r = d/2
///
/// # Arguments
/// * `diameter` - Body diameter
/// * `density` - Bulk density
pub fn body_mass(diameter: Meters, density: KgPerCubicMeter) -> Kilograms {
    let radius = *diameter / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    Kilograms::new(volume * *density)
}

/// Kinetic energy E = ½·m·v²
pub fn kinetic_energy(mass: Kilograms, velocity: MetersPerSecond) -> Joules {
    Joules::new(0.5 * *mass * velocity.squared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::KilometersPerSecond;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_meter_water_sphere() {
        let mass = body_mass(Meters::new(1.0), KgPerCubicMeter::new(1000.0));
        // (4/3)·π·0.125·1000 ≈ 523.6 kg
        assert_relative_eq!(*mass, 523.598_775_6, epsilon = 1e-6);
    }

    #[test]
    fn test_chelyabinsk_energy() {
        let mass = body_mass(Meters::new(20.0), KgPerCubicMeter::new(3000.0));
        let energy = kinetic_energy(mass, KilometersPerSecond::new(19.0).to_meters_per_second());

        // ≈ 2.27e15 J, about half a megaton
        assert_relative_eq!(*energy, 2.268_229_9e15, max_relative = 1e-6);
        assert_relative_eq!(*energy.to_megatons(4.18e15), 0.5426, epsilon = 1e-4);
    }

    #[test]
    fn test_mass_scales_with_cube_of_diameter() {
        let density = KgPerCubicMeter::new(3000.0);
        let small = body_mass(Meters::new(10.0), density);
        let large = body_mass(Meters::new(20.0), density);
        assert_relative_eq!(*large / *small, 8.0, epsilon = 1e-12);
    }
}
