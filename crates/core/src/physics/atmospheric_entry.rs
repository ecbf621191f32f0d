//! Atmospheric entry: airburst vs. surface impact
//!
//! Estimates whether aerodynamic loading destroys a body in the atmosphere
//! before it can deliver its energy to the ground as a coherent mass.
//!
//! # Scientific References
//!
//! - Collins, G.S., Melosh, H.J., Marcus, R.A. (2005). "Earth Impact Effects
//!   Program: A Web-based computer program for calculating the regional
//!   environmental consequences of a meteoroid impact on Earth"
//!   Meteoritics & Planetary Science, 40(6), 817-840
//! - Hills, J.G., Goda, M.P. (1993). "The fragmentation of small asteroids in
//!   the atmosphere" Astronomical Journal, 105(3), 1114-1144
//!
//! # Model Overview
//!
//! 1. Tensile strength from an empirical density-strength correlation
//! 2. Breakup where ram pressure ρ_air·v² reaches strength, located in an
//!    exponential atmosphere
//! 3. Size rules at the extremes, where the altitude estimate is unreliable
//! 4. Between them, breakup altitude is compared against a penetration depth
//!    estimate, with a density-weighted tie-break in the marginal band

use crate::config::{AtmosphereModel, ImpactModelConfig};
use crate::core_types::units::{Degrees, KgPerCubicMeter, Meters, MetersPerSecond, Pascals};
use crate::core_types::{ClassificationRule, EntryClassification, ImpactType};
use tracing::trace;

/// Altitude at which ram pressure first exceeds material strength
///
/// ρ_crit = S / v²,  h = −H·ln(ρ_crit / ρ₀)
///
/// Returns zero when ρ_crit ≥ ρ₀: the body never fails above sea level.
///
/// # Arguments
/// * `strength` - Tensile strength of the body
/// * `velocity` - Entry speed
/// * `atmosphere` - Exponential atmosphere model
pub fn calculate_breakup_altitude(
    strength: Pascals,
    velocity: MetersPerSecond,
    atmosphere: &AtmosphereModel,
) -> Meters {
    let critical_air_density = *strength / velocity.squared();
    atmosphere.altitude_of_density(critical_air_density)
}

/// Depth of atmosphere the body can traverse before being decelerated
///
/// L = ρ_m·d·sin(θ) / (C_d·ρ₀)
///
/// # Arguments
/// * `density` - Bulk density of the body
/// * `diameter` - Body diameter
/// * `angle` - Impact angle from horizontal
/// * `atmosphere` - Supplies ρ₀ and C_d
pub fn calculate_penetration_depth(
    density: KgPerCubicMeter,
    diameter: Meters,
    angle: Degrees,
    atmosphere: &AtmosphereModel,
) -> Meters {
    Meters::new(
        (*density * *diameter * angle.sin())
            / (atmosphere.drag_coefficient * atmosphere.sea_level_density),
    )
}

/// Classify an entry as airburst or surface impact
///
/// Size rules take precedence: bodies above the ceiling always reach the
/// ground and bodies below the floor always burst aloft. In between:
/// - breakup at ground level, or penetration > 2 × breakup altitude: surface
/// - breakup altitude > 3 × penetration: airburst
/// - otherwise airburst iff altitude > penetration × (1 + ρ/3000), which lets
///   dense iron survive and sends icy comets to airburst
pub fn classify_entry(
    diameter: Meters,
    density: KgPerCubicMeter,
    velocity: MetersPerSecond,
    angle: Degrees,
    config: &ImpactModelConfig,
) -> EntryClassification {
    let rules = &config.classification;
    let atmosphere = &config.atmosphere;

    let material_strength = rules.material_strength(density);
    let breakup_altitude = calculate_breakup_altitude(material_strength, velocity, atmosphere);

    trace!(
        strength_pa = *material_strength,
        breakup_altitude_m = *breakup_altitude,
        "breakup estimate"
    );

    let decided = |impact_type: ImpactType,
                   rule: ClassificationRule,
                   penetration_depth: Option<Meters>| EntryClassification {
        impact_type,
        rule,
        material_strength,
        breakup_altitude,
        penetration_depth,
    };

    if diameter > rules.always_surface_above {
        return decided(ImpactType::Surface, ClassificationRule::SizeCeiling, None);
    }
    if diameter < rules.always_airburst_below {
        return decided(ImpactType::Airburst, ClassificationRule::SizeFloor, None);
    }

    let penetration = calculate_penetration_depth(density, diameter, angle, atmosphere);
    trace!(penetration_depth_m = *penetration, "penetration estimate");

    let (impact_type, rule) = if *breakup_altitude == 0.0 {
        (ImpactType::Surface, ClassificationRule::GroundLevelBreakup)
    } else if *penetration > *breakup_altitude * rules.surface_penetration_ratio {
        (ImpactType::Surface, ClassificationRule::DeepPenetration)
    } else if *breakup_altitude > *penetration * rules.airburst_altitude_ratio {
        (ImpactType::Airburst, ClassificationRule::HighAltitudeBreakup)
    } else {
        let survival_factor = *density / *rules.survival_reference_density;
        if *breakup_altitude > *penetration * (1.0 + survival_factor) {
            (ImpactType::Airburst, ClassificationRule::MarginalDispersal)
        } else {
            (ImpactType::Surface, ClassificationRule::MarginalSurvival)
        }
    };

    decided(impact_type, rule, Some(penetration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::KilometersPerSecond;
    use crate::core_types::Composition;
    use approx::assert_relative_eq;

    fn classify(diameter: f64, velocity: f64, composition: Composition, angle: f64) -> EntryClassification {
        let config = ImpactModelConfig::default();
        classify_entry(
            Meters::new(diameter),
            config.densities.density_of(composition),
            KilometersPerSecond::new(velocity).to_meters_per_second(),
            Degrees::new(angle),
            &config,
        )
    }

    #[test]
    fn test_breakup_altitude_chelyabinsk() {
        let result = classify(20.0, 19.0, Composition::Stony, 45.0);
        // Weak aggregate material fails very high: ≈117 km
        assert_relative_eq!(*result.breakup_altitude, 116_863.1, epsilon = 1.0);
    }

    #[test]
    fn test_breakup_at_ground_for_slow_strong_body() {
        let atmosphere = AtmosphereModel::default();
        // 1 MPa strength at 100 m/s needs ρ_air = 100 kg/m³
        let altitude = calculate_breakup_altitude(
            Pascals::new(1e6),
            MetersPerSecond::new(100.0),
            &atmosphere,
        );
        assert_eq!(altitude, Meters::ZERO);
    }

    #[test]
    fn test_ground_level_breakup_is_surface() {
        // 10 m/s needs ρ_air ≈ 2.24 kg/m³ to break up, denser than sea level
        let result = classify(50.0, 0.01, Composition::Iron, 45.0);
        assert_eq!(result.breakup_altitude, Meters::ZERO);
        assert_eq!(result.impact_type, ImpactType::Surface);
        assert_eq!(result.rule, ClassificationRule::GroundLevelBreakup);
        assert!(result.penetration_depth.is_some());
    }

    #[test]
    fn test_penetration_depth() {
        let atmosphere = AtmosphereModel::default();
        let depth = calculate_penetration_depth(
            KgPerCubicMeter::new(7800.0),
            Meters::new(50.0),
            Degrees::new(45.0),
            &atmosphere,
        );
        // 7800 × 50 × 0.7071 / (2 × 1.29)
        assert_relative_eq!(*depth, 106_888.2, epsilon = 0.5);
    }

    #[test]
    fn test_size_rules_skip_penetration() {
        let large = classify(250.0, 20.0, Composition::Comet, 45.0);
        assert_eq!(large.impact_type, ImpactType::Surface);
        assert_eq!(large.rule, ClassificationRule::SizeCeiling);
        assert!(large.penetration_depth.is_none());

        let small = classify(5.0, 30.0, Composition::Iron, 90.0);
        assert_eq!(small.impact_type, ImpactType::Airburst);
        assert_eq!(small.rule, ClassificationRule::SizeFloor);
    }

    #[test]
    fn test_size_bounds_are_inclusive_for_physics_band() {
        // Exactly 200 m and exactly 10 m go through the physics rules
        assert_ne!(
            classify(200.0, 20.0, Composition::Stony, 45.0).rule,
            ClassificationRule::SizeCeiling
        );
        assert_ne!(
            classify(10.0, 20.0, Composition::Stony, 45.0).rule,
            ClassificationRule::SizeFloor
        );
    }

    #[test]
    fn test_high_altitude_breakup_for_comet() {
        // Tunguska: altitude ≈113.6 km vs penetration ≈16.4 km
        let result = classify(60.0, 15.0, Composition::Comet, 45.0);
        assert_eq!(result.impact_type, ImpactType::Airburst);
        assert_eq!(result.rule, ClassificationRule::HighAltitudeBreakup);
    }

    #[test]
    fn test_marginal_iron_survives() {
        // Barringer: altitude ≈110 km, penetration ≈107 km, factor 2.6
        let result = classify(50.0, 12.8, Composition::Iron, 45.0);
        assert_eq!(result.impact_type, ImpactType::Surface);
        assert_eq!(result.rule, ClassificationRule::MarginalSurvival);
    }

    #[test]
    fn test_marginal_carbonaceous_disperses() {
        // altitude ≈121.5 km, penetration ≈43.9 km, factor 0.667
        let result = classify(80.0, 25.0, Composition::Carbonaceous, 45.0);
        assert_eq!(result.impact_type, ImpactType::Airburst);
        assert_eq!(result.rule, ClassificationRule::MarginalDispersal);
    }

    #[test]
    fn test_deep_penetration() {
        // Vertical entry: penetration ≈302 km vs altitude ≈112.6 km
        let result = classify(100.0, 15.0, Composition::Iron, 90.0);
        assert_eq!(result.impact_type, ImpactType::Surface);
        assert_eq!(result.rule, ClassificationRule::DeepPenetration);
    }

    #[test]
    fn test_grazing_angle_favors_airburst() {
        let steep = classify(150.0, 20.0, Composition::Stony, 45.0);
        let grazing = classify(150.0, 20.0, Composition::Stony, 10.0);
        assert_eq!(steep.impact_type, ImpactType::Surface);
        assert_eq!(grazing.impact_type, ImpactType::Airburst);
    }
}
