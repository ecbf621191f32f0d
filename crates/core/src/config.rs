//! Impact model configuration
//!
//! Every physical constant the calculator uses lives in [`ImpactModelConfig`]:
//! composition densities, the exponential atmosphere, the airburst/surface
//! classification rules, the crater scaling law and the blast/thermal/seismic
//! effect coefficients. `Default` reproduces the reference model exactly;
//! changing any value changes observable outputs.
//!
//! Configurations can be loaded from JSON. Missing fields fall back to the
//! defaults, so a file only needs to name what it overrides:
//!
//! ```
//! use impact_sim_core::config::ImpactModelConfig;
//!
//! let config = ImpactModelConfig::from_json_str(r#"{ "atmosphere": { "scale_height": 7160.0 } }"#)
//!     .expect("valid override");
//! assert_eq!(*config.atmosphere.scale_height, 7160.0);
//! assert_eq!(config.atmosphere.sea_level_density, 1.29);
//! ```

use crate::core_types::units::{Degrees, KgPerCubicMeter, Meters, Pascals};
use crate::core_types::Composition;
use crate::error::ImpactError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bulk density bound to each composition class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionDensities {
    pub iron: KgPerCubicMeter,
    pub stony: KgPerCubicMeter,
    pub carbonaceous: KgPerCubicMeter,
    pub comet: KgPerCubicMeter,
}

impl Default for CompositionDensities {
    fn default() -> Self {
        Self {
            iron: KgPerCubicMeter::new(7800.0),
            stony: KgPerCubicMeter::new(3000.0),
            carbonaceous: KgPerCubicMeter::new(2000.0),
            comet: KgPerCubicMeter::new(1000.0),
        }
    }
}

impl CompositionDensities {
    /// Look up the bulk density for a composition
    pub fn density_of(&self, composition: Composition) -> KgPerCubicMeter {
        match composition {
            Composition::Iron => self.iron,
            Composition::Stony => self.stony,
            Composition::Carbonaceous => self.carbonaceous,
            Composition::Comet => self.comet,
        }
    }
}

/// Isothermal exponential atmosphere, ρ(h) = ρ₀·e^(−h/H)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereModel {
    /// Sea-level air density ρ₀ (kg/m³)
    pub sea_level_density: f64,

    /// Scale height H
    pub scale_height: Meters,

    /// Drag coefficient used in the penetration-depth estimate
    pub drag_coefficient: f64,
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self {
            sea_level_density: 1.29,
            scale_height: Meters::new(8000.0),
            drag_coefficient: 2.0,
        }
    }
}

impl AtmosphereModel {
    /// Air density at an altitude above sea level (kg/m³)
    pub fn density_at(&self, altitude: Meters) -> f64 {
        self.sea_level_density * (-*altitude / *self.scale_height).exp()
    }

    /// Altitude at which the air reaches `density`.
    ///
    /// Densities at or above sea level map to zero altitude: the body would
    /// only reach them at or below the surface.
    pub fn altitude_of_density(&self, density: f64) -> Meters {
        if density >= self.sea_level_density {
            Meters::ZERO
        } else {
            Meters::new(-*self.scale_height * (density / self.sea_level_density).ln())
        }
    }
}

/// Rules deciding between atmospheric airburst and surface impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRules {
    /// Bodies larger than this always reach the ground
    pub always_surface_above: Meters,

    /// Bodies smaller than this always burst in the atmosphere
    pub always_airburst_below: Meters,

    /// Intercept `a` of the strength correlation log10(S) = a + b·log10(ρ)
    pub strength_log_intercept: f64,

    /// Slope `b` of the strength correlation log10(S) = a + b·log10(ρ)
    pub strength_log_slope: f64,

    /// Penetration deeper than this multiple of breakup altitude reaches the ground
    pub surface_penetration_ratio: f64,

    /// Breakup altitude above this multiple of penetration depth is an airburst
    pub airburst_altitude_ratio: f64,

    /// Density normalizing the marginal-band survival factor
    pub survival_reference_density: KgPerCubicMeter,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            always_surface_above: Meters::new(200.0),
            always_airburst_below: Meters::new(10.0),
            strength_log_intercept: 2.107,
            strength_log_slope: 0.0624,
            surface_penetration_ratio: 2.0,
            airburst_altitude_ratio: 3.0,
            survival_reference_density: KgPerCubicMeter::new(3000.0),
        }
    }
}

impl ClassificationRules {
    /// Empirical tensile strength for a bulk density
    pub fn material_strength(&self, density: KgPerCubicMeter) -> Pascals {
        Pascals::new(10f64.powf(
            self.strength_log_intercept + self.strength_log_slope * density.log10(),
        ))
    }
}

/// Pi-group crater scaling law with simple-to-complex collapse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrateringModel {
    /// Leading coefficient of the transient crater law
    pub coefficient: f64,

    /// Target rock density the projectile density is normalized by
    pub target_density: KgPerCubicMeter,

    pub diameter_exponent: f64,
    pub velocity_exponent: f64,
    pub gravity_exponent: f64,

    /// Surface gravity (m/s²)
    pub gravity: f64,

    /// Transient diameter above which craters collapse into complex form
    pub simple_complex_transition: Meters,

    /// Final/transient ratio for simple craters
    pub simple_collapse_factor: f64,

    pub complex_coefficient: f64,
    pub complex_exponent: f64,

    /// Keep the final diameter continuous across the simple-to-complex transition.
    ///
    /// The complex-crater law evaluates 6.4% below the simple-collapse value at
    /// the transition. When set, the complex branch never drops below the
    /// simple-collapse estimate. Off by default: the complex law applies as-is.
    pub enforce_transition_continuity: bool,
}

impl Default for CrateringModel {
    fn default() -> Self {
        Self {
            coefficient: 1.161,
            target_density: KgPerCubicMeter::new(2750.0),
            diameter_exponent: 0.78,
            velocity_exponent: 0.44,
            gravity_exponent: -0.22,
            gravity: 9.81,
            simple_complex_transition: Meters::new(3200.0),
            simple_collapse_factor: 1.25,
            complex_coefficient: 1.17,
            complex_exponent: 1.13,
            enforce_transition_continuity: false,
        }
    }
}

/// Overpressure radius coefficients, km per kt^(1/3)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastCoefficients {
    pub twenty_psi: f64,
    pub five_psi: f64,
    pub one_psi: f64,
}

/// Coefficients for seismic, thermal and air-blast effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsModel {
    /// Fraction of an airburst's kinetic energy that couples to the ground
    pub airburst_ground_coupling: f64,

    /// Slope of the seismic magnitude relation M = k·log10(E) + c
    pub seismic_slope: f64,

    /// Intercept of the seismic magnitude relation M = k·log10(E) + c
    pub seismic_intercept: f64,

    /// Third-degree-burn fluence for airbursts (J/m²)
    pub airburst_thermal_fluence: f64,

    /// Third-degree-burn fluence for surface impacts (J/m²); ejecta screening
    /// makes surface impacts less efficient radiators
    pub surface_thermal_fluence: f64,

    pub airburst_blast: BlastCoefficients,
    pub surface_blast: BlastCoefficients,
}

impl Default for EffectsModel {
    fn default() -> Self {
        Self {
            airburst_ground_coupling: 0.1,
            seismic_slope: 0.67,
            seismic_intercept: -5.87,
            airburst_thermal_fluence: 6e5,
            surface_thermal_fluence: 4e5,
            airburst_blast: BlastCoefficients {
                twenty_psi: 0.74,
                five_psi: 1.54,
                one_psi: 3.2,
            },
            surface_blast: BlastCoefficients {
                twenty_psi: 0.62,
                five_psi: 1.24,
                one_psi: 2.8,
            },
        }
    }
}

/// Complete constant table for the impact calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactModelConfig {
    pub densities: CompositionDensities,
    pub atmosphere: AtmosphereModel,
    pub classification: ClassificationRules,
    pub cratering: CrateringModel,
    pub effects: EffectsModel,

    /// TNT-equivalent conversion constant (J per megaton)
    pub joules_per_megaton: f64,

    /// Impact angle used when the caller does not supply one; 45° is the
    /// most probable angle for an isotropic flux
    pub canonical_impact_angle: Degrees,
}

impl Default for ImpactModelConfig {
    fn default() -> Self {
        Self {
            densities: CompositionDensities::default(),
            atmosphere: AtmosphereModel::default(),
            classification: ClassificationRules::default(),
            cratering: CrateringModel::default(),
            effects: EffectsModel::default(),
            joules_per_megaton: 4.18e15,
            canonical_impact_angle: Degrees::new(45.0),
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ImpactError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::invalid_config(
            field,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ImpactError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImpactError::invalid_config(
            field,
            format!("must be finite, got {value}"),
        ))
    }
}

fn require_ordered_blast(
    field: &'static str,
    blast: &BlastCoefficients,
) -> Result<(), ImpactError> {
    require_positive(field, blast.twenty_psi)?;
    require_positive(field, blast.five_psi)?;
    require_positive(field, blast.one_psi)?;

    // Lower overpressure thresholds are reached farther out
    if blast.twenty_psi < blast.five_psi && blast.five_psi < blast.one_psi {
        Ok(())
    } else {
        Err(ImpactError::invalid_config(
            field,
            "coefficients must increase from 20 psi to 5 psi to 1 psi",
        ))
    }
}

impl ImpactModelConfig {
    /// Check every constant is usable by the calculator.
    pub fn validate(&self) -> Result<(), ImpactError> {
        require_positive("densities.iron", *self.densities.iron)?;
        require_positive("densities.stony", *self.densities.stony)?;
        require_positive("densities.carbonaceous", *self.densities.carbonaceous)?;
        require_positive("densities.comet", *self.densities.comet)?;

        require_positive(
            "atmosphere.sea_level_density",
            self.atmosphere.sea_level_density,
        )?;
        require_positive("atmosphere.scale_height", *self.atmosphere.scale_height)?;
        require_positive(
            "atmosphere.drag_coefficient",
            self.atmosphere.drag_coefficient,
        )?;

        let rules = &self.classification;
        require_positive(
            "classification.always_airburst_below",
            *rules.always_airburst_below,
        )?;
        require_positive(
            "classification.always_surface_above",
            *rules.always_surface_above,
        )?;
        if rules.always_airburst_below > rules.always_surface_above {
            return Err(ImpactError::invalid_config(
                "classification.always_airburst_below",
                "must not exceed always_surface_above",
            ));
        }
        require_finite(
            "classification.strength_log_intercept",
            rules.strength_log_intercept,
        )?;
        require_finite("classification.strength_log_slope", rules.strength_log_slope)?;
        require_positive(
            "classification.surface_penetration_ratio",
            rules.surface_penetration_ratio,
        )?;
        require_positive(
            "classification.airburst_altitude_ratio",
            rules.airburst_altitude_ratio,
        )?;
        require_positive(
            "classification.survival_reference_density",
            *rules.survival_reference_density,
        )?;

        let crater = &self.cratering;
        require_positive("cratering.coefficient", crater.coefficient)?;
        require_positive("cratering.target_density", *crater.target_density)?;
        require_finite("cratering.diameter_exponent", crater.diameter_exponent)?;
        require_finite("cratering.velocity_exponent", crater.velocity_exponent)?;
        require_finite("cratering.gravity_exponent", crater.gravity_exponent)?;
        require_positive("cratering.gravity", crater.gravity)?;
        require_positive(
            "cratering.simple_complex_transition",
            *crater.simple_complex_transition,
        )?;
        require_positive(
            "cratering.simple_collapse_factor",
            crater.simple_collapse_factor,
        )?;
        require_positive("cratering.complex_coefficient", crater.complex_coefficient)?;
        require_finite("cratering.complex_exponent", crater.complex_exponent)?;

        let effects = &self.effects;
        if !(effects.airburst_ground_coupling > 0.0 && effects.airburst_ground_coupling <= 1.0) {
            return Err(ImpactError::invalid_config(
                "effects.airburst_ground_coupling",
                format!(
                    "must be in (0, 1], got {}",
                    effects.airburst_ground_coupling
                ),
            ));
        }
        require_finite("effects.seismic_slope", effects.seismic_slope)?;
        require_finite("effects.seismic_intercept", effects.seismic_intercept)?;
        require_positive(
            "effects.airburst_thermal_fluence",
            effects.airburst_thermal_fluence,
        )?;
        require_positive(
            "effects.surface_thermal_fluence",
            effects.surface_thermal_fluence,
        )?;
        require_ordered_blast("effects.airburst_blast", &effects.airburst_blast)?;
        require_ordered_blast("effects.surface_blast", &effects.surface_blast)?;

        require_positive("joules_per_megaton", self.joules_per_megaton)?;
        let angle = *self.canonical_impact_angle;
        if !(angle > 0.0 && angle <= 90.0) {
            return Err(ImpactError::invalid_config(
                "canonical_impact_angle",
                format!("must be in (0, 90] degrees, got {angle}"),
            ));
        }

        Ok(())
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ImpactError> {
        let config: ImpactModelConfig = serde_json::from_str(json)
            .map_err(|e| ImpactError::invalid_config("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ImpactError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ImpactError::invalid_config("path", format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ImpactModelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_composition_densities() {
        let densities = CompositionDensities::default();
        assert_eq!(*densities.density_of(Composition::Iron), 7800.0);
        assert_eq!(*densities.density_of(Composition::Stony), 3000.0);
        assert_eq!(*densities.density_of(Composition::Carbonaceous), 2000.0);
        assert_eq!(*densities.density_of(Composition::Comet), 1000.0);
    }

    #[test]
    fn test_exponential_atmosphere_round_trip() {
        let atmosphere = AtmosphereModel::default();
        assert_relative_eq!(atmosphere.density_at(Meters::ZERO), 1.29);

        // One scale height up the density drops by a factor of e
        let one_h = atmosphere.density_at(Meters::new(8000.0));
        assert_relative_eq!(one_h, 1.29 / std::f64::consts::E, epsilon = 1e-12);

        let altitude = atmosphere.altitude_of_density(one_h);
        assert_relative_eq!(*altitude, 8000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dense_air_maps_to_ground_level() {
        let atmosphere = AtmosphereModel::default();
        assert_eq!(atmosphere.altitude_of_density(1.29), Meters::ZERO);
        assert_eq!(atmosphere.altitude_of_density(5.0), Meters::ZERO);
    }

    #[test]
    fn test_material_strength_correlation() {
        let rules = ClassificationRules::default();

        // 10^(2.107 + 0.0624 × log10(3000)) ≈ 210.9 Pa
        let stony = rules.material_strength(KgPerCubicMeter::new(3000.0));
        assert_relative_eq!(*stony, 210.86, epsilon = 0.05);

        // Denser material is stronger
        let iron = rules.material_strength(KgPerCubicMeter::new(7800.0));
        assert!(iron.value() > stony.value());
    }

    #[test]
    fn test_rejects_non_positive_density() {
        let mut config = ImpactModelConfig::default();
        config.densities.comet = KgPerCubicMeter::new(0.0);
        assert!(matches!(
            config.validate(),
            Err(ImpactError::InvalidConfig {
                field: "densities.comet",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_size_thresholds() {
        let mut config = ImpactModelConfig::default();
        config.classification.always_airburst_below = Meters::new(500.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_misordered_blast_coefficients() {
        let mut config = ImpactModelConfig::default();
        config.effects.surface_blast.one_psi = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ImpactError::InvalidConfig {
                field: "effects.surface_blast",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_canonical_angle() {
        let mut config = ImpactModelConfig::default();
        config.canonical_impact_angle = Degrees::new(0.0);
        assert!(config.validate().is_err());
        config.canonical_impact_angle = Degrees::new(120.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_override() {
        let config = ImpactModelConfig::from_json_str(
            r#"{ "cratering": { "enforce_transition_continuity": true }, "joules_per_megaton": 4.184e15 }"#,
        )
        .unwrap();
        assert!(config.cratering.enforce_transition_continuity);
        assert_eq!(config.joules_per_megaton, 4.184e15);
        assert_eq!(config.cratering.coefficient, 1.161);
        assert_eq!(config.densities, CompositionDensities::default());
    }

    #[test]
    fn test_json_that_fails_validation_is_rejected() {
        let err = ImpactModelConfig::from_json_str(r#"{ "atmosphere": { "scale_height": -1.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ImpactError::InvalidConfig {
                field: "atmosphere.scale_height",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            ImpactModelConfig::from_json_str("{ not json"),
            Err(ImpactError::InvalidConfig { field: "json", .. })
        ));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert!(matches!(
            ImpactModelConfig::from_json_file("/nonexistent/impact-model.json"),
            Err(ImpactError::InvalidConfig { field: "path", .. })
        ));
    }
}
