//! Impact calculator
//!
//! Pure function from [`EntryParameters`] to [`ImpactResult`]. No state is
//! shared between calls, so one calculator can serve any number of threads.
//!
//! # Pipeline
//! 1. Validate inputs (before any formula runs)
//! 2. Mass and kinetic energy of a homogeneous sphere
//! 3. Classify the entry as airburst or surface impact
//! 4. Apply the regime's effect formulas
//! 5. Reject any non-finite output

use crate::config::ImpactModelConfig;
use crate::core_types::units::{
    Degrees, Joules, KgPerCubicMeter, Kilograms, Megatons, Meters, MetersPerSecond,
};
use crate::core_types::{
    EntryClassification, EntryParameters, ImpactOutcome, ImpactResult, ImpactType,
};
use crate::error::ImpactError;
use crate::physics::{
    airburst_seismic_magnitude, blast_radii, body_mass, calculate_crater, classify_entry,
    kinetic_energy, seismic_magnitude, thermal_radius,
};
use tracing::{debug, warn};

/// Impact calculator bound to a validated model configuration
#[derive(Debug, Clone, Default)]
pub struct ImpactCalculator {
    config: ImpactModelConfig,
}

/// Calculate an impact with the reference model
pub fn calculate_impact(params: &EntryParameters) -> Result<ImpactResult, ImpactError> {
    ImpactCalculator::default().calculate(params)
}

impl ImpactCalculator {
    /// Calculator using the reference constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator using a custom constant table
    pub fn with_config(config: ImpactModelConfig) -> Result<Self, ImpactError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected model configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ImpactModelConfig {
        &self.config
    }

    /// Compute every effect of an entry.
    ///
    /// Fails with [`ImpactError::InvalidParameter`] before evaluating anything
    /// if the parameters are outside the model's domain, and with
    /// [`ImpactError::NonFiniteResult`] if any output would be NaN or infinite.
    pub fn calculate(&self, params: &EntryParameters) -> Result<ImpactResult, ImpactError> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejected entry parameters");
            return Err(err);
        }

        let config = &self.config;
        let angle = params.effective_angle(config.canonical_impact_angle);
        debug!(
            mode = ?params.angle_mode(),
            angle_deg = *angle,
            diameter_m = *params.diameter,
            velocity_km_s = *params.velocity,
            composition = %params.composition,
            "calculating impact"
        );
        if !params.velocity.is_plausible_entry_speed() {
            debug!(
                velocity_km_s = *params.velocity,
                "velocity outside the 11-72 km/s encounter range"
            );
        }

        let density = config.densities.density_of(params.composition);
        let velocity = params.velocity.to_meters_per_second();

        let mass = body_mass(params.diameter, density);
        let energy = kinetic_energy(mass, velocity);
        ImpactError::ensure_finite("kinetic energy", *energy)?;
        ImpactError::ensure_positive("kinetic energy", *energy)?;
        let energy_tnt = energy.to_megatons(config.joules_per_megaton);

        let classification = classify_entry(params.diameter, density, velocity, angle, config);
        ImpactError::ensure_finite("breakup altitude", *classification.breakup_altitude)?;
        if let Some(depth) = classification.penetration_depth {
            ImpactError::ensure_finite("penetration depth", *depth)?;
        }
        debug!(
            impact_type = %classification.impact_type,
            rule = ?classification.rule,
            breakup_altitude_m = *classification.breakup_altitude,
            "entry classified"
        );

        let body = BodyState {
            mass,
            energy,
            energy_tnt,
            density,
            diameter: params.diameter,
            velocity,
            angle,
        };
        let result = match classification.impact_type {
            ImpactType::Airburst => self.airburst_effects(&body, classification),
            ImpactType::Surface => self.surface_effects(&body, classification),
        };

        check_finite(&result)?;

        debug!(
            energy_mt = *result.energy_tnt,
            crater_m = *result.crater_diameter(),
            seismic = result.seismic_magnitude,
            "impact calculated"
        );
        Ok(result)
    }

    fn airburst_effects(
        &self,
        body: &BodyState,
        classification: EntryClassification,
    ) -> ImpactResult {
        let effects = &self.config.effects;
        let ground_energy = body.energy * effects.airburst_ground_coupling;

        ImpactResult {
            mass: body.mass,
            kinetic_energy: body.energy,
            energy_tnt: body.energy_tnt,
            seismic_magnitude: airburst_seismic_magnitude(
                ground_energy,
                effects.seismic_slope,
                effects.seismic_intercept,
            ),
            thermal_radius: thermal_radius(body.energy, effects.airburst_thermal_fluence),
            blast_radius: blast_radii(body.energy_tnt, &effects.airburst_blast),
            outcome: ImpactOutcome::Airburst { ground_energy },
            classification,
        }
    }

    fn surface_effects(
        &self,
        body: &BodyState,
        classification: EntryClassification,
    ) -> ImpactResult {
        let effects = &self.config.effects;
        let crater = calculate_crater(
            body.density,
            body.diameter,
            body.velocity,
            body.angle,
            &self.config.cratering,
        );

        ImpactResult {
            mass: body.mass,
            kinetic_energy: body.energy,
            energy_tnt: body.energy_tnt,
            seismic_magnitude: seismic_magnitude(
                body.energy,
                effects.seismic_slope,
                effects.seismic_intercept,
            ),
            thermal_radius: thermal_radius(body.energy, effects.surface_thermal_fluence),
            blast_radius: blast_radii(body.energy_tnt, &effects.surface_blast),
            outcome: ImpactOutcome::Surface { crater },
            classification,
        }
    }
}

/// Derived state of the body at entry, shared by both effect branches
struct BodyState {
    mass: Kilograms,
    energy: Joules,
    energy_tnt: Megatons,
    density: KgPerCubicMeter,
    diameter: Meters,
    velocity: MetersPerSecond,
    angle: Degrees,
}

fn check_finite(result: &ImpactResult) -> Result<(), ImpactError> {
    ImpactError::ensure_finite("mass", *result.mass)?;
    ImpactError::ensure_finite("energy", *result.energy_tnt)?;
    ImpactError::ensure_finite("seismic magnitude", result.seismic_magnitude)?;
    ImpactError::ensure_finite("thermal radius", *result.thermal_radius)?;
    ImpactError::ensure_finite("20 psi radius", *result.blast_radius.twenty_psi)?;
    ImpactError::ensure_finite("5 psi radius", *result.blast_radius.five_psi)?;
    ImpactError::ensure_finite("1 psi radius", *result.blast_radius.one_psi)?;
    match &result.outcome {
        ImpactOutcome::Airburst { ground_energy } => {
            ImpactError::ensure_finite("ground energy", **ground_energy)?;
        }
        ImpactOutcome::Surface { crater } => {
            ImpactError::ensure_finite("transient crater", *crater.transient_diameter)?;
            ImpactError::ensure_finite("crater diameter", *crater.final_diameter)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{AngleMode, ClassificationRule, Composition};
    use approx::assert_relative_eq;

    fn params(diameter: f64, velocity: f64, composition: Composition) -> EntryParameters {
        EntryParameters::new(diameter, velocity, composition)
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImpactCalculator>();
    }

    #[test]
    fn test_chelyabinsk_airburst_effects() {
        let result = calculate_impact(&params(20.0, 19.0, Composition::Stony)).unwrap();

        assert_eq!(result.impact_type(), ImpactType::Airburst);
        assert_eq!(result.crater_diameter(), Meters::ZERO);
        assert!(result.crater().is_none());
        assert_relative_eq!(*result.energy_tnt, 0.54264, epsilon = 1e-5);
        assert_relative_eq!(result.seismic_magnitude, 3.7483, epsilon = 1e-4);
        assert_relative_eq!(*result.thermal_radius, 17.3445, epsilon = 1e-4);
        assert_relative_eq!(*result.blast_radius.twenty_psi, 6.0358, epsilon = 1e-4);
        assert_relative_eq!(*result.blast_radius.five_psi, 12.5610, epsilon = 1e-4);
        assert_relative_eq!(*result.blast_radius.one_psi, 26.1008, epsilon = 1e-4);

        match result.outcome {
            ImpactOutcome::Airburst { ground_energy } => {
                assert_relative_eq!(*ground_energy, *result.kinetic_energy * 0.1);
            }
            ImpactOutcome::Surface { .. } => panic!("expected airburst"),
        }
    }

    #[test]
    fn test_barringer_surface_effects() {
        let result = calculate_impact(&params(50.0, 12.8, Composition::Iron)).unwrap();

        assert_eq!(result.impact_type(), ImpactType::Surface);
        assert_relative_eq!(*result.energy_tnt, 10.005, epsilon = 1e-3);
        assert_relative_eq!(*result.crater_diameter(), 1502.08, epsilon = 0.01);
        assert_relative_eq!(result.seismic_magnitude, 5.2663, epsilon = 1e-4);
        assert_relative_eq!(*result.thermal_radius, 91.214, epsilon = 1e-3);
        assert_relative_eq!(*result.blast_radius.twenty_psi, 13.3597, epsilon = 1e-4);
        assert_relative_eq!(*result.blast_radius.five_psi, 26.7194, epsilon = 1e-4);
        assert_relative_eq!(*result.blast_radius.one_psi, 60.3342, epsilon = 1e-4);
        assert_eq!(
            result.classification.rule,
            ClassificationRule::MarginalSurvival
        );
    }

    #[test]
    fn test_slow_iron_reaches_ground_intact() {
        let result = calculate_impact(&params(50.0, 0.01, Composition::Iron)).unwrap();

        assert_eq!(result.impact_type(), ImpactType::Surface);
        assert_eq!(
            result.classification.rule,
            ClassificationRule::GroundLevelBreakup
        );
        assert_eq!(result.classification.breakup_altitude, Meters::ZERO);
        assert_relative_eq!(result.seismic_magnitude, 1.1027, epsilon = 1e-4);
        assert_relative_eq!(*result.crater_diameter(), 64.494, epsilon = 1e-3);
    }

    #[test]
    fn test_underflowing_mass_is_rejected() {
        // Positive and finite, but the mass rounds to zero
        let result = calculate_impact(&params(1e-110, 20.0, Composition::Stony));
        assert!(matches!(
            result,
            Err(ImpactError::DegenerateResult { quantity: "kinetic energy", .. })
        ));
    }

    #[test]
    fn test_mass_is_reported() {
        let result = calculate_impact(&params(1.0, 17.0, Composition::Comet)).unwrap();
        assert_relative_eq!(*result.mass, 523.598_775_6, epsilon = 1e-6);
    }

    #[test]
    fn test_tiny_airburst_seismic_floor() {
        // 0.1 m comet: ground energy ≈ 8e7 J gives a negative raw magnitude
        let result = calculate_impact(&params(0.1, 17.0, Composition::Comet)).unwrap();
        assert!(result.is_airburst());
        assert_eq!(result.seismic_magnitude, 0.0);
    }

    #[test]
    fn test_caller_supplied_angle_changes_classification() {
        let canonical = params(150.0, 20.0, Composition::Stony);
        let grazing = canonical.with_impact_angle(10.0);
        assert_eq!(canonical.angle_mode(), AngleMode::Canonical);
        assert_eq!(grazing.angle_mode(), AngleMode::CallerSupplied);

        assert_eq!(
            calculate_impact(&canonical).unwrap().impact_type(),
            ImpactType::Surface
        );
        assert_eq!(
            calculate_impact(&grazing).unwrap().impact_type(),
            ImpactType::Airburst
        );
    }

    #[test]
    fn test_explicit_45_degrees_matches_canonical() {
        let canonical = calculate_impact(&params(50.0, 12.8, Composition::Iron)).unwrap();
        let explicit =
            calculate_impact(&params(50.0, 12.8, Composition::Iron).with_impact_angle(45.0))
                .unwrap();
        assert_eq!(canonical, explicit);
    }

    #[test]
    fn test_custom_canonical_angle() {
        let mut config = ImpactModelConfig::default();
        config.canonical_impact_angle = Degrees::new(90.0);
        let calculator = ImpactCalculator::with_config(config).unwrap();

        let result = calculator
            .calculate(&params(50.0, 12.8, Composition::Iron))
            .unwrap();
        assert_relative_eq!(*result.crater_diameter(), 1686.03, epsilon = 0.01);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ImpactModelConfig::default();
        config.joules_per_megaton = 0.0;
        assert!(matches!(
            ImpactCalculator::with_config(config),
            Err(ImpactError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_parameters_fail_before_evaluation() {
        let calculator = ImpactCalculator::new();
        for bad in [
            params(0.0, 20.0, Composition::Stony),
            params(20.0, 0.0, Composition::Stony),
            params(20.0, 20.0, Composition::Stony).with_impact_angle(0.0),
        ] {
            assert!(matches!(
                calculator.calculate(&bad),
                Err(ImpactError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_overflowing_inputs_are_non_finite() {
        // Finite but absurd inputs overflow the energy
        let result = calculate_impact(&params(1e200, 1e200, Composition::Iron));
        assert!(matches!(
            result,
            Err(ImpactError::NonFiniteResult { .. })
        ));
    }
}
