//! Entry parameters describing an incoming body

use crate::core_types::units::{Degrees, KilometersPerSecond, Meters};
use crate::core_types::Composition;
use crate::error::ImpactError;
use serde::{Deserialize, Serialize};

/// Which impact angle a calculation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    /// No angle was supplied; the model's canonical angle (45°) applies
    Canonical,
    /// The caller supplied an explicit angle
    CallerSupplied,
}

/// Physical description of a body entering the atmosphere
///
/// Immutable per calculation. Constructing one never fails; the calculator
/// calls [`EntryParameters::validate`] before evaluating any formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryParameters {
    /// Physical diameter of the body
    pub diameter: Meters,

    /// Entry speed. Plausible encounters lie between 11 and 72 km/s but the
    /// calculator does not enforce that range.
    pub velocity: KilometersPerSecond,

    pub composition: Composition,

    /// Impact angle from horizontal; `None` selects the canonical angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_angle: Option<Degrees>,
}

impl EntryParameters {
    /// Create parameters that use the canonical impact angle
    ///
    /// # Arguments
    /// * `diameter_m` - Diameter in meters
    /// * `velocity_km_s` - Entry speed in km/s
    /// * `composition` - Material class
    pub fn new(diameter_m: f64, velocity_km_s: f64, composition: Composition) -> Self {
        Self {
            diameter: Meters::new(diameter_m),
            velocity: KilometersPerSecond::new(velocity_km_s),
            composition,
            impact_angle: None,
        }
    }

    /// Use an explicit impact angle (degrees from horizontal)
    pub fn with_impact_angle(mut self, angle_degrees: f64) -> Self {
        self.impact_angle = Some(Degrees::new(angle_degrees));
        self
    }

    /// Which angle mode these parameters select
    pub fn angle_mode(&self) -> AngleMode {
        match self.impact_angle {
            Some(_) => AngleMode::CallerSupplied,
            None => AngleMode::Canonical,
        }
    }

    /// Angle to use, falling back to `canonical` when none was supplied
    pub fn effective_angle(&self, canonical: Degrees) -> Degrees {
        self.impact_angle.unwrap_or(canonical)
    }

    /// Reject parameters the formulas are not defined on.
    ///
    /// Diameter and velocity must be finite and positive; a supplied angle must
    /// lie in (0°, 90°]. Composition is valid by construction.
    pub fn validate(&self) -> Result<(), ImpactError> {
        let diameter = *self.diameter;
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(ImpactError::invalid_parameter(
                "diameter",
                format!("must be finite and positive, got {diameter}"),
            ));
        }

        let velocity = *self.velocity;
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(ImpactError::invalid_parameter(
                "velocity",
                format!("must be finite and positive, got {velocity}"),
            ));
        }

        if let Some(angle) = self.impact_angle {
            let angle = *angle;
            if !(angle.is_finite() && angle > 0.0 && angle <= 90.0) {
                return Err(ImpactError::invalid_parameter(
                    "impact_angle",
                    format!("must be in (0, 90] degrees, got {angle}"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_mode() {
        let params = EntryParameters::new(20.0, 19.0, Composition::Stony);
        assert_eq!(params.angle_mode(), AngleMode::Canonical);
        assert_eq!(params.effective_angle(Degrees::new(45.0)), Degrees::new(45.0));

        let steep = params.with_impact_angle(80.0);
        assert_eq!(steep.angle_mode(), AngleMode::CallerSupplied);
        assert_eq!(steep.effective_angle(Degrees::new(45.0)), Degrees::new(80.0));
    }

    #[test]
    fn test_validate_accepts_typical_entry() {
        assert!(EntryParameters::new(50.0, 12.8, Composition::Iron)
            .validate()
            .is_ok());
        assert!(EntryParameters::new(50.0, 12.8, Composition::Iron)
            .with_impact_angle(90.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_diameter() {
        for diameter in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = EntryParameters::new(diameter, 20.0, Composition::Stony)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                ImpactError::InvalidParameter {
                    name: "diameter",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_velocity() {
        for velocity in [0.0, -11.0, f64::NAN] {
            let err = EntryParameters::new(100.0, velocity, Composition::Stony)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                ImpactError::InvalidParameter {
                    name: "velocity",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_angle() {
        for angle in [0.0, -10.0, 90.5, f64::NAN] {
            let err = EntryParameters::new(100.0, 20.0, Composition::Stony)
                .with_impact_angle(angle)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                ImpactError::InvalidParameter {
                    name: "impact_angle",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_out_of_range_velocity_is_not_rejected() {
        // The plausible 11-72 km/s band is informational only
        assert!(EntryParameters::new(100.0, 5.0, Composition::Stony)
            .validate()
            .is_ok());
        assert!(EntryParameters::new(100.0, 90.0, Composition::Stony)
            .validate()
            .is_ok());
    }
}
