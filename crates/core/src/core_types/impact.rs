//! Impact results
//!
//! [`ImpactResult`] carries the effects every event produces (energy, seismic
//! shaking, thermal and blast radii) plus an [`ImpactOutcome`] whose variant
//! holds only what is meaningful for that regime: a crater exists only for
//! surface impacts. [`ImpactSummary`] is the flat view consumers serialize.

use crate::core_types::units::{Joules, Kilograms, Kilometers, Megatons, Meters, Pascals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Airburst or surface impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactType {
    Airburst,
    Surface,
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactType::Airburst => f.write_str("airburst"),
            ImpactType::Surface => f.write_str("surface"),
        }
    }
}

/// Which rule decided the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationRule {
    /// Diameter above the surface ceiling; always reaches the ground
    SizeCeiling,
    /// Diameter below the airburst floor; always bursts aloft
    SizeFloor,
    /// Ram pressure never exceeds strength above sea level
    GroundLevelBreakup,
    /// Penetration depth exceeds the surface ratio × breakup altitude
    DeepPenetration,
    /// Breakup altitude exceeds the airburst ratio × penetration depth
    HighAltitudeBreakup,
    /// Marginal band, density-weighted tie-break favored survival
    MarginalSurvival,
    /// Marginal band, density-weighted tie-break favored dispersal
    MarginalDispersal,
}

/// Diagnostics from the airburst/surface decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryClassification {
    pub impact_type: ImpactType,
    pub rule: ClassificationRule,

    /// Empirical tensile strength of the body
    pub material_strength: Pascals,

    /// Altitude at which ram pressure first exceeds strength
    pub breakup_altitude: Meters,

    /// Penetration depth estimate; `None` when a size rule decided first
    pub penetration_depth: Option<Meters>,
}

/// Crater dimensions for a surface impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crater {
    /// Diameter right after excavation
    pub transient_diameter: Meters,

    /// Diameter after gravity-driven wall collapse
    pub final_diameter: Meters,

    /// Whether the transient crater exceeded the simple-to-complex transition
    pub complex: bool,
}

/// Regime-specific part of an impact result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "impactType", rename_all = "lowercase")]
pub enum ImpactOutcome {
    /// Body destroyed aloft; only part of its energy couples to the ground
    Airburst { ground_energy: Joules },
    /// Body reached the ground and excavated a crater
    Surface { crater: Crater },
}

/// Overpressure radii at the 20, 5 and 1 psi thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastRadii {
    pub twenty_psi: Kilometers,
    pub five_psi: Kilometers,
    pub one_psi: Kilometers,
}

/// Complete set of effects for one entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub mass: Kilograms,
    pub kinetic_energy: Joules,

    /// TNT-equivalent energy
    pub energy_tnt: Megatons,

    /// Richter-like magnitude. Floored at zero for airbursts only.
    pub seismic_magnitude: f64,

    /// Third-degree-burn radius
    pub thermal_radius: Kilometers,

    pub blast_radius: BlastRadii,
    pub outcome: ImpactOutcome,
    pub classification: EntryClassification,
}

impl ImpactResult {
    pub fn impact_type(&self) -> ImpactType {
        match self.outcome {
            ImpactOutcome::Airburst { .. } => ImpactType::Airburst,
            ImpactOutcome::Surface { .. } => ImpactType::Surface,
        }
    }

    pub fn is_airburst(&self) -> bool {
        self.impact_type() == ImpactType::Airburst
    }

    pub fn crater(&self) -> Option<&Crater> {
        match &self.outcome {
            ImpactOutcome::Surface { crater } => Some(crater),
            ImpactOutcome::Airburst { .. } => None,
        }
    }

    /// Final crater diameter, zero for airbursts
    pub fn crater_diameter(&self) -> Meters {
        self.crater().map_or(Meters::ZERO, |c| c.final_diameter)
    }

    /// Flatten into the consumer-facing summary
    pub fn summary(&self) -> ImpactSummary {
        ImpactSummary {
            impact_type: self.impact_type(),
            crater_diameter: self.crater_diameter(),
            energy_tnt: self.energy_tnt,
            seismic_magnitude: self.seismic_magnitude,
            thermal_radius: self.thermal_radius,
            blast_radius: self.blast_radius,
        }
    }
}

/// Flat result record: impact type, crater (m), energy (Mt), seismic
/// magnitude, thermal radius (km) and blast radii (km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub impact_type: ImpactType,
    pub crater_diameter: Meters,
    #[serde(rename = "energyTNT")]
    pub energy_tnt: Megatons,
    pub seismic_magnitude: f64,
    pub thermal_radius: Kilometers,
    pub blast_radius: BlastRadii,
}
