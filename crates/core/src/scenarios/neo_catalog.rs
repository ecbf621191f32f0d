//! Near-Earth-object catalog records
//!
//! Deserializes the JSON shape served by the public NEO browse/lookup
//! service and converts records into [`EntryParameters`]. Fetching is left
//! to the caller; this module only handles documents already in hand.

use crate::calculator::ImpactCalculator;
use crate::core_types::{Composition, EntryParameters, ImpactResult};
use crate::error::ImpactError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Entry speed assumed when a record has no close-approach data (km/s)
pub const DEFAULT_VELOCITY_KM_S: f64 = 20.0;

/// Impact angle attached to catalog-derived scenarios (degrees)
pub const CATALOG_IMPACT_ANGLE: f64 = 45.0;

/// Maximum number of objects returned by [`select_notable`]
pub const NOTABLE_LIMIT: usize = 20;

/// Below this many mid-sized objects, small ones are added to the selection
pub const NOTABLE_TOP_UP_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    pub fn mean(&self) -> f64 {
        (self.estimated_diameter_min + self.estimated_diameter_max) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
}

/// Relative velocity; the catalog encodes numbers as decimal strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: String,
    pub relative_velocity: RelativeVelocity,
}

/// One catalog object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

/// One page of the browse listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoBrowsePage {
    pub near_earth_objects: Vec<NeoRecord>,
}

impl NeoBrowsePage {
    pub fn from_json_str(json: &str) -> Result<Self, ImpactError> {
        serde_json::from_str(json).map_err(|e| ImpactError::Catalog(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ImpactError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ImpactError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}

impl NeoRecord {
    /// Mean estimated diameter in meters
    pub fn mean_diameter_m(&self) -> f64 {
        self.estimated_diameter.meters.mean()
    }

    /// Speed at the first recorded close approach, or the default when none is listed
    pub fn approach_velocity(&self) -> Result<f64, ImpactError> {
        let Some(approach) = self.close_approach_data.first() else {
            return Ok(DEFAULT_VELOCITY_KM_S);
        };
        let raw = approach.relative_velocity.kilometers_per_second.trim();
        raw.parse::<f64>().map_err(|e| {
            ImpactError::Catalog(format!(
                "object {} has unreadable velocity '{raw}': {e}",
                self.id
            ))
        })
    }

    /// Entry parameters for this object
    ///
    /// Diameter is the mean of the kilometre estimates, rounded to the
    /// nearest meter. Composition is assumed stony and the angle is 45°.
    pub fn to_entry_parameters(&self) -> Result<EntryParameters, ImpactError> {
        let diameter_m = (self.estimated_diameter.kilometers.mean() * 1000.0).round();
        let velocity = self.approach_velocity()?;

        let params = EntryParameters::new(diameter_m, velocity, Composition::Stony)
            .with_impact_angle(CATALOG_IMPACT_ANGLE);
        params.validate()?;

        debug!(
            id = %self.id,
            name = %self.name,
            diameter_m,
            velocity_km_s = velocity,
            "Converted catalog record"
        );
        Ok(params)
    }

    /// Convert this record and run it through `calculator`
    pub fn evaluate(
        &self,
        calculator: &ImpactCalculator,
    ) -> Result<(EntryParameters, ImpactResult), ImpactError> {
        let params = self.to_entry_parameters()?;
        let result = calculator.calculate(&params)?;
        Ok((params, result))
    }
}

/// Pick a showcase set of objects from one or more browse pages
///
/// Objects with mean diameter in [50 m, 1 km) come first. When fewer than
/// ten qualify, objects in [10 m, 50 m) are added. The result is sorted
/// largest first and capped at twenty.
pub fn select_notable<'a, I>(records: I) -> Vec<&'a NeoRecord>
where
    I: IntoIterator<Item = &'a NeoRecord>,
{
    let records: Vec<&NeoRecord> = records.into_iter().collect();
    let within =
        |record: &NeoRecord, lo: f64, hi: f64| (lo..hi).contains(&record.mean_diameter_m());

    let mut selected: Vec<&NeoRecord> = records
        .iter()
        .copied()
        .filter(|r| within(*r, 50.0, 1000.0))
        .collect();
    if selected.len() < NOTABLE_TOP_UP_THRESHOLD {
        selected.extend(records.iter().copied().filter(|r| within(*r, 10.0, 50.0)));
    }

    selected.sort_by(|a, b| b.mean_diameter_m().total_cmp(&a.mean_diameter_m()));
    selected.truncate(NOTABLE_LIMIT);
    selected
}
