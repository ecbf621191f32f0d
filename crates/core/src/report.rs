//! Human-readable impact reports

use crate::core_types::{EntryParameters, ImpactResult, ImpactType};
use crate::scenarios::zones::GeoPoint;
use std::fmt;

/// Format a count with a thousand/million/billion suffix
///
/// `format_large_number(75_157.7, 2)` gives `"75.16 thousand"`.
pub fn format_large_number(value: f64, decimals: usize) -> String {
    const SCALES: [(f64, &str); 3] = [(1e9, "billion"), (1e6, "million"), (1e3, "thousand")];
    for (scale, word) in SCALES {
        if value >= scale {
            return format!("{:.decimals$} {word}", value / scale);
        }
    }
    format!("{value:.decimals$}")
}

/// A computed scenario with its descriptive context
#[derive(Debug, Clone)]
pub struct ImpactReport {
    pub parameters: EntryParameters,
    pub result: ImpactResult,
    /// Catalog designation, when the body came from the NEO catalog
    pub name: Option<String>,
    pub potentially_hazardous: bool,
    pub location: Option<GeoPoint>,
    pub location_name: Option<String>,
}

impl ImpactReport {
    pub fn new(parameters: EntryParameters, result: ImpactResult) -> Self {
        Self {
            parameters,
            result,
            name: None,
            potentially_hazardous: false,
            location: None,
            location_name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>, potentially_hazardous: bool) -> Self {
        self.name = Some(name.into());
        self.potentially_hazardous = potentially_hazardous;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: GeoPoint, location_name: Option<String>) -> Self {
        self.location = Some(location);
        self.location_name = location_name;
        self
    }

    fn diameter_text(&self) -> String {
        let diameter = *self.parameters.diameter;
        if diameter >= 1000.0 {
            format!("{:.2} km", diameter / 1000.0)
        } else {
            format!("{diameter} meters")
        }
    }
}

impl fmt::Display for ImpactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = &self.parameters;
        let result = &self.result;

        writeln!(f, "Impact Scenario")?;
        writeln!(f, "- Asteroid Details:")?;
        writeln!(f, "  - Diameter: {}", self.diameter_text())?;
        writeln!(f, "  - Composition: {}", params.composition)?;
        writeln!(f, "  - Velocity: {} km/s", *params.velocity)?;
        if let Some(angle) = params.impact_angle {
            writeln!(f, "  - Impact Angle: {angle}")?;
        }
        if let Some(name) = &self.name {
            writeln!(f, "  - Name: {name} (NASA asteroid)")?;
        }
        if self.potentially_hazardous {
            writeln!(
                f,
                "  - Classification: Potentially Hazardous Asteroid (PHA)"
            )?;
        }

        if let Some(location) = self.location {
            writeln!(f, "- Impact Location:")?;
            writeln!(
                f,
                "  - Coordinates: {:.4}°, {:.4}°",
                location.lat, location.lng
            )?;
            if let Some(location_name) = &self.location_name {
                writeln!(f, "  - Location: {location_name}")?;
            }
        }

        writeln!(f, "- Calculated Impact Effects:")?;
        let impact_type = match result.impact_type() {
            ImpactType::Airburst => "Atmospheric Airburst",
            ImpactType::Surface => "Surface Impact",
        };
        writeln!(f, "  - Impact Type: {impact_type}")?;
        writeln!(
            f,
            "  - Impact Energy: {:.2} Megatons TNT equivalent ({} Mt)",
            *result.energy_tnt,
            format_large_number(*result.energy_tnt, 2)
        )?;
        if let Some(crater) = result.crater() {
            writeln!(
                f,
                "  - Crater Diameter: {:.2} km",
                *crater.final_diameter / 1000.0
            )?;
        }
        writeln!(f, "  - Seismic Magnitude: {:.1}", result.seismic_magnitude)?;
        writeln!(
            f,
            "  - Thermal Radiation Radius: {:.1} km (3rd degree burns)",
            *result.thermal_radius
        )?;
        writeln!(f, "  - Air Blast Radii:")?;
        writeln!(
            f,
            "    * 20 PSI (total destruction): {:.1} km",
            *result.blast_radius.twenty_psi
        )?;
        writeln!(
            f,
            "    * 5 PSI (severe damage): {:.1} km",
            *result.blast_radius.five_psi
        )?;
        write!(
            f,
            "    * 1 PSI (moderate damage): {:.1} km",
            *result.blast_radius.one_psi
        )
    }
}
