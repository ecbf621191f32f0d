//! Preset impact scenarios
//!
//! Historical events and hypothetical bodies spanning the airburst-to-crater
//! range. All use the canonical impact angle.

use crate::core_types::{Composition, EntryParameters, KilometersPerSecond, Meters};
use serde::Serialize;

/// Named, ready-to-run entry scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetScenario {
    pub name: &'static str,
    /// Short machine-friendly identifier (e.g., `"chelyabinsk"`)
    pub slug: &'static str,
    pub description: &'static str,
    pub parameters: EntryParameters,
}

impl PresetScenario {
    const fn new(
        name: &'static str,
        slug: &'static str,
        description: &'static str,
        parameters: EntryParameters,
    ) -> Self {
        Self {
            name,
            slug,
            description,
            parameters,
        }
    }
}

const fn entry(diameter_m: f64, velocity_km_s: f64, composition: Composition) -> EntryParameters {
    EntryParameters {
        diameter: Meters::new(diameter_m),
        velocity: KilometersPerSecond::new(velocity_km_s),
        composition,
        impact_angle: None,
    }
}

/// Built-in scenarios, smallest first
pub const PRESET_SCENARIOS: [PresetScenario; 7] = [
    PresetScenario::new(
        "Tiny Meteor (1m)",
        "tiny",
        "1m meteorite - burns up in atmosphere",
        entry(1.0, 17.0, Composition::Stony),
    ),
    PresetScenario::new(
        "Chelyabinsk Meteor (2013)",
        "chelyabinsk",
        "20m stony meteor airburst over Russia",
        entry(20.0, 19.0, Composition::Stony),
    ),
    PresetScenario::new(
        "Barringer Crater (50,000 years ago)",
        "barringer",
        "50m iron meteorite in Arizona",
        entry(50.0, 12.8, Composition::Iron),
    ),
    PresetScenario::new(
        "Tunguska Event (1908)",
        "tunguska",
        "60m comet airburst over Siberia",
        entry(60.0, 15.0, Composition::Comet),
    ),
    PresetScenario::new(
        "Small City Killer",
        "city-killer",
        "Hypothetical 200m asteroid",
        entry(200.0, 17.0, Composition::Stony),
    ),
    PresetScenario::new(
        "Regional Devastation",
        "regional",
        "Hypothetical 500m asteroid",
        entry(500.0, 20.0, Composition::Stony),
    ),
    PresetScenario::new(
        "Global Catastrophe",
        "global",
        "1km asteroid - mass extinction level",
        entry(1000.0, 20.0, Composition::Stony),
    ),
];

/// Find a preset by slug or full name, ignoring case
pub fn find_preset(key: &str) -> Option<&'static PresetScenario> {
    let key = key.trim();
    PRESET_SCENARIOS
        .iter()
        .find(|p| p.slug.eq_ignore_ascii_case(key) || p.name.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_impact;
    use crate::core_types::ImpactType;

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("Tunguska").unwrap().slug, "tunguska");
        assert_eq!(
            find_preset("chelyabinsk meteor (2013)").unwrap().slug,
            "chelyabinsk"
        );
        assert!(find_preset("chicxulub").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in PRESET_SCENARIOS.iter().enumerate() {
            for b in &PRESET_SCENARIOS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_historical_presets_classify_as_observed() {
        let expected = [
            ("tiny", ImpactType::Airburst),
            ("chelyabinsk", ImpactType::Airburst),
            ("barringer", ImpactType::Surface),
            ("tunguska", ImpactType::Airburst),
            ("city-killer", ImpactType::Surface),
            ("regional", ImpactType::Surface),
            ("global", ImpactType::Surface),
        ];
        for (slug, impact_type) in expected {
            let preset = find_preset(slug).unwrap();
            let result = calculate_impact(&preset.parameters).unwrap();
            assert_eq!(result.impact_type(), impact_type, "preset {slug}");
        }
    }
}
