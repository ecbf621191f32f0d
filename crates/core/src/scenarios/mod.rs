//! Scenario sources and derived products
//!
//! Where entry parameters come from (presets, the NEO catalog, random-angle
//! ensembles) and what is built from results (map overlay zones).

pub mod ensemble;
pub mod neo_catalog;
pub mod presets;
pub mod zones;

pub use ensemble::{run_angle_ensemble, sample_impact_angle, AngleEnsemble, EnsembleSummary};
pub use neo_catalog::{select_notable, NeoBrowsePage, NeoRecord};
pub use presets::{find_preset, PresetScenario, PRESET_SCENARIOS};
pub use zones::{zones_for, GeoPoint, ImpactZone, ZoneKind};
