//! Map overlay zones
//!
//! Concentric damage circles around a ground-zero point in map layer
//! order: crater, thermal, then the overpressure rings. Radii are in meters.

use crate::core_types::units::{Kilometers, Meters};
use crate::core_types::ImpactResult;
use crate::error::ImpactError;
use serde::{Deserialize, Serialize};

/// Kilometres per degree of latitude (spherical approximation)
pub const KM_PER_DEGREE: f64 = 111.0;

/// Ground-zero coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ImpactError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ImpactError::invalid_parameter(
                "latitude",
                format!("must be within [-90, 90], got {lat}"),
            ));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ImpactError::invalid_parameter(
                "longitude",
                format!("must be within [-180, 180], got {lng}"),
            ));
        }
        Ok(Self { lat, lng })
    }

    /// Half-extent of a circle of `radius` in degrees of latitude and longitude
    ///
    /// Longitude degrees shrink with cos(latitude). At either pole the
    /// longitude extent is `f64::INFINITY`.
    pub fn degree_offsets(&self, radius: Kilometers) -> (f64, f64) {
        let lat_offset = *radius / KM_PER_DEGREE;
        let lng_offset = if self.lat.abs() == 90.0 {
            f64::INFINITY
        } else {
            *radius / (KM_PER_DEGREE * self.lat.to_radians().cos())
        };
        (lat_offset, lng_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneKind {
    Crater,
    Thermal,
    TwentyPsi,
    FivePsi,
    OnePsi,
}

impl ZoneKind {
    pub fn color(self) -> &'static str {
        match self {
            ZoneKind::Crater => "#8B4513",
            ZoneKind::Thermal => "#FF8C00",
            ZoneKind::TwentyPsi => "#DC143C",
            ZoneKind::FivePsi => "#FF6347",
            ZoneKind::OnePsi => "#FFD700",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::Crater => "Crater",
            ZoneKind::Thermal => "Thermal Radiation (3rd degree burns)",
            ZoneKind::TwentyPsi => "20 psi overpressure",
            ZoneKind::FivePsi => "5 psi overpressure",
            ZoneKind::OnePsi => "1 psi overpressure",
        }
    }
}

/// One overlay circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactZone {
    pub kind: ZoneKind,
    pub center: GeoPoint,
    pub radius: Meters,
    pub color: &'static str,
    pub label: &'static str,
}

impl ImpactZone {
    fn new(kind: ZoneKind, center: GeoPoint, radius: Meters) -> Self {
        Self {
            kind,
            center,
            radius,
            color: kind.color(),
            label: kind.label(),
        }
    }
}

/// Overlay circles for a result centred on `center`
///
/// The crater zone only exists for surface impacts. Zones with a
/// non-positive radius are left out.
pub fn zones_for(result: &ImpactResult, center: GeoPoint) -> Vec<ImpactZone> {
    let crater = result
        .crater()
        .map(|c| (ZoneKind::Crater, c.final_diameter / 2.0));
    let rings = [
        (ZoneKind::Thermal, result.thermal_radius),
        (ZoneKind::TwentyPsi, result.blast_radius.twenty_psi),
        (ZoneKind::FivePsi, result.blast_radius.five_psi),
        (ZoneKind::OnePsi, result.blast_radius.one_psi),
    ]
    .into_iter()
    .map(|(kind, radius)| (kind, radius.to_meters()));

    crater
        .into_iter()
        .chain(rings)
        .filter(|(_, radius)| **radius > 0.0)
        .map(|(kind, radius)| ImpactZone::new(kind, center, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_impact;
    use crate::core_types::{Composition, EntryParameters};
    use approx::assert_relative_eq;

    #[test]
    fn test_surface_impact_has_crater_zone() {
        let result =
            calculate_impact(&EntryParameters::new(50.0, 12.8, Composition::Iron)).unwrap();
        let center = GeoPoint::new(35.027, -111.022).unwrap();
        let zones = zones_for(&result, center);

        let kinds: Vec<ZoneKind> = zones.iter().map(|z| z.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ZoneKind::Crater,
                ZoneKind::Thermal,
                ZoneKind::TwentyPsi,
                ZoneKind::FivePsi,
                ZoneKind::OnePsi
            ]
        );
        assert_relative_eq!(*zones[0].radius, 751.04, epsilon = 0.1);
        assert_relative_eq!(*zones[4].radius, 60_334.2, epsilon = 1.0);
        assert_eq!(zones[2].color, "#DC143C");
        assert!(zones.iter().all(|z| z.center == center));
    }

    #[test]
    fn test_airburst_has_no_crater_zone() {
        let result =
            calculate_impact(&EntryParameters::new(20.0, 19.0, Composition::Stony)).unwrap();
        let zones = zones_for(&result, GeoPoint::default());
        assert_eq!(zones.len(), 4);
        assert_eq!(zones[0].label, "Thermal Radiation (3rd degree burns)");
    }

    #[test]
    fn test_degree_offsets() {
        let equator = GeoPoint::new(0.0, 0.0).unwrap();
        let (lat, lng) = equator.degree_offsets(Kilometers::new(111.0));
        assert_relative_eq!(lat, 1.0);
        assert_relative_eq!(lng, 1.0, epsilon = 1e-12);

        let sixty = GeoPoint::new(60.0, 10.0).unwrap();
        let (_, lng) = sixty.degree_offsets(Kilometers::new(111.0));
        assert_relative_eq!(lng, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degree_offsets_at_poles() {
        for lat in [90.0, -90.0] {
            let pole = GeoPoint::new(lat, 0.0).unwrap();
            let (dlat, dlng) = pole.degree_offsets(Kilometers::new(111.0));
            assert_relative_eq!(dlat, 1.0);
            assert_eq!(dlng, f64::INFINITY);
        }
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }
}
