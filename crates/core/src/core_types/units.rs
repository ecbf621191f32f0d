//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the physical quantities that flow
//! through the impact calculator, so a diameter in meters cannot be mixed up
//! with a radius in kilometers or an energy in joules with one in megatons.
//!
//! # Design Philosophy
//! - All quantities use f64: kinetic energies reach 1e23 J and the classifier
//!   takes logarithms of ratios near 1e-7, so f32 is not adequate
//! - Constructors do not validate; input validation lives in
//!   [`EntryParameters::validate`](crate::core_types::EntryParameters::validate)
//!   so bad inputs surface as errors rather than panics
//! - Implements common traits (Deref, Ord, Display, serde)
//! - Provides explicit conversion methods between related types
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//!
//! # Usage
//! ```
//! use impact_sim_core::core_types::units::{Kilometers, KilometersPerSecond, Meters};
//!
//! let radius = Kilometers::new(2.5);
//! assert_eq!(radius.to_meters(), Meters::new(2500.0));
//!
//! let speed = KilometersPerSecond::new(19.0);
//! assert!((*speed.to_meters_per_second() - 19_000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul};

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DISTANCE/LENGTH TYPES
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Zero distance
    pub const ZERO: Meters = Meters(0.0);

    /// Create a new distance in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.0)
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters {
        Meters(self.0 / rhs)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m", self.0)
    }
}

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilometers {
    /// Create a new Kilometers value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1000.0)
    }
}

impl From<f64> for Kilometers {
    fn from(v: f64) -> Self {
        Kilometers(v)
    }
}

impl From<Kilometers> for f64 {
    fn from(k: Kilometers) -> f64 {
        k.0
    }
}

impl Mul<f64> for Kilometers {
    type Output = Kilometers;
    fn mul(self, rhs: f64) -> Kilometers {
        Kilometers(self.0 * rhs)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

// ============================================================================
// VELOCITY TYPES
// ============================================================================

/// Speed in kilometers per second (the customary unit for entry velocity)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerSecond(f64);

impl Eq for KilometersPerSecond {}

impl PartialOrd for KilometersPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerSecond {
    /// Earth escape velocity, the slowest possible heliocentric encounter
    pub const EARTH_ESCAPE: KilometersPerSecond = KilometersPerSecond(11.0);

    /// Head-on encounter with a retrograde object at Earth's orbit
    pub const MAX_ENCOUNTER: KilometersPerSecond = KilometersPerSecond(72.0);

    /// Create a new speed in km/s
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters per second
    #[inline]
    #[must_use]
    pub fn to_meters_per_second(self) -> MetersPerSecond {
        MetersPerSecond(self.0 * 1000.0)
    }

    /// Whether the speed lies inside the physically plausible entry range
    #[inline]
    #[must_use]
    pub fn is_plausible_entry_speed(self) -> bool {
        self >= Self::EARTH_ESCAPE && self <= Self::MAX_ENCOUNTER
    }
}

impl From<f64> for KilometersPerSecond {
    fn from(v: f64) -> Self {
        KilometersPerSecond(v)
    }
}

impl From<KilometersPerSecond> for f64 {
    fn from(v: KilometersPerSecond) -> f64 {
        v.0
    }
}

impl fmt::Display for KilometersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/s", self.0)
    }
}

/// Speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Create a new speed in m/s
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Square of the speed (m²/s²), used for kinetic energy and ram pressure
    #[inline]
    #[must_use]
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s", self.0)
    }
}

// ============================================================================
// MASS AND DENSITY TYPES
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilograms(f64);

impl Deref for Kilograms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilograms {
    /// Create a new mass in kilograms
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilograms(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3e} kg", self.0)
    }
}

/// Bulk density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KgPerCubicMeter(f64);

impl Eq for KgPerCubicMeter {}

impl PartialOrd for KgPerCubicMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KgPerCubicMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KgPerCubicMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KgPerCubicMeter {
    /// Create a new density in kg/m³
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KgPerCubicMeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for KgPerCubicMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kg/m³", self.0)
    }
}

// ============================================================================
// ENERGY TYPES
// ============================================================================

/// Energy in joules
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Joules(f64);

impl Eq for Joules {}

impl PartialOrd for Joules {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Joules {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Joules {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Joules {
    /// Create a new energy in joules
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Joules(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to megatons of TNT
    ///
    /// # Arguments
    /// * `joules_per_megaton` - TNT-equivalent conversion constant
    #[inline]
    #[must_use]
    pub fn to_megatons(self, joules_per_megaton: f64) -> Megatons {
        Megatons(self.0 / joules_per_megaton)
    }
}

impl Mul<f64> for Joules {
    type Output = Joules;
    fn mul(self, rhs: f64) -> Joules {
        Joules(self.0 * rhs)
    }
}

impl fmt::Display for Joules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3e} J", self.0)
    }
}

/// TNT-equivalent energy in megatons
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megatons(f64);

impl Eq for Megatons {}

impl PartialOrd for Megatons {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Megatons {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Megatons {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Megatons {
    /// Create a new TNT-equivalent energy in megatons
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Megatons(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilotons of TNT
    #[inline]
    #[must_use]
    pub fn to_kilotons(self) -> Kilotons {
        Kilotons(self.0 * 1000.0)
    }
}

impl fmt::Display for Megatons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Mt", self.0)
    }
}

/// TNT-equivalent energy in kilotons (the reference unit of blast scaling)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilotons(f64);

impl Deref for Kilotons {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilotons {
    /// Create a new TNT-equivalent energy in kilotons
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilotons(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Cube-root yield scaling factor, kt^(1/3)
    #[inline]
    #[must_use]
    pub fn cube_root(self) -> f64 {
        self.0.cbrt()
    }
}

impl fmt::Display for Kilotons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kt", self.0)
    }
}

// ============================================================================
// PRESSURE TYPES
// ============================================================================

/// Pressure or material strength in pascals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

impl Deref for Pascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Pascals {
    /// Create a new pressure in pascals
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pascals(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Pa", self.0)
    }
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Sine of the angle
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.to_radians().sin()
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_conversions() {
        let km = Kilometers::new(3.2);
        assert_relative_eq!(*km.to_meters(), 3200.0, epsilon = 1e-9);
        assert_relative_eq!(*Meters::new(1500.0).to_kilometers(), 1.5);
    }

    #[test]
    fn test_energy_conversions() {
        let energy = Joules::new(4.18e15);
        let mt = energy.to_megatons(4.18e15);
        assert_relative_eq!(*mt, 1.0);
        assert_relative_eq!(*mt.to_kilotons(), 1000.0);
        assert_relative_eq!(mt.to_kilotons().cube_root(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_plausible_entry_speed() {
        assert!(KilometersPerSecond::new(19.0).is_plausible_entry_speed());
        assert!(KilometersPerSecond::new(11.0).is_plausible_entry_speed());
        assert!(!KilometersPerSecond::new(5.0).is_plausible_entry_speed());
        assert!(!KilometersPerSecond::new(80.0).is_plausible_entry_speed());
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let nan = Meters::new(f64::NAN);
        let one = Meters::new(1.0);
        assert_eq!(one.cmp(&nan), Ordering::Less);
        assert!(one.max(nan).is_nan());
    }

    #[test]
    fn test_sine_of_canonical_angle() {
        assert_relative_eq!(Degrees::new(45.0).sin(), 0.7071, epsilon = 1e-4);
        assert_relative_eq!(Degrees::new(90.0).sin(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(format!("{}", Kilometers::new(12.345)), "12.3 km");
        assert_eq!(format!("{}", Megatons::new(0.5426)), "0.54 Mt");
        assert_eq!(format!("{}", Degrees::new(45.0)), "45.0°");
    }
}
