//! # Unit Types
//!
//! Type-safe wrappers for the physical quantities of a capacitor bank. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator works in one fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! - Electrical: farads (F), volts (V), amperes (A), coulombs (C)
//! - Charge capacity: amp-hours (Ah), milliamp-hours (mAh)
//! - Mechanical: grams (g), cubic millimeters (mm³), milliliters (ml)
//! - Energy: joules (J)
//! - Time: seconds, minutes, hours, days
//!
//! ## Example
//!
//! ```rust
//! use cap_core::units::{AmpHours, Coulombs, CubicMillimeters, Milliliters};
//!
//! let volume = CubicMillimeters(42_000.0);
//! let volume_ml: Milliliters = volume.into();
//! assert_eq!(volume_ml.0, 42.0);
//!
//! let charge = Coulombs(7200.0);
//! let capacity: AmpHours = charge.into();
//! assert_eq!(capacity.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Cubic millimeters per milliliter
pub const MM3_PER_ML: f64 = 1000.0;

/// Coulombs per amp-hour (one ampere for one hour)
pub const COULOMBS_PER_AMP_HOUR: f64 = 3600.0;

/// Milliamp-hours per amp-hour
pub const MAH_PER_AH: f64 = 1000.0;

// ============================================================================
// Electrical Units
// ============================================================================

/// Capacitance in farads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Farads(pub f64);

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

// ============================================================================
// Charge Units
// ============================================================================

/// Charge in coulombs
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coulombs(pub f64);

/// Charge in amp-hours (1 Ah = 3600 C)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmpHours(pub f64);

/// Charge in milliamp-hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilliampHours(pub f64);

impl From<Coulombs> for AmpHours {
    fn from(c: Coulombs) -> Self {
        AmpHours(c.0 / COULOMBS_PER_AMP_HOUR)
    }
}

impl From<AmpHours> for Coulombs {
    fn from(ah: AmpHours) -> Self {
        Coulombs(ah.0 * COULOMBS_PER_AMP_HOUR)
    }
}

impl From<AmpHours> for MilliampHours {
    fn from(ah: AmpHours) -> Self {
        MilliampHours(ah.0 * MAH_PER_AH)
    }
}

impl From<MilliampHours> for AmpHours {
    fn from(mah: MilliampHours) -> Self {
        AmpHours(mah.0 / MAH_PER_AH)
    }
}

// ============================================================================
// Mechanical Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in milliliters (1 ml = 1000 mm³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliliters(pub f64);

impl From<CubicMillimeters> for Milliliters {
    fn from(mm3: CubicMillimeters) -> Self {
        Milliliters(mm3.0 / MM3_PER_ML)
    }
}

impl From<Milliliters> for CubicMillimeters {
    fn from(ml: Milliliters) -> Self {
        CubicMillimeters(ml.0 * MM3_PER_ML)
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy in joules
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Joules(pub f64);

// ============================================================================
// Time Units
// ============================================================================

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in days
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Days(pub f64);

impl From<Seconds> for Minutes {
    fn from(s: Seconds) -> Self {
        Minutes(s.0 / 60.0)
    }
}

impl From<Minutes> for Hours {
    fn from(min: Minutes) -> Self {
        Hours(min.0 / 60.0)
    }
}

impl From<Hours> for Days {
    fn from(h: Hours) -> Self {
        Days(h.0 / 24.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Farads);
impl_arithmetic!(Volts);
impl_arithmetic!(Amperes);
impl_arithmetic!(Coulombs);
impl_arithmetic!(AmpHours);
impl_arithmetic!(MilliampHours);
impl_arithmetic!(Grams);
impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(Milliliters);
impl_arithmetic!(Joules);
impl_arithmetic!(Seconds);
impl_arithmetic!(Minutes);
impl_arithmetic!(Hours);
impl_arithmetic!(Days);
