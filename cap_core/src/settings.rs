//! # Calculation Settings
//!
//! Configuration shared by the calculator and the report formatter. Settings
//! are plain JSON so a front end can keep them in a file next to the binary.
//!
//! ```json
//! {
//!   "decimal_places": 5,
//!   "domain_policy": "Ieee"
//! }
//! ```
//!
//! ## Domain Policy
//!
//! The formulas divide by the cell count, the current draw, the total mass and
//! the total volume. What happens when one of those is zero or negative is a
//! policy choice:
//!
//! - [`DomainPolicy::Ieee`] (default): no checks. The arithmetic follows IEEE
//!   754, so `current_draw = 0` gives `discharge_time_seconds = +inf`.
//! - [`DomainPolicy::Strict`]: non-positive counts, capacitance, current, mass
//!   or resolved volume are rejected with `CalcError::InvalidInput`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Decimal places used by the result table unless configured otherwise
pub const DEFAULT_DECIMAL_PLACES: usize = 5;

/// Upper bound on `decimal_places`; f64 carries ~15-17 significant digits
pub const MAX_DECIMAL_PLACES: usize = 12;

/// How the calculator treats zero and negative divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// Let IEEE arithmetic produce infinities and NaNs
    #[default]
    Ieee,
    /// Reject non-positive quantities before calculating
    Strict,
}

/// Calculator and display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Digits after the decimal point in the result table
    pub decimal_places: usize,

    /// Treatment of zero/negative divisors
    pub domain_policy: DomainPolicy,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            domain_policy: DomainPolicy::Ieee,
        }
    }
}

impl CalcSettings {
    /// Settings with strict domain checking and default precision
    pub fn strict() -> Self {
        CalcSettings {
            domain_policy: DomainPolicy::Strict,
            ..Default::default()
        }
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("Must be at most {}", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }

    /// Parse settings from a JSON string. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cap_core::settings::{CalcSettings, DomainPolicy};
    ///
    /// let settings = CalcSettings::from_json_str(r#"{"domain_policy": "Strict"}"#).unwrap();
    /// assert_eq!(settings.domain_policy, DomainPolicy::Strict);
    /// assert_eq!(settings.decimal_places, 5);
    /// ```
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&json)
    }
}
