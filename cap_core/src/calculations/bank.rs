//! # Supercapacitor Bank Calculation
//!
//! Derives the electrical, mechanical and energy figures of a bank built from
//! identical cells: `num_cells` in series per circuit, `num_circuits` circuits
//! in parallel.
//!
//! ## Assumptions
//!
//! - Ideal cells (no ESR, no leakage)
//! - Constant-current discharge from V0 down to V1
//! - Cylindrical cells when the volume is derived from diameter and height
//!
//! ## Example
//!
//! ```rust
//! use cap_core::calculations::bank::{calculate, CellParameters};
//!
//! let params = CellParameters {
//!     num_cells: 10.0,
//!     num_circuits: 1.0,
//!     capacitance_one_cell: 3000.0,
//!     max_voltage_one_cell: 2.7,
//!     min_voltage_one_cell: 1.35,
//!     current_draw: 5.0,
//!     mass_one_cell: 20.0,
//!     volume_one_cell_mm3: None,
//!     diameter_one_cell: Some(30.0),
//!     height_one_cell: Some(60.0),
//! };
//!
//! let result = calculate(&params).unwrap();
//!
//! assert!((result.total_capacitance - 300.0).abs() < 1e-9);
//! assert!((result.energy_potential - 82_012.5).abs() < 1e-6);
//! println!("Discharge time: {:.2} min", result.discharge_time_minutes);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    bank_voltage_v, cylinder_volume_mm3, discharge_time_s, series_parallel_capacitance_f,
    stored_charge_c, stored_energy_j,
};
use crate::errors::{CalcError, CalcResult};
use crate::metrics::{Metric, ALL_METRICS};
use crate::settings::{CalcSettings, DomainPolicy};
use crate::units::{
    Amperes, AmpHours, Coulombs, CubicMillimeters, Days, Farads, Grams, Hours, Joules,
    MilliampHours, Milliliters, Minutes, Seconds, Volts,
};

/// Input parameters for one bank calculation.
///
/// The cell volume comes from `volume_one_cell_mm3` when present; otherwise it
/// is derived from `diameter_one_cell` and `height_one_cell`, which are then
/// both required.
///
/// ## JSON Example
///
/// ```json
/// {
///   "num_cells": 10,
///   "num_circuits": 1,
///   "capacitance_one_cell": 3000.0,
///   "max_voltage_one_cell": 2.7,
///   "min_voltage_one_cell": 1.35,
///   "current_draw": 5.0,
///   "mass_one_cell": 20.0,
///   "diameter_one_cell": 30.0,
///   "height_one_cell": 60.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellParameters {
    /// Cells in series per circuit
    pub num_cells: f64,

    /// Parallel circuits (strings)
    pub num_circuits: f64,

    /// Capacitance of one cell (F)
    pub capacitance_one_cell: f64,

    /// Rated (full charge) voltage of one cell (V)
    pub max_voltage_one_cell: f64,

    /// Cutoff voltage of one cell (V)
    pub min_voltage_one_cell: f64,

    /// Constant discharge current (A)
    pub current_draw: f64,

    /// Mass of one cell (g)
    pub mass_one_cell: f64,

    /// Volume of one cell (mm³), takes precedence over diameter/height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_one_cell_mm3: Option<f64>,

    /// Cell diameter (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_one_cell: Option<f64>,

    /// Cell height (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_one_cell: Option<f64>,
}

impl CellParameters {
    /// Volume of one cell in mm³.
    ///
    /// Uses the explicit volume if given, otherwise π(d/2)²h.
    pub fn resolve_volume_mm3(&self) -> CalcResult<f64> {
        if let Some(volume) = self.volume_one_cell_mm3 {
            return Ok(volume);
        }

        match (self.diameter_one_cell, self.height_one_cell) {
            (Some(d), Some(h)) => Ok(cylinder_volume_mm3(d, h)),
            (None, None) => Err(CalcError::invalid_input(
                "volume_one_cell_mm3",
                "",
                "Cell volume is indeterminate: give the volume, or both diameter and height",
            )),
            (None, Some(_)) => Err(CalcError::invalid_input(
                "diameter_one_cell",
                "",
                "Diameter is required to derive the cell volume",
            )),
            (Some(_), None) => Err(CalcError::invalid_input(
                "height_one_cell",
                "",
                "Height is required to derive the cell volume",
            )),
        }
    }

    /// Reject non-positive divisors and counts (strict domain policy).
    ///
    /// Voltages are not checked; a cutoff above the rated voltage just gives a
    /// negative energy.
    ///
    /// When the volume is derived from geometry, diameter and height must be
    /// positive too; a negative diameter would otherwise vanish when squared.
    pub fn validate_strict(&self, volume_one_cell_mm3: f64) -> CalcResult<()> {
        let mut checks = vec![
            ("num_cells", self.num_cells),
            ("num_circuits", self.num_circuits),
            ("capacitance_one_cell", self.capacitance_one_cell),
            ("current_draw", self.current_draw),
            ("mass_one_cell", self.mass_one_cell),
        ];
        if self.volume_one_cell_mm3.is_none() {
            if let Some(d) = self.diameter_one_cell {
                checks.push(("diameter_one_cell", d));
            }
            if let Some(h) = self.height_one_cell {
                checks.push(("height_one_cell", h));
            }
        }
        checks.push(("volume_one_cell_mm3", volume_one_cell_mm3));

        for (field, value) in checks {
            // also catches NaN
            if !(value > 0.0) || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive, finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Results of a bank calculation.
///
/// Fields are declared (and therefore serialized) in display order, under the
/// keys of [`Metric::key`]. Infinite and NaN values serialize as the strings
/// `"inf"`, `"-inf"` and `"NaN"`, the same spelling the result table uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Bank capacitance (F)
    #[serde(with = "ieee_f64")]
    pub total_capacitance: f64,

    /// Bank voltage at full charge (V)
    #[serde(rename = "V0", with = "ieee_f64")]
    pub v0: f64,

    /// Bank voltage at cutoff (V)
    #[serde(rename = "V1", with = "ieee_f64")]
    pub v1: f64,

    /// Mass of the series string (g)
    #[serde(with = "ieee_f64")]
    pub total_mass: f64,

    /// Volume of the series string (mm³)
    #[serde(with = "ieee_f64")]
    pub total_volume_mm3: f64,

    /// Volume of the series string (ml)
    #[serde(with = "ieee_f64")]
    pub total_volume_ml: f64,

    /// Energy released between V0 and V1 (J)
    #[serde(with = "ieee_f64")]
    pub energy_potential: f64,

    /// Energy per gram (J/g)
    #[serde(with = "ieee_f64")]
    pub energy_density: f64,

    /// Energy per milliliter (J/ml)
    #[serde(with = "ieee_f64")]
    pub volumetric_energy: f64,

    /// Charge at V0 (C)
    #[serde(with = "ieee_f64")]
    pub charge: f64,

    /// Charge at V0 (Ah)
    #[serde(rename = "charge_Ah", with = "ieee_f64")]
    pub charge_ah: f64,

    /// Charge at V0 (mAh)
    #[serde(rename = "charge_mAh", with = "ieee_f64")]
    pub charge_mah: f64,

    /// Energy density scaled by current draw (W/g)
    #[serde(with = "ieee_f64")]
    pub power_density: f64,

    /// Volumetric energy scaled by current draw (W/ml)
    #[serde(with = "ieee_f64")]
    pub volumetric_power_density: f64,

    /// Energy scaled by current draw (W)
    #[serde(with = "ieee_f64")]
    pub power_potential: f64,

    /// Energy scaled by current draw (mWh)
    #[serde(rename = "power_potential_mWh", with = "ieee_f64")]
    pub power_potential_mwh: f64,

    /// Time to drain the charge at constant current (s)
    #[serde(with = "ieee_f64")]
    pub discharge_time_seconds: f64,

    /// Time to drain the charge at constant current (min)
    #[serde(with = "ieee_f64")]
    pub discharge_time_minutes: f64,

    /// Time to drain the charge at constant current (h)
    #[serde(with = "ieee_f64")]
    pub discharge_time_hours: f64,

    /// Time to drain the charge at constant current (d)
    #[serde(with = "ieee_f64")]
    pub discharge_time_days: f64,
}

/// Serde adapter for `f64` fields that may hold infinities or NaN.
///
/// JSON has no literal for them, and `serde_json` would write `null`, which
/// cannot be read back into an `f64`.
mod ieee_f64 {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"NaN\", got \"{}\"",
                    other
                ))),
            },
        }
    }
}

impl ResultSet {
    /// Value of a single metric
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TotalCapacitance => self.total_capacitance,
            Metric::V0 => self.v0,
            Metric::V1 => self.v1,
            Metric::TotalMass => self.total_mass,
            Metric::TotalVolumeMm3 => self.total_volume_mm3,
            Metric::TotalVolumeMl => self.total_volume_ml,
            Metric::EnergyPotential => self.energy_potential,
            Metric::EnergyDensity => self.energy_density,
            Metric::VolumetricEnergy => self.volumetric_energy,
            Metric::Charge => self.charge,
            Metric::ChargeAh => self.charge_ah,
            Metric::ChargeMah => self.charge_mah,
            Metric::PowerDensity => self.power_density,
            Metric::VolumetricPowerDensity => self.volumetric_power_density,
            Metric::PowerPotential => self.power_potential,
            Metric::PowerPotentialMwh => self.power_potential_mwh,
            Metric::DischargeTimeSeconds => self.discharge_time_seconds,
            Metric::DischargeTimeMinutes => self.discharge_time_minutes,
            Metric::DischargeTimeHours => self.discharge_time_hours,
            Metric::DischargeTimeDays => self.discharge_time_days,
        }
    }

    /// Value by string key (e.g. `"charge_mAh"`), `None` for unknown keys
    pub fn get(&self, key: &str) -> Option<f64> {
        Metric::from_key(key).map(|m| self.value(m))
    }

    /// All (metric, value) pairs in display order
    pub fn entries(&self) -> Vec<(Metric, f64)> {
        ALL_METRICS.iter().map(|m| (*m, self.value(*m))).collect()
    }

    /// Metrics whose value is infinite or NaN
    pub fn non_finite_metrics(&self) -> Vec<Metric> {
        self.entries()
            .into_iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(m, _)| m)
            .collect()
    }
}

/// Calculate a bank with default settings (IEEE domain policy).
///
/// # Returns
///
/// * `Ok(ResultSet)` - All twenty metrics
/// * `Err(CalcError)` - If the cell volume cannot be resolved
pub fn calculate(params: &CellParameters) -> CalcResult<ResultSet> {
    calculate_with(params, &CalcSettings::default())
}

/// Calculate a bank.
///
/// Under [`DomainPolicy::Strict`] non-positive counts, capacitance, current,
/// mass and volume are rejected before any arithmetic is done. Under
/// [`DomainPolicy::Ieee`] they flow through the formulas, e.g. a zero current
/// gives infinite discharge times.
pub fn calculate_with(params: &CellParameters, settings: &CalcSettings) -> CalcResult<ResultSet> {
    let volume_one_cell = CubicMillimeters(params.resolve_volume_mm3()?);

    if settings.domain_policy == DomainPolicy::Strict {
        params.validate_strict(volume_one_cell.value())?;
    }

    let n = params.num_cells;
    let current = Amperes(params.current_draw);

    // Electrical
    let total_capacitance = Farads(series_parallel_capacitance_f(
        params.capacitance_one_cell,
        n,
        params.num_circuits,
    ));
    let v0 = Volts(bank_voltage_v(params.max_voltage_one_cell, n));
    let v1 = Volts(bank_voltage_v(params.min_voltage_one_cell, n));

    // Mechanical
    let total_mass = Grams(params.mass_one_cell) * n;
    let total_volume_mm3 = volume_one_cell * n;
    let total_volume_ml: Milliliters = total_volume_mm3.into();

    // Energy
    let energy_potential = Joules(stored_energy_j(total_capacitance.value(), v0.value(), v1.value()));
    let energy_density = energy_potential.value() / total_mass.value();
    let volumetric_energy = energy_potential.value() / total_volume_ml.value();

    // Charge
    let charge = Coulombs(stored_charge_c(total_capacitance.value(), v0.value()));
    let charge_ah: AmpHours = charge.into();
    let charge_mah: MilliampHours = charge_ah.into();

    // Power
    let power_density = energy_density * current.value();
    let volumetric_power_density = volumetric_energy * current.value();
    let power_potential = energy_potential.value() * current.value();
    let power_potential_mwh = power_potential * 1000.0;

    // Constant current discharge
    let seconds = Seconds(discharge_time_s(charge.value(), current.value()));
    let minutes: Minutes = seconds.into();
    let hours: Hours = minutes.into();
    let days: Days = hours.into();

    Ok(ResultSet {
        total_capacitance: total_capacitance.value(),
        v0: v0.value(),
        v1: v1.value(),
        total_mass: total_mass.value(),
        total_volume_mm3: total_volume_mm3.value(),
        total_volume_ml: total_volume_ml.value(),
        energy_potential: energy_potential.value(),
        energy_density,
        volumetric_energy,
        charge: charge.value(),
        charge_ah: charge_ah.value(),
        charge_mah: charge_mah.value(),
        power_density,
        volumetric_power_density,
        power_potential,
        power_potential_mwh,
        discharge_time_seconds: seconds.value(),
        discharge_time_minutes: minutes.value(),
        discharge_time_hours: hours.value(),
        discharge_time_days: days.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= TOL * expected.abs().max(1.0)
    }

    fn test_params() -> CellParameters {
        CellParameters {
            num_cells: 10.0,
            num_circuits: 1.0,
            capacitance_one_cell: 3000.0,
            max_voltage_one_cell: 2.7,
            min_voltage_one_cell: 1.35,
            current_draw: 5.0,
            mass_one_cell: 20.0,
            volume_one_cell_mm3: None,
            diameter_one_cell: Some(30.0),
            height_one_cell: Some(60.0),
        }
    }

    #[test]
    fn test_reference_bank() {
        let r = calculate(&test_params()).unwrap();

        assert!(close(r.total_capacitance, 300.0), "C = {}", r.total_capacitance);
        assert!(close(r.v0, 27.0));
        assert!(close(r.v1, 13.5));
        assert!(close(r.total_mass, 200.0));
        // π * 15² * 60 = 42411.50 per cell
        assert!(close(r.total_volume_mm3, 424_115.0), "V = {}", r.total_volume_mm3);
        assert!(close(r.total_volume_ml, 424.115));
        assert!(close(r.energy_potential, 82_012.5), "E = {}", r.energy_potential);
        assert!(close(r.energy_density, 410.0625));
        assert!(close(r.volumetric_energy, 82_012.5 / 424.115));
    }

    #[test]
    fn test_reference_bank_charge_and_discharge() {
        let r = calculate(&test_params()).unwrap();

        assert!(close(r.charge, 8100.0));
        assert!(close(r.charge_ah, 2.25));
        assert!(close(r.charge_mah, 2250.0));
        assert!(close(r.power_density, 2050.3125));
        assert!(close(r.power_potential, 410_062.5));
        assert!(close(r.power_potential_mwh, 410_062_500.0));
        assert!(close(r.discharge_time_seconds, 1620.0));
        assert!(close(r.discharge_time_minutes, 27.0));
        assert!(close(r.discharge_time_hours, 0.45));
        assert!(close(r.discharge_time_days, 0.01875));
    }

    #[test]
    fn test_parallel_circuits_scale_capacitance() {
        let mut params = test_params();
        params.num_circuits = 3.0;
        let r = calculate(&params).unwrap();
        assert!(close(r.total_capacitance, 900.0));
        // Mass and volume follow the series count only
        assert!(close(r.total_mass, 200.0));
    }

    #[test]
    fn test_explicit_volume_takes_precedence() {
        let mut params = test_params();
        params.volume_one_cell_mm3 = Some(50_000.0);
        let r = calculate(&params).unwrap();
        assert!(close(r.total_volume_mm3, 500_000.0));
    }

    #[test]
    fn test_volume_equivalence() {
        let derived = calculate(&test_params()).unwrap();

        let mut explicit = test_params();
        explicit.volume_one_cell_mm3 = Some(std::f64::consts::PI * 15.0 * 15.0 * 60.0);
        explicit.diameter_one_cell = None;
        explicit.height_one_cell = None;
        let explicit = calculate(&explicit).unwrap();

        assert!(close(derived.total_volume_ml, explicit.total_volume_ml));
        assert!(close(derived.volumetric_energy, explicit.volumetric_energy));
    }

    #[test]
    fn test_missing_volume_and_geometry() {
        let mut params = test_params();
        params.diameter_one_cell = None;
        params.height_one_cell = None;

        let err = calculate(&params).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.field(), Some("volume_one_cell_mm3"));
    }

    #[test]
    fn test_missing_height_only() {
        let mut params = test_params();
        params.height_one_cell = None;

        let err = calculate(&params).unwrap_err();
        assert_eq!(err.field(), Some("height_one_cell"));
    }

    #[test]
    fn test_zero_current_gives_infinite_discharge_time() {
        let mut params = test_params();
        params.current_draw = 0.0;

        let r = calculate(&params).unwrap();
        assert!(r.discharge_time_seconds.is_infinite() && r.discharge_time_seconds > 0.0);
        assert!(r.discharge_time_days.is_infinite());
        assert_eq!(r.power_potential, 0.0);
        assert_eq!(
            r.non_finite_metrics(),
            vec![
                Metric::DischargeTimeSeconds,
                Metric::DischargeTimeMinutes,
                Metric::DischargeTimeHours,
                Metric::DischargeTimeDays,
            ]
        );
    }

    #[test]
    fn test_zero_current_rejected_when_strict() {
        let mut params = test_params();
        params.current_draw = 0.0;

        let err = calculate_with(&params, &CalcSettings::strict()).unwrap_err();
        assert_eq!(err.field(), Some("current_draw"));
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_strict_rejects_negative_cells_and_volume() {
        let mut params = test_params();
        params.num_cells = -1.0;
        let err = calculate_with(&params, &CalcSettings::strict()).unwrap_err();
        assert_eq!(err.field(), Some("num_cells"));

        let mut params = test_params();
        params.volume_one_cell_mm3 = Some(0.0);
        let err = calculate_with(&params, &CalcSettings::strict()).unwrap_err();
        assert_eq!(err.field(), Some("volume_one_cell_mm3"));
    }

    #[test]
    fn test_strict_rejects_negative_geometry() {
        let mut params = test_params();
        params.diameter_one_cell = Some(-30.0);
        let err = calculate_with(&params, &CalcSettings::strict()).unwrap_err();
        assert_eq!(err.field(), Some("diameter_one_cell"));

        let mut params = test_params();
        params.height_one_cell = Some(0.0);
        let err = calculate_with(&params, &CalcSettings::strict()).unwrap_err();
        assert_eq!(err.field(), Some("height_one_cell"));

        // Ignored geometry is not checked when the volume is given
        let mut params = test_params();
        params.volume_one_cell_mm3 = Some(42_000.0);
        params.diameter_one_cell = Some(-30.0);
        assert!(calculate_with(&params, &CalcSettings::strict()).is_ok());
    }

    #[test]
    fn test_non_finite_json_roundtrip() {
        let mut params = test_params();
        params.current_draw = 0.0;
        let r = calculate(&params).unwrap();

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"discharge_time_seconds\":\"inf\""), "{}", json);
        assert!(!json.contains("null"));

        let roundtrip: ResultSet = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, r);
    }

    #[test]
    fn test_nan_and_negative_infinity_json() {
        let mut r = calculate(&test_params()).unwrap();
        r.energy_density = f64::NAN;
        r.v1 = f64::NEG_INFINITY;

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"energy_density\":\"NaN\""));
        assert!(json.contains("\"V1\":\"-inf\""));

        let roundtrip: ResultSet = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.energy_density.is_nan());
        assert_eq!(roundtrip.v1, f64::NEG_INFINITY);
        assert_eq!(roundtrip.charge, r.charge);
    }

    #[test]
    fn test_unknown_json_text_rejected() {
        let r = calculate(&test_params()).unwrap();
        let json = serde_json::to_string(&r)
            .unwrap()
            .replacen("\"V0\":", "\"V0\":\"lots\",\"ignored\":", 1);
        assert!(serde_json::from_str::<ResultSet>(&json).is_err());
    }

    #[test]
    fn test_strict_accepts_valid_bank() {
        let strict = calculate_with(&test_params(), &CalcSettings::strict()).unwrap();
        let ieee = calculate(&test_params()).unwrap();
        assert_eq!(strict, ieee);
    }

    #[test]
    fn test_entries_in_display_order() {
        let r = calculate(&test_params()).unwrap();
        let entries = r.entries();
        assert_eq!(entries.len(), 20);
        assert_eq!(entries[0], (Metric::TotalCapacitance, r.total_capacitance));
        assert_eq!(entries[19], (Metric::DischargeTimeDays, r.discharge_time_days));
    }

    #[test]
    fn test_get_by_key() {
        let r = calculate(&test_params()).unwrap();
        assert_eq!(r.get("charge_mAh"), Some(r.charge_mah));
        assert_eq!(r.get("V1"), Some(r.v1));
        assert_eq!(r.get("bogus"), None);
    }

    #[test]
    fn test_json_key_order() {
        let r = calculate(&test_params()).unwrap();
        let json = serde_json::to_string(&r).unwrap();

        let positions: Vec<usize> = ALL_METRICS
            .iter()
            .map(|m| json.find(&format!("\"{}\":", m.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {}", json);
    }

    #[test]
    fn test_params_json() {
        let json = r#"{
            "num_cells": 10,
            "num_circuits": 1,
            "capacitance_one_cell": 3000.0,
            "max_voltage_one_cell": 2.7,
            "min_voltage_one_cell": 1.35,
            "current_draw": 5.0,
            "mass_one_cell": 20.0,
            "diameter_one_cell": 30.0,
            "height_one_cell": 60.0
        }"#;
        let params: CellParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params, test_params());

        let out = serde_json::to_string(&params).unwrap();
        assert!(!out.contains("volume_one_cell_mm3"));
    }
}
