//! # Result Report
//!
//! The display boundary: a [`ResultSet`] becomes an ordered list of
//! (label, formatted value, unit) rows, and optionally a plain-text table.
//! Rounding happens here and only here; the calculator never rounds.
//!
//! ## Example
//!
//! ```rust
//! use cap_core::calculations::bank::{calculate, CellParameters};
//! use cap_core::report::{render_table, report_rows};
//! use cap_core::settings::CalcSettings;
//!
//! let params = CellParameters {
//!     num_cells: 10.0,
//!     num_circuits: 1.0,
//!     capacitance_one_cell: 3000.0,
//!     max_voltage_one_cell: 2.7,
//!     min_voltage_one_cell: 1.35,
//!     current_draw: 5.0,
//!     mass_one_cell: 20.0,
//!     volume_one_cell_mm3: Some(42_411.5),
//!     diameter_one_cell: None,
//!     height_one_cell: None,
//! };
//! let result = calculate(&params).unwrap();
//!
//! let rows = report_rows(&result, &CalcSettings::default());
//! assert_eq!(rows[0].label, "total_capacitance");
//! assert_eq!(rows[0].value, "300.00000");
//! assert_eq!(rows[0].unit, "F");
//!
//! println!("{}", render_table(&rows));
//! ```

use serde::Serialize;

use crate::calculations::bank::ResultSet;
use crate::errors::CalcResult;
use crate::settings::CalcSettings;

/// One line of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Metric key (e.g. "charge_mAh")
    pub label: &'static str,
    /// Value rounded to the configured number of decimals
    pub value: String,
    /// Display unit (e.g. "mAh")
    pub unit: &'static str,
}

impl ReportRow {
    /// Value and unit joined, as shown in the Value column
    pub fn value_with_unit(&self) -> String {
        if self.unit.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Format a value with a fixed number of decimals.
///
/// Infinities and NaN are spelled out rather than rounded.
pub fn format_value(value: f64, decimal_places: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{:.*}", decimal_places, value)
    }
}

/// Rows for every metric, in display order.
pub fn report_rows(result: &ResultSet, settings: &CalcSettings) -> Vec<ReportRow> {
    result
        .entries()
        .into_iter()
        .map(|(metric, value)| ReportRow {
            label: metric.key(),
            value: format_value(value, settings.decimal_places),
            unit: metric.unit(),
        })
        .collect()
}

/// Render rows as a two-column "Parameter / Value" text table.
pub fn render_table(rows: &[ReportRow]) -> String {
    const PARAM_HEADER: &str = "Parameter";
    const VALUE_HEADER: &str = "Value";

    let cells: Vec<(&str, String)> = rows.iter().map(|r| (r.label, r.value_with_unit())).collect();

    let label_width = cells
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(PARAM_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = cells
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<label_width$}  {}\n", PARAM_HEADER, VALUE_HEADER));
    out.push_str(&format!("{}  {}\n", "-".repeat(label_width), "-".repeat(value_width)));
    for (label, value) in &cells {
        out.push_str(&format!("{:<label_width$}  {}\n", label, value));
    }
    out
}

/// Pretty JSON of a result set, keys in display order.
///
/// Non-finite values are written as `"inf"`, `"-inf"` or `"NaN"` and read back
/// by `ResultSet`'s `Deserialize`.
pub fn render_json(result: &ResultSet) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
