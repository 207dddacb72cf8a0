//! # Input Form
//!
//! The text boundary of the calculator: ten free-text fields, as typed by the
//! user, turned into [`CellParameters`].
//!
//! - Required fields must parse as a finite number. An empty field is a
//!   `MissingField` error, anything else unparseable is `InvalidInput`.
//! - The three geometry fields (volume, diameter, height) are optional. Empty
//!   or unparseable text there counts as "not given".
//!
//! ## Example
//!
//! ```rust
//! use cap_core::form::{CellForm, FormField};
//! use cap_core::settings::CalcSettings;
//!
//! let mut form = CellForm::default();
//! form.set(FormField::NumCells, "10");
//! form.set(FormField::NumCircuits, "1");
//! form.set(FormField::CapacitanceOneCell, "3000");
//! form.set(FormField::MaxVoltageOneCell, "2.7");
//! form.set(FormField::MinVoltageOneCell, "1.35");
//! form.set(FormField::CurrentDraw, "5");
//! form.set(FormField::MassOneCell, "20");
//! form.set(FormField::VolumeOneCellMm3, "42411.5");
//!
//! let result = form.calculate(&CalcSettings::default()).unwrap();
//! assert!((result.charge_ah - 2.25).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bank::{calculate_with, CellParameters, ResultSet};
use crate::errors::{CalcError, CalcResult};
use crate::settings::CalcSettings;

/// One of the ten input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    NumCells,
    NumCircuits,
    CapacitanceOneCell,
    MaxVoltageOneCell,
    MinVoltageOneCell,
    CurrentDraw,
    MassOneCell,
    VolumeOneCellMm3,
    DiameterOneCell,
    HeightOneCell,
}

/// All fields in on-screen order.
pub const ALL_FIELDS: [FormField; 10] = [
    FormField::NumCells,
    FormField::NumCircuits,
    FormField::CapacitanceOneCell,
    FormField::MaxVoltageOneCell,
    FormField::MinVoltageOneCell,
    FormField::CurrentDraw,
    FormField::MassOneCell,
    FormField::VolumeOneCellMm3,
    FormField::DiameterOneCell,
    FormField::HeightOneCell,
];

impl FormField {
    /// Label shown next to the text field
    pub fn label(&self) -> &'static str {
        match self {
            FormField::NumCells => "Number of Cells",
            FormField::NumCircuits => "Number of Circuits",
            FormField::CapacitanceOneCell => "Capacitance of One Cell",
            FormField::MaxVoltageOneCell => "Max Voltage of One Cell",
            FormField::MinVoltageOneCell => "Min Voltage of One Cell",
            FormField::CurrentDraw => "Current Draw",
            FormField::MassOneCell => "Mass of One Cell",
            FormField::VolumeOneCellMm3 => "Volume of One Cell (mm3)",
            FormField::DiameterOneCell => "Diameter of One Cell",
            FormField::HeightOneCell => "Height of One Cell",
        }
    }

    /// Parameter name, matches the `CellParameters` field and error `field`
    pub fn key(&self) -> &'static str {
        match self {
            FormField::NumCells => "num_cells",
            FormField::NumCircuits => "num_circuits",
            FormField::CapacitanceOneCell => "capacitance_one_cell",
            FormField::MaxVoltageOneCell => "max_voltage_one_cell",
            FormField::MinVoltageOneCell => "min_voltage_one_cell",
            FormField::CurrentDraw => "current_draw",
            FormField::MassOneCell => "mass_one_cell",
            FormField::VolumeOneCellMm3 => "volume_one_cell_mm3",
            FormField::DiameterOneCell => "diameter_one_cell",
            FormField::HeightOneCell => "height_one_cell",
        }
    }

    /// Expected unit, empty for counts
    pub fn unit(&self) -> &'static str {
        match self {
            FormField::NumCells | FormField::NumCircuits => "",
            FormField::CapacitanceOneCell => "F",
            FormField::MaxVoltageOneCell | FormField::MinVoltageOneCell => "V",
            FormField::CurrentDraw => "A",
            FormField::MassOneCell => "g",
            FormField::VolumeOneCellMm3 => "mm³",
            FormField::DiameterOneCell | FormField::HeightOneCell => "mm",
        }
    }

    /// False for the geometry fields, which may be left blank
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            FormField::VolumeOneCellMm3 | FormField::DiameterOneCell | FormField::HeightOneCell
        )
    }
}

/// Raw text of the input screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellForm {
    pub num_cells: String,
    pub num_circuits: String,
    pub capacitance_one_cell: String,
    pub max_voltage_one_cell: String,
    pub min_voltage_one_cell: String,
    pub current_draw: String,
    pub mass_one_cell: String,
    pub volume_one_cell_mm3: String,
    pub diameter_one_cell: String,
    pub height_one_cell: String,
}

impl CellForm {
    /// Current text of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::NumCells => &self.num_cells,
            FormField::NumCircuits => &self.num_circuits,
            FormField::CapacitanceOneCell => &self.capacitance_one_cell,
            FormField::MaxVoltageOneCell => &self.max_voltage_one_cell,
            FormField::MinVoltageOneCell => &self.min_voltage_one_cell,
            FormField::CurrentDraw => &self.current_draw,
            FormField::MassOneCell => &self.mass_one_cell,
            FormField::VolumeOneCellMm3 => &self.volume_one_cell_mm3,
            FormField::DiameterOneCell => &self.diameter_one_cell,
            FormField::HeightOneCell => &self.height_one_cell,
        }
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: FormField, text: impl Into<String>) {
        let slot = match field {
            FormField::NumCells => &mut self.num_cells,
            FormField::NumCircuits => &mut self.num_circuits,
            FormField::CapacitanceOneCell => &mut self.capacitance_one_cell,
            FormField::MaxVoltageOneCell => &mut self.max_voltage_one_cell,
            FormField::MinVoltageOneCell => &mut self.min_voltage_one_cell,
            FormField::CurrentDraw => &mut self.current_draw,
            FormField::MassOneCell => &mut self.mass_one_cell,
            FormField::VolumeOneCellMm3 => &mut self.volume_one_cell_mm3,
            FormField::DiameterOneCell => &mut self.diameter_one_cell,
            FormField::HeightOneCell => &mut self.height_one_cell,
        };
        *slot = text.into();
    }

    /// Parse the form into calculation parameters.
    ///
    /// Fails on the first required field (in on-screen order) that is empty or
    /// not a finite number.
    pub fn parse(&self) -> CalcResult<CellParameters> {
        Ok(CellParameters {
            num_cells: self.required(FormField::NumCells)?,
            num_circuits: self.required(FormField::NumCircuits)?,
            capacitance_one_cell: self.required(FormField::CapacitanceOneCell)?,
            max_voltage_one_cell: self.required(FormField::MaxVoltageOneCell)?,
            min_voltage_one_cell: self.required(FormField::MinVoltageOneCell)?,
            current_draw: self.required(FormField::CurrentDraw)?,
            mass_one_cell: self.required(FormField::MassOneCell)?,
            volume_one_cell_mm3: self.optional(FormField::VolumeOneCellMm3),
            diameter_one_cell: self.optional(FormField::DiameterOneCell),
            height_one_cell: self.optional(FormField::HeightOneCell),
        })
    }

    /// Parse and calculate in one step. Nothing is computed if parsing fails.
    pub fn calculate(&self, settings: &CalcSettings) -> CalcResult<ResultSet> {
        let params = self.parse()?;
        calculate_with(&params, settings)
    }

    fn required(&self, field: FormField) -> CalcResult<f64> {
        let text = self.get(field).trim();
        if text.is_empty() {
            return Err(CalcError::missing_field(field.key()));
        }

        let value: f64 = text
            .parse()
            .map_err(|_| CalcError::invalid_input(field.key(), text, "Not a number"))?;

        if !value.is_finite() {
            return Err(CalcError::invalid_input(field.key(), text, "Must be a finite number"));
        }
        Ok(value)
    }

    fn optional(&self, field: FormField) -> Option<f64> {
        self.get(field)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

impl From<&CellParameters> for CellForm {
    fn from(params: &CellParameters) -> Self {
        let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        CellForm {
            num_cells: params.num_cells.to_string(),
            num_circuits: params.num_circuits.to_string(),
            capacitance_one_cell: params.capacitance_one_cell.to_string(),
            max_voltage_one_cell: params.max_voltage_one_cell.to_string(),
            min_voltage_one_cell: params.min_voltage_one_cell.to_string(),
            current_draw: params.current_draw.to_string(),
            mass_one_cell: params.mass_one_cell.to_string(),
            volume_one_cell_mm3: opt(params.volume_one_cell_mm3),
            diameter_one_cell: opt(params.diameter_one_cell),
            height_one_cell: opt(params.height_one_cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CellForm {
        let mut form = CellForm::default();
        let values = ["10", "1", "3000", "2.7", "1.35", "5", "20", "", "30", "60"];
        for (field, text) in ALL_FIELDS.iter().zip(values) {
            form.set(*field, text);
        }
        form
    }

    #[test]
    fn test_parse_filled_form() {
        let params = filled_form().parse().unwrap();
        assert_eq!(params.num_cells, 10.0);
        assert_eq!(params.capacitance_one_cell, 3000.0);
        assert_eq!(params.volume_one_cell_mm3, None);
        assert_eq!(params.diameter_one_cell, Some(30.0));
        assert_eq!(params.height_one_cell, Some(60.0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut form = filled_form();
        form.set(FormField::CurrentDraw, "  2.5 ");
        assert_eq!(form.parse().unwrap().current_draw, 2.5);
    }

    #[test]
    fn test_empty_required_field() {
        let mut form = filled_form();
        form.set(FormField::MassOneCell, "   ");
        let err = form.parse().unwrap_err();
        assert_eq!(err, CalcError::missing_field("mass_one_cell"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_non_numeric_required_field() {
        let mut form = filled_form();
        form.set(FormField::MaxVoltageOneCell, "2,7");
        let err = form.parse().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("max_voltage_one_cell"));
    }

    #[test]
    fn test_non_finite_required_field() {
        let mut form = filled_form();
        form.set(FormField::NumCircuits, "inf");
        assert_eq!(form.parse().unwrap_err().field(), Some("num_circuits"));
    }

    #[test]
    fn test_first_bad_field_reported() {
        let mut form = filled_form();
        form.set(FormField::NumCircuits, "x");
        form.set(FormField::CurrentDraw, "");
        assert_eq!(form.parse().unwrap_err().field(), Some("num_circuits"));
    }

    #[test]
    fn test_optional_garbage_is_absent() {
        let mut form = filled_form();
        form.set(FormField::VolumeOneCellMm3, "n/a");
        assert_eq!(form.parse().unwrap().volume_one_cell_mm3, None);
    }

    #[test]
    fn test_unresolvable_volume_fails_calculation() {
        let mut form = filled_form();
        form.set(FormField::DiameterOneCell, "");
        form.set(FormField::HeightOneCell, "");

        let err = form.calculate(&CalcSettings::default()).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.field(), Some("volume_one_cell_mm3"));
    }

    #[test]
    fn test_calculate_reference_bank() {
        let result = filled_form().calculate(&CalcSettings::default()).unwrap();
        assert!((result.energy_potential - 82_012.5).abs() < 1e-4);
    }

    #[test]
    fn test_form_from_parameters() {
        let params = filled_form().parse().unwrap();
        let form = CellForm::from(&params);
        assert_eq!(form.get(FormField::NumCells), "10");
        assert_eq!(form.get(FormField::VolumeOneCellMm3), "");
        assert_eq!(form.parse().unwrap(), params);
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(ALL_FIELDS.iter().filter(|f| f.is_required()).count(), 7);
        assert_eq!(FormField::VolumeOneCellMm3.label(), "Volume of One Cell (mm3)");
        assert_eq!(FormField::CapacitanceOneCell.unit(), "F");
    }
}
