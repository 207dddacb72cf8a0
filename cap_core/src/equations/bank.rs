//! # Capacitor Bank Formulas
//!
//! Closed-form relations for a bank of identical cells arranged as parallel
//! circuits of series-connected cells.
//!
//! ## Notation
//!
//! - `C` = Capacitance of one cell (F)
//! - `n` = Cells in series per circuit
//! - `p` = Parallel circuits
//! - `V0` = Bank voltage at full charge
//! - `V1` = Bank voltage at cutoff
//! - `I` = Constant discharge current (A)
//!
//! Division by zero is not guarded here. A zero divisor yields an IEEE
//! infinity or NaN, and callers decide whether to accept it.

/// Capacitance of the whole bank
///
/// Series cells divide the capacitance, parallel circuits add it.
///
/// # Formula
/// C_total = (C / n) × p
///
/// # Example
/// ```rust
/// use cap_core::equations::bank::series_parallel_capacitance_f;
///
/// // Ten 3000 F cells in series, one circuit
/// assert_eq!(series_parallel_capacitance_f(3000.0, 10.0, 1.0), 300.0);
/// ```
#[inline]
pub fn series_parallel_capacitance_f(cell_capacitance_f: f64, num_cells: f64, num_circuits: f64) -> f64 {
    (cell_capacitance_f / num_cells) * num_circuits
}

/// Bank voltage for a series string
///
/// # Formula
/// V = V_cell × n
#[inline]
pub fn bank_voltage_v(cell_voltage_v: f64, num_cells: f64) -> f64 {
    cell_voltage_v * num_cells
}

/// Usable energy released between two voltages
///
/// # Formula
/// E = ½ × C × (V0² − V1²)
///
/// # Example
/// ```rust
/// use cap_core::equations::bank::stored_energy_j;
///
/// let e = stored_energy_j(300.0, 27.0, 13.5);
/// assert!((e - 82_012.5).abs() < 1e-9);
/// ```
#[inline]
pub fn stored_energy_j(capacitance_f: f64, v0: f64, v1: f64) -> f64 {
    0.5 * capacitance_f * (v0.powi(2) - v1.powi(2))
}

/// Charge held at a given voltage
///
/// # Formula
/// Q = C × V
#[inline]
pub fn stored_charge_c(capacitance_f: f64, voltage_v: f64) -> f64 {
    capacitance_f * voltage_v
}

/// Time to drain a charge at constant current
///
/// # Formula
/// t = Q / I
///
/// A zero current gives `+inf` for a positive charge.
#[inline]
pub fn discharge_time_s(charge_c: f64, current_a: f64) -> f64 {
    charge_c / current_a
}
