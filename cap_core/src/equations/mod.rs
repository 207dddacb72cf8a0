//! # Capacitor Bank Equations
//!
//! This module contains the closed-form relations used by the bank calculator.
//! Having equations in one place enables:
//! - Easy verification against datasheet arithmetic
//! - Documentation of assumptions
//! - Unit tests per formula, independent of the calculator
//!
//! ## Modules
//!
//! - [`geometry`] - Cylindrical cell volume
//! - [`bank`] - Series/parallel capacitance, energy, charge, discharge time
//!
//! ## Assumptions
//!
//! - All cells in the bank are identical
//! - Ideal capacitors: no ESR, no leakage, no self-discharge
//! - Constant-current discharge

pub mod bank;
pub mod geometry;

pub use bank::{
    bank_voltage_v,
    discharge_time_s,
    series_parallel_capacitance_f,
    stored_charge_c,
    stored_energy_j,
};

pub use geometry::cylinder_volume_mm3;
