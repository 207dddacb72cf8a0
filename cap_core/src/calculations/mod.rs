//! # Bank Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Parameters` - Input parameters (JSON-serializable)
//! - `ResultSet` - Calculation results (JSON-serializable, display-ordered)
//! - `calculate(input) -> Result<ResultSet, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bank`] - Series/parallel supercapacitor bank

pub mod bank;

// Re-export commonly used types
pub use bank::{calculate, calculate_with, CellParameters, ResultSet};
