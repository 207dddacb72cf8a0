//! # cap_core - Supercapacitor Bank Calculation Engine
//!
//! `cap_core` derives the electrical, mechanical and energy figures of a
//! supercapacitor bank from the ratings of a single cell. All inputs and
//! outputs are JSON-serializable so the engine can sit behind a terminal, a
//! GUI or a web form alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Ordered Output**: Results iterate and serialize in a fixed display order
//!
//! ## Quick Start
//!
//! ```rust
//! use cap_core::form::{CellForm, FormField};
//! use cap_core::report::{render_table, report_rows};
//! use cap_core::settings::CalcSettings;
//!
//! let mut form = CellForm::default();
//! for (field, text) in [
//!     (FormField::NumCells, "10"),
//!     (FormField::NumCircuits, "1"),
//!     (FormField::CapacitanceOneCell, "3000"),
//!     (FormField::MaxVoltageOneCell, "2.7"),
//!     (FormField::MinVoltageOneCell, "1.35"),
//!     (FormField::CurrentDraw, "5"),
//!     (FormField::MassOneCell, "20"),
//!     (FormField::DiameterOneCell, "30"),
//!     (FormField::HeightOneCell, "60"),
//! ] {
//!     form.set(field, text);
//! }
//!
//! let settings = CalcSettings::default();
//! let result = form.calculate(&settings).unwrap();
//! println!("{}", render_table(&report_rows(&result, &settings)));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The bank calculator
//! - [`equations`] - Closed-form formulas used by the calculator
//! - [`metrics`] - Output keys, units and display order
//! - [`form`] - Free-text input boundary
//! - [`report`] - Formatted result rows and tables
//! - [`settings`] - Precision and domain policy
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod form;
pub mod metrics;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with, CellParameters, ResultSet};
pub use errors::{CalcError, CalcResult};
pub use form::{CellForm, FormField};
pub use metrics::{Metric, ALL_METRICS};
pub use settings::{CalcSettings, DomainPolicy};
