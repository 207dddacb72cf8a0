//! # Cell Geometry Formulas
//!
//! Volume of the cylindrical cell body. Used when a datasheet gives the cell
//! diameter and height but no volume.

use std::f64::consts::PI;

/// Calculate the volume of a cylindrical cell
///
/// ```text
///      ___
///    /  d  \
///   |‾‾‾‾‾‾‾|
///   |       | h
///   |       |
///    \_____/
/// ```
///
/// # Formula
/// V = π × (d/2)² × h
///
/// # Arguments
/// * `diameter_mm` - Cell diameter (mm)
/// * `height_mm` - Cell height (mm)
///
/// # Returns
/// Volume in mm³
///
/// # Example
/// ```rust
/// use cap_core::equations::geometry::cylinder_volume_mm3;
///
/// // 30 mm x 60 mm cell
/// let v = cylinder_volume_mm3(30.0, 60.0);
/// assert!((v - 42_411.5).abs() < 0.1);
/// ```
#[inline]
pub fn cylinder_volume_mm3(diameter_mm: f64, height_mm: f64) -> f64 {
    let radius = diameter_mm / 2.0;
    PI * radius.powi(2) * height_mm
}
