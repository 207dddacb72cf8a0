//! # Metric Registry
//!
//! Central registry of the twenty derived quantities reported for a bank.
//! Each metric has a stable string key, a display unit, a category, and the
//! formula it is computed from.
//!
//! The registry fixes the display order: [`ALL_METRICS`] lists the metrics
//! exactly in the order the result table shows them, and every ordered view of
//! a [`ResultSet`](crate::calculations::ResultSet) follows it.
//!
//! ## Usage
//!
//! ```rust
//! use cap_core::metrics::{unit_for_key, Metric, ALL_METRICS};
//!
//! assert_eq!(ALL_METRICS[0], Metric::TotalCapacitance);
//! assert_eq!(Metric::ChargeAh.key(), "charge_Ah");
//! assert_eq!(unit_for_key("total_volume_mm3"), Some("mm³"));
//! assert_eq!(Metric::from_key("V0"), Some(Metric::V0));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Metric Categories
// ============================================================================

/// Groups of related metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    /// Capacitance and bank voltages
    Electrical,
    /// Mass and volume
    Mechanical,
    /// Stored energy and energy densities
    Energy,
    /// Stored charge
    Charge,
    /// Energy scaled by current draw
    Power,
    /// Constant-current discharge time
    DischargeTime,
}

impl MetricCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricCategory::Electrical => "Electrical",
            MetricCategory::Mechanical => "Mechanical",
            MetricCategory::Energy => "Energy",
            MetricCategory::Charge => "Charge",
            MetricCategory::Power => "Power",
            MetricCategory::DischargeTime => "Constant Current Discharge Time",
        }
    }
}

// ============================================================================
// Metric Enum
// ============================================================================

/// Every quantity the calculator reports.
///
/// Serializes as its string key (e.g. `"charge_mAh"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "total_capacitance")]
    TotalCapacitance,
    #[serde(rename = "V0")]
    V0,
    #[serde(rename = "V1")]
    V1,
    #[serde(rename = "total_mass")]
    TotalMass,
    #[serde(rename = "total_volume_mm3")]
    TotalVolumeMm3,
    #[serde(rename = "total_volume_ml")]
    TotalVolumeMl,
    #[serde(rename = "energy_potential")]
    EnergyPotential,
    #[serde(rename = "energy_density")]
    EnergyDensity,
    #[serde(rename = "volumetric_energy")]
    VolumetricEnergy,
    #[serde(rename = "charge")]
    Charge,
    #[serde(rename = "charge_Ah")]
    ChargeAh,
    #[serde(rename = "charge_mAh")]
    ChargeMah,
    #[serde(rename = "power_density")]
    PowerDensity,
    #[serde(rename = "volumetric_power_density")]
    VolumetricPowerDensity,
    #[serde(rename = "power_potential")]
    PowerPotential,
    #[serde(rename = "power_potential_mWh")]
    PowerPotentialMwh,
    #[serde(rename = "discharge_time_seconds")]
    DischargeTimeSeconds,
    #[serde(rename = "discharge_time_minutes")]
    DischargeTimeMinutes,
    #[serde(rename = "discharge_time_hours")]
    DischargeTimeHours,
    #[serde(rename = "discharge_time_days")]
    DischargeTimeDays,
}

/// All metrics in display order.
pub const ALL_METRICS: [Metric; 20] = [
    Metric::TotalCapacitance,
    Metric::V0,
    Metric::V1,
    Metric::TotalMass,
    Metric::TotalVolumeMm3,
    Metric::TotalVolumeMl,
    Metric::EnergyPotential,
    Metric::EnergyDensity,
    Metric::VolumetricEnergy,
    Metric::Charge,
    Metric::ChargeAh,
    Metric::ChargeMah,
    Metric::PowerDensity,
    Metric::VolumetricPowerDensity,
    Metric::PowerPotential,
    Metric::PowerPotentialMwh,
    Metric::DischargeTimeSeconds,
    Metric::DischargeTimeMinutes,
    Metric::DischargeTimeHours,
    Metric::DischargeTimeDays,
];

static BY_KEY: Lazy<HashMap<&'static str, Metric>> =
    Lazy::new(|| ALL_METRICS.iter().map(|m| (m.key(), *m)).collect());

impl Metric {
    /// Stable string key, as used in JSON output and the result table
    pub fn key(&self) -> &'static str {
        match self {
            Metric::TotalCapacitance => "total_capacitance",
            Metric::V0 => "V0",
            Metric::V1 => "V1",
            Metric::TotalMass => "total_mass",
            Metric::TotalVolumeMm3 => "total_volume_mm3",
            Metric::TotalVolumeMl => "total_volume_ml",
            Metric::EnergyPotential => "energy_potential",
            Metric::EnergyDensity => "energy_density",
            Metric::VolumetricEnergy => "volumetric_energy",
            Metric::Charge => "charge",
            Metric::ChargeAh => "charge_Ah",
            Metric::ChargeMah => "charge_mAh",
            Metric::PowerDensity => "power_density",
            Metric::VolumetricPowerDensity => "volumetric_power_density",
            Metric::PowerPotential => "power_potential",
            Metric::PowerPotentialMwh => "power_potential_mWh",
            Metric::DischargeTimeSeconds => "discharge_time_seconds",
            Metric::DischargeTimeMinutes => "discharge_time_minutes",
            Metric::DischargeTimeHours => "discharge_time_hours",
            Metric::DischargeTimeDays => "discharge_time_days",
        }
    }

    /// Display unit
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::TotalCapacitance => "F",
            Metric::V0 | Metric::V1 => "V",
            Metric::TotalMass => "g",
            Metric::TotalVolumeMm3 => "mm³",
            Metric::TotalVolumeMl => "ml",
            Metric::EnergyPotential => "J",
            Metric::EnergyDensity => "J/g",
            Metric::VolumetricEnergy => "J/ml",
            Metric::Charge => "C",
            Metric::ChargeAh => "Ah",
            Metric::ChargeMah => "mAh",
            Metric::PowerDensity => "W/g",
            Metric::VolumetricPowerDensity => "W/ml",
            Metric::PowerPotential => "W",
            Metric::PowerPotentialMwh => "mWh",
            Metric::DischargeTimeSeconds => "s",
            Metric::DischargeTimeMinutes => "min",
            Metric::DischargeTimeHours => "h",
            Metric::DischargeTimeDays => "d",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Metric::TotalCapacitance => "Capacitance of the whole bank",
            Metric::V0 => "Bank voltage at full charge",
            Metric::V1 => "Bank voltage at cutoff",
            Metric::TotalMass => "Mass of all cells in one string",
            Metric::TotalVolumeMm3 => "Volume of all cells in one string",
            Metric::TotalVolumeMl => "Volume of all cells in one string",
            Metric::EnergyPotential => "Energy released from V0 down to V1",
            Metric::EnergyDensity => "Energy per gram",
            Metric::VolumetricEnergy => "Energy per milliliter",
            Metric::Charge => "Charge held at V0",
            Metric::ChargeAh => "Charge held at V0",
            Metric::ChargeMah => "Charge held at V0",
            Metric::PowerDensity => "Energy density scaled by current draw",
            Metric::VolumetricPowerDensity => "Volumetric energy scaled by current draw",
            Metric::PowerPotential => "Energy scaled by current draw",
            Metric::PowerPotentialMwh => "Energy scaled by current draw",
            Metric::DischargeTimeSeconds => "Time to drain the charge at constant current",
            Metric::DischargeTimeMinutes => "Time to drain the charge at constant current",
            Metric::DischargeTimeHours => "Time to drain the charge at constant current",
            Metric::DischargeTimeDays => "Time to drain the charge at constant current",
        }
    }

    /// Formula in plain text
    pub fn formula(&self) -> &'static str {
        match self {
            Metric::TotalCapacitance => "(C_cell / n_cells) * n_circuits",
            Metric::V0 => "V_max_cell * n_cells",
            Metric::V1 => "V_min_cell * n_cells",
            Metric::TotalMass => "m_cell * n_cells",
            Metric::TotalVolumeMm3 => "V_cell * n_cells",
            Metric::TotalVolumeMl => "total_volume_mm3 / 1000",
            Metric::EnergyPotential => "0.5 * total_capacitance * (V0^2 - V1^2)",
            Metric::EnergyDensity => "energy_potential / total_mass",
            Metric::VolumetricEnergy => "energy_potential / total_volume_ml",
            Metric::Charge => "total_capacitance * V0",
            Metric::ChargeAh => "charge / 3600",
            Metric::ChargeMah => "charge_Ah * 1000",
            Metric::PowerDensity => "energy_density * I",
            Metric::VolumetricPowerDensity => "volumetric_energy * I",
            Metric::PowerPotential => "energy_potential * I",
            Metric::PowerPotentialMwh => "power_potential * 1000",
            Metric::DischargeTimeSeconds => "charge / I",
            Metric::DischargeTimeMinutes => "discharge_time_seconds / 60",
            Metric::DischargeTimeHours => "discharge_time_minutes / 60",
            Metric::DischargeTimeDays => "discharge_time_hours / 24",
        }
    }

    /// Category this metric is grouped under
    pub fn category(&self) -> MetricCategory {
        match self {
            Metric::TotalCapacitance | Metric::V0 | Metric::V1 => MetricCategory::Electrical,
            Metric::TotalMass | Metric::TotalVolumeMm3 | Metric::TotalVolumeMl => MetricCategory::Mechanical,
            Metric::EnergyPotential | Metric::EnergyDensity | Metric::VolumetricEnergy => MetricCategory::Energy,
            Metric::Charge | Metric::ChargeAh | Metric::ChargeMah => MetricCategory::Charge,
            Metric::PowerDensity
            | Metric::VolumetricPowerDensity
            | Metric::PowerPotential
            | Metric::PowerPotentialMwh => MetricCategory::Power,
            Metric::DischargeTimeSeconds
            | Metric::DischargeTimeMinutes
            | Metric::DischargeTimeHours
            | Metric::DischargeTimeDays => MetricCategory::DischargeTime,
        }
    }

    /// Position in the display order
    pub fn display_index(&self) -> usize {
        // Discriminants follow declaration order, which matches ALL_METRICS
        *self as usize
    }

    /// Look up a metric by its string key (case-sensitive)
    pub fn from_key(key: &str) -> Option<Metric> {
        BY_KEY.get(key).copied()
    }
}

/// Display unit for a string key, `None` for unknown keys
pub fn unit_for_key(key: &str) -> Option<&'static str> {
    Metric::from_key(key).map(|m| m.unit())
}
