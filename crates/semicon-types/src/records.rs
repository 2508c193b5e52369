// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Catalog Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Material class of a catalog entry, also the material selector of the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Semiconductor,
    Metal,
    Insulator,
}

/// Device class of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    Diode,
    Transistor,
    IntegratedCircuit,
}

/// Bulk properties of a reference material at room temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRecord {
    pub name: &'static str,
    /// Label shown by the Chinese-language pages, e.g. `硅(Si)`.
    pub local_name: &'static str,
    #[serde(rename = "type")]
    pub category: MaterialCategory,
    pub band_gap: f64,            // eV
    pub electron_mobility: f64,   // cm²/V·s
    pub hole_mobility: f64,       // cm²/V·s
    pub dielectric_constant: f64, // relative permittivity
    pub density: f64,             // g/cm³
    pub melting_point: f64,       // K
    pub lattice_constant: f64,    // Å
}

/// Nominal ratings of a reference device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub name: &'static str,
    pub local_name: &'static str,
    #[serde(rename = "type")]
    pub category: DeviceCategory,
    pub description: &'static str,
    pub operating_voltage: f64, // V
    pub max_current: f64,       // A
    pub switching_speed: f64,   // Hz
    pub power_consumption: f64, // W
    pub applications: &'static [&'static str],
}
