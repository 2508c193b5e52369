// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Band Theory
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fermi-Dirac occupancy, schematic band diagrams and intrinsic carrier
//! concentration versus temperature.

use serde::{Deserialize, Serialize};

use semicon_types::constants::DEFAULT_SWEEP_POINTS;
use semicon_types::error::{SemiconError, SemiconResult};
use semicon_types::records::MaterialCategory;
use semicon_types::sweep::Sweep;

use crate::checks::finite;
use crate::material::intrinsic_concentration;
use crate::plot::XyData;

// ── Fermi-Dirac ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FermiParams {
    /// Fermi level [eV]
    #[serde(rename = "Ef")]
    pub ef: f64,
    /// Thermal energy [eV], 0.025 is room temperature
    #[serde(rename = "kT")]
    pub kt: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub num_points: usize,
}

impl Default for FermiParams {
    fn default() -> Self {
        FermiParams {
            ef: 0.0,
            kt: 0.025,
            x_min: -0.5,
            x_max: 0.5,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

/// Occupation probability `f(E) = 1 / (1 + exp((E - Ef) / kT))`.
///
/// Saturates to 0 when the exponential overflows.
pub fn fermi_dirac(e: f64, ef: f64, kt: f64) -> f64 {
    1.0 / (1.0 + ((e - ef) / kt).exp())
}

pub fn fermi_function(params: &FermiParams) -> SemiconResult<XyData> {
    let ef = finite("Ef", params.ef)?;
    if !(params.kt.is_finite() && params.kt > 0.0) {
        return Err(SemiconError::UndefinedMath(format!(
            "kT must be positive, got {}; the distribution is undefined",
            params.kt
        )));
    }
    let energy = Sweep::new("x", params.x_min, params.x_max, params.num_points)?;
    Ok(XyData {
        y: energy.map(|e| fermi_dirac(e, ef, params.kt)),
        x: energy.to_vec(),
    })
}

// ── Band structure ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandStructureParams {
    pub material_type: MaterialCategory,
    /// Band gap [eV], silicon by default
    #[serde(rename = "Eg")]
    pub eg: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub num_points: usize,
}

impl Default for BandStructureParams {
    fn default() -> Self {
        BandStructureParams {
            material_type: MaterialCategory::Semiconductor,
            eg: 1.12,
            x_min: -5.0,
            x_max: 5.0,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandStructure {
    pub k: Vec<f64>,
    pub valence_band: Vec<f64>,
    pub conduction_band: Vec<f64>,
    pub material_type: MaterialCategory,
    pub band_gap: f64,
}

/// Schematic band edges over wavevector.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BandModel {
    /// `Ev = -Eg/2 - a sin k`, `Ec = Eg/2 + a sin k`
    Gapped { half_gap: f64, ripple: f64 },
    /// Overlapping linear bands, `Ev = s k`, `Ec = s k + offset`
    Overlapping { slope: f64, offset: f64 },
}

impl BandModel {
    fn for_material(material: MaterialCategory, eg: f64) -> Self {
        match material {
            MaterialCategory::Semiconductor => BandModel::Gapped {
                half_gap: eg / 2.0,
                ripple: 0.1,
            },
            MaterialCategory::Insulator => BandModel::Gapped {
                half_gap: eg / 2.0,
                ripple: 0.05,
            },
            MaterialCategory::Metal => BandModel::Overlapping {
                slope: 0.2,
                offset: 0.5,
            },
        }
    }

    fn valence(self, k: f64) -> f64 {
        match self {
            BandModel::Gapped { half_gap, ripple } => -half_gap - ripple * k.sin(),
            BandModel::Overlapping { slope, .. } => slope * k,
        }
    }

    fn conduction(self, k: f64) -> f64 {
        match self {
            BandModel::Gapped { half_gap, ripple } => half_gap + ripple * k.sin(),
            BandModel::Overlapping { slope, offset } => slope * k + offset,
        }
    }
}

pub fn band_structure(params: &BandStructureParams) -> SemiconResult<BandStructure> {
    let eg = finite("Eg", params.eg)?;
    let k = Sweep::new("x", params.x_min, params.x_max, params.num_points)?;
    let model = BandModel::for_material(params.material_type, eg);
    Ok(BandStructure {
        valence_band: k.map(|q| model.valence(q)),
        conduction_band: k.map(|q| model.conduction(q)),
        k: k.to_vec(),
        material_type: params.material_type,
        band_gap: eg,
    })
}

// ── Carrier concentration ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierParams {
    #[serde(rename = "Eg")]
    pub eg: f64,
    /// [K]
    #[serde(rename = "T_min")]
    pub t_min: f64,
    /// [K]
    #[serde(rename = "T_max")]
    pub t_max: f64,
    pub num_points: usize,
}

impl Default for CarrierParams {
    fn default() -> Self {
        CarrierParams {
            eg: 1.12,
            t_min: 100.0,
            t_max: 500.0,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierConcentration {
    pub temperature: Vec<f64>,
    pub concentration: Vec<f64>,
    pub band_gap: f64,
}

pub fn carrier_concentration(params: &CarrierParams) -> SemiconResult<CarrierConcentration> {
    let eg = finite("Eg", params.eg)?;
    if params.t_min <= 0.0 {
        return Err(SemiconError::UndefinedMath(format!(
            "T_min must be above absolute zero, got {} K",
            params.t_min
        )));
    }
    let temperature = Sweep::new("T", params.t_min, params.t_max, params.num_points)?;
    let concentration = temperature.map(|t| intrinsic_concentration(eg, t));
    if let Some(idx) = concentration.iter().position(|n| !n.is_finite()) {
        return Err(SemiconError::Overflow(format!(
            "intrinsic concentration overflows at T={} K for Eg={eg} eV",
            temperature.values[idx]
        )));
    }
    Ok(CarrierConcentration {
        temperature: temperature.to_vec(),
        concentration,
        band_gap: eg,
    })
}
