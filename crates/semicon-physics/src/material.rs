// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Material Property Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Temperature-dependent resistivity for the three material classes.
//!
//! These are 0D teaching models, one scalar evaluation per request.

use serde::{Deserialize, Serialize};

use semicon_types::constants::{
    INSULATOR_RHO0, K_BOLTZMANN_EV, MOBILITY_SUM_SI, NI_PREFACTOR, Q_ELECTRON, T_ROOM,
};
use semicon_types::error::{SemiconError, SemiconResult};
use semicon_types::records::MaterialCategory;

use crate::checks::{finite, positive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParams {
    pub material_type: MaterialCategory,
    /// [K]
    pub temperature: f64,
    /// Semiconductor band gap [eV]
    pub band_gap: f64,
    /// Metal resistivity at 300 K [Ω·cm]
    #[serde(rename = "resistivity_300K")]
    pub resistivity_300k: f64,
    /// Metal temperature coefficient of resistance [1/K]
    pub temperature_coefficient: f64,
    /// Insulator activation energy [eV]
    pub activation_energy: f64,
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams {
            material_type: MaterialCategory::Semiconductor,
            temperature: T_ROOM,
            band_gap: 1.12,
            resistivity_300k: 1.7e-6,
            temperature_coefficient: 0.004,
            activation_energy: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialProperties {
    pub material_type: MaterialCategory,
    pub temperature: f64,
    /// Only reported for semiconductors [cm⁻³]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intrinsic_concentration: Option<f64>,
    /// [S/cm]
    pub conductivity: f64,
    /// [Ω·cm]
    pub resistivity: f64,
}

/// Intrinsic carrier concentration [cm⁻³].
///
/// `ni = 1e19 * exp(-Eg / (2 kB T))` with a temperature-independent prefactor.
pub fn intrinsic_concentration(band_gap: f64, temperature: f64) -> f64 {
    NI_PREFACTOR * (-band_gap / (2.0 * K_BOLTZMANN_EV * temperature)).exp()
}

/// Linear metal resistivity model [Ω·cm].
///
/// `rho(T) = rho_300 * (1 + alpha * (T - 300))`.
pub fn metal_resistivity(rho_300k: f64, alpha: f64, temperature: f64) -> f64 {
    rho_300k * (1.0 + alpha * (temperature - T_ROOM))
}

/// Activated insulator resistivity [Ω·cm].
///
/// `rho(T) = 1e14 * exp(Ea / (kB T))`.
pub fn insulator_resistivity(activation_energy: f64, temperature: f64) -> f64 {
    INSULATOR_RHO0 * (activation_energy / (K_BOLTZMANN_EV * temperature)).exp()
}

fn semiconductor(params: &MaterialParams, temperature: f64) -> SemiconResult<MaterialProperties> {
    let band_gap = finite("band_gap", params.band_gap)?;
    let ni = intrinsic_concentration(band_gap, temperature);
    if !ni.is_finite() {
        return Err(SemiconError::Overflow(format!(
            "intrinsic concentration overflows for Eg={band_gap} eV at T={temperature} K"
        )));
    }
    // Silicon mobilities are applied regardless of band gap.
    let conductivity = ni * Q_ELECTRON * MOBILITY_SUM_SI * 1e-4;
    if conductivity == 0.0 {
        return Err(SemiconError::UndefinedMath(format!(
            "conductivity underflows to zero for Eg={band_gap} eV at T={temperature} K; \
             resistivity is undefined"
        )));
    }
    Ok(MaterialProperties {
        material_type: MaterialCategory::Semiconductor,
        temperature,
        intrinsic_concentration: Some(ni),
        conductivity,
        resistivity: 1.0 / conductivity,
    })
}

fn metal(params: &MaterialParams, temperature: f64) -> SemiconResult<MaterialProperties> {
    let rho_300k = finite("resistivity_300K", params.resistivity_300k)?;
    let alpha = finite("temperature_coefficient", params.temperature_coefficient)?;
    let resistivity = metal_resistivity(rho_300k, alpha, temperature);
    if resistivity == 0.0 {
        return Err(SemiconError::UndefinedMath(format!(
            "resistivity is zero at T={temperature} K; conductivity is a division by zero"
        )));
    }
    Ok(MaterialProperties {
        material_type: MaterialCategory::Metal,
        temperature,
        intrinsic_concentration: None,
        conductivity: 1.0 / resistivity,
        resistivity,
    })
}

fn insulator(params: &MaterialParams, temperature: f64) -> SemiconResult<MaterialProperties> {
    let activation_energy = finite("activation_energy", params.activation_energy)?;
    let resistivity = insulator_resistivity(activation_energy, temperature);
    if !resistivity.is_finite() {
        return Err(SemiconError::Overflow(format!(
            "insulator resistivity overflows for Ea={activation_energy} eV at T={temperature} K"
        )));
    }
    if resistivity == 0.0 {
        return Err(SemiconError::UndefinedMath(format!(
            "resistivity underflows to zero for Ea={activation_energy} eV at T={temperature} K"
        )));
    }
    Ok(MaterialProperties {
        material_type: MaterialCategory::Insulator,
        temperature,
        intrinsic_concentration: None,
        conductivity: 1.0 / resistivity,
        resistivity,
    })
}

/// Evaluate the model selected by `material_type` at one temperature.
pub fn material_properties(params: &MaterialParams) -> SemiconResult<MaterialProperties> {
    let temperature = positive("temperature", params.temperature)?;
    match params.material_type {
        MaterialCategory::Semiconductor => semiconductor(params, temperature),
        MaterialCategory::Metal => metal(params, temperature),
        MaterialCategory::Insulator => insulator(params, temperature),
    }
}
