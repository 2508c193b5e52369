// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Diode Characteristics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PN-junction I-V curve from the Shockley diode equation.

use serde::{Deserialize, Serialize};

use semicon_types::constants::{DEFAULT_SWEEP_POINTS, K_BOLTZMANN, Q_ELECTRON, T_ROOM};
use semicon_types::error::{SemiconError, SemiconResult};
use semicon_types::sweep::Sweep;

use crate::checks::positive;

/// Diode sweep parameters. Every key is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiodeParams {
    /// Reverse saturation current [A] (default: 1e-12)
    #[serde(rename = "Is", default = "default_is")]
    pub is_sat: f64,
    /// Ideality factor (default: 1)
    #[serde(default = "default_ideality")]
    pub n: f64,
    /// Sweep start [V] (default: 0)
    #[serde(rename = "V_min", default)]
    pub v_min: f64,
    /// Sweep end [V] (default: 0.8)
    #[serde(rename = "V_max", default = "default_v_max")]
    pub v_max: f64,
    /// Junction temperature [K] (default: 300)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

fn default_is() -> f64 {
    1e-12
}
fn default_ideality() -> f64 {
    1.0
}
fn default_v_max() -> f64 {
    0.8
}
fn default_temperature() -> f64 {
    T_ROOM
}
fn default_num_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

impl Default for DiodeParams {
    fn default() -> Self {
        DiodeParams {
            is_sat: default_is(),
            n: default_ideality(),
            v_min: 0.0,
            v_max: default_v_max(),
            temperature: default_temperature(),
            num_points: default_num_points(),
        }
    }
}

/// Sampled I-V characteristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiodeCurve {
    pub voltage: Vec<f64>,
    pub current: Vec<f64>,
    pub temperature: f64,
    pub thermal_voltage: f64,
}

/// Thermal voltage [V].
///
/// `Vt = k * T / q`.
pub fn thermal_voltage(temperature: f64) -> f64 {
    K_BOLTZMANN * temperature / Q_ELECTRON
}

/// Shockley diode current [A].
///
/// `I = Is * (exp(V / (n * Vt)) - 1)`. Returns +inf when the exponential overflows.
pub fn shockley_current(v: f64, is_sat: f64, n_vt: f64) -> f64 {
    is_sat * (v / n_vt).exp_m1()
}

/// Evaluate the diode I-V curve over `[V_min, V_max]`.
pub fn diode_characteristics(params: &DiodeParams) -> SemiconResult<DiodeCurve> {
    let is_sat = positive("Is", params.is_sat)?;
    let n = positive("n", params.n)?;
    let temperature = positive("temperature", params.temperature)?;
    let sweep = Sweep::new("V", params.v_min, params.v_max, params.num_points)?;

    let vt = thermal_voltage(temperature);
    let n_vt = n * vt;
    if n_vt == 0.0 || !n_vt.is_finite() {
        return Err(SemiconError::InvalidParameter(format!(
            "n * Vt is degenerate ({n_vt:e} V) for n={n}, T={temperature} K"
        )));
    }

    let current = sweep.map(|v| shockley_current(v, is_sat, n_vt));
    if let Some(idx) = current.iter().position(|i| !i.is_finite()) {
        return Err(SemiconError::Overflow(format!(
            "diode current overflows at V={} V (V/(n*Vt) = {:.1})",
            sweep.values[idx],
            sweep.values[idx] / n_vt
        )));
    }

    Ok(DiodeCurve {
        voltage: sweep.to_vec(),
        current,
        temperature,
        thermal_voltage: vt,
    })
}
