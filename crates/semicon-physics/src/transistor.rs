// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Transistor Output Characteristics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Output-characteristic families for BJT and MOSFET.
//!
//! Each family is five curves of the output current against the output
//! voltage, one per evenly spaced value of the control variable.

use serde::{Deserialize, Serialize};

use semicon_types::constants::{DEFAULT_SWEEP_POINTS, EARLY_VOLTAGE, TRANSISTOR_CURVES};
use semicon_types::error::SemiconResult;
use semicon_types::sweep::Sweep;

use crate::checks::{finite, positive};

/// Transistor family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceType {
    #[serde(rename = "BJT")]
    Bjt,
    #[serde(rename = "MOSFET")]
    Mosfet,
}

impl DeviceType {
    /// Case-insensitive tag lookup. `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "BJT" => Some(DeviceType::Bjt),
            "MOSFET" => Some(DeviceType::Mosfet),
            _ => None,
        }
    }
}

/// BJT common-emitter sweep. Base currents are given in µA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BjtParams {
    #[serde(rename = "Ib_min")]
    pub ib_min_ua: f64,
    #[serde(rename = "Ib_max")]
    pub ib_max_ua: f64,
    #[serde(rename = "Vce_min")]
    pub vce_min: f64,
    #[serde(rename = "Vce_max")]
    pub vce_max: f64,
    pub beta: f64,
    pub num_points: usize,
}

impl Default for BjtParams {
    fn default() -> Self {
        BjtParams {
            ib_min_ua: 0.0,
            ib_max_ua: 50.0,
            vce_min: 0.0,
            vce_max: 5.0,
            beta: 100.0,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

/// MOSFET common-source sweep (square-law model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosfetParams {
    #[serde(rename = "Vgs_min")]
    pub vgs_min: f64,
    #[serde(rename = "Vgs_max")]
    pub vgs_max: f64,
    #[serde(rename = "Vds_min")]
    pub vds_min: f64,
    #[serde(rename = "Vds_max")]
    pub vds_max: f64,
    /// Threshold voltage [V]
    #[serde(rename = "Vth")]
    pub vth: f64,
    /// Transconductance parameter [A/V²]
    pub k: f64,
    pub num_points: usize,
}

impl Default for MosfetParams {
    fn default() -> Self {
        MosfetParams {
            vgs_min: 0.0,
            vgs_max: 5.0,
            vds_min: 0.0,
            vds_max: 5.0,
            vth: 0.7,
            k: 1e-3,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

/// Full transistor request: the tag plus both branch parameter sets.
/// Only the branch selected by `device_type` is read.
///
/// `num_points` is shared by both branches and lives here; a flattened
/// struct takes the keys it names, so the first branch would swallow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransistorParams {
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    #[serde(flatten)]
    pub bjt: BjtParams,
    #[serde(flatten)]
    pub mosfet: MosfetParams,
}

fn default_num_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

impl Default for TransistorParams {
    fn default() -> Self {
        TransistorParams {
            device_type: None,
            num_points: DEFAULT_SWEEP_POINTS,
            bjt: BjtParams::default(),
            mosfet: MosfetParams::default(),
        }
    }
}

impl TransistorParams {
    /// Resolved family. Absent or unrecognized tags select MOSFET.
    pub fn resolved_type(&self) -> DeviceType {
        self.device_type
            .as_deref()
            .and_then(DeviceType::from_tag)
            .unwrap_or(DeviceType::Mosfet)
    }

    /// True when a tag was supplied but did not name a known family.
    pub fn has_unrecognized_type(&self) -> bool {
        matches!(self.device_type.as_deref(), Some(tag) if DeviceType::from_tag(tag).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BjtCurve {
    /// Base current [µA]
    #[serde(rename = "Ib")]
    pub ib_ua: f64,
    #[serde(rename = "Vce")]
    pub vce: Vec<f64>,
    #[serde(rename = "Ic")]
    pub ic: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MosfetCurve {
    #[serde(rename = "Vgs")]
    pub vgs: f64,
    #[serde(rename = "Vds")]
    pub vds: Vec<f64>,
    #[serde(rename = "Id")]
    pub id: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BjtFamily {
    pub beta: f64,
    pub curves: Vec<BjtCurve>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MosfetFamily {
    pub threshold_voltage: f64,
    pub transconductance_parameter: f64,
    pub curves: Vec<MosfetCurve>,
}

/// Family result, tagged on the wire by `device_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "device_type")]
pub enum TransistorFamily {
    #[serde(rename = "BJT")]
    Bjt(BjtFamily),
    #[serde(rename = "MOSFET")]
    Mosfet(MosfetFamily),
}

/// Collector current [A] with a linear Early effect.
///
/// `Ic = beta * Ib * (1 + Vce / V_A)`, `V_A = 100 V`.
pub fn bjt_collector_current(ib: f64, vce: f64, beta: f64) -> f64 {
    beta * ib * (1.0 + vce / EARLY_VOLTAGE)
}

/// Drain current [A] of the square-law MOSFET.
///
/// Cutoff for `Vgs <= Vth`; otherwise the triode current up to pinch-off at
/// `Vds = Vgs - Vth` and the plateau `Id_sat = k * (Vgs - Vth)^2 / 2` beyond it.
///
/// The triode parabola peaks at exactly `Id_sat` and falls past pinch-off, so
/// the plateau is taken by region rather than by `min(triode, Id_sat)`.
pub fn mosfet_drain_current(vgs: f64, vds: f64, vth: f64, k: f64) -> f64 {
    let vov = vgs - vth;
    if vov <= 0.0 {
        return 0.0;
    }
    if vds >= vov {
        return 0.5 * k * vov * vov;
    }
    k * (vov * vds - 0.5 * vds * vds)
}

pub fn bjt_family(params: &BjtParams) -> SemiconResult<BjtFamily> {
    let beta = positive("beta", params.beta)?;
    let ib_ua = Sweep::levels("Ib", params.ib_min_ua, params.ib_max_ua, TRANSISTOR_CURVES)?;
    let vce = Sweep::new("Vce", params.vce_min, params.vce_max, params.num_points)?;

    let curves = ib_ua
        .values
        .iter()
        .map(|&ib| {
            let ib_a = ib * 1e-6;
            BjtCurve {
                ib_ua: ib,
                vce: vce.to_vec(),
                ic: vce.map(|v| bjt_collector_current(ib_a, v, beta)),
            }
        })
        .collect();

    Ok(BjtFamily { beta, curves })
}

pub fn mosfet_family(params: &MosfetParams) -> SemiconResult<MosfetFamily> {
    let k = positive("k", params.k)?;
    let vth = finite("Vth", params.vth)?;
    let vgs = Sweep::levels("Vgs", params.vgs_min, params.vgs_max, TRANSISTOR_CURVES)?;
    let vds = Sweep::new("Vds", params.vds_min, params.vds_max, params.num_points)?;

    let curves = vgs
        .values
        .iter()
        .map(|&g| MosfetCurve {
            vgs: g,
            vds: vds.to_vec(),
            id: vds.map(|d| mosfet_drain_current(g, d, vth, k)),
        })
        .collect();

    Ok(MosfetFamily {
        threshold_voltage: vth,
        transconductance_parameter: k,
        curves,
    })
}

/// Dispatch on the resolved device type.
pub fn transistor_characteristics(params: &TransistorParams) -> SemiconResult<TransistorFamily> {
    match params.resolved_type() {
        DeviceType::Bjt => bjt_family(&BjtParams {
            num_points: params.num_points,
            ..params.bjt.clone()
        })
        .map(TransistorFamily::Bjt),
        DeviceType::Mosfet => mosfet_family(&MosfetParams {
            num_points: params.num_points,
            ..params.mosfet.clone()
        })
        .map(TransistorFamily::Mosfet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semicon_types::error::SemiconError;

    #[test]
    fn test_bjt_defaults() {
        let family = bjt_family(&BjtParams::default()).unwrap();
        assert_eq!(family.curves.len(), 5);
        let ibs: Vec<f64> = family.curves.iter().map(|c| c.ib_ua).collect();
        assert_eq!(ibs, vec![0.0, 12.5, 25.0, 37.5, 50.0]);
        let top = &family.curves[4];
        assert_eq!(top.vce.len(), 100);
        assert_eq!(top.ic.len(), 100);
        // Ic(Vce=0) = beta * Ib = 100 * 50 µA = 5 mA
        assert!((top.ic[0] - 5e-3).abs() < 1e-15);
        // Ic(Vce=5) = 5 mA * 1.05
        assert!((top.ic[99] - 5.25e-3).abs() < 1e-12);
    }

    #[test]
    fn test_bjt_zero_base_current_is_off() {
        let family = bjt_family(&BjtParams::default()).unwrap();
        assert!(family.curves[0].ic.iter().all(|&ic| ic == 0.0));
    }

    #[test]
    fn test_bjt_rejects_non_positive_beta() {
        let params = BjtParams {
            beta: 0.0,
            ..BjtParams::default()
        };
        assert!(matches!(
            bjt_family(&params),
            Err(SemiconError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_mosfet_cutoff_and_saturation() {
        let family = mosfet_family(&MosfetParams::default()).unwrap();
        assert_eq!(family.curves.len(), 5);
        // Vgs = 0 is below Vth = 0.7: cut off everywhere.
        assert!(family.curves[0].id.iter().all(|&id| id == 0.0));
        // Vgs = 5: Id_sat = 1e-3 * 4.3^2 / 2
        let top = &family.curves[4];
        assert_eq!(top.vgs, 5.0);
        let id_sat = 0.5e-3 * 4.3 * 4.3;
        let max = top.id.iter().cloned().fold(f64::MIN, f64::max);
        assert!((max - id_sat).abs() < 1e-12, "max={max}, id_sat={id_sat}");
    }

    #[test]
    fn test_mosfet_drain_current_regions() {
        // Triode: Vds < Vov
        let id = mosfet_drain_current(2.0, 0.5, 1.0, 2e-3);
        assert!((id - 2e-3 * (0.5 - 0.125)).abs() < 1e-15);
        // Saturation: Vds > Vov
        let id = mosfet_drain_current(2.0, 3.0, 1.0, 2e-3);
        assert!((id - 1e-3).abs() < 1e-15);
        // Pinch-off point is continuous
        let at = mosfet_drain_current(2.0, 1.0, 1.0, 2e-3);
        assert!((at - 1e-3).abs() < 1e-15);
        // Exactly at threshold
        assert_eq!(mosfet_drain_current(1.0, 3.0, 1.0, 2e-3), 0.0);
    }

    #[test]
    fn test_equal_control_bounds_give_identical_curves() {
        let family = bjt_family(&BjtParams {
            ib_min_ua: 20.0,
            ib_max_ua: 20.0,
            ..BjtParams::default()
        })
        .unwrap();
        assert_eq!(family.curves.len(), 5);
        for curve in &family.curves {
            assert_eq!(curve.ib_ua, 20.0);
            assert_eq!(curve.ic, family.curves[0].ic);
        }

        let family = mosfet_family(&MosfetParams {
            vgs_min: 2.0,
            vgs_max: 2.0,
            ..MosfetParams::default()
        })
        .unwrap();
        assert!(family.curves.iter().all(|c| c.vgs == 2.0));

        // The output axis still needs a real range
        assert!(bjt_family(&BjtParams {
            vce_min: 1.0,
            vce_max: 1.0,
            ..BjtParams::default()
        })
        .is_err());
        assert!(bjt_family(&BjtParams {
            ib_min_ua: 30.0,
            ib_max_ua: 20.0,
            ..BjtParams::default()
        })
        .is_err());
    }

    #[test]
    fn test_device_type_resolution() {
        let mut params = TransistorParams::default();
        assert_eq!(params.resolved_type(), DeviceType::Mosfet);
        assert!(!params.has_unrecognized_type());

        params.device_type = Some("bjt".into());
        assert_eq!(params.resolved_type(), DeviceType::Bjt);

        params.device_type = Some("JFET".into());
        assert_eq!(params.resolved_type(), DeviceType::Mosfet);
        assert!(params.has_unrecognized_type());
    }

    #[test]
    fn test_flattened_wire_format() {
        let params: TransistorParams = serde_json::from_str(
            r#"{"device_type": "BJT", "beta": 200, "Ib_max": 20, "Vth": 1.2}"#,
        )
        .unwrap();
        assert_eq!(params.resolved_type(), DeviceType::Bjt);
        assert_eq!(params.bjt.beta, 200.0);
        assert_eq!(params.bjt.ib_max_ua, 20.0);
        assert_eq!(params.mosfet.vth, 1.2);
        assert_eq!(params.mosfet.k, 1e-3);
        assert_eq!(params.num_points, 100);
    }

    #[test]
    fn test_num_points_reaches_selected_branch() {
        for tag in ["BJT", "MOSFET"] {
            let params: TransistorParams = serde_json::from_value(
                serde_json::json!({"device_type": tag, "num_points": 7}),
            )
            .unwrap();
            let lengths: Vec<usize> = match transistor_characteristics(&params).unwrap() {
                TransistorFamily::Bjt(f) => f.curves.iter().map(|c| c.vce.len()).collect(),
                TransistorFamily::Mosfet(f) => f.curves.iter().map(|c| c.vds.len()).collect(),
            };
            assert_eq!(lengths, vec![7; 5], "{tag}");
        }
    }

    #[test]
    fn test_family_tagged_output() {
        let params = TransistorParams {
            device_type: Some("BJT".into()),
            ..TransistorParams::default()
        };
        let value = serde_json::to_value(transistor_characteristics(&params).unwrap()).unwrap();
        assert_eq!(value["device_type"], "BJT");
        assert_eq!(value["beta"], 100.0);
        assert_eq!(value["curves"].as_array().unwrap().len(), 5);
        assert!(value["curves"][0].get("Vce").is_some());

        let value = serde_json::to_value(
            transistor_characteristics(&TransistorParams::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(value["device_type"], "MOSFET");
        assert_eq!(value["threshold_voltage"], 0.7);
        assert!(value["curves"][0].get("Id").is_some());
    }
}
