//! Canned demonstration shapes for the generic chart widget.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use semicon_types::constants::DEFAULT_SWEEP_POINTS;
use semicon_types::error::SemiconResult;
use semicon_types::sweep::Sweep;

/// Plain `(x, y)` series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotShape {
    Sine,
    Cosine,
    Parabola,
    Line,
}

impl PlotShape {
    /// Unrecognized or missing tags draw the identity line.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("sine") => PlotShape::Sine,
            Some("cosine") => PlotShape::Cosine,
            Some("parabola") => PlotShape::Parabola,
            _ => PlotShape::Line,
        }
    }

    pub fn domain(self) -> (f64, f64) {
        match self {
            PlotShape::Sine | PlotShape::Cosine => (0.0, 2.0 * PI),
            PlotShape::Parabola => (-2.0, 2.0),
            PlotShape::Line => (0.0, 1.0),
        }
    }

    pub fn eval(self, x: f64) -> f64 {
        match self {
            PlotShape::Sine => x.sin(),
            PlotShape::Cosine => x.cos(),
            PlotShape::Parabola => x * x,
            PlotShape::Line => x,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    pub plot_type: Option<String>,
    pub num_points: usize,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            plot_type: None,
            num_points: DEFAULT_SWEEP_POINTS,
        }
    }
}

pub fn plot_data(params: &PlotParams) -> SemiconResult<XyData> {
    let shape = PlotShape::from_tag(params.plot_type.as_deref());
    let (lo, hi) = shape.domain();
    let x = Sweep::new("x", lo, hi, params.num_points)?;
    Ok(XyData {
        y: x.map(|v| shape.eval(v)),
        x: x.to_vec(),
    })
}
