// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

use crate::constants::MAX_SWEEP_POINTS;
use crate::error::{SemiconError, SemiconResult};

/// Evenly spaced 1D sweep of one independent variable.
/// Both endpoints are included: values[0] == min, values[n-1] == max.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub values: Array1<f64>,
}

impl Sweep {
    /// Build a sweep over `[min, max]` with `n` points.
    ///
    /// `label` names the swept quantity in error messages (e.g. `"V"`).
    /// Requires finite bounds and span, `min < max` and
    /// `2 <= n <= MAX_SWEEP_POINTS`.
    pub fn new(label: &str, min: f64, max: f64, n: usize) -> SemiconResult<Self> {
        Self::check_bounds(label, min, max)?;
        if min >= max {
            return Err(SemiconError::InvalidParameter(format!(
                "{label}_min must be less than {label}_max, got {min} >= {max}"
            )));
        }
        Self::build(label, min, max, n)
    }

    /// Control levels for a curve family: like [`Sweep::new`] but `min == max`
    /// is allowed and yields `n` identical levels with `step == 0`.
    pub fn levels(label: &str, min: f64, max: f64, n: usize) -> SemiconResult<Self> {
        Self::check_bounds(label, min, max)?;
        if min > max {
            return Err(SemiconError::InvalidParameter(format!(
                "{label}_min must not exceed {label}_max, got {min} > {max}"
            )));
        }
        if min == max {
            Self::check_count(n)?;
            return Ok(Sweep {
                n,
                min,
                max,
                step: 0.0,
                values: Array1::from_elem(n, min),
            });
        }
        Self::build(label, min, max, n)
    }

    fn check_bounds(label: &str, min: f64, max: f64) -> SemiconResult<()> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SemiconError::InvalidParameter(format!(
                "{label} sweep bounds must be finite, got [{min}, {max}]"
            )));
        }
        // Finite bounds can still have a span beyond f64::MAX.
        if !(max - min).is_finite() {
            return Err(SemiconError::InvalidParameter(format!(
                "{label} sweep span [{min}, {max}] exceeds the floating-point range"
            )));
        }
        Ok(())
    }

    fn check_count(n: usize) -> SemiconResult<()> {
        if n < 2 {
            return Err(SemiconError::InvalidParameter(format!(
                "num_points must be at least 2, got {n}"
            )));
        }
        if n > MAX_SWEEP_POINTS {
            return Err(SemiconError::InvalidParameter(format!(
                "num_points must not exceed {MAX_SWEEP_POINTS}, got {n}"
            )));
        }
        Ok(())
    }

    fn build(label: &str, min: f64, max: f64, n: usize) -> SemiconResult<Self> {
        Self::check_count(n)?;

        let step = (max - min) / (n - 1) as f64;
        if min + step <= min {
            return Err(SemiconError::InvalidParameter(format!(
                "{label} sweep [{min}, {max}] is too narrow for {n} points"
            )));
        }

        let mut values = Array1::linspace(min, max, n);
        // linspace accumulates rounding on the last sample
        values[n - 1] = max;

        Ok(Sweep {
            n,
            min,
            max,
            step,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Apply `f` elementwise, returning a plain vector for serialization.
    pub fn map<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.values.mapv(f).to_vec()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}
