use semicon_types::error::{SemiconError, SemiconResult};

/// Require a finite, strictly positive parameter.
pub(crate) fn positive(name: &str, value: f64) -> SemiconResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SemiconError::InvalidParameter(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Require a finite parameter of any sign.
pub(crate) fn finite(name: &str, value: f64) -> SemiconResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SemiconError::InvalidParameter(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive("T", 300.0).unwrap(), 300.0);
        assert!(positive("T", 0.0).is_err());
        assert!(positive("T", -1.0).is_err());
        assert!(positive("T", f64::NAN).is_err());
        assert!(positive("T", f64::INFINITY).is_err());
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite("Vth", -0.4).unwrap(), -0.4);
        assert!(finite("Vth", f64::NEG_INFINITY).is_err());
    }
}
