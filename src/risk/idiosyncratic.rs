//! Idiosyncratic risk: V_raw and the published V_i(t) scale

/// Offset subtracted from V_raw before clamping onto the display scale
pub const IDIOSYNCRATIC_OFFSET: f64 = 50.0;
/// No profile is shown as risk-free
pub const IDIOSYNCRATIC_MIN: f64 = 5.0;
pub const IDIOSYNCRATIC_MAX: f64 = 100.0;

/// V_raw = FHC * (w_CR * FCR + w_US * FUS)
pub fn raw_idiosyncratic_score(fhc: f64, fcr: f64, fus: f64, w_cr: f64, w_us: f64) -> f64 {
    fhc * (w_cr * fcr + w_us * fus)
}

/// V_i(t) = clamp(V_raw - 50, 5, 100)
///
/// A display normalization, not a probability.
pub fn idiosyncratic_risk(v_raw: f64) -> f64 {
    (v_raw - IDIOSYNCRATIC_OFFSET).clamp(IDIOSYNCRATIC_MIN, IDIOSYNCRATIC_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_profile_hits_floor() {
        let v_raw = raw_idiosyncratic_score(1.0, 1.0, 1.0, 0.4, 0.6);
        assert!((v_raw - 1.0).abs() < 1e-12);
        assert_eq!(idiosyncratic_risk(v_raw), 5.0);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(idiosyncratic_risk(-500.0), IDIOSYNCRATIC_MIN);
        assert_eq!(idiosyncratic_risk(55.0), 5.0);
        assert_eq!(idiosyncratic_risk(80.0), 30.0);
        assert_eq!(idiosyncratic_risk(150.0), 100.0);
        assert_eq!(idiosyncratic_risk(1e9), IDIOSYNCRATIC_MAX);
    }

    #[test]
    fn test_monotone_in_v_raw() {
        let mut previous = idiosyncratic_risk(0.0);
        for step in 1..=400 {
            let current = idiosyncratic_risk(step as f64 * 0.5);
            assert!(current >= previous);
            previous = current;
        }
    }
}
