//! Systematic risk: occupational hazard under environmental modifiers

/// H_i = H_base * (w_econ * M_econ + w_inno * IAI)
///
/// Not clamped; the probability conversion clamps instead.
pub fn systematic_risk(h_base: f64, m_econ: f64, iai: f64, w_econ: f64, w_inno: f64) -> f64 {
    h_base * (w_econ * m_econ + w_inno * iai)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neutral_environment() {
        assert_relative_eq!(systematic_risk(40.0, 1.0, 1.0, 0.5, 0.5), 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_modifiers() {
        assert_relative_eq!(systematic_risk(40.0, 0.8, 1.2, 0.5, 0.5), 40.0, epsilon = 1e-12);
        assert_relative_eq!(systematic_risk(40.0, 1.2, 1.2, 0.5, 0.5), 48.0, epsilon = 1e-12);
        assert_relative_eq!(systematic_risk(40.0, 1.0, 1.2, 0.3, 0.7), 45.6, epsilon = 1e-12);
    }

    #[test]
    fn test_not_clamped() {
        assert!(systematic_risk(100.0, 1.2, 1.2, 0.5, 0.5) > 100.0);
    }
}
