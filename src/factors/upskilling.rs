//! Upskilling Factor (FUS)

/// Lowest value FUS may take
pub const UPSKILLING_FACTOR_FLOOR: f64 = 0.1;

/// FUS = max(0.1, 1 - (gamma_gen * P_gen + gamma_spec * P_spec))
///
/// Training progress is given in percent (0-100).
pub fn compute_fus(p_gen_pct: f64, p_spec_pct: f64, gamma_gen: f64, gamma_spec: f64) -> f64 {
    let reduction = gamma_gen * (p_gen_pct / 100.0) + gamma_spec * (p_spec_pct / 100.0);
    (1.0 - reduction).max(UPSKILLING_FACTOR_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_training() {
        assert_eq!(compute_fus(0.0, 0.0, 0.6, 0.4), 1.0);
    }

    #[test]
    fn test_general_skills_weigh_more() {
        let general = compute_fus(50.0, 0.0, 0.6, 0.4);
        let specific = compute_fus(0.0, 50.0, 0.6, 0.4);
        assert_relative_eq!(general, 0.7, epsilon = 1e-12);
        assert_relative_eq!(specific, 0.8, epsilon = 1e-12);
        assert!(general < specific);
    }

    #[test]
    fn test_floor() {
        // 1 - (0.6 + 0.4) = 0 without the floor
        assert_eq!(compute_fus(100.0, 100.0, 0.6, 0.4), UPSKILLING_FACTOR_FLOOR);
        assert_eq!(compute_fus(100.0, 100.0, 2.0, 2.0), UPSKILLING_FACTOR_FLOOR);
    }
}
