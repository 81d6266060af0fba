//! Time-to-Value (TTV) occupational hazard model
//!
//! During a career transition the base hazard moves linearly from the current
//! occupation's H_base to the target occupation's over TTV months:
//!
//! H_base(k) = (1 - k/TTV) * H_current + (k/TTV) * H_target,  0 <= k < TTV
//!
//! and stays at H_target from month TTV on. Callers pass k on every call;
//! nothing here remembers simulation progress.

use serde::{Deserialize, Serialize};

use super::systematic::systematic_risk;

/// Base hazard after `months_elapsed` months of a `ttv_months` transition
pub fn interpolate_hazard(months_elapsed: u32, ttv_months: u32, h_current: f64, h_target: f64) -> f64 {
    // TTV = 0 is rejected upstream; treat it as an instant transition
    if ttv_months == 0 || months_elapsed >= ttv_months {
        return h_target;
    }
    if h_current == h_target {
        return h_current;
    }
    let progress = months_elapsed as f64 / ttv_months as f64;
    (1.0 - progress) * h_current + progress * h_target
}

/// One month of a simulated transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionPoint {
    pub month: u32,
    pub h_base: f64,
    pub h_i: f64,
}

/// Hazard path for k = 0..=TTV under fixed environmental modifiers
pub fn transition_path(
    ttv_months: u32,
    h_current: f64,
    h_target: f64,
    m_econ: f64,
    iai: f64,
    w_econ: f64,
    w_inno: f64,
) -> Vec<TransitionPoint> {
    (0..=ttv_months)
        .map(|month| {
            let h_base = interpolate_hazard(month, ttv_months, h_current, h_target);
            TransitionPoint {
                month,
                h_base,
                h_i: systematic_risk(h_base, m_econ, iai, w_econ, w_inno),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint() {
        assert_relative_eq!(interpolate_hazard(5, 10, 80.0, 20.0), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(interpolate_hazard(0, 10, 80.0, 20.0), 80.0);
        assert_eq!(interpolate_hazard(10, 10, 80.0, 20.0), 20.0);
    }

    #[test]
    fn test_no_overshoot_past_ttv() {
        assert_eq!(interpolate_hazard(11, 10, 80.0, 20.0), 20.0);
        assert_eq!(interpolate_hazard(500, 10, 20.0, 80.0), 80.0);
    }

    #[test]
    fn test_zero_ttv_returns_target() {
        assert_eq!(interpolate_hazard(0, 0, 80.0, 20.0), 20.0);
        assert_eq!(interpolate_hazard(7, 0, 80.0, 20.0), 20.0);
    }

    #[test]
    fn test_no_transition() {
        for k in 0..=24 {
            assert_eq!(interpolate_hazard(k, 12, 45.0, 45.0), 45.0);
        }
    }

    #[test]
    fn test_bounded_and_monotone() {
        let mut previous = interpolate_hazard(0, 36, 70.0, 15.0);
        for k in 1..=36 {
            let h = interpolate_hazard(k, 36, 70.0, 15.0);
            assert!(h <= previous);
            assert!((15.0..=70.0).contains(&h));
            previous = h;
        }

        // Rising transition
        let mut previous = interpolate_hazard(0, 7, 15.0, 70.0);
        for k in 1..=7 {
            let h = interpolate_hazard(k, 7, 15.0, 70.0);
            assert!(h >= previous);
            assert!((15.0..=70.0).contains(&h));
            previous = h;
        }
    }

    #[test]
    fn test_transition_path() {
        let path = transition_path(12, 70.0, 15.0, 1.0, 1.0, 0.5, 0.5);
        assert_eq!(path.len(), 13);
        assert_eq!(path[0].month, 0);
        assert_eq!(path[0].h_base, 70.0);
        assert_eq!(path[12].h_base, 15.0);
        assert_relative_eq!(path[12].h_i, 15.0, epsilon = 1e-12);

        let boom = transition_path(12, 70.0, 15.0, 1.2, 1.2, 0.5, 0.5);
        assert_relative_eq!(boom[0].h_i, 84.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transition_path_csv() {
        let path = transition_path(2, 80.0, 20.0, 1.0, 1.0, 0.5, 0.5);

        let mut writer = csv::Writer::from_writer(vec![]);
        for point in &path {
            writer.serialize(point).unwrap();
        }
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["month,h_base,h_i", "0,80.0,80.0", "1,50.0,50.0", "2,20.0,20.0"]);
    }
}
