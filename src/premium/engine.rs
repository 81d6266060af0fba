//! Conversion of risk scores into claim probability, expected loss and premium

use serde::{Deserialize, Serialize};

use crate::parameters::ParameterBundle;
use crate::profile::Coverage;

/// L_payout = (salary / 12) * duration * (coverage % / 100)
pub fn payout_amount(annual_salary: f64, coverage_duration_months: u32, coverage_percentage: f64) -> f64 {
    (annual_salary / 12.0) * coverage_duration_months as f64 * (coverage_percentage / 100.0)
}

/// P_systemic = clamp((H_i / 100) * beta_systemic, 0, 1)
pub fn systemic_probability(h_i: f64, beta_systemic: f64) -> f64 {
    ((h_i / 100.0) * beta_systemic).clamp(0.0, 1.0)
}

/// P_individual|systemic = clamp((V_i(t) / 100) * beta_individual, 0, 1)
pub fn individual_probability(v_i_t: f64, beta_individual: f64) -> f64 {
    ((v_i_t / 100.0) * beta_individual).clamp(0.0, 1.0)
}

/// Annual claim probability
pub fn claim_probability(p_systemic: f64, p_individual: f64) -> f64 {
    (p_systemic * p_individual).clamp(0.0, 1.0)
}

/// Annual expected loss
pub fn expected_loss(p_claim: f64, l_payout: f64) -> f64 {
    p_claim * l_payout
}

/// P_monthly = max(E[Loss] * lambda / 12, P_min)
pub fn monthly_premium(e_loss: f64, loading_factor: f64, min_monthly_premium: f64) -> f64 {
    ((e_loss * loading_factor) / 12.0).max(min_monthly_premium)
}

/// Every intermediate of the premium calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    pub l_payout: f64,
    pub p_systemic: f64,
    pub p_individual: f64,
    pub p_claim: f64,
    pub e_loss: f64,
    pub p_monthly: f64,
}

/// Price cover for a person with the given risk scores
///
/// `coverage` must already be validated; nothing here clamps malformed terms.
pub fn quote_premium(v_i_t: f64, h_i: f64, coverage: &Coverage, params: &ParameterBundle) -> PremiumQuote {
    let l_payout = payout_amount(
        coverage.annual_salary,
        coverage.coverage_duration_months,
        coverage.coverage_percentage,
    );
    let p_systemic = systemic_probability(h_i, params.beta_systemic);
    let p_individual = individual_probability(v_i_t, params.beta_individual);
    let p_claim = claim_probability(p_systemic, p_individual);
    let e_loss = expected_loss(p_claim, l_payout);
    let p_monthly = monthly_premium(e_loss, params.loading_factor, params.min_monthly_premium);

    PremiumQuote {
        l_payout,
        p_systemic,
        p_individual,
        p_claim,
        e_loss,
        p_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payout_amount() {
        assert_relative_eq!(payout_amount(90_000.0, 6, 25.0), 11_250.0, epsilon = 1e-9);
        assert_eq!(payout_amount(90_000.0, 0, 25.0), 0.0);
        assert_eq!(payout_amount(0.0, 6, 25.0), 0.0);
    }

    #[test]
    fn test_probabilities_clamped() {
        assert_relative_eq!(systemic_probability(40.0, 0.10), 0.04, epsilon = 1e-12);
        assert_eq!(systemic_probability(1_000.0, 0.5), 1.0);
        assert_eq!(systemic_probability(-10.0, 0.5), 0.0);

        assert_relative_eq!(individual_probability(30.0, 0.5), 0.15, epsilon = 1e-12);
        assert_eq!(individual_probability(500.0, 1.0), 1.0);

        assert_relative_eq!(claim_probability(0.04, 0.15), 0.006, epsilon = 1e-12);
    }

    #[test]
    fn test_premium_floor() {
        assert_eq!(monthly_premium(0.0, 1.5, 20.0), 20.0);
        assert_eq!(monthly_premium(100.0, 1.5, 20.0), 20.0);
        assert_relative_eq!(monthly_premium(1_200.0, 1.5, 20.0), 150.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quote() {
        let params = ParameterBundle::default();
        let coverage = Coverage {
            annual_salary: 90_000.0,
            coverage_percentage: 25.0,
            coverage_duration_months: 6,
        };

        let quote = quote_premium(30.0, 40.0, &coverage, &params);

        assert_relative_eq!(quote.l_payout, 11_250.0, epsilon = 1e-9);
        assert_relative_eq!(quote.p_systemic, 0.04, epsilon = 1e-12);
        assert_relative_eq!(quote.p_individual, 0.15, epsilon = 1e-12);
        assert_relative_eq!(quote.p_claim, 0.006, epsilon = 1e-12);
        assert_relative_eq!(quote.e_loss, 67.5, epsilon = 1e-9);
        // 67.5 * 1.5 / 12 = 8.4375, below the floor
        assert_eq!(quote.p_monthly, 20.0);

        let tuned = ParameterBundle { min_monthly_premium: 0.0, ..params };
        let quote = quote_premium(30.0, 40.0, &coverage, &tuned);
        assert_relative_eq!(quote.p_monthly, 8.4375, epsilon = 1e-9);
    }
}
