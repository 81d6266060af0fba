//! Evaluation output structures

use serde::{Deserialize, Serialize};

use crate::factors::HumanCapitalBreakdown;
use crate::premium::PremiumQuote;
use crate::risk::TransitionPoint;

/// Every intermediate value of one evaluation
///
/// Kept flat so a batch can be written straight to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub job_title: String,

    // Human capital sub-factors
    pub f_role: f64,
    pub f_level: f64,
    pub f_field: f64,
    pub f_school: f64,
    pub f_exp: f64,

    // Idiosyncratic risk
    pub fhc: f64,
    pub fcr: f64,
    pub fus: f64,
    pub v_raw: f64,
    pub v_i_t: f64,

    // Systematic risk
    pub h_current: f64,
    /// Target job hazard when a transition was evaluated
    pub h_target: Option<f64>,
    pub h_base: f64,
    pub h_i: f64,

    // Premium
    pub l_payout: f64,
    pub p_systemic: f64,
    pub p_individual: f64,
    pub p_claim: f64,
    pub e_loss: f64,
    pub p_monthly: f64,
}

impl EvaluationResult {
    pub(crate) fn assemble(
        job_title: &str,
        human_capital: HumanCapitalBreakdown,
        fcr: f64,
        fus: f64,
        v_raw: f64,
        v_i_t: f64,
        hazard: HazardSummary,
        quote: PremiumQuote,
    ) -> Self {
        Self {
            job_title: job_title.to_string(),
            f_role: human_capital.f_role,
            f_level: human_capital.f_level,
            f_field: human_capital.f_field,
            f_school: human_capital.f_school,
            f_exp: human_capital.f_exp,
            fhc: human_capital.fhc,
            fcr,
            fus,
            v_raw,
            v_i_t,
            h_current: hazard.h_current,
            h_target: hazard.h_target,
            h_base: hazard.h_base,
            h_i: hazard.h_i,
            l_payout: quote.l_payout,
            p_systemic: quote.p_systemic,
            p_individual: quote.p_individual,
            p_claim: quote.p_claim,
            e_loss: quote.e_loss,
            p_monthly: quote.p_monthly,
        }
    }

    pub fn human_capital(&self) -> HumanCapitalBreakdown {
        HumanCapitalBreakdown {
            f_role: self.f_role,
            f_level: self.f_level,
            f_field: self.f_field,
            f_school: self.f_school,
            f_exp: self.f_exp,
            fhc: self.fhc,
        }
    }

    pub fn premium(&self) -> PremiumQuote {
        PremiumQuote {
            l_payout: self.l_payout,
            p_systemic: self.p_systemic,
            p_individual: self.p_individual,
            p_claim: self.p_claim,
            e_loss: self.e_loss,
            p_monthly: self.p_monthly,
        }
    }

    /// Annual premium implied by the monthly figure
    pub fn annual_premium(&self) -> f64 {
        self.p_monthly * 12.0
    }
}

/// Occupational hazard values feeding the systematic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HazardSummary {
    pub h_current: f64,
    pub h_target: Option<f64>,
    pub h_base: f64,
    pub h_i: f64,
}

/// Month-by-month systematic risk for a career transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionSimulation {
    pub current_job: String,
    pub target_job: String,
    pub h_current: f64,
    pub h_target: f64,
    pub ttv_months: u32,
    /// Values at the requested month k
    pub at_month: TransitionPoint,
    /// Values for every month 0..=TTV
    pub points: Vec<TransitionPoint>,
}

impl TransitionSimulation {
    /// Drop in systematic risk from month 0 to the end of the transition
    pub fn total_reduction(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.h_i - last.h_i,
            _ => 0.0,
        }
    }
}
