//! Evaluator wiring the factor, risk and premium components together

use log::debug;

use crate::error::{Result, RiskError};
use crate::factors::{compute_fcr, compute_fus, human_capital_breakdown};
use crate::parameters::ParameterBundle;
use crate::premium::quote_premium;
use crate::profile::{Environment, EvaluationRequest, Profile, Transition};
use crate::reference::ReferenceTables;
use crate::risk::{
    idiosyncratic_risk, interpolate_hazard, raw_idiosyncratic_score, systematic_risk,
    transition_path, TransitionPoint,
};
use super::result::{EvaluationResult, HazardSummary, TransitionSimulation};

/// Runs the pipeline against borrowed, read-only tables and parameters
///
/// Holds no state of its own; evaluating the same request twice gives
/// identical results.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    tables: &'a ReferenceTables,
    params: &'a ParameterBundle,
}

impl<'a> Evaluator<'a> {
    pub fn new(tables: &'a ReferenceTables, params: &'a ParameterBundle) -> Self {
        Self { tables, params }
    }

    pub fn params(&self) -> &ParameterBundle {
        self.params
    }

    /// Evaluate one request
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult> {
        request.validate(self.params.default_ttv_months)?;
        let profile = &request.profile;

        // Idiosyncratic side
        let human_capital = human_capital_breakdown(
            &profile.job_title,
            &profile.education_level,
            &profile.education_field,
            &profile.school_tier,
            profile.years_experience,
            self.tables,
            self.params,
        )?;
        let fcr = compute_fcr(&profile.company_type, self.tables, &self.params.fcr_weights)?;
        let fus = compute_fus(
            profile.p_gen_pct,
            profile.p_spec_pct,
            self.params.gamma_gen,
            self.params.gamma_spec,
        );
        let v_raw = raw_idiosyncratic_score(human_capital.fhc, fcr, fus, self.params.w_cr, self.params.w_us);
        let v_i_t = idiosyncratic_risk(v_raw);

        // Systematic side
        let hazard = self.hazard(profile, &request.environment, request.transition.as_ref())?;

        let quote = quote_premium(v_i_t, hazard.h_i, &request.coverage, self.params);

        debug!(
            "{}: FHC={:.4} FCR={:.4} FUS={:.4} V_i={:.2} H_i={:.2} P_claim={:.6} P_monthly={:.2}",
            profile.job_title, human_capital.fhc, fcr, fus, v_i_t, hazard.h_i, quote.p_claim, quote.p_monthly
        );

        Ok(EvaluationResult::assemble(
            &profile.job_title,
            human_capital,
            fcr,
            fus,
            v_raw,
            v_i_t,
            hazard,
            quote,
        ))
    }

    /// Current hazard, interpolated towards the target job when transitioning
    fn hazard(
        &self,
        profile: &Profile,
        environment: &Environment,
        transition: Option<&Transition>,
    ) -> Result<HazardSummary> {
        let h_current = self.tables.jobs.base_hazard(&profile.job_title)?;

        let (h_target, h_base) = match transition {
            Some(transition) => {
                let h_target = self.tables.jobs.base_hazard(&transition.target_job)?;
                let ttv = transition.resolve_ttv(self.params.default_ttv_months);
                let h_base = interpolate_hazard(transition.months_elapsed, ttv, h_current, h_target);
                (Some(h_target), h_base)
            }
            None => (None, h_current),
        };

        let h_i = systematic_risk(
            h_base,
            environment.m_econ,
            environment.iai,
            self.params.w_econ,
            self.params.w_inno,
        );

        Ok(HazardSummary { h_current, h_target, h_base, h_i })
    }

    /// Systematic risk path of a career transition, month 0 through TTV
    pub fn simulate_transition(
        &self,
        current_job: &str,
        transition: &Transition,
        environment: &Environment,
    ) -> Result<TransitionSimulation> {
        environment.validate()?;
        transition.validate(self.params.default_ttv_months)?;
        if transition.target_job == current_job {
            return Err(RiskError::input("target_job", "must differ from the current job"));
        }

        let h_current = self.tables.jobs.base_hazard(current_job)?;
        let h_target = self.tables.jobs.base_hazard(&transition.target_job)?;
        let ttv_months = transition.resolve_ttv(self.params.default_ttv_months);

        let points = transition_path(
            ttv_months,
            h_current,
            h_target,
            environment.m_econ,
            environment.iai,
            self.params.w_econ,
            self.params.w_inno,
        );

        let h_base = interpolate_hazard(transition.months_elapsed, ttv_months, h_current, h_target);
        let at_month = TransitionPoint {
            month: transition.months_elapsed,
            h_base,
            h_i: systematic_risk(
                h_base,
                environment.m_econ,
                environment.iai,
                self.params.w_econ,
                self.params.w_inno,
            ),
        };

        debug!(
            "transition {} -> {} over {} months: H_i {:.2} at month {}",
            current_job, transition.target_job, ttv_months, at_month.h_i, at_month.month
        );

        Ok(TransitionSimulation {
            current_job: current_job.to_string(),
            target_job: transition.target_job.clone(),
            h_current,
            h_target,
            ttv_months,
            at_month,
            points,
        })
    }
}
