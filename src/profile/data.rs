//! Evaluation request data: who is being rated, under what conditions, for what cover

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::premium::payout_amount;

/// Longest Time-to-Value accepted for a career transition
pub const MAX_TTV_MONTHS: u32 = 60;

fn check_percentage(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(RiskError::input(
            field,
            format!("must be within [0, 100], got {}", value),
        ));
    }
    Ok(())
}

/// Career profile of the individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub job_title: String,
    pub years_experience: u32,
    pub education_level: String,
    pub education_field: String,
    pub school_tier: String,
    pub company_type: String,
    /// % of general (portable) skill training completed, 0-100
    pub p_gen_pct: f64,
    /// % of firm-specific skill training completed, 0-100
    pub p_spec_pct: f64,
}

impl Profile {
    /// Check training progress. Category keys are checked by the table lookups.
    pub fn validate(&self) -> Result<()> {
        check_percentage("p_gen_pct", self.p_gen_pct)?;
        check_percentage("p_spec_pct", self.p_spec_pct)?;
        Ok(())
    }
}

/// Environmental modifiers applied to the occupational hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Economic climate modifier (0.8 recession .. 1.2 boom)
    pub m_econ: f64,
    /// AI innovation index (0.8 slowdown .. 1.2 breakthrough)
    pub iai: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self { m_econ: 1.0, iai: 1.0 }
    }
}

impl Environment {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("m_econ", self.m_econ), ("iai", self.iai)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskError::input(
                    field,
                    format!("must be finite and >= 0, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Income protection terms used for the payout amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub annual_salary: f64,
    /// % of salary paid out on a claim, 0-100
    pub coverage_percentage: f64,
    /// Months of salary paid out on a claim
    pub coverage_duration_months: u32,
}

impl Coverage {
    /// Malformed terms are rejected here, never clamped by the premium engine
    pub fn validate(&self) -> Result<()> {
        if !self.annual_salary.is_finite() || self.annual_salary < 0.0 {
            return Err(RiskError::input(
                "annual_salary",
                format!("must be finite and >= 0, got {}", self.annual_salary),
            ));
        }
        check_percentage("coverage_percentage", self.coverage_percentage)?;
        let l_payout = payout_amount(
            self.annual_salary,
            self.coverage_duration_months,
            self.coverage_percentage,
        );
        if !l_payout.is_finite() {
            return Err(RiskError::input(
                "annual_salary",
                format!("payout overflows for salary {}", self.annual_salary),
            ));
        }
        Ok(())
    }
}

/// Career transition towards a target occupation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub target_job: String,
    /// Months elapsed since the transition started (k)
    pub months_elapsed: u32,
    /// Time-to-Value; None uses the parameter bundle's default
    #[serde(default)]
    pub ttv_months: Option<u32>,
}

impl Transition {
    pub fn resolve_ttv(&self, default_ttv_months: u32) -> u32 {
        self.ttv_months.unwrap_or(default_ttv_months)
    }

    pub fn validate(&self, default_ttv_months: u32) -> Result<()> {
        let ttv = self.resolve_ttv(default_ttv_months);
        if !(1..=MAX_TTV_MONTHS).contains(&ttv) {
            return Err(RiskError::input(
                "ttv_months",
                format!("must be within [1, {}], got {}", MAX_TTV_MONTHS, ttv),
            ));
        }
        Ok(())
    }
}

/// Everything needed for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub profile: Profile,
    #[serde(default)]
    pub environment: Environment,
    pub coverage: Coverage,
    #[serde(default)]
    pub transition: Option<Transition>,
}

impl EvaluationRequest {
    pub fn validate(&self, default_ttv_months: u32) -> Result<()> {
        self.profile.validate()?;
        self.environment.validate()?;
        self.coverage.validate()?;
        if let Some(transition) = &self.transition {
            transition.validate(default_ttv_months)?;
        }
        Ok(())
    }
}
