//! Human Capital Factor (FHC)
//!
//! FHC = f_role * f_level * f_field * f_school * f_exp
//! with f_exp = max(0.1, 1 - a * min(years, Y_cap))

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parameters::ParameterBundle;
use crate::reference::ReferenceTables;

/// Lowest value f_exp may take
pub const EXPERIENCE_FACTOR_FLOOR: f64 = 0.1;

/// Experience factor with diminishing returns past the cap
pub fn experience_factor(years_experience: u32, decay: f64, cap_years: u32) -> f64 {
    let effective_years = years_experience.min(cap_years) as f64;
    (1.0 - decay * effective_years).max(EXPERIENCE_FACTOR_FLOOR)
}

/// Sub-factors making up FHC, kept for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HumanCapitalBreakdown {
    pub f_role: f64,
    pub f_level: f64,
    pub f_field: f64,
    pub f_school: f64,
    pub f_exp: f64,
    pub fhc: f64,
}

impl HumanCapitalBreakdown {
    pub fn from_factors(f_role: f64, f_level: f64, f_field: f64, f_school: f64, f_exp: f64) -> Self {
        Self {
            f_role,
            f_level,
            f_field,
            f_school,
            f_exp,
            fhc: f_role * f_level * f_field * f_school * f_exp,
        }
    }
}

/// Look up every sub-factor and combine them
///
/// Unknown job, education or school keys are errors.
pub fn human_capital_breakdown(
    job: &str,
    education_level: &str,
    education_field: &str,
    school_tier: &str,
    years_experience: u32,
    tables: &ReferenceTables,
    params: &ParameterBundle,
) -> Result<HumanCapitalBreakdown> {
    let f_role = tables.jobs.get(job)?.role_factor;
    let f_level = tables.education_levels.get(education_level)?;
    let f_field = tables.education_fields.get(education_field)?;
    let f_school = tables.school_tiers.get(school_tier)?;
    let f_exp = experience_factor(
        years_experience,
        params.experience_decay,
        params.experience_cap_years,
    );

    Ok(HumanCapitalBreakdown::from_factors(f_role, f_level, f_field, f_school, f_exp))
}

pub fn compute_fhc(
    job: &str,
    education_level: &str,
    education_field: &str,
    school_tier: &str,
    years_experience: u32,
    tables: &ReferenceTables,
    params: &ParameterBundle,
) -> Result<f64> {
    human_capital_breakdown(
        job,
        education_level,
        education_field,
        school_tier,
        years_experience,
        tables,
        params,
    )
    .map(|breakdown| breakdown.fhc)
}
