//! Company Risk Factor (FCR)

use crate::error::Result;
use crate::parameters::FcrWeights;
use crate::reference::{CompanyRisk, ReferenceTables};

/// FCR = w1 * S_senti + w2 * S_fin + w3 * S_growth, or the precomputed value
pub fn company_risk_factor(risk: CompanyRisk, weights: &FcrWeights) -> f64 {
    match risk {
        CompanyRisk::SubScores { senti, fin, growth } => {
            weights.w1 * senti + weights.w2 * fin + weights.w3 * growth
        }
        CompanyRisk::Precomputed(fcr) => fcr,
    }
}

pub fn compute_fcr(company_type: &str, tables: &ReferenceTables, weights: &FcrWeights) -> Result<f64> {
    let risk = tables.company_types.get(company_type)?;
    Ok(company_risk_factor(risk, weights))
}
