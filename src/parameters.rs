//! Model parameters: weights, decay constants, probability betas and premium terms

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::profile::MAX_TTV_MONTHS;

/// Default path to the parameter file used by the CLI
pub const DEFAULT_PARAMS_PATH: &str = "data/parameters.json";

/// Weights combining the company sub-scores into FCR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FcrWeights {
    /// Sentiment weight
    pub w1: f64,
    /// Financial health weight
    pub w2: f64,
    /// Growth weight
    pub w3: f64,
}

impl Default for FcrWeights {
    fn default() -> Self {
        Self { w1: 0.33, w2: 0.33, w3: 0.34 }
    }
}

impl FcrWeights {
    pub fn sum(&self) -> f64 {
        self.w1 + self.w2 + self.w3
    }
}

/// Process-wide parameter set
///
/// Loaded once, then passed by reference into every evaluation. Missing fields
/// in a JSON file take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterBundle {
    /// Experience decay constant `a` in f_exp
    pub experience_decay: f64,
    /// Years of experience beyond which f_exp stops improving
    pub experience_cap_years: u32,
    /// Weight of FCR in V_raw
    pub w_cr: f64,
    /// Weight of FUS in V_raw
    pub w_us: f64,
    pub fcr_weights: FcrWeights,
    /// General (portable) skill training weight in FUS
    pub gamma_gen: f64,
    /// Firm-specific skill training weight in FUS
    pub gamma_spec: f64,
    /// Weight of the economic climate modifier in H_i
    pub w_econ: f64,
    /// Weight of the AI innovation index in H_i
    pub w_inno: f64,
    /// Annual systemic event probability for the highest-hazard occupation
    pub beta_systemic: f64,
    /// Conditional job loss probability for the most vulnerable individual
    pub beta_individual: f64,
    /// Premium loading factor (lambda)
    pub loading_factor: f64,
    /// Monthly premium floor
    pub min_monthly_premium: f64,
    /// TTV used when a transition does not specify one
    pub default_ttv_months: u32,
}

impl Default for ParameterBundle {
    fn default() -> Self {
        Self {
            experience_decay: 0.015,
            experience_cap_years: 20,
            w_cr: 0.4,
            w_us: 0.6,
            fcr_weights: FcrWeights::default(),
            gamma_gen: 0.6,  // rewards portable skills more heavily
            gamma_spec: 0.4,
            w_econ: 0.5,
            w_inno: 0.5,
            beta_systemic: 0.10,
            beta_individual: 0.50,
            loading_factor: 1.5,
            min_monthly_premium: 20.0,
            default_ttv_months: 12,
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RiskError::parameter(name, format!("must be finite, got {}", value)))
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(RiskError::parameter(name, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(RiskError::parameter(name, format!("must be within [0, 1], got {}", value)));
    }
    Ok(())
}

impl ParameterBundle {
    /// Load a bundle from a JSON file and validate it
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let bundle: Self = serde_json::from_reader(BufReader::new(file))?;
        bundle.validate()?;
        info!("loaded parameters from {}", path.display());
        Ok(bundle)
    }

    /// Check every parameter against its domain
    ///
    /// Weight pairs that do not sum to 1 are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("experience_decay", self.experience_decay)?;
        check_non_negative("w_cr", self.w_cr)?;
        check_non_negative("w_us", self.w_us)?;
        check_non_negative("fcr_weights.w1", self.fcr_weights.w1)?;
        check_non_negative("fcr_weights.w2", self.fcr_weights.w2)?;
        check_non_negative("fcr_weights.w3", self.fcr_weights.w3)?;
        if (self.fcr_weights.sum() - 1.0).abs() > 1e-9 {
            return Err(RiskError::parameter(
                "fcr_weights",
                format!("must sum to 1, got {}", self.fcr_weights.sum()),
            ));
        }
        check_non_negative("gamma_gen", self.gamma_gen)?;
        check_non_negative("gamma_spec", self.gamma_spec)?;
        check_non_negative("w_econ", self.w_econ)?;
        check_non_negative("w_inno", self.w_inno)?;
        check_unit_interval("beta_systemic", self.beta_systemic)?;
        check_unit_interval("beta_individual", self.beta_individual)?;
        check_finite("loading_factor", self.loading_factor)?;
        if self.loading_factor < 1.0 {
            return Err(RiskError::parameter(
                "loading_factor",
                format!("must be >= 1, got {}", self.loading_factor),
            ));
        }
        check_non_negative("min_monthly_premium", self.min_monthly_premium)?;
        if !(1..=MAX_TTV_MONTHS).contains(&self.default_ttv_months) {
            return Err(RiskError::parameter(
                "default_ttv_months",
                format!("must be within [1, {}], got {}", MAX_TTV_MONTHS, self.default_ttv_months),
            ));
        }

        if (self.w_cr + self.w_us - 1.0).abs() > 1e-9 {
            warn!("w_cr + w_us = {} (conventionally 1)", self.w_cr + self.w_us);
        }
        if (self.w_econ + self.w_inno - 1.0).abs() > 1e-9 {
            warn!("w_econ + w_inno = {} (conventionally 1)", self.w_econ + self.w_inno);
        }
        Ok(())
    }

    /// Copy of this bundle with the given overrides applied and validated
    pub fn with_overrides(&self, overrides: &ParameterOverrides) -> Result<Self> {
        let mut bundle = self.clone();
        overrides.apply_to(&mut bundle);
        bundle.validate()?;
        Ok(bundle)
    }
}

/// Per-evaluation parameter overrides
///
/// Every field is optional; `None` keeps the bundle's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    pub experience_decay: Option<f64>,
    pub experience_cap_years: Option<u32>,
    pub w_cr: Option<f64>,
    pub w_us: Option<f64>,
    pub fcr_weights: Option<FcrWeights>,
    pub gamma_gen: Option<f64>,
    pub gamma_spec: Option<f64>,
    pub w_econ: Option<f64>,
    pub w_inno: Option<f64>,
    pub beta_systemic: Option<f64>,
    pub beta_individual: Option<f64>,
    pub loading_factor: Option<f64>,
    pub min_monthly_premium: Option<f64>,
    pub default_ttv_months: Option<u32>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(&self, bundle: &mut ParameterBundle) {
        bundle.experience_decay = self.experience_decay.unwrap_or(bundle.experience_decay);
        bundle.experience_cap_years = self.experience_cap_years.unwrap_or(bundle.experience_cap_years);
        bundle.w_cr = self.w_cr.unwrap_or(bundle.w_cr);
        bundle.w_us = self.w_us.unwrap_or(bundle.w_us);
        bundle.fcr_weights = self.fcr_weights.unwrap_or(bundle.fcr_weights);
        bundle.gamma_gen = self.gamma_gen.unwrap_or(bundle.gamma_gen);
        bundle.gamma_spec = self.gamma_spec.unwrap_or(bundle.gamma_spec);
        bundle.w_econ = self.w_econ.unwrap_or(bundle.w_econ);
        bundle.w_inno = self.w_inno.unwrap_or(bundle.w_inno);
        bundle.beta_systemic = self.beta_systemic.unwrap_or(bundle.beta_systemic);
        bundle.beta_individual = self.beta_individual.unwrap_or(bundle.beta_individual);
        bundle.loading_factor = self.loading_factor.unwrap_or(bundle.loading_factor);
        bundle.min_monthly_premium = self.min_monthly_premium.unwrap_or(bundle.min_monthly_premium);
        bundle.default_ttv_months = self.default_ttv_months.unwrap_or(bundle.default_ttv_months);
    }
}
