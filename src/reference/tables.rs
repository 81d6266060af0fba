//! Lookup tables for job, education, school tier and company type factors

use std::collections::BTreeMap;

use crate::error::{Result, RiskError, TableKind};

/// Reject factors the multiplicative pipeline cannot absorb
fn check_factor(table: TableKind, key: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RiskError::reference(
            table,
            key,
            format!("factor must be finite and > 0, got {}", value),
        ));
    }
    Ok(())
}

/// Occupation entry: resilience multiplier and base AI hazard
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    /// f_role multiplier (> 0)
    pub role_factor: f64,
    /// H_base on the 0-100 hazard scale
    pub base_hazard: f64,
    /// Industry label, informational only
    pub industry: String,
}

/// Job title -> role factor and base hazard
#[derive(Debug, Clone, Default)]
pub struct JobTable {
    jobs: BTreeMap<String, JobRecord>,
}

impl JobTable {
    /// Build from (title, record) pairs, validating every entry
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, JobRecord)>,
    {
        let mut jobs = BTreeMap::new();
        for (title, record) in entries {
            check_factor(TableKind::Job, &title, record.role_factor)?;
            if !(0.0..=100.0).contains(&record.base_hazard) {
                return Err(RiskError::reference(
                    TableKind::Job,
                    &title,
                    format!("base hazard must be within [0, 100], got {}", record.base_hazard),
                ));
            }
            jobs.insert(title, record);
        }
        Ok(Self { jobs })
    }

    /// Synthetic occupation catalog shipped with the engine
    pub fn default_catalog() -> Self {
        let rows: [(&str, f64, f64, &str); 12] = [
            // Tech roles get lower f_role from demand and reskilling options
            ("Software Engineer", 0.80, 40.0, "Tech"),
            ("Data Scientist", 0.75, 50.0, "Tech"),
            ("AI/ML Engineer", 0.70, 60.0, "Tech"),
            ("Financial Analyst", 0.90, 35.0, "Finance"),
            ("Marketing Manager", 0.95, 30.0, "Marketing"),
            ("HR Specialist", 1.00, 20.0, "HR"),
            ("Accountant", 1.05, 25.0, "Finance"),
            ("Customer Service Rep", 1.10, 45.0, "Service"),
            ("Truck Driver", 1.20, 70.0, "Logistics"),
            ("Graphic Designer", 0.95, 30.0, "Creative"),
            ("Nurse", 0.85, 15.0, "Healthcare"),
            ("Teacher", 0.90, 20.0, "Education"),
        ];
        let jobs = rows
            .iter()
            .map(|&(title, role_factor, base_hazard, industry)| {
                (
                    title.to_string(),
                    JobRecord {
                        role_factor,
                        base_hazard,
                        industry: industry.to_string(),
                    },
                )
            })
            .collect();
        Self { jobs }
    }

    pub fn get(&self, job_title: &str) -> Result<&JobRecord> {
        self.jobs
            .get(job_title)
            .ok_or_else(|| RiskError::not_found(TableKind::Job, job_title))
    }

    /// Base occupational hazard for a job title
    pub fn base_hazard(&self, job_title: &str) -> Result<f64> {
        self.get(job_title).map(|job| job.base_hazard)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JobRecord)> {
        self.jobs.iter().map(|(title, job)| (title.as_str(), job))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Category -> positive multiplicative factor
///
/// Used for education level, education field and school tier.
#[derive(Debug, Clone)]
pub struct FactorTable {
    kind: TableKind,
    factors: BTreeMap<String, f64>,
}

impl FactorTable {
    pub fn new<I>(kind: TableKind, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut factors = BTreeMap::new();
        for (key, factor) in entries {
            check_factor(kind, &key, factor)?;
            factors.insert(key, factor);
        }
        Ok(Self { kind, factors })
    }

    fn from_static(kind: TableKind, rows: &[(&str, f64)]) -> Self {
        Self {
            kind,
            factors: rows.iter().map(|&(k, v)| (k.to_string(), v)).collect(),
        }
    }

    pub fn default_education_levels() -> Self {
        Self::from_static(
            TableKind::EducationLevel,
            &[
                ("PhD", 0.7),
                ("Master's", 0.8),
                ("Bachelor's", 0.9),
                ("Associate's", 1.0),
                ("High School", 1.1),
            ],
        )
    }

    pub fn default_education_fields() -> Self {
        Self::from_static(
            TableKind::EducationField,
            &[
                ("Tech/Engineering", 0.75),
                ("Data Science/AI", 0.70),
                ("Business/Finance", 0.85),
                ("Humanities/Arts", 1.00),
                ("Healthcare", 0.80),
                ("Education", 0.90),
                ("Trades/Vocational", 1.05),
            ],
        )
    }

    pub fn default_school_tiers() -> Self {
        Self::from_static(
            TableKind::SchoolTier,
            &[
                ("Tier 1 (Top 10%)", 0.75),
                ("Tier 2 (Top 25%)", 0.85),
                ("Tier 3 (Top 50%)", 0.95),
                ("Tier 4 (Other)", 1.05),
            ],
        )
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn get(&self, key: &str) -> Result<f64> {
        self.factors
            .get(key)
            .copied()
            .ok_or_else(|| RiskError::not_found(self.kind, key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Employer stability inputs for the company risk factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompanyRisk {
    /// Sentiment, financial and growth sub-scores, combined with the FCR weights.
    /// Higher values mean more risk.
    SubScores { senti: f64, fin: f64, growth: f64 },
    /// FCR supplied directly by the data provider
    Precomputed(f64),
}

impl CompanyRisk {
    fn validate(&self, key: &str) -> Result<()> {
        let values = match *self {
            CompanyRisk::SubScores { senti, fin, growth } => [senti, fin, growth],
            CompanyRisk::Precomputed(fcr) => [fcr, fcr, fcr],
        };
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(RiskError::reference(
                TableKind::CompanyType,
                key,
                "company risk scores must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Company type -> company risk inputs
#[derive(Debug, Clone, Default)]
pub struct CompanyTypeTable {
    companies: BTreeMap<String, CompanyRisk>,
}

impl CompanyTypeTable {
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, CompanyRisk)>,
    {
        let mut companies = BTreeMap::new();
        for (key, risk) in entries {
            risk.validate(&key)?;
            companies.insert(key, risk);
        }
        Ok(Self { companies })
    }

    pub fn default_types() -> Self {
        let rows = [
            (
                "Big Firm (Stable)",
                CompanyRisk::SubScores { senti: 0.7, fin: 0.6, growth: 0.7 },
            ),
            (
                "Mid-size Firm (Growth)",
                CompanyRisk::SubScores { senti: 0.8, fin: 0.8, growth: 0.9 },
            ),
            (
                "Startup (High Risk/Reward)",
                CompanyRisk::SubScores { senti: 0.9, fin: 0.95, growth: 1.1 },
            ),
            ("Government/Non-Profit (Very Stable)", CompanyRisk::Precomputed(0.7)),
        ];
        Self {
            companies: rows.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    pub fn get(&self, company_type: &str) -> Result<CompanyRisk> {
        self.companies
            .get(company_type)
            .copied()
            .ok_or_else(|| RiskError::not_found(TableKind::CompanyType, company_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompanyRisk)> {
        self.companies.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let jobs = JobTable::default_catalog();
        assert_eq!(jobs.len(), 12);

        let driver = jobs.get("Truck Driver").unwrap();
        assert_eq!(driver.role_factor, 1.2);
        assert_eq!(driver.base_hazard, 70.0);
        assert_eq!(jobs.base_hazard("Nurse").unwrap(), 15.0);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let jobs = JobTable::default_catalog();
        assert!(matches!(
            jobs.get("Astronaut"),
            Err(RiskError::KeyNotFound { table: TableKind::Job, .. })
        ));

        let tiers = FactorTable::default_school_tiers();
        assert!(matches!(
            tiers.get("Tier 7"),
            Err(RiskError::KeyNotFound { table: TableKind::SchoolTier, .. })
        ));

        let companies = CompanyTypeTable::default_types();
        assert!(companies.get("Hedge Fund").is_err());
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        let result = FactorTable::new(
            TableKind::EducationLevel,
            vec![("PhD".to_string(), 0.7), ("None".to_string(), 0.0)],
        );
        assert!(matches!(result, Err(RiskError::InvalidReference { .. })));

        let result = FactorTable::new(TableKind::EducationField, vec![("Law".to_string(), -0.5)]);
        assert!(result.is_err());

        let result = FactorTable::new(TableKind::SchoolTier, vec![("Tier X".to_string(), f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_job_hazard_out_of_range_rejected() {
        let record = JobRecord {
            role_factor: 1.0,
            base_hazard: 120.0,
            industry: "Tech".to_string(),
        };
        assert!(JobTable::new(vec![("Prompt Engineer".to_string(), record)]).is_err());

        let record = JobRecord {
            role_factor: 0.0,
            base_hazard: 50.0,
            industry: "Tech".to_string(),
        };
        assert!(JobTable::new(vec![("Prompt Engineer".to_string(), record)]).is_err());
    }

    #[test]
    fn test_company_risk_validation() {
        let bad = CompanyTypeTable::new(vec![(
            "Shell Co".to_string(),
            CompanyRisk::SubScores { senti: 0.5, fin: f64::INFINITY, growth: 0.5 },
        )]);
        assert!(bad.is_err());

        let ok = CompanyTypeTable::new(vec![("Co-op".to_string(), CompanyRisk::Precomputed(0.85))]);
        assert_eq!(ok.unwrap().get("Co-op").unwrap(), CompanyRisk::Precomputed(0.85));
    }
}
