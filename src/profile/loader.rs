//! Load evaluation requests from a batch CSV file

use csv::Reader;
use serde::Deserialize;
use std::path::Path;

use super::{Coverage, Environment, EvaluationRequest, Profile, Transition};
use crate::error::{Result, RiskError};

/// Raw CSV row; transition columns may be left empty
#[derive(Debug, Deserialize)]
struct CsvRow {
    job_title: String,
    years_experience: u32,
    education_level: String,
    education_field: String,
    school_tier: String,
    company_type: String,
    p_gen_pct: f64,
    p_spec_pct: f64,
    m_econ: f64,
    iai: f64,
    annual_salary: f64,
    coverage_percentage: f64,
    coverage_duration_months: u32,
    #[serde(default)]
    target_job: Option<String>,
    #[serde(default)]
    months_elapsed: Option<u32>,
    #[serde(default)]
    ttv_months: Option<u32>,
}

impl CsvRow {
    fn into_request(self) -> Result<EvaluationRequest> {
        let transition = match (self.target_job.filter(|job| !job.is_empty()), self.months_elapsed) {
            (Some(target_job), Some(months_elapsed)) => Some(Transition {
                target_job,
                months_elapsed,
                ttv_months: self.ttv_months,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(RiskError::input("months_elapsed", "required when target_job is set"))
            }
            (None, Some(_)) => {
                return Err(RiskError::input("target_job", "required when months_elapsed is set"))
            }
        };

        Ok(EvaluationRequest {
            profile: Profile {
                job_title: self.job_title,
                years_experience: self.years_experience,
                education_level: self.education_level,
                education_field: self.education_field,
                school_tier: self.school_tier,
                company_type: self.company_type,
                p_gen_pct: self.p_gen_pct,
                p_spec_pct: self.p_spec_pct,
            },
            environment: Environment {
                m_econ: self.m_econ,
                iai: self.iai,
            },
            coverage: Coverage {
                annual_salary: self.annual_salary,
                coverage_percentage: self.coverage_percentage,
                coverage_duration_months: self.coverage_duration_months,
            },
            transition,
        })
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<EvaluationRequest>> {
    let reader = Reader::from_path(path)?;
    read_requests(reader)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<EvaluationRequest>> {
    read_requests(Reader::from_reader(reader))
}

fn read_requests<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<EvaluationRequest>> {
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.into_request()?);
    }

    Ok(requests)
}
