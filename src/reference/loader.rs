//! CSV-based reference data loader
//!
//! Loads the lookup tables from CSV files in data/reference/

use std::fs::File;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError, TableKind};
use super::tables::{CompanyRisk, CompanyTypeTable, FactorTable, JobRecord, JobTable};

/// Default path to reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

pub const JOBS_FILE: &str = "jobs.csv";
pub const EDUCATION_LEVELS_FILE: &str = "education_levels.csv";
pub const EDUCATION_FIELDS_FILE: &str = "education_fields.csv";
pub const SCHOOL_TIERS_FILE: &str = "school_tiers.csv";
pub const COMPANY_TYPES_FILE: &str = "company_types.csv";

/// Row of jobs.csv
#[derive(Debug, Serialize, Deserialize)]
pub struct JobRow {
    pub job_title: String,
    pub role_factor: f64,
    pub base_hazard: f64,
    #[serde(default)]
    pub industry: String,
}

/// Row of company_types.csv
///
/// Either all three sub-scores or `fcr` must be filled in.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyRow {
    pub company_type: String,
    pub s_senti: Option<f64>,
    pub s_fin: Option<f64>,
    pub s_growth: Option<f64>,
    pub fcr: Option<f64>,
}

impl CompanyRow {
    fn into_entry(self) -> Result<(String, CompanyRisk)> {
        let risk = match (self.s_senti, self.s_fin, self.s_growth, self.fcr) {
            (Some(senti), Some(fin), Some(growth), None) => {
                CompanyRisk::SubScores { senti, fin, growth }
            }
            (None, None, None, Some(fcr)) => CompanyRisk::Precomputed(fcr),
            _ => {
                return Err(RiskError::reference(
                    TableKind::CompanyType,
                    &self.company_type,
                    "expected either s_senti/s_fin/s_growth or fcr",
                ))
            }
        };
        Ok((self.company_type, risk))
    }

    pub fn from_entry(company_type: &str, risk: &CompanyRisk) -> Self {
        match *risk {
            CompanyRisk::SubScores { senti, fin, growth } => Self {
                company_type: company_type.to_string(),
                s_senti: Some(senti),
                s_fin: Some(fin),
                s_growth: Some(growth),
                fcr: None,
            },
            CompanyRisk::Precomputed(fcr) => Self {
                company_type: company_type.to_string(),
                s_senti: None,
                s_fin: None,
                s_growth: None,
                fcr: Some(fcr),
            },
        }
    }
}

/// Load the job catalog from jobs.csv
pub fn load_jobs(path: &Path) -> Result<JobTable> {
    let file = File::open(path.join(JOBS_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let row: JobRow = result?;
        entries.push((
            row.job_title,
            JobRecord {
                role_factor: row.role_factor,
                base_hazard: row.base_hazard,
                industry: row.industry,
            },
        ));
    }

    JobTable::new(entries)
}

/// Load a two-column (key, factor) table
/// The header row is skipped; column names are not checked.
pub fn load_factor_table(path: &Path, file_name: &str, kind: TableKind) -> Result<FactorTable> {
    let file = File::open(path.join(file_name))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let (key, factor): (String, f64) = result?;
        entries.push((key, factor));
    }

    FactorTable::new(kind, entries)
}

/// Load company types from company_types.csv
pub fn load_company_types(path: &Path) -> Result<CompanyTypeTable> {
    let file = File::open(path.join(COMPANY_TYPES_FILE))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let row: CompanyRow = result?;
        entries.push(row.into_entry()?);
    }

    CompanyTypeTable::new(entries)
}

/// All reference tables as read from a directory
pub struct LoadedReference {
    pub jobs: JobTable,
    pub education_levels: FactorTable,
    pub education_fields: FactorTable,
    pub school_tiers: FactorTable,
    pub company_types: CompanyTypeTable,
}

impl LoadedReference {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_REFERENCE_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let loaded = Self {
            jobs: load_jobs(path)?,
            education_levels: load_factor_table(path, EDUCATION_LEVELS_FILE, TableKind::EducationLevel)?,
            education_fields: load_factor_table(path, EDUCATION_FIELDS_FILE, TableKind::EducationField)?,
            school_tiers: load_factor_table(path, SCHOOL_TIERS_FILE, TableKind::SchoolTier)?,
            company_types: load_company_types(path)?,
        };
        info!(
            "loaded reference data from {}: {} jobs, {} company types",
            path.display(),
            loaded.jobs.len(),
            loaded.company_types.len()
        );
        Ok(loaded)
    }
}

/// Write a table set back out in the layout `LoadedReference` reads
pub fn write_reference(path: &Path, tables: &super::ReferenceTables) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let mut writer = csv::Writer::from_path(path.join(JOBS_FILE))?;
    for (title, job) in tables.jobs.iter() {
        writer.serialize(JobRow {
            job_title: title.to_string(),
            role_factor: job.role_factor,
            base_hazard: job.base_hazard,
            industry: job.industry.clone(),
        })?;
    }
    writer.flush()?;

    let factor_files = [
        (EDUCATION_LEVELS_FILE, "level", &tables.education_levels),
        (EDUCATION_FIELDS_FILE, "field", &tables.education_fields),
        (SCHOOL_TIERS_FILE, "tier", &tables.school_tiers),
    ];
    for (file_name, key_column, table) in factor_files {
        let mut writer = csv::Writer::from_path(path.join(file_name))?;
        writer.write_record([key_column, "factor"])?;
        for (key, factor) in table.iter() {
            writer.write_record([key.to_string(), factor.to_string()])?;
        }
        writer.flush()?;
    }

    let mut writer = csv::Writer::from_path(path.join(COMPANY_TYPES_FILE))?;
    for (company_type, risk) in tables.company_types.iter() {
        writer.serialize(CompanyRow::from_entry(company_type, risk))?;
    }
    writer.flush()?;

    Ok(())
}
