//! Reference data: occupation, education, school tier and company lookups

mod tables;
pub mod loader;

pub use tables::{CompanyRisk, CompanyTypeTable, FactorTable, JobRecord, JobTable};
pub use loader::LoadedReference;

use std::path::Path;

use crate::error::Result;

/// Container for all lookup tables consumed by the evaluators
///
/// Built once at start-up and only read afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub jobs: JobTable,
    pub education_levels: FactorTable,
    pub education_fields: FactorTable,
    pub school_tiers: FactorTable,
    pub company_types: CompanyTypeTable,
}

impl ReferenceTables {
    /// Built-in synthetic datasets
    pub fn default_tables() -> Self {
        Self {
            jobs: JobTable::default_catalog(),
            education_levels: FactorTable::default_education_levels(),
            education_fields: FactorTable::default_education_fields(),
            school_tiers: FactorTable::default_school_tiers(),
            company_types: CompanyTypeTable::default_types(),
        }
    }

    /// Load tables from CSV files in the default location (data/reference/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_REFERENCE_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::from_loaded(LoadedReference::load_from(path)?))
    }

    pub fn from_loaded(loaded: LoadedReference) -> Self {
        Self {
            jobs: loaded.jobs,
            education_levels: loaded.education_levels,
            education_fields: loaded.education_fields,
            school_tiers: loaded.school_tiers,
            company_types: loaded.company_types,
        }
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::default_tables()
    }
}
