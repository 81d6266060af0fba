//! Write the built-in reference tables as CSV files
//!
//! Usage: cargo run --bin export_reference -- [output_dir]
//!
//! The output directory defaults to data/reference and can be passed back to
//! the CLI with --reference-dir after editing.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use displacement_risk::reference::loader::{write_reference, DEFAULT_REFERENCE_PATH};
use displacement_risk::ReferenceTables;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_PATH));

    let tables = ReferenceTables::default_tables();
    write_reference(&output_dir, &tables)
        .with_context(|| format!("writing reference data to {}", output_dir.display()))?;

    // Read back to make sure the files load cleanly
    let reloaded = ReferenceTables::from_csv_path(&output_dir)
        .with_context(|| format!("reloading reference data from {}", output_dir.display()))?;

    println!("Reference data written to: {}", output_dir.display());
    println!("  Jobs:              {}", reloaded.jobs.len());
    println!("  Education levels:  {}", reloaded.education_levels.len());
    println!("  Education fields:  {}", reloaded.education_fields.len());
    println!("  School tiers:      {}", reloaded.school_tiers.len());
    println!("  Company types:     {}", reloaded.company_types.len());

    Ok(())
}
