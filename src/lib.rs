//! Displacement Risk - AI displacement risk scoring and income protection pricing
//!
//! This library provides:
//! - Human capital, company risk and upskilling factors
//! - Idiosyncratic and systematic risk scores
//! - Time-to-Value (TTV) career transition hazard model
//! - Claim probability, expected loss and monthly premium
//! - Reference data and parameter loading (CSV / JSON)

pub mod error;
pub mod reference;
pub mod parameters;
pub mod profile;
pub mod factors;
pub mod risk;
pub mod premium;
pub mod pipeline;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, RiskError, TableKind};
pub use reference::ReferenceTables;
pub use parameters::{ParameterBundle, ParameterOverrides};
pub use profile::{Coverage, Environment, EvaluationRequest, Profile, Transition};
pub use pipeline::{EvaluationResult, Evaluator, TransitionSimulation};
pub use scenario::ScenarioRunner;
