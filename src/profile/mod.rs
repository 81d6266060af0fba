//! Evaluation inputs: profile, environment, coverage and transition

mod data;
pub mod loader;

pub use data::{Coverage, Environment, EvaluationRequest, Profile, Transition, MAX_TTV_MONTHS};
pub use loader::{load_requests, load_requests_from_reader};
