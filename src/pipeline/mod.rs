//! Evaluation pipeline for single requests and transition simulations

mod engine;
mod result;

pub use engine::Evaluator;
pub use result::{EvaluationResult, TransitionSimulation};
