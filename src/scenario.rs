//! Scenario runner for repeated evaluations
//!
//! Loads reference tables and parameters once, then runs any number of
//! evaluations, batches and parameter scenarios against them without
//! re-reading files.

use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::parameters::{ParameterBundle, ParameterOverrides};
use crate::pipeline::{EvaluationResult, Evaluator, TransitionSimulation};
use crate::profile::{Environment, EvaluationRequest, Transition};
use crate::reference::ReferenceTables;

/// Pre-loaded runner holding the read-only model inputs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Same request under different loading factors
/// for loading in [1.2, 1.5, 2.0] {
///     let overrides = ParameterOverrides { loading_factor: Some(loading), ..Default::default() };
///     let result = runner.run_with_overrides(&request, &overrides)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    tables: ReferenceTables,
    params: ParameterBundle,
}

impl ScenarioRunner {
    /// Runner with the built-in tables and default parameters
    pub fn new() -> Self {
        Self {
            tables: ReferenceTables::default_tables(),
            params: ParameterBundle::default(),
        }
    }

    /// Runner with tables loaded from data/reference/ and default parameters
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            tables: ReferenceTables::from_csv()?,
            params: ParameterBundle::default(),
        })
    }

    /// Runner with tables from a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self {
            tables: ReferenceTables::from_csv_path(path)?,
            params: ParameterBundle::default(),
        })
    }

    /// Runner with pre-built inputs; the parameters are validated here
    pub fn with_inputs(tables: ReferenceTables, params: ParameterBundle) -> Result<Self> {
        params.validate()?;
        Ok(Self { tables, params })
    }

    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.tables, &self.params)
    }

    /// Evaluate a single request with the base parameters
    pub fn run(&self, request: &EvaluationRequest) -> Result<EvaluationResult> {
        self.evaluator().evaluate(request)
    }

    /// Evaluate a single request with per-call overrides
    ///
    /// The overrides apply to this call only; the base bundle is untouched.
    pub fn run_with_overrides(
        &self,
        request: &EvaluationRequest,
        overrides: &ParameterOverrides,
    ) -> Result<EvaluationResult> {
        if overrides.is_empty() {
            return self.run(request);
        }
        let params = self.params.with_overrides(overrides)?;
        Evaluator::new(&self.tables, &params).evaluate(request)
    }

    /// Evaluate many requests; each one succeeds or fails independently
    pub fn run_batch(&self, requests: &[EvaluationRequest]) -> Vec<Result<EvaluationResult>> {
        self.batch_with(&self.params, requests)
    }

    /// Evaluate many requests under one set of overrides
    ///
    /// Invalid overrides fail the whole batch before any request runs.
    pub fn run_batch_with_overrides(
        &self,
        requests: &[EvaluationRequest],
        overrides: &ParameterOverrides,
    ) -> Result<Vec<Result<EvaluationResult>>> {
        if overrides.is_empty() {
            return Ok(self.run_batch(requests));
        }
        let params = self.params.with_overrides(overrides)?;
        Ok(self.batch_with(&params, requests))
    }

    fn batch_with(
        &self,
        params: &ParameterBundle,
        requests: &[EvaluationRequest],
    ) -> Vec<Result<EvaluationResult>> {
        let evaluator = Evaluator::new(&self.tables, params);
        requests
            .iter()
            .enumerate()
            .map(|(idx, request)| {
                let result = evaluator.evaluate(request);
                if let Err(e) = &result {
                    warn!("request {} rejected: {}", idx + 1, e);
                }
                result
            })
            .collect()
    }

    /// Evaluate one request under several parameter scenarios
    pub fn run_scenarios(
        &self,
        request: &EvaluationRequest,
        scenarios: &[ParameterOverrides],
    ) -> Vec<Result<EvaluationResult>> {
        scenarios
            .iter()
            .map(|overrides| self.run_with_overrides(request, overrides))
            .collect()
    }

    /// Simulate a career transition from `current_job`
    pub fn simulate(
        &self,
        current_job: &str,
        transition: &Transition,
        environment: &Environment,
    ) -> Result<TransitionSimulation> {
        self.evaluator().simulate_transition(current_job, transition, environment)
    }

    /// Get reference to the loaded tables
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Get reference to the base parameters
    pub fn params(&self) -> &ParameterBundle {
        &self.params
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
