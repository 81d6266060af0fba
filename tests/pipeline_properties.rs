//! End-to-end scenarios and invariants of the risk and premium pipeline

use approx::assert_relative_eq;
use proptest::prelude::*;

use displacement_risk::factors::{compute_fus, experience_factor};
use displacement_risk::premium::{
    claim_probability, individual_probability, monthly_premium, payout_amount, quote_premium,
    systemic_probability,
};
use displacement_risk::profile::load_requests;
use displacement_risk::reference::ReferenceTables;
use displacement_risk::risk::{idiosyncratic_risk, interpolate_hazard, raw_idiosyncratic_score};
use displacement_risk::{Coverage, ParameterBundle, ScenarioRunner};

#[test]
fn neutral_profile_sits_on_risk_floor() {
    let f_exp = experience_factor(0, 0.015, 20);
    let fhc = 1.0 * 1.0 * 1.0 * 1.0 * f_exp;
    assert_eq!(fhc, 1.0);

    let v_raw = raw_idiosyncratic_score(fhc, 1.0, 1.0, 0.4, 0.6);
    assert_relative_eq!(v_raw, 1.0, epsilon = 1e-12);
    assert_eq!(idiosyncratic_risk(v_raw), 5.0);
}

#[test]
fn transition_halfway() {
    assert_relative_eq!(interpolate_hazard(5, 10, 80.0, 20.0), 50.0, epsilon = 1e-12);
}

#[test]
fn transition_complete_hits_target_exactly() {
    assert_eq!(interpolate_hazard(10, 10, 80.0, 20.0), 20.0);
}

#[test]
fn payout_for_quarter_salary_over_six_months() {
    assert_relative_eq!(payout_amount(90_000.0, 6, 25.0), 11_250.0, epsilon = 1e-9);
}

#[test]
fn zero_loss_pays_minimum_premium() {
    assert_eq!(monthly_premium(0.0, 1.5, 20.0), 20.0);
}

#[test]
fn sample_batch_evaluates() {
    let requests = load_requests("data/sample_requests.csv").expect("Failed to load sample requests");
    assert_eq!(requests.len(), 5);

    let runner = ScenarioRunner::from_csv().expect("Failed to load reference data");
    let results = runner.run_batch(&requests);

    for result in &results {
        let result = result.as_ref().expect("sample request rejected");
        assert!((5.0..=100.0).contains(&result.v_i_t));
        assert!(result.p_monthly >= runner.params().min_monthly_premium);
    }

    // Completed transition into teaching
    let data_scientist = results[4].as_ref().unwrap();
    assert_eq!(data_scientist.h_base, 20.0);
    // Full training on both tracks floors FUS
    assert_eq!(data_scientist.fus, 0.1);
}

fn coverage_strategy() -> impl Strategy<Value = Coverage> {
    (0.0..500_000.0f64, 0.0..=100.0f64, 0u32..=36).prop_map(|(salary, pct, months)| Coverage {
        annual_salary: salary,
        coverage_percentage: pct,
        coverage_duration_months: months,
    })
}

proptest! {
    #[test]
    fn idiosyncratic_risk_is_bounded(v_raw in -1e6..1e6f64) {
        let v = idiosyncratic_risk(v_raw);
        prop_assert!((5.0..=100.0).contains(&v));
    }

    #[test]
    fn idiosyncratic_risk_is_monotone(a in -1e4..1e4f64, b in -1e4..1e4f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(idiosyncratic_risk(lo) <= idiosyncratic_risk(hi));
    }

    #[test]
    fn hazard_interpolation_endpoints_and_bounds(
        ttv in 1u32..=120,
        k in 0u32..=240,
        h_current in 0.0..=100.0f64,
        h_target in 0.0..=100.0f64,
    ) {
        prop_assert_eq!(interpolate_hazard(0, ttv, h_current, h_target), h_current);
        prop_assert_eq!(interpolate_hazard(ttv, ttv, h_current, h_target), h_target);

        let h = interpolate_hazard(k, ttv, h_current, h_target);
        let lo = h_current.min(h_target);
        let hi = h_current.max(h_target);
        prop_assert!(h >= lo - 1e-9 && h <= hi + 1e-9);
        if k >= ttv {
            prop_assert_eq!(h, h_target);
        }
    }

    #[test]
    fn hazard_interpolation_is_monotone(
        ttv in 1u32..=60,
        h_current in 0.0..=100.0f64,
        h_target in 0.0..=100.0f64,
    ) {
        let path: Vec<f64> = (0..=ttv)
            .map(|k| interpolate_hazard(k, ttv, h_current, h_target))
            .collect();
        for pair in path.windows(2) {
            if h_target >= h_current {
                prop_assert!(pair[1] >= pair[0] - 1e-9);
            } else {
                prop_assert!(pair[1] <= pair[0] + 1e-9);
            }
        }
    }

    #[test]
    fn probabilities_stay_in_unit_interval(
        h_i in -50.0..500.0f64,
        v_i in -50.0..500.0f64,
        beta_s in 0.0..=1.0f64,
        beta_i in 0.0..=1.0f64,
    ) {
        let p_s = systemic_probability(h_i, beta_s);
        let p_i = individual_probability(v_i, beta_i);
        let p_c = claim_probability(p_s, p_i);
        prop_assert!((0.0..=1.0).contains(&p_s));
        prop_assert!((0.0..=1.0).contains(&p_i));
        prop_assert!((0.0..=1.0).contains(&p_c));
    }

    #[test]
    fn premium_never_below_floor(
        e_loss in 0.0..1e7f64,
        loading in 1.0..5.0f64,
        p_min in 0.0..1_000.0f64,
    ) {
        prop_assert!(monthly_premium(e_loss, loading, p_min) >= p_min);
    }

    #[test]
    fn quote_respects_invariants(
        v_i in 5.0..=100.0f64,
        h_i in 0.0..=120.0f64,
        coverage in coverage_strategy(),
    ) {
        let params = ParameterBundle::default();
        let quote = quote_premium(v_i, h_i, &coverage, &params);
        prop_assert!((0.0..=1.0).contains(&quote.p_claim));
        prop_assert!(quote.e_loss >= 0.0);
        prop_assert!(quote.e_loss <= quote.l_payout + 1e-9);
        prop_assert!(quote.p_monthly >= params.min_monthly_premium);
    }

    #[test]
    fn upskilling_factor_stays_positive(
        p_gen in 0.0..=100.0f64,
        p_spec in 0.0..=100.0f64,
        gamma_gen in 0.0..3.0f64,
        gamma_spec in 0.0..3.0f64,
    ) {
        let fus = compute_fus(p_gen, p_spec, gamma_gen, gamma_spec);
        prop_assert!(fus >= 0.1);
        prop_assert!(fus <= 1.0);
    }

    #[test]
    fn experience_factor_floored_and_capped(
        years in 0u32..=80,
        decay in 0.0..0.5f64,
        cap in 0u32..=60,
    ) {
        let f_exp = experience_factor(years, decay, cap);
        prop_assert!(f_exp >= 0.1);
        prop_assert_eq!(f_exp, experience_factor(years.min(cap), decay, cap));
    }

    #[test]
    fn evaluation_is_deterministic(
        job_idx in 0usize..12,
        target_idx in 0usize..12,
        years in 0u32..=40,
        k in 0u32..=24,
        m_econ in 0.8..=1.2f64,
        iai in 0.8..=1.2f64,
        coverage in coverage_strategy(),
    ) {
        let tables = ReferenceTables::default_tables();
        let jobs: Vec<String> = tables.jobs.iter().map(|(title, _)| title.to_string()).collect();
        let runner = ScenarioRunner::new();

        let request = displacement_risk::EvaluationRequest {
            profile: displacement_risk::Profile {
                job_title: jobs[job_idx].clone(),
                years_experience: years,
                education_level: "Master's".to_string(),
                education_field: "Healthcare".to_string(),
                school_tier: "Tier 3 (Top 50%)".to_string(),
                company_type: "Mid-size Firm (Growth)".to_string(),
                p_gen_pct: 25.0,
                p_spec_pct: 50.0,
            },
            environment: displacement_risk::Environment { m_econ, iai },
            coverage,
            transition: Some(displacement_risk::Transition {
                target_job: jobs[target_idx].clone(),
                months_elapsed: k,
                ttv_months: Some(12),
            }),
        };

        let first = runner.run(&request).unwrap();
        let second = runner.run(&request).unwrap();
        prop_assert_eq!(first.p_monthly.to_bits(), second.p_monthly.to_bits());
        prop_assert_eq!(&first, &second);
        prop_assert!((5.0..=100.0).contains(&first.v_i_t));
        prop_assert!(first.p_monthly >= 20.0);
    }
}
