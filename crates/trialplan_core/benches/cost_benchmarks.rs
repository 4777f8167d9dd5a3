//! Criterion benchmarks for trialplan_core
//!
//! Run with: cargo bench -p trialplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trialplan_core::cost::estimate;
use trialplan_core::model::{
    CostParameters, FeasibilityGrade, FeasibilityParameters, FeasibilityResult, GeneratedStudy,
    PlanningScenario, VitalsRecord,
};
use trialplan_core::validation::validate;

fn bench_estimate(c: &mut Criterion) {
    let params = CostParameters::default();
    c.bench_function("estimate_default", |b| {
        b.iter(|| estimate(black_box(&params), black_box(None)))
    });
    c.bench_function("estimate_with_override", |b| {
        b.iter(|| estimate(black_box(&params), black_box(Some(250))))
    });
}

fn create_study(subjects_per_arm: usize, visits: usize) -> GeneratedStudy {
    let mut vitals = Vec::with_capacity(subjects_per_arm * 2 * visits);
    for subject in 0..subjects_per_arm * 2 {
        let arm = if subject % 2 == 0 { "Active" } else { "Placebo" };
        for _ in 0..visits {
            vitals.push(VitalsRecord::new(format!("RND-{subject:05}"), arm));
        }
    }
    GeneratedStudy {
        vitals,
        ..Default::default()
    }
}

fn bench_validate(c: &mut Criterion) {
    let result = FeasibilityResult {
        required_n_per_arm: 500,
        total_n: 1000,
        effect_size_cohens_d: 0.5,
        feasibility: FeasibilityGrade::Feasible,
        interpretation: String::new(),
        assumptions: vec![],
        recommendation: String::new(),
    };
    let scenario = PlanningScenario::from_feasibility(
        "bench",
        &FeasibilityParameters::default(),
        &result,
        jiff::Timestamp::UNIX_EPOCH,
    );

    let mut group = c.benchmark_group("validate");
    for subjects in [100, 1_000, 10_000] {
        let study = create_study(subjects, 4);
        group.bench_with_input(BenchmarkId::from_parameter(subjects), &study, |b, study| {
            b.iter(|| validate(black_box(&scenario), black_box(study)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_validate);
criterion_main!(benches);
