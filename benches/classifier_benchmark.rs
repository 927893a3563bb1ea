/// Benchmark module for the dashboard's pure computations.
/// Measures metric classification, recommendation grouping, and result handling.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use repocompass::app::{App, Tab};
use repocompass::metrics::{activity_tier, bus_factor_tier, resolution_tier, TierReport};
use repocompass::types::{AnalysisResult, BasicInfo, Recommendation};
use repocompass::utils::group_by_priority;

/// Build a result shaped like a typical API response
fn sample_result() -> AnalysisResult {
    let mut result = AnalysisResult {
        basic_info: BasicInfo {
            full_name: "apache/iotdb".to_string(),
            owner: "apache".to_string(),
            name: "iotdb".to_string(),
            platform: "github".to_string(),
        },
        ..Default::default()
    };
    result.activity.score = 812.5;
    result.community.bus_factor = 4.0;
    result.issues.resolution_efficiency = 72.0;
    result
}

/// Build a mixed list of recommendations, including unknown priorities
///
/// # Arguments
/// * `count` - Number of recommendations to generate
fn sample_recommendations(count: usize) -> Vec<Recommendation> {
    let priorities = ["high", "low", "medium", "urgent", "low"];
    (0..count)
        .map(|i| Recommendation {
            title: format!("Recommendation {}", i),
            description: "Review open issues labelled good-first-issue".to_string(),
            kind: "beginner".to_string(),
            priority: priorities[i % priorities.len()].to_string(),
        })
        .collect()
}

/// Benchmark tier classification
/// Sweeps each classifier across its input range
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_classifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("activity_tier_sweep", |b| {
        b.iter(|| {
            for score in (0..1000).step_by(5) {
                black_box(activity_tier(black_box(score as f64)));
            }
        });
    });

    group.bench_function("bus_factor_tier_sweep", |b| {
        b.iter(|| {
            for factor in 0..20 {
                black_box(bus_factor_tier(black_box(factor as f64)));
            }
        });
    });

    group.bench_function("resolution_tier_sweep", |b| {
        b.iter(|| {
            for pct in 0..=100 {
                black_box(resolution_tier(black_box(pct as f64)));
            }
        });
    });

    let result = sample_result();
    group.bench_function("tier_report", |b| {
        b.iter(|| TierReport::from_result(black_box(&result)));
    });

    group.finish();
}

/// Benchmark recommendation grouping
/// Tests partitioning small and large recommendation lists
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    let small = sample_recommendations(8);
    group.bench_function("group_small", |b| {
        b.iter(|| group_by_priority(black_box(&small)));
    });

    let large = sample_recommendations(1_000);
    group.bench_function("group_large", |b| {
        b.iter(|| group_by_priority(black_box(&large)));
    });

    group.finish();
}

/// Benchmark request bookkeeping
/// Tests a full begin/complete cycle on the application state
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_request_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_cycle");
    let result = sample_result();

    group.bench_function("analysis_round_trip", |b| {
        let mut app = App::default();
        b.iter(|| {
            let (token, _id) = app.begin_analysis();
            app.complete_analysis(token, Ok(result.clone()));
            app.select_tab(Tab::Community);
        });
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_classifiers, bench_grouping, bench_request_cycle
);
criterion_main!(benches);
