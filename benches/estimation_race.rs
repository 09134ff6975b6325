/// Benchmarks comparing the four estimation methods on the same samples and queries.
/// Newton and Lagrange build the same polynomial, so the gap between them shows the cost of
/// re-deriving the Lagrange basis on every query against fitting divided differences once.
/// The spline and regression rows show the fitting cost of the piecewise and least squares methods.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lib_estimation::{
    config::EstimationConfig,
    estimation::{method::Method, orchestrator::EstimationOrchestrator},
    interpolation::{cubic_spline_interpolator::SplineBoundary, estimation_trait::CanEstimate1D},
    observe::logging::{init_logging, LogConfig},
    samples::sample_set::{QuerySet, SampleSet},
};
use ndarray::Array1;

fn growth_like_samples(n: usize) -> SampleSet {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.iter().map(|&v| 12.0 / (1.0 + (-(v - n as f64 / 2.0) / 4.0).exp())).collect();
    SampleSet::new(x, y).expect("benchmark samples are valid")
}

fn bench_methods(c: &mut Criterion) {
    // Errors only, as an embedding application would run it
    init_logging(&LogConfig::quiet());
    let queries = Array1::linspace(0.0, 10.0, 200);
    let mut group = c.benchmark_group("fit_and_estimate");
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[4usize, 10, 24] {
        let samples = growth_like_samples(n);
        for method in Method::all() {
            group.bench_with_input(BenchmarkId::new(method.to_string(), n), &n, |b, _| {
                b.iter(|| {
                    let fitted = method
                        .fit(black_box(&samples), SplineBoundary::NotAKnot)
                        .expect("fit");
                    black_box(fitted.estimate(queries.view()))
                })
            });
        }
    }
    group.finish();
}

fn bench_orchestrator(c: &mut Criterion) {
    let samples = growth_like_samples(24);
    let queries = QuerySet::new((0..200).map(|i| i as f64 * 0.1).collect()).expect("queries");
    let mut group = c.benchmark_group("orchestrator");
    for parallel in [false, true] {
        let orchestrator = EstimationOrchestrator::new(EstimationConfig {
            parallel,
            ..Default::default()
        });
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(orchestrator.estimate(&samples, &queries).expect("estimate")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_orchestrator);
criterion_main!(benches);
