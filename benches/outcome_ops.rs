// Baseline benchmarks for Outcome and Fault performance
// Run with: cargo bench

use commons_result::prelude::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Benchmark constructing outcomes
fn bench_outcome_construction(c: &mut Criterion) {
    c.bench_function("outcome_success", |b| {
        b.iter(|| {
            let outcome: Outcome<i64, Fault> = Outcome::success(black_box(42));
            black_box(outcome);
        });
    });

    c.bench_function("outcome_failure", |b| {
        b.iter(|| {
            let outcome: Fallible<i64> = Outcome::failure(Fault::validation(black_box("bad")));
            black_box(outcome);
        });
    });
}

/// Benchmark a combinator chain (hot path for pipelines)
fn bench_combinator_chain(c: &mut Criterion) {
    c.bench_function("outcome_map_chain", |b| {
        b.iter(|| {
            let outcome: Outcome<i64, Fault> = Outcome::success(black_box(21));
            let result = outcome.map(|n| n * 2).map(|n| n + 1).map(|n| n - 1);
            black_box(result);
        });
    });

    c.bench_function("outcome_and_then_chain", |b| {
        b.iter(|| {
            let outcome: Fallible<i64> = Outcome::success(black_box(21));
            let result = outcome
                .and_then(|n| Outcome::success(n * 2))
                .and_then(|n| {
                    if n > 0 {
                        Outcome::success(n)
                    } else {
                        Outcome::failure(Fault::validation("non-positive"))
                    }
                });
            black_box(result);
        });
    });

    c.bench_function("outcome_short_circuit", |b| {
        b.iter(|| {
            let outcome: Fallible<i64> = Outcome::failure(Fault::parse(black_box("bad digit")));
            let result = outcome.map(|n| n * 2).and_then(Outcome::success);
            black_box(result);
        });
    });
}

/// Benchmark fault creation (static vs formatted message)
fn bench_fault_creation(c: &mut Criterion) {
    c.bench_function("fault_creation_static", |b| {
        b.iter(|| {
            let fault = parse_fault!("bad digit");
            black_box(fault);
        });
    });

    c.bench_function("fault_creation_dynamic", |b| {
        b.iter(|| {
            let fault = Fault::parse(black_box("bad digit"));
            black_box(fault);
        });
    });

    c.bench_function("fault_wrap_chain", |b| {
        b.iter(|| {
            let fault = Fault::io(black_box("disk full"))
                .wrap(black_box("writing snapshot"))
                .wrap(black_box("saving session"));
            black_box(fault);
        });
    });
}

/// Benchmark fault code access and Display formatting
fn bench_fault_access(c: &mut Criterion) {
    let fault = Fault::parse("bad digit").wrap("loading port");

    c.bench_function("fault_code_access", |b| {
        b.iter(|| {
            black_box(fault.code());
            black_box(fault.category());
        });
    });

    c.bench_function("fault_display", |b| {
        b.iter(|| {
            let s = format!("{}", black_box(&fault));
            black_box(s);
        });
    });
}

/// Benchmark extraction via fold (the recommended elimination)
fn bench_fold(c: &mut Criterion) {
    c.bench_function("outcome_fold", |b| {
        b.iter(|| {
            let outcome: Outcome<i64, Fault> = Outcome::success(black_box(42));
            let n = outcome.fold(|v| v, |_| 0);
            black_box(n);
        });
    });
}

criterion_group!(
    benches,
    bench_outcome_construction,
    bench_combinator_chain,
    bench_fault_creation,
    bench_fault_access,
    bench_fold,
);

criterion_main!(benches);
