// benches/case_bench.rs
#![deny(unsafe_code)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use textscrub::{CaseStyle, apply_case, profile, tokenize};

const SAMPLES: &[&str] = &[
    "helloWorld",
    "XMLHttpRequest",
    "the quick_brown-fox jumpsOver HTTPServer",
    "SCREAMING_SNAKE_CASE_IDENTIFIER_WITH_MANY_PARTS",
    "already snake_case words",
    "grüße aus straße",
    "",
];

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenize");
    for &input in SAMPLES {
        group.throughput(Throughput::Bytes(input.len() as u64));
        for auto_split in [true, false] {
            let id = BenchmarkId::new(if auto_split { "auto" } else { "spaces" }, input);
            group.bench_function(id, |b| {
                b.iter(|| black_box(tokenize(black_box(input), auto_split).len()));
            });
        }
    }
    group.finish();
}

fn bench_apply_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("ApplyCase");
    let input = SAMPLES[2];
    let tokens = tokenize(input, true);
    for style in CaseStyle::ALL {
        group.bench_function(BenchmarkId::new("style", style), |b| {
            b.iter(|| black_box(apply_case(black_box(&tokens), style)));
        });
    }
    group.finish();
}

fn bench_identifier_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("IdentifierProfile");
    let scrubber = profile::identifier(CaseStyle::SnakeCase);
    for input in ["user\u{200B}Account\u{FEFF}ID", "user_account_id", "parseHTTPRequest"] {
        group.bench_function(BenchmarkId::from_parameter(input.escape_debug()), |b| {
            b.iter(|| black_box(scrubber.scrub(black_box(input))));
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(2))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(200);
    targets = bench_tokenize, bench_apply_case, bench_identifier_profile
}

criterion_main!(benches);
