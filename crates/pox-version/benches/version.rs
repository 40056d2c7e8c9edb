use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pox_version::{try_parse, Comparator, Operator, Version};

fn bench_try_parse(c: &mut Criterion) {
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-alpha.beta.1+exp.sha.5114f85",
        "10.20.30",
        "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
        "01.2.3",
        "1.2",
        "",
    ];

    c.bench_function("try_parse", |b| {
        b.iter(|| {
            for version in versions {
                black_box(try_parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_to_canonical_string(c: &mut Criterion) {
    let versions: Vec<Version> = ["1.2.3", "1.2.3-rc.1", "1.2.3-rc.1+build.5"]
        .iter()
        .filter_map(|v| try_parse(v).ok())
        .collect();

    c.bench_function("to_canonical_string", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(version.to_canonical_string());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4", Operator::LessThan),
        ("2.4.0-alpha", "2.4.0", Operator::LessThan),
        ("1.0.0-alpha.9", "1.0.0-alpha.10", Operator::LessThan),
        ("1.2.3+build.1", "1.2.3+build.2", Operator::Equal),
        ("1.0.0-rc.1", "1.0.0-beta.11", Operator::GreaterThan),
        ("1.0.0-x.7.z.92", "1.0.0-x.7.z.93", Operator::NotEqual),
    ];

    let parsed: Vec<(Version, Version, Operator)> = cases
        .iter()
        .filter_map(|(a, b, op)| Some((try_parse(a).ok()?, try_parse(b).ok()?, *op)))
        .collect();

    c.bench_function("compare", |b| {
        b.iter(|| {
            for (a, bver, op) in &parsed {
                black_box(Comparator::compare(black_box(a), *op, black_box(bver)));
            }
        })
    });
}

criterion_group!(benches, bench_try_parse, bench_to_canonical_string, bench_compare);
criterion_main!(benches);
