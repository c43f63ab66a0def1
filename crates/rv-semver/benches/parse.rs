use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rv_semver::Version;

fn parse_release(c: &mut Criterion) {
    let input = "1.82.0".to_owned();
    c.bench_function(&format!("parse {input} into Version"), |b| {
        b.iter(|| {
            let _ver: Version = black_box(input.parse().unwrap());
        })
    });
}

fn parse_prerelease_and_build(c: &mut Criterion) {
    let input = "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay".to_owned();
    c.bench_function(&format!("parse {input} into Version"), |b| {
        b.iter(|| {
            let _ver: Version = black_box(input.parse().unwrap());
        })
    });
}

fn parse_long_hyphen_run(c: &mut Criterion) {
    let input = format!("1.0.0-{}!", "-".repeat(10_000));
    c.bench_function("reject 10k hyphen prerelease", |b| {
        b.iter(|| {
            let _err = black_box(input.parse::<Version>().unwrap_err());
        })
    });
}

fn version_to_string(c: &mut Criterion) {
    let version: Version = "1.0.0-rc.1+build.5".parse().unwrap();
    c.bench_function(&format!("Call \"{version}\".to_string()"), |b| {
        b.iter(|| {
            let _s = black_box(version.to_string());
        })
    });
}

criterion_group!(
    benches,
    parse_release,
    parse_prerelease_and_build,
    parse_long_hyphen_run,
    version_to_string
);
criterion_main!(benches);
