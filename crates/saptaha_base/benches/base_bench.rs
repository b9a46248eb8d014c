use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saptaha_base::{
    karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation, vaara_from_jd,
    yoga_from_sum,
};

fn segment_bench(c: &mut Criterion) {
    let elong = 211.75;
    let moon_sid = 187.23;
    let sum = 278.31;
    let jd = 2_460_324.5;

    let mut group = c.benchmark_group("segments");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(moon_sid)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("vaara_from_jd", |b| b.iter(|| vaara_from_jd(black_box(jd))));
    group.finish();
}

criterion_group!(benches, segment_bench);
criterion_main!(benches);
