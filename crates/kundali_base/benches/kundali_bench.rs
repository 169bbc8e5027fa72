use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::dasha::{vimshottari, vimshottari_snapshot};
use kundali_base::{ZodiacPosition, panchanga_from_longitudes};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("zodiac_position", |b| {
        b.iter(|| ZodiacPosition::from_longitude(black_box(lon)))
    });
    group.finish();
}

fn panchanga_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("panchanga");
    group.bench_function("panchanga_from_longitudes", |b| {
        b.iter(|| panchanga_from_longitudes(black_box(211.75), black_box(66.56)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = 2_451_545.0;
    let moon = 201.234;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_tree", |b| {
        b.iter(|| vimshottari(black_box(birth), black_box(moon)))
    });
    group.bench_function("vimshottari_snapshot", |b| {
        b.iter(|| vimshottari_snapshot(black_box(birth), black_box(moon), black_box(birth + 9000.0)))
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, panchanga_bench, dasha_bench);
criterion_main!(benches);
