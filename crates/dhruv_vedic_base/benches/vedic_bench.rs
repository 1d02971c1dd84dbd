use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_vedic_base::{
    Amsha, Chart, ChartKind, Graha, amsha_longitude, ashtakavarga, bhukti_table, derive_chart,
    planets_aspecting_house, vimshottari_table,
};

fn sample_chart() -> Chart {
    Chart::builder(ChartKind::Rasi)
        .ascendant(215.0)
        .graha(Graha::Surya, 280.5, false)
        .graha(Graha::Chandra, 292.402721, false)
        .graha(Graha::Mangal, 14.2, false)
        .graha(Graha::Buddh, 265.0, true)
        .graha(Graha::Guru, 76.8, true)
        .graha(Graha::Shukra, 300.1, false)
        .graha(Graha::Shani, 266.3, false)
        .nodes(304.0)
        .build()
        .expect("valid chart")
}

fn harmonic_bench(c: &mut Criterion) {
    let lon = 123.456;
    let chart = sample_chart();

    let mut group = c.benchmark_group("harmonic");
    group.bench_function("navamsha_longitude", |b| {
        b.iter(|| amsha_longitude(black_box(lon), Amsha::D9))
    });
    group.bench_function("dasamsa_longitude", |b| {
        b.iter(|| amsha_longitude(black_box(lon), Amsha::D10))
    });
    group.bench_function("derive_d10_chart", |b| {
        b.iter(|| derive_chart(black_box(&chart), Amsha::D10))
    });
    group.finish();
}

fn ashtakavarga_bench(c: &mut Criterion) {
    let chart = sample_chart();

    let mut group = c.benchmark_group("ashtakavarga");
    group.bench_function("full_grid", |b| b.iter(|| ashtakavarga(black_box(&chart))));
    group.bench_function("aspects_to_10th", |b| {
        b.iter(|| planets_aspecting_house(black_box(&chart), 10))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 1, 15)
        .and_then(|d| d.and_hms_opt(4, 30, 0))
        .expect("valid birth");
    let moon = 292.402721;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("mahadasha_table", |b| {
        b.iter(|| vimshottari_table(black_box(birth), black_box(moon), 120.0))
    });
    let table = vimshottari_table(birth, moon, 120.0).expect("table");
    group.bench_function("bhukti_table", |b| {
        b.iter(|| bhukti_table(black_box(&table)))
    });
    group.finish();
}

criterion_group!(benches, harmonic_bench, ashtakavarga_bench, dasha_bench);
criterion_main!(benches);
