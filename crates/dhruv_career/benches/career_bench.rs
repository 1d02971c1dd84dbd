use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_career::{
    AnalysisRequest, CareerConfig, RuleContext, analyze, evaluate, profession_probabilities,
};
use dhruv_vedic_base::{Amsha, Chart, ChartKind, ChartMeta, Graha, ashtakavarga, derive_chart};

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
        .meta(ChartMeta {
            birth: NaiveDate::from_ymd_opt(1990, 1, 15).and_then(|d| d.and_hms_opt(4, 30, 0)),
            ..ChartMeta::default()
        })
        .build()
        .expect("valid chart")
}

fn rules_bench(c: &mut Criterion) {
    let d1 = sample_chart();
    let d9 = derive_chart(&d1, Amsha::D9).expect("d9");
    let d10 = derive_chart(&d1, Amsha::D10).expect("d10");
    let grid = ashtakavarga(&d1);
    let ctx = RuleContext::new(&d1, &d9, &d10).with_ashtakavarga(grid.as_ref());

    let mut group = c.benchmark_group("career");
    group.bench_function("full_rule_batch", |b| b.iter(|| evaluate(black_box(&ctx))));
    group.bench_function("profession_probabilities", |b| {
        b.iter(|| profession_probabilities(black_box(&d1)))
    });
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let d1 = sample_chart();
    let config = CareerConfig::default();
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid instant");
    let request = AnalysisRequest::at(at);

    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(&d1), &request, &config))
    });
}

criterion_group!(benches, rules_bench, pipeline_bench);
criterion_main!(benches);
