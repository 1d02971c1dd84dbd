//! Integration tests for the cache client and the cached pipeline.

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use dhruv_career::cache::{chart_key, prediction_key};
use dhruv_career::config::CacheConfig;
use dhruv_career::{
    AnalysisRequest, CacheClient, CareerCache, CareerConfig, MemoryCache, analyze_cached,
};
use dhruv_vedic_base::{Chart, ChartKind, ChartMeta, Graha};
use serde_json::json;

fn chart(native_id: &str) -> Chart {
    Chart::builder(ChartKind::Rasi)
        .ascendant(95.0)
        .graha(Graha::Surya, 10.0, false)
        .graha(Graha::Chandra, 200.0, false)
        .graha(Graha::Mangal, 15.0, false)
        .nodes(40.0)
        .meta(ChartMeta {
            native_id: Some(native_id.to_string()),
            birth: NaiveDate::from_ymd_opt(1988, 3, 9).and_then(|d| d.and_hms_opt(6, 0, 0)),
            ..ChartMeta::default()
        })
        .build()
        .unwrap()
}

fn request() -> AnalysisRequest {
    AnalysisRequest::at(
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    )
}

/// Entries vanish once their TTL has passed.
#[test]
fn entries_expire() {
    let cache = MemoryCache::new();
    cache.set("short", json!(1), Duration::from_millis(20));
    cache.set("long", json!(2), Duration::from_secs(60));
    assert_eq!(cache.get("short"), Some(json!(1)));
    thread::sleep(Duration::from_millis(50));
    assert_eq!(cache.get("short"), None);
    assert_eq!(cache.get("long"), Some(json!(2)));
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (2, 1, 1));
}

/// Counters belong to one instance.
#[test]
fn stats_are_per_instance() {
    let a = MemoryCache::new();
    let b = MemoryCache::new();
    a.set("k", json!("v"), Duration::from_secs(60));
    assert!(a.get("k").is_some());
    assert!(b.get("k").is_none());
    assert_eq!(a.stats().hits, 1);
    assert_eq!(b.stats().hits, 0);
    assert_eq!(b.stats().misses, 1);
}

/// The cached pipeline stores charts, the checklist and the report, and
/// invalidation clears one native only.
#[test]
fn cached_pipeline_and_invalidation() {
    let cache = CareerCache::new(MemoryCache::new(), CacheConfig::default());
    let config = CareerConfig::default();
    let first = analyze_cached(&cache, &chart("a"), &request(), &config).unwrap();
    analyze_cached(&cache, &chart("b"), &request(), &config).unwrap();

    for kind in [ChartKind::Rasi, ChartKind::Navamsha, ChartKind::Dasamsa] {
        assert!(cache.client().get(&chart_key("a", kind)).is_some(), "{kind:?}");
    }
    assert_eq!(cache.client().get(&prediction_key("a")), Some(first.clone()));
    assert_eq!(first["verdict"]["rules_checklist"].as_array().map(Vec::len), Some(59));

    assert_eq!(cache.invalidate_native("a"), 5);
    assert!(cache.prediction("a").is_none());
    assert!(cache.prediction("b").is_some());
}

/// A disabled cache still answers, but keeps nothing.
#[test]
fn disabled_cache_passes_through() {
    let config = CareerConfig::from_toml_str("[cache]\nenabled = false\n").unwrap();
    let cache = CareerCache::new(MemoryCache::new(), config.cache.clone());
    let report = analyze_cached(&cache, &chart("a"), &request(), &config).unwrap();
    assert!(report["verdict"]["career_strength"].is_string());
    assert_eq!(cache.client().stats().entries, 0);
}
