//! End-to-end career analysis of one D1 chart.

use chrono::NaiveDateTime;
use dhruv_vedic_base::{
    Amsha, AshtakavargaGrid, Chart, ChartKind, CurrentDasha, DashaTable, Graha, VedicError,
    ashtakavarga, bhukti_table, current_dasa_bhukti, derive_chart, vimshottari_table,
};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheClient, CareerCache};
use crate::config::CareerConfig;
use crate::error::CareerError;
use crate::profession::{ProfessionSummary, profession_summary};
use crate::rules::{CareerVerdict, CategoryGroup, RuleContext, evaluate, group_by_category};

/// When to read the running periods, and an optional birth override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub at: NaiveDateTime,
    /// Falls back to the chart's own birth instant.
    pub birth: Option<NaiveDateTime>,
}

impl AnalysisRequest {
    pub fn at(at: NaiveDateTime) -> Self {
        Self { at, birth: None }
    }

    pub fn with_birth(mut self, birth: NaiveDateTime) -> Self {
        self.birth = Some(birth);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerReport {
    pub native_id: Option<String>,
    pub d9: Chart,
    pub d10: Chart,
    pub dasha: Option<DashaTable>,
    pub current_dasha: Option<CurrentDasha>,
    pub ashtakavarga: Option<AshtakavargaGrid>,
    pub verdict: CareerVerdict,
    pub categories: Vec<CategoryGroup>,
    pub professions: ProfessionSummary,
}

/// Derive D9/D10, the dasha timeline and the Ashtakavarga grid, then run
/// the rules and the profession classifier.
pub fn analyze(
    d1: &Chart,
    request: &AnalysisRequest,
    config: &CareerConfig,
) -> Result<CareerReport, CareerError> {
    config.validate()?;
    if d1.is_empty() {
        return Err(VedicError::EmptyChart.into());
    }
    let d9 = derive_chart(d1, Amsha::D9)?;
    let d10 = derive_chart(d1, Amsha::D10)?;
    assemble(d1, d9, d10, request, config)
}

/// [`analyze`] through a cache keyed by the chart's native id.
///
/// A cached prediction is returned as is. Otherwise derived charts are
/// reused when cached, and the fresh report and its checklist are stored.
/// Charts without a native id bypass the cache.
pub fn analyze_cached<C: CacheClient>(
    cache: &CareerCache<C>,
    d1: &Chart,
    request: &AnalysisRequest,
    config: &CareerConfig,
) -> Result<Value, CareerError> {
    let Some(native) = d1.meta().native_id.as_deref() else {
        debug!("chart has no native id; analysing without cache");
        return Ok(serde_json::to_value(analyze(d1, request, config)?)?);
    };
    if let Some(hit) = cache.prediction(native) {
        debug!("prediction cache hit for {native}");
        return Ok(hit);
    }

    config.validate()?;
    if d1.is_empty() {
        return Err(VedicError::EmptyChart.into());
    }
    cache.store_chart(native, d1)?;
    let d9 = cached_chart(cache, native, d1, Amsha::D9, ChartKind::Navamsha)?;
    let d10 = cached_chart(cache, native, d1, Amsha::D10, ChartKind::Dasamsa)?;

    let report = assemble(d1, d9, d10, request, config)?;
    cache.store_validation(native, &report.verdict.rules_checklist)?;
    cache.store_prediction(native, &report)?;
    Ok(serde_json::to_value(&report)?)
}

fn cached_chart<C: CacheClient>(
    cache: &CareerCache<C>,
    native: &str,
    d1: &Chart,
    amsha: Amsha,
    kind: ChartKind,
) -> Result<Chart, CareerError> {
    if let Some(chart) = cache.chart(native, kind) {
        return Ok(chart);
    }
    let chart = derive_chart(d1, amsha)?;
    cache.store_chart(native, &chart)?;
    Ok(chart)
}

/// Mahadasha table and running periods, when the birth instant and the
/// Moon are both known.
fn dasha_timeline(
    d1: &Chart,
    request: &AnalysisRequest,
    config: &CareerConfig,
) -> Result<Option<(DashaTable, Option<CurrentDasha>)>, CareerError> {
    let birth = request.birth.or(d1.meta().birth);
    let (Some(birth), Some(moon)) = (birth, d1.longitude(Graha::Chandra)) else {
        debug!("no birth instant or Moon; dasha skipped");
        return Ok(None);
    };
    let table = vimshottari_table(birth, moon, config.dasha.total_years)?;
    let bhuktis = bhukti_table(&table)?;
    let current = current_dasa_bhukti(&table, &bhuktis, request.at);
    debug!(
        "dasha table: {} mahadashas, {} bhuktis",
        table.periods.len(),
        bhuktis.len()
    );
    Ok(Some((table, current)))
}

fn assemble(
    d1: &Chart,
    d9: Chart,
    d10: Chart,
    request: &AnalysisRequest,
    config: &CareerConfig,
) -> Result<CareerReport, CareerError> {
    let (dasha, current_dasha) = match dasha_timeline(d1, request, config)? {
        Some((table, current)) => (Some(table), current),
        None => (None, None),
    };
    let grid = ashtakavarga(d1);
    if grid.is_none() {
        debug!("Ashtakavarga unavailable: Sun, Moon or Ascendant missing");
    }

    let ctx = RuleContext::new(d1, &d9, &d10)
        .with_dasha(current_dasha.as_ref())
        .with_ashtakavarga(grid.as_ref());
    let verdict = evaluate(&ctx);
    let categories = group_by_category(&verdict.rules_checklist);
    let professions = profession_summary(d1, &config.profession);

    info!(
        "career analysis{}: {} ({} rules matched)",
        d1.meta()
            .native_id
            .as_deref()
            .map(|id| format!(" for {id}"))
            .unwrap_or_default(),
        verdict.career_strength.as_str(),
        verdict.rules_score
    );

    Ok(CareerReport {
        native_id: d1.meta().native_id.clone(),
        d9,
        d10,
        dasha,
        current_dasha,
        ashtakavarga: grid,
        verdict,
        categories,
        professions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use chrono::NaiveDate;
    use dhruv_vedic_base::{ChartMeta, SAPTA_GRAHAS};

    fn at(y: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn chart(native_id: Option<&str>) -> Chart {
        let mut b = Chart::builder(ChartKind::Rasi).ascendant(215.0).nodes(304.0);
        for (g, lon) in SAPTA_GRAHAS
            .into_iter()
            .zip([280.5, 292.402721, 14.2, 265.0, 76.8, 300.1, 266.3])
        {
            b = b.graha(g, lon, false);
        }
        b.meta(ChartMeta {
            native_id: native_id.map(str::to_string),
            birth: Some(at(1990)),
            ..ChartMeta::default()
        })
        .build()
        .unwrap()
    }

    #[test]
    fn full_report() {
        let r = analyze(&chart(None), &AnalysisRequest::at(at(2026)), &CareerConfig::default())
            .unwrap();
        assert_eq!(r.d9.kind(), ChartKind::Navamsha);
        assert_eq!(r.d10.kind(), ChartKind::Dasamsa);
        assert_eq!(r.dasha.as_ref().map(|t| t.periods.len()), Some(10));
        assert!(r.current_dasha.is_some());
        assert!(r.ashtakavarga.is_some());
        assert_eq!(r.verdict.rules_checklist.len(), 59);
        assert_eq!(r.categories.len(), 6);
        assert_eq!(r.professions.all_professions.len(), 10);
    }

    #[test]
    fn missing_birth_skips_dasha() {
        let c = Chart::builder(ChartKind::Rasi)
            .ascendant(215.0)
            .graha(Graha::Chandra, 292.402721, false)
            .build()
            .unwrap();
        let r = analyze(&c, &AnalysisRequest::at(at(2026)), &CareerConfig::default()).unwrap();
        assert!(r.dasha.is_none());
        assert!(r.current_dasha.is_none());
        // Sun missing
        assert!(r.ashtakavarga.is_none());

        let r = analyze(
            &c,
            &AnalysisRequest::at(at(2026)).with_birth(at(1990)),
            &CareerConfig::default(),
        )
        .unwrap();
        assert!(r.current_dasha.is_some());
    }

    #[test]
    fn empty_chart_and_bad_config_fail() {
        let empty = Chart::builder(ChartKind::Rasi).build().unwrap();
        let req = AnalysisRequest::at(at(2026));
        assert!(matches!(
            analyze(&empty, &req, &CareerConfig::default()),
            Err(CareerError::Vedic(VedicError::EmptyChart))
        ));
        let mut cfg = CareerConfig::default();
        cfg.dasha.total_years = 0.0;
        assert!(analyze(&chart(None), &req, &cfg).is_err());
    }

    #[test]
    fn cached_analysis_fills_and_reuses() {
        let cache = CareerCache::new(MemoryCache::new(), CareerConfig::default().cache);
        let c = chart(Some("n-7"));
        let req = AnalysisRequest::at(at(2026));
        let first = analyze_cached(&cache, &c, &req, &CareerConfig::default()).unwrap();
        assert!(cache.chart("n-7", ChartKind::Dasamsa).is_some());
        assert!(cache.validation("n-7").is_some());
        let second = analyze_cached(&cache, &c, &req, &CareerConfig::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.client().stats().hits, 3);

        assert_eq!(cache.invalidate_native("n-7"), 5);
        assert!(cache.prediction("n-7").is_none());
    }
}
