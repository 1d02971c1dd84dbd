//! Position provider seam.
//!
//! Sidereal positions and house cusps come from an external computation
//! (an ephemeris service or library). This crate only consumes them; a
//! provider failure or an empty answer is a hard error for the caller.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::VedicError;

/// Birth data handed to a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// IANA zone name or a fixed offset such as "+05:30".
    pub timezone: String,
}

/// Source of sidereal chart positions.
pub trait PositionProvider {
    /// Compute the 9 grahas, the Lagna and 12 house cusps for a birth.
    fn positions(&self, request: &BirthRequest) -> Result<Chart, VedicError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn positions(&self, request: &BirthRequest) -> Result<Chart, VedicError> {
        (**self).positions(request)
    }
}

/// Query a provider, rejecting empty answers.
pub fn fetch_chart<P: PositionProvider + ?Sized>(
    provider: &P,
    request: &BirthRequest,
) -> Result<Chart, VedicError> {
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(VedicError::InvalidInput(format!(
            "latitude {} outside [-90, 90]",
            request.latitude
        )));
    }
    let chart = provider.positions(request)?;
    if chart.is_empty() {
        return Err(VedicError::EmptyChart);
    }
    log::debug!(
        "provider returned {} points for {} {}",
        chart.len(),
        request.date,
        request.time
    );
    Ok(chart)
}

/// Provider answering every request with one pre-computed chart.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    chart: Chart,
}

impl StaticProvider {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }
}

impl PositionProvider for StaticProvider {
    fn positions(&self, _request: &BirthRequest) -> Result<Chart, VedicError> {
        Ok(self.chart.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::graha::Graha;

    struct Failing;

    impl PositionProvider for Failing {
        fn positions(&self, _request: &BirthRequest) -> Result<Chart, VedicError> {
            Err(VedicError::Provider("ephemeris offline".into()))
        }
    }

    fn request() -> BirthRequest {
        BirthRequest {
            date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            latitude: 12.97,
            longitude: 77.59,
            timezone: "+05:30".into(),
        }
    }

    #[test]
    fn static_provider_returns_chart() {
        let chart = Chart::builder(ChartKind::Rasi)
            .graha(Graha::Surya, 32.0, false)
            .build()
            .unwrap();
        let got = fetch_chart(&StaticProvider::new(chart.clone()), &request()).unwrap();
        assert_eq!(got, chart);
    }

    #[test]
    fn empty_chart_is_error() {
        let empty = Chart::builder(ChartKind::Rasi).build().unwrap();
        let err = fetch_chart(&StaticProvider::new(empty), &request()).unwrap_err();
        assert_eq!(err, VedicError::EmptyChart);
    }

    #[test]
    fn provider_error_propagates() {
        let err = fetch_chart(&Failing, &request()).unwrap_err();
        assert!(matches!(err, VedicError::Provider(_)));
    }

    #[test]
    fn bad_latitude_rejected() {
        let mut req = request();
        req.latitude = 123.0;
        assert!(matches!(
            fetch_chart(&Failing, &req),
            Err(VedicError::InvalidInput(_))
        ));
    }
}
