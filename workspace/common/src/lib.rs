//! Data shapes for the static JSON artifacts the dashboard consumes.
//! These structs mirror the files the forecast pipeline publishes under
//! `/data` and `/performance`, so the frontend can deserialize them
//! without duplicating shapes per component.

mod validate;

pub use validate::{validate_actuals, validate_forecast, ValidationError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertical partition of a zone's terrain.
///
/// The derived `Ord` matches the lexicographic order of the serialized
/// names (`lower` < `middle` < `upper`), which the series dropdowns rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationBand {
    Lower,
    Middle,
    Upper,
}

impl ElevationBand {
    /// All bands, lower to upper.
    pub const ALL: [ElevationBand; 3] =
        [ElevationBand::Lower, ElevationBand::Middle, ElevationBand::Upper];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElevationBand::Lower => "lower",
            ElevationBand::Middle => "middle",
            ElevationBand::Upper => "upper",
        }
    }
}

impl fmt::Display for ElevationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model prediction: the danger level for a zone/band on one day.
/// At most one record exists per `(date, zone, elevation)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Day-granularity epoch seconds.
    pub date: i64,
    pub zone: String,
    pub elevation: ElevationBand,
    /// -1 (unknown) or 1..=4. Danger 0 and 5 were never issued by the FAC.
    pub predicted_danger: i8,
}

/// The danger level the human forecasters actually issued, same keys as
/// [`ForecastDay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualDay {
    pub date: i64,
    pub zone: String,
    pub elevation: ElevationBand,
    pub actual_danger: i8,
}

/// Generated discussion text for a zone. Latest-only: the artifact carries
/// at most one record per zone and no date dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDiscussion {
    pub zone: String,
    pub primary_concern: String,
    pub discussion: String,
    pub travel_advice: String,
}

/// Averaged weather observations for one zone/band/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRow {
    pub zone_name: String,
    pub elevation_band: ElevationBand,
    /// Mean slope aspect in degrees, 0-360.
    pub slope_azi: f64,
    pub temp_avg: f64,
    pub rh_avg: f64,
    pub wind_avg: f64,
    pub new_snow_24: f64,
    pub precip_total: f64,
    pub snow_depth_avg: f64,
    pub swe_avg: f64,
    pub danger_level: i8,
    pub date_epoch: i64,
}

/// Season-wide accuracy snapshot, computed by the pipeline (global, not
/// per-zone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub accuracy: f64,
    pub balanced_accuracy: f64,
    pub mae: f64,
}

// ===================== Artifact payloads =====================

/// `/data/ai_forecast.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastFile {
    pub predictions: Vec<ForecastDay>,
    pub meta: ForecastMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMeta {
    /// Epoch of the most recent forecast day. Canonical lookup key for the
    /// "current" snapshot; compared by exact equality, not calendar day.
    pub latest_day: i64,
}

/// `/data/actual_forecast.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualFile {
    pub dangers: Vec<ActualDay>,
}

/// `/data/forecast_discussion.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionFile {
    pub forecasts: Vec<ForecastDiscussion>,
}

/// `/data/weather.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFile {
    pub weather: Vec<WeatherRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_file_deserializes_artifact_shape() {
        let json = r#"{
            "predictions": [
                {"date": 1767052800, "zone": "Whitefish", "elevation": "upper", "predicted_danger": 3},
                {"date": 1767052800, "zone": "Glacier/Flathead", "elevation": "lower", "predicted_danger": -1}
            ],
            "meta": {"latest_day": 1767052800}
        }"#;

        let file: ForecastFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.predictions.len(), 2);
        assert_eq!(file.meta.latest_day, 1767052800);
        assert_eq!(file.predictions[0].elevation, ElevationBand::Upper);
        assert_eq!(file.predictions[1].predicted_danger, -1);
    }

    #[test]
    fn weather_file_deserializes_artifact_shape() {
        let json = r#"{
            "weather": [{
                "zone_name": "Swan",
                "elevation_band": "middle",
                "slope_azi": 210.5,
                "temp_avg": 24.1,
                "rh_avg": 88.0,
                "wind_avg": 12.3,
                "new_snow_24": 4.0,
                "precip_total": 0.42,
                "snow_depth_avg": 51.0,
                "swe_avg": 10.25,
                "danger_level": 2,
                "date_epoch": 1767052800
            }]
        }"#;

        let file: WeatherFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.weather[0].elevation_band, ElevationBand::Middle);
        assert_eq!(file.weather[0].danger_level, 2);
    }

    #[test]
    fn elevation_band_rejects_unknown_names() {
        let result: Result<ElevationBand, _> = serde_json::from_str("\"alpine\"");
        assert!(result.is_err());
    }

    #[test]
    fn elevation_band_order_is_lexicographic() {
        let mut bands = vec![ElevationBand::Upper, ElevationBand::Lower, ElevationBand::Middle];
        bands.sort();
        assert_eq!(bands, ElevationBand::ALL);
    }

    #[test]
    fn performance_metrics_deserialize() {
        let json = r#"{"accuracy": 0.82, "balanced_accuracy": 0.74, "mae": 0.21}"#;
        let metrics: PerformanceMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.mae, 0.21);
    }
}
