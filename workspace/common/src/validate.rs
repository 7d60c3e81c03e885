//! Shape-level validation applied at the fetch boundary.
//!
//! The presentation layer assumes at most one record per
//! `(date, zone, elevation)` triple; a payload violating that would make
//! lookups silently pick an arbitrary record, so it is rejected here
//! before it reaches any component.

use crate::{ActualFile, ElevationBand, ForecastFile};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("duplicate {kind} record for zone {zone:?}, {elevation} elevation, date {date}")]
    DuplicateRecord {
        kind: &'static str,
        zone: String,
        elevation: ElevationBand,
        date: i64,
    },
}

fn check_unique<'a, I>(kind: &'static str, records: I) -> Result<(), ValidationError>
where
    I: Iterator<Item = (i64, &'a str, ElevationBand)>,
{
    let mut seen = HashSet::new();
    for (date, zone, elevation) in records {
        if !seen.insert((date, zone.to_owned(), elevation)) {
            return Err(ValidationError::DuplicateRecord {
                kind,
                zone: zone.to_owned(),
                elevation,
                date,
            });
        }
    }
    Ok(())
}

/// Rejects a prediction payload with duplicate `(date, zone, elevation)`
/// triples. A `latest_day` marker pointing at a day with no records is
/// tolerated; the joiner resolves those to "unknown".
pub fn validate_forecast(file: &ForecastFile) -> Result<(), ValidationError> {
    check_unique(
        "prediction",
        file.predictions
            .iter()
            .map(|p| (p.date, p.zone.as_str(), p.elevation)),
    )
}

/// Same uniqueness check over the issued-danger dataset.
pub fn validate_actuals(file: &ActualFile) -> Result<(), ValidationError> {
    check_unique(
        "actual",
        file.dangers
            .iter()
            .map(|d| (d.date, d.zone.as_str(), d.elevation)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActualDay, ForecastDay, ForecastMeta};

    fn pred(date: i64, zone: &str, elevation: ElevationBand) -> ForecastDay {
        ForecastDay {
            date,
            zone: zone.to_owned(),
            elevation,
            predicted_danger: 2,
        }
    }

    #[test]
    fn accepts_unique_triples() {
        let file = ForecastFile {
            predictions: vec![
                pred(100, "Swan", ElevationBand::Upper),
                pred(100, "Swan", ElevationBand::Middle),
                pred(200, "Swan", ElevationBand::Upper),
                pred(100, "Whitefish", ElevationBand::Upper),
            ],
            meta: ForecastMeta { latest_day: 200 },
        };
        assert_eq!(validate_forecast(&file), Ok(()));
    }

    #[test]
    fn rejects_duplicate_triple() {
        let file = ForecastFile {
            predictions: vec![
                pred(100, "Swan", ElevationBand::Upper),
                pred(100, "Swan", ElevationBand::Upper),
            ],
            meta: ForecastMeta { latest_day: 100 },
        };
        assert_eq!(
            validate_forecast(&file),
            Err(ValidationError::DuplicateRecord {
                kind: "prediction",
                zone: "Swan".to_owned(),
                elevation: ElevationBand::Upper,
                date: 100,
            })
        );
    }

    #[test]
    fn tolerates_latest_day_without_records() {
        let file = ForecastFile {
            predictions: vec![pred(100, "Swan", ElevationBand::Upper)],
            meta: ForecastMeta { latest_day: 999 },
        };
        assert_eq!(validate_forecast(&file), Ok(()));
    }

    #[test]
    fn rejects_duplicate_actuals() {
        let day = ActualDay {
            date: 100,
            zone: "Whitefish".to_owned(),
            elevation: ElevationBand::Lower,
            actual_danger: 1,
        };
        let file = ActualFile {
            dangers: vec![day.clone(), day],
        };
        assert!(validate_actuals(&file).is_err());
    }

    #[test]
    fn empty_payloads_are_valid() {
        let file = ForecastFile {
            predictions: vec![],
            meta: ForecastMeta { latest_day: 0 },
        };
        assert_eq!(validate_forecast(&file), Ok(()));
        assert_eq!(validate_actuals(&ActualFile { dangers: vec![] }), Ok(()));
    }
}
