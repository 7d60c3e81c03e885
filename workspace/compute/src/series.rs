//! Filtered, chronologically ordered danger series for the
//! predicted-vs-actual comparison plot, plus the dropdown option sets.

use common::{ActualDay, ElevationBand, ForecastDay};
use std::collections::BTreeSet;

/// Common view over the predicted and issued danger datasets so one
/// filter/sort routine serves both traces.
pub trait DangerSample {
    fn date(&self) -> i64;
    fn zone(&self) -> &str;
    fn elevation(&self) -> ElevationBand;
    fn danger(&self) -> i8;
}

impl DangerSample for ForecastDay {
    fn date(&self) -> i64 {
        self.date
    }
    fn zone(&self) -> &str {
        &self.zone
    }
    fn elevation(&self) -> ElevationBand {
        self.elevation
    }
    fn danger(&self) -> i8 {
        self.predicted_danger
    }
}

impl DangerSample for ActualDay {
    fn date(&self) -> i64 {
        self.date
    }
    fn zone(&self) -> &str {
        &self.zone
    }
    fn elevation(&self) -> ElevationBand {
        self.elevation
    }
    fn danger(&self) -> i8 {
        self.actual_danger
    }
}

/// Filters one dataset down to `(date, danger)` points, ascending by date.
///
/// `None` on either dimension means no filter. The sort is stable, so
/// records sharing a date (which the uniqueness invariant rules out, but
/// must not crash) keep their input order.
pub fn build_series<T: DangerSample>(
    records: &[T],
    zone: Option<&str>,
    elevation: Option<ElevationBand>,
) -> Vec<(i64, i8)> {
    let mut points: Vec<(i64, i8)> = records
        .iter()
        .filter(|r| zone.is_none_or(|z| r.zone() == z))
        .filter(|r| elevation.is_none_or(|e| r.elevation() == e))
        .map(|r| (r.date(), r.danger()))
        .collect();
    points.sort_by_key(|&(date, _)| date);
    points
}

/// Union of zones observed across both datasets, lexicographic. The first
/// entry is the dropdown default.
pub fn zone_options(predictions: &[ForecastDay], actuals: &[ActualDay]) -> Vec<String> {
    let mut zones = BTreeSet::new();
    for p in predictions {
        zones.insert(p.zone.clone());
    }
    for a in actuals {
        zones.insert(a.zone.clone());
    }
    zones.into_iter().collect()
}

/// Union of elevation bands observed across both datasets, lexicographic.
pub fn elevation_options(predictions: &[ForecastDay], actuals: &[ActualDay]) -> Vec<ElevationBand> {
    let mut bands = BTreeSet::new();
    for p in predictions {
        bands.insert(p.elevation);
    }
    for a in actuals {
        bands.insert(a.elevation);
    }
    bands.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(date: i64, zone: &str, elevation: ElevationBand, danger: i8) -> ForecastDay {
        ForecastDay {
            date,
            zone: zone.to_owned(),
            elevation,
            predicted_danger: danger,
        }
    }

    fn actual(date: i64, zone: &str, elevation: ElevationBand, danger: i8) -> ActualDay {
        ActualDay {
            date,
            zone: zone.to_owned(),
            elevation,
            actual_danger: danger,
        }
    }

    #[test]
    fn filters_and_sorts_shuffled_input() {
        let records = vec![
            pred(300, "Swan", ElevationBand::Upper, 3),
            pred(100, "Swan", ElevationBand::Upper, 1),
            pred(200, "Whitefish", ElevationBand::Upper, 4),
            pred(200, "Swan", ElevationBand::Middle, 4),
            pred(200, "Swan", ElevationBand::Upper, 2),
        ];

        let series = build_series(&records, Some("Swan"), Some(ElevationBand::Upper));
        assert_eq!(series, vec![(100, 1), (200, 2), (300, 3)]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let records = vec![pred(100, "Swan", ElevationBand::Upper, 1)];
        assert!(build_series(&records, Some("Nowhere"), None).is_empty());
        assert!(build_series::<ForecastDay>(&[], Some("Swan"), Some(ElevationBand::Upper)).is_empty());
    }

    #[test]
    fn omitted_dimensions_do_not_filter() {
        let records = vec![
            pred(200, "Whitefish", ElevationBand::Lower, 2),
            pred(100, "Swan", ElevationBand::Upper, 1),
        ];
        assert_eq!(build_series(&records, None, None), vec![(100, 1), (200, 2)]);
        assert_eq!(
            build_series(&records, None, Some(ElevationBand::Lower)),
            vec![(200, 2)]
        );
    }

    #[test]
    fn duplicate_dates_keep_input_order() {
        // Violates the uniqueness invariant on purpose; must not crash and
        // must keep relative input order on the tie.
        let records = vec![
            pred(200, "Swan", ElevationBand::Upper, 9),
            pred(100, "Swan", ElevationBand::Upper, 1),
            pred(100, "Swan", ElevationBand::Upper, 2),
        ];
        let series = build_series(&records, Some("Swan"), Some(ElevationBand::Upper));
        assert_eq!(series, vec![(100, 1), (100, 2), (200, 9)]);
    }

    #[test]
    fn actual_series_uses_actual_danger() {
        let records = vec![actual(100, "Swan", ElevationBand::Upper, 4)];
        assert_eq!(
            build_series(&records, Some("Swan"), Some(ElevationBand::Upper)),
            vec![(100, 4)]
        );
    }

    #[test]
    fn options_are_unions_sorted_lexicographically() {
        let preds = vec![
            pred(100, "Whitefish", ElevationBand::Upper, 1),
            pred(100, "Swan", ElevationBand::Upper, 1),
        ];
        let actuals = vec![actual(100, "Glacier/Flathead", ElevationBand::Lower, 2)];

        assert_eq!(
            zone_options(&preds, &actuals),
            vec!["Glacier/Flathead", "Swan", "Whitefish"]
        );
        assert_eq!(
            elevation_options(&preds, &actuals),
            vec![ElevationBand::Lower, ElevationBand::Upper]
        );
        assert!(zone_options(&[], &[]).is_empty());
    }
}
