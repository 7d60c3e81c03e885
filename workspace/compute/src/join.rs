use crate::danger::DangerLevel;
use common::{ElevationBand, ForecastDay};

/// Finds the prediction for an exact `(zone, elevation, date)` triple.
///
/// Dates are compared by exact epoch equality, not calendar day; callers
/// pass the canonical stored epoch (normally the dataset's `latest_day`
/// marker). Records are scanned linearly and need not be sorted; the
/// uniqueness invariant guarantees at most one hit. No match resolves to
/// [`DangerLevel::Unknown`].
pub fn find_danger(
    records: &[ForecastDay],
    zone: &str,
    elevation: ElevationBand,
    date: i64,
) -> DangerLevel {
    records
        .iter()
        .find(|r| r.date == date && r.elevation == elevation && r.zone == zone)
        .map(|r| DangerLevel::from_code(r.predicted_danger))
        .unwrap_or(DangerLevel::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: i64, zone: &str, elevation: ElevationBand, danger: i8) -> ForecastDay {
        ForecastDay {
            date,
            zone: zone.to_owned(),
            elevation,
            predicted_danger: danger,
        }
    }

    fn fixture() -> Vec<ForecastDay> {
        vec![
            record(200, "Swan", ElevationBand::Upper, 4),
            record(100, "Whitefish", ElevationBand::Middle, 2),
            record(100, "Whitefish", ElevationBand::Upper, 3),
            record(100, "Glacier/Flathead", ElevationBand::Upper, 1),
        ]
    }

    #[test]
    fn exact_match_returns_stored_value() {
        let records = fixture();
        assert_eq!(
            find_danger(&records, "Whitefish", ElevationBand::Upper, 100),
            DangerLevel::Considerable
        );
        assert_eq!(
            find_danger(&records, "Swan", ElevationBand::Upper, 200),
            DangerLevel::High
        );
    }

    #[test]
    fn any_missing_key_dimension_is_unknown() {
        let records = fixture();
        assert_eq!(
            find_danger(&records, "Swan", ElevationBand::Upper, 100),
            DangerLevel::Unknown
        );
        assert_eq!(
            find_danger(&records, "Whitefish", ElevationBand::Lower, 100),
            DangerLevel::Unknown
        );
        assert_eq!(
            find_danger(&records, "Nowhere", ElevationBand::Upper, 100),
            DangerLevel::Unknown
        );
        assert_eq!(find_danger(&[], "Swan", ElevationBand::Upper, 200), DangerLevel::Unknown);
    }

    #[test]
    fn result_is_order_independent() {
        let mut records = fixture();
        // Rotate through every ordering of the head element.
        for _ in 0..records.len() {
            records.rotate_left(1);
            assert_eq!(
                find_danger(&records, "Whitefish", ElevationBand::Upper, 100),
                DangerLevel::Considerable
            );
        }
        records.reverse();
        assert_eq!(
            find_danger(&records, "Whitefish", ElevationBand::Upper, 100),
            DangerLevel::Considerable
        );
    }

    #[test]
    fn stored_sentinel_is_unknown_not_missing() {
        let records = vec![record(100, "Swan", ElevationBand::Lower, -1)];
        assert_eq!(
            find_danger(&records, "Swan", ElevationBand::Lower, 100),
            DangerLevel::Unknown
        );
    }
}
