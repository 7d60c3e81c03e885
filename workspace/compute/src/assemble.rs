use crate::danger::DangerLevel;
use crate::history::{build_history, HistoryDay};
use crate::join::find_danger;
use common::{ElevationBand, ForecastDay, ForecastDiscussion, WeatherRow};

/// Length of the prior-day strip on every zone card.
pub const HISTORY_WINDOW_DAYS: u32 = 5;

/// Everything one zone card renders, derived in a single pass so the view
/// logic is not re-implemented per call site.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneView {
    /// Current danger per band, indexed lower/middle/upper.
    pub current: [DangerLevel; 3],
    pub history: Vec<HistoryDay>,
    pub discussion: Option<ForecastDiscussion>,
    pub weather: Vec<WeatherRow>,
}

/// Derives the per-zone view from the loaded snapshot.
///
/// `zone_key` is the internal data key ("Glacier/Flathead"), not the
/// display name; the composing page owns that mapping. Discussion lookup
/// takes the first record for the zone — the dataset carries at most one,
/// and if that invariant is ever violated the first occurrence wins.
pub fn assemble_zone_view(
    zone_key: &str,
    latest_date: i64,
    predictions: &[ForecastDay],
    discussions: &[ForecastDiscussion],
    weather: &[WeatherRow],
) -> ZoneView {
    let current =
        ElevationBand::ALL.map(|band| find_danger(predictions, zone_key, band, latest_date));
    let history = build_history(predictions, zone_key, latest_date, HISTORY_WINDOW_DAYS);
    let discussion = discussions.iter().find(|d| d.zone == zone_key).cloned();
    let weather: Vec<WeatherRow> = weather
        .iter()
        .filter(|w| w.zone_name == zone_key)
        .cloned()
        .collect();

    log::debug!(
        "assembled view for {zone_key}: current={:?}, {} history days, discussion={}, {} weather rows",
        current,
        history.len(),
        discussion.is_some(),
        weather.len()
    );

    ZoneView {
        current,
        history,
        discussion,
        weather,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::SECONDS_PER_DAY;

    fn pred(date: i64, zone: &str, elevation: ElevationBand, danger: i8) -> ForecastDay {
        ForecastDay {
            date,
            zone: zone.to_owned(),
            elevation,
            predicted_danger: danger,
        }
    }

    fn weather_row(zone: &str) -> WeatherRow {
        WeatherRow {
            zone_name: zone.to_owned(),
            elevation_band: ElevationBand::Middle,
            slope_azi: 180.0,
            temp_avg: 20.0,
            rh_avg: 80.0,
            wind_avg: 10.0,
            new_snow_24: 2.0,
            precip_total: 0.2,
            snow_depth_avg: 40.0,
            swe_avg: 8.0,
            danger_level: 2,
            date_epoch: 100,
        }
    }

    #[test]
    fn single_upper_record_scenario() {
        let predictions = vec![pred(100, "Z", ElevationBand::Upper, 2)];

        let view = assemble_zone_view("Z", 100, &predictions, &[], &[]);

        assert_eq!(
            view.current,
            [DangerLevel::Unknown, DangerLevel::Unknown, DangerLevel::Moderate]
        );
        assert!(view.history.is_empty());
        assert_eq!(view.discussion, None);
        assert!(view.weather.is_empty());
    }

    #[test]
    fn full_zone_view() {
        let latest = 10 * SECONDS_PER_DAY;
        let predictions = vec![
            pred(latest, "Swan", ElevationBand::Lower, 1),
            pred(latest, "Swan", ElevationBand::Middle, 2),
            pred(latest, "Swan", ElevationBand::Upper, 3),
            pred(latest - SECONDS_PER_DAY, "Swan", ElevationBand::Upper, 4),
            pred(latest, "Whitefish", ElevationBand::Upper, 4),
        ];
        let discussions = vec![
            ForecastDiscussion {
                zone: "Whitefish".to_owned(),
                primary_concern: "Wind slab".to_owned(),
                discussion: String::new(),
                travel_advice: String::new(),
            },
            ForecastDiscussion {
                zone: "Swan".to_owned(),
                primary_concern: "Storm slab".to_owned(),
                discussion: "Heavy loading".to_owned(),
                travel_advice: "Avoid steep slopes".to_owned(),
            },
        ];
        let weather = vec![weather_row("Swan"), weather_row("Whitefish"), weather_row("Swan")];

        let view = assemble_zone_view("Swan", latest, &predictions, &discussions, &weather);

        assert_eq!(
            view.current,
            [DangerLevel::Low, DangerLevel::Moderate, DangerLevel::Considerable]
        );
        assert_eq!(view.history.len(), 1);
        assert_eq!(view.history[0].danger, DangerLevel::High);
        assert_eq!(view.discussion.unwrap().primary_concern, "Storm slab");
        assert_eq!(view.weather.len(), 2);
        assert!(view.weather.iter().all(|w| w.zone_name == "Swan"));
    }

    #[test]
    fn first_discussion_wins_on_duplicates() {
        let discussions = vec![
            ForecastDiscussion {
                zone: "Swan".to_owned(),
                primary_concern: "first".to_owned(),
                discussion: String::new(),
                travel_advice: String::new(),
            },
            ForecastDiscussion {
                zone: "Swan".to_owned(),
                primary_concern: "second".to_owned(),
                discussion: String::new(),
                travel_advice: String::new(),
            },
        ];
        let view = assemble_zone_view("Swan", 0, &[], &discussions, &[]);
        assert_eq!(view.discussion.unwrap().primary_concern, "first");
    }
}
