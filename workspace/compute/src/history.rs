use crate::danger::DangerLevel;
use common::{ElevationBand, ForecastDay};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// One entry of a zone's prior-day danger strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryDay {
    pub date: i64,
    pub danger: DangerLevel,
}

fn lookup(records: &[ForecastDay], zone: &str, elevation: ElevationBand, date: i64) -> Option<i8> {
    records
        .iter()
        .find(|r| r.date == date && r.elevation == elevation && r.zone == zone)
        .map(|r| r.predicted_danger)
}

/// Builds the prior-day danger sequence for a zone, oldest first.
///
/// For each of the `window_days` days before `latest_date`, the upper-band
/// record is preferred and the middle band is the fallback; days with
/// neither record are skipped outright, so the result holds between 0 and
/// `window_days` entries. The fallback never reaches the lower band —
/// fixed policy, not configurable.
///
/// A present record carrying the -1 sentinel counts as found: it renders
/// as unknown and does not trigger the middle-band fallback.
pub fn build_history(
    records: &[ForecastDay],
    zone: &str,
    latest_date: i64,
    window_days: u32,
) -> Vec<HistoryDay> {
    let mut days = Vec::with_capacity(window_days as usize);
    for offset in (1..=i64::from(window_days)).rev() {
        let date = latest_date - offset * SECONDS_PER_DAY;
        let code = lookup(records, zone, ElevationBand::Upper, date)
            .or_else(|| lookup(records, zone, ElevationBand::Middle, date));
        if let Some(code) = code {
            days.push(HistoryDay {
                date,
                danger: DangerLevel::from_code(code),
            });
        }
    }
    log::trace!(
        "history for {zone}: {} of {window_days} days present",
        days.len()
    );
    days
}
