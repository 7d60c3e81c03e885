//! Date and compass formatting helpers.
//!
//! All formatting is pinned to UTC so output does not depend on the
//! browser's ambient locale or timezone.

use chrono::{DateTime, Utc};
use std::fmt;

/// `M/D/YYYY` rendering of a day-granularity epoch. Out-of-range epochs
/// render as `"unknown"` rather than panicking.
pub fn format_date(epoch: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch, 0) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => "unknown".to_string(),
    }
}

/// `Mon D` rendering used by the history strip labels.
pub fn format_date_short(epoch: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch, 0) {
        Some(dt) => dt.format("%b %-d").to_string(),
        None => "unknown".to_string(),
    }
}

/// The weather table collapses aspect to four cardinals; intercardinals
/// are deliberately not produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    N,
    E,
    S,
    W,
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinal::N => "N",
            Cardinal::E => "E",
            Cardinal::S => "S",
            Cardinal::W => "W",
        })
    }
}

/// Buckets a bearing into 90-degree sectors centered on N/E/S/W.
/// Input is normalized to `[0, 360)` first, so negative bearings work.
pub fn azimuth_to_cardinal(degrees: f64) -> Cardinal {
    let d = degrees.rem_euclid(360.0);
    if !d.is_finite() {
        return Cardinal::N;
    }
    if !(45.0..315.0).contains(&d) {
        Cardinal::N
    } else if d < 135.0 {
        Cardinal::E
    } else if d < 225.0 {
        Cardinal::S
    } else {
        Cardinal::W
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_edges() {
        assert_eq!(azimuth_to_cardinal(0.0), Cardinal::N);
        assert_eq!(azimuth_to_cardinal(44.0), Cardinal::N);
        assert_eq!(azimuth_to_cardinal(45.0), Cardinal::E);
        assert_eq!(azimuth_to_cardinal(134.0), Cardinal::E);
        assert_eq!(azimuth_to_cardinal(135.0), Cardinal::S);
        assert_eq!(azimuth_to_cardinal(224.0), Cardinal::S);
        assert_eq!(azimuth_to_cardinal(225.0), Cardinal::W);
        assert_eq!(azimuth_to_cardinal(314.0), Cardinal::W);
        assert_eq!(azimuth_to_cardinal(315.0), Cardinal::N);
        assert_eq!(azimuth_to_cardinal(360.0), Cardinal::N);
    }

    #[test]
    fn negative_bearings_normalize() {
        assert_eq!(azimuth_to_cardinal(-10.0), Cardinal::N);
        assert_eq!(azimuth_to_cardinal(-90.0), Cardinal::W);
        assert_eq!(azimuth_to_cardinal(-315.0), Cardinal::E);
        assert_eq!(azimuth_to_cardinal(720.0), Cardinal::N);
    }

    #[test]
    fn format_date_is_utc_pinned() {
        // 2026-01-30 00:00:00 UTC
        assert_eq!(format_date(1769731200), "1/30/2026");
        assert_eq!(format_date_short(1769731200), "Jan 30");
        assert_eq!(format_date(0), "1/1/1970");
    }

    #[test]
    fn format_date_is_total() {
        assert_eq!(format_date(i64::MAX), "unknown");
        assert_eq!(format_date_short(i64::MIN), "unknown");
    }
}
