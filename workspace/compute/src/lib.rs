//! The forecast/weather data-join and presentation-mapping layer.
//!
//! Every function here is a pure transformation over the immutable
//! datasets fetched at page load: no I/O, no browser APIs, no state.
//! The frontend recomputes these views per render from its loaded
//! snapshot, so everything is total — missing data resolves to the
//! "unknown" danger sentinel rather than an error.

pub mod assemble;
pub mod danger;
pub mod geo;
pub mod history;
pub mod join;
pub mod series;

pub use assemble::{assemble_zone_view, ZoneView, HISTORY_WINDOW_DAYS};
pub use danger::DangerLevel;
pub use geo::{azimuth_to_cardinal, format_date, format_date_short, Cardinal};
pub use history::{build_history, HistoryDay, SECONDS_PER_DAY};
pub use join::find_danger;
pub use series::{build_series, elevation_options, zone_options, DangerSample};
