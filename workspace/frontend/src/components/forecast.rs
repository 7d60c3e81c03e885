mod view;
mod zone_card;

pub use view::ForecastView;
pub use zone_card::ZoneCard;
