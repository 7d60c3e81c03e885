mod table;

pub use table::WeatherTable;
