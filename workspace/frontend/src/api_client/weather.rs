use common::WeatherFile;

use crate::api_client;

/// Loads the averaged weather observations for every zone and band.
pub async fn load_weather() -> Result<WeatherFile, String> {
    let file: WeatherFile = api_client::get("/data/weather.json").await?;
    log::info!("Loaded {} weather rows", file.weather.len());
    Ok(file)
}
