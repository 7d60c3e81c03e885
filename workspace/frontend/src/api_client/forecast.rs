use common::{validate_actuals, validate_forecast, ActualFile, DiscussionFile, ForecastFile};

use crate::api_client;

/// Loads the model predictions plus the `latest_day` marker.
/// Payloads violating the record-uniqueness invariant are refused.
pub async fn load_predictions() -> Result<ForecastFile, String> {
    let file: ForecastFile = api_client::get("/data/ai_forecast.json").await?;

    validate_forecast(&file).map_err(|e| {
        log::error!("Rejecting prediction payload: {}", e);
        e.to_string()
    })?;

    if !file.predictions.is_empty()
        && !file.predictions.iter().any(|p| p.date == file.meta.latest_day)
    {
        // Tolerated: lookups against the marker resolve to "unknown".
        log::warn!(
            "latest_day marker {} has no prediction records",
            file.meta.latest_day
        );
    }

    log::info!("Loaded {} prediction records", file.predictions.len());
    Ok(file)
}

/// Loads the danger levels the human forecasters actually issued.
pub async fn load_actuals() -> Result<ActualFile, String> {
    let file: ActualFile = api_client::get("/data/actual_forecast.json").await?;

    validate_actuals(&file).map_err(|e| {
        log::error!("Rejecting actuals payload: {}", e);
        e.to_string()
    })?;

    log::info!("Loaded {} actual danger records", file.dangers.len());
    Ok(file)
}

/// Loads the generated per-zone discussion texts (latest forecast only).
pub async fn load_discussions() -> Result<DiscussionFile, String> {
    let file: DiscussionFile = api_client::get("/data/forecast_discussion.json").await?;
    log::info!("Loaded {} forecast discussions", file.forecasts.len());
    Ok(file)
}
