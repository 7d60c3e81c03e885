use common::PerformanceMetrics;

use crate::api_client;

/// Loads the season-wide accuracy snapshot. The confusion-matrix SVGs
/// under `/performance` are referenced by `<img>` path and never parsed.
pub async fn load_metrics() -> Result<PerformanceMetrics, String> {
    let metrics: PerformanceMetrics =
        api_client::get("/performance/performance_metrics.json").await?;
    log::info!(
        "Loaded performance metrics (accuracy {:.3}, balanced {:.3})",
        metrics.accuracy,
        metrics.balanced_accuracy
    );
    Ok(metrics)
}
