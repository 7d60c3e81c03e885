use compute::assemble_zone_view;
use yew::prelude::*;

use super::zone_card::ZoneCard;
use crate::api_client;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::components::layout::disclaimer::Disclaimer;
use crate::components::plots::TimeSeriesPlot;

struct ZoneDef {
    /// Name shown on the card.
    display: &'static str,
    /// Key the records are stored under; not derivable from the display
    /// name, so the mapping is maintained here by the composing page.
    data_key: &'static str,
}

const ZONES: [ZoneDef; 3] = [
    ZoneDef { display: "Whitefish", data_key: "Whitefish" },
    ZoneDef { display: "Flathead & Glacier NP", data_key: "Glacier/Flathead" },
    ZoneDef { display: "Swan", data_key: "Swan" },
];

/// Home page: disclaimer, one card per forecast zone, and the
/// predicted-vs-actual comparison plot. All four artifacts are fetched
/// concurrently on mount; the page stays on a spinner until the whole
/// batch resolves.
#[function_component(ForecastView)]
pub fn forecast_view() -> Html {
    let (predictions, refetch_predictions) =
        use_fetch_with_refetch(api_client::forecast::load_predictions);
    let (actuals, refetch_actuals) = use_fetch_with_refetch(api_client::forecast::load_actuals);
    let (discussions, refetch_discussions) =
        use_fetch_with_refetch(api_client::forecast::load_discussions);
    let (weather, refetch_weather) = use_fetch_with_refetch(api_client::weather::load_weather);

    let retry = {
        Callback::from(move |_| {
            refetch_predictions.emit(());
            refetch_actuals.emit(());
            refetch_discussions.emit(());
            refetch_weather.emit(());
        })
    };

    let body = if let Some(err) = predictions
        .error()
        .or_else(|| actuals.error())
        .or_else(|| discussions.error())
        .or_else(|| weather.error())
    {
        html! { <ErrorDisplay message={err.clone()} on_retry={Some(retry)} /> }
    } else if let (Some(preds), Some(acts), Some(disc), Some(wx)) = (
        predictions.data(),
        actuals.data(),
        discussions.data(),
        weather.data(),
    ) {
        let latest = preds.meta.latest_day;
        html! {
            <>
                <div class="grid grid-cols-3 gap-x-4 items-center w-full mt-8 mb-1 px-4 text-xs sm:text-sm opacity-60">
                    <p>{"Forecast Zone"}</p>
                    <p class="text-center">{"Forecast Date"}</p>
                    <p class="text-end">{"Low / Mid / Upper Elevation"}</p>
                </div>
                { for ZONES.iter().map(|zone| {
                    let view = assemble_zone_view(
                        zone.data_key,
                        latest,
                        &preds.predictions,
                        &disc.forecasts,
                        &wx.weather,
                    );
                    html! {
                        <ZoneCard
                            key={zone.data_key}
                            display_name={zone.display}
                            latest_date={latest}
                            view={view}
                        />
                    }
                })}
                <TimeSeriesPlot
                    predictions={preds.predictions.clone()}
                    actuals={acts.dangers.clone()}
                />
            </>
        }
    } else {
        html! { <Loading text="Loading forecast data..." /> }
    };

    html! {
        <>
            <Disclaimer />
            {body}
        </>
    }
}
