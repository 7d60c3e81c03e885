use common::PerformanceMetrics;
use yew::prelude::*;

use crate::api_client;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::loading::Loading;
use crate::components::plots::TimeSeriesPlot;
use crate::settings;

/// Model-performance page: season accuracy snapshot, the pipeline's
/// confusion-matrix images, and the comparison plot.
#[function_component(PerformanceView)]
pub fn performance_view() -> Html {
    let (metrics, refetch_metrics) = use_fetch_with_refetch(api_client::performance::load_metrics);
    let (predictions, refetch_predictions) =
        use_fetch_with_refetch(api_client::forecast::load_predictions);
    let (actuals, refetch_actuals) = use_fetch_with_refetch(api_client::forecast::load_actuals);

    let retry_series = {
        Callback::from(move |_| {
            refetch_predictions.emit(());
            refetch_actuals.emit(());
        })
    };

    let render_metrics = Callback::from(|metrics: PerformanceMetrics| {
        html! { <MetricsCard metrics={metrics} /> }
    });

    let series_section = if let Some(err) =
        predictions.error().or_else(|| actuals.error())
    {
        html! { <ErrorDisplay message={err.clone()} on_retry={Some(retry_series)} /> }
    } else if let (Some(preds), Some(acts)) = (predictions.data(), actuals.data()) {
        html! {
            <TimeSeriesPlot
                predictions={preds.predictions.clone()}
                actuals={acts.dangers.clone()}
            />
        }
    } else {
        html! { <Loading text="Loading season data..." /> }
    };

    html! {
        <>
            <section class="flex flex-col text-center space-y-4 shadow-md mt-6 rounded-lg bg-base-100 p-4">
                <h1 class="text-xl md:text-3xl font-bold">{"Model Performance"}</h1>
                <h2 class="text-md md:text-xl font-bold">{"Accuracy for the 25-26 season"}</h2>

                <FetchRender<PerformanceMetrics>
                    state={(*metrics).clone()}
                    render={render_metrics}
                    on_retry={Some(refetch_metrics)}
                />

                <div class="text-xs md:text-sm opacity-60">
                    <p>{"*"}<strong>{"Overall"}</strong>{" accuracy represents the percent of correct predictions"}</p>
                    <p>{"*"}<strong>{"Balanced"}</strong>{" accuracy represents the average accuracy across the 4 danger levels"}</p>
                </div>
            </section>

            <ConfusionMatrices />

            <section class="mt-10">
                {series_section}
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MetricsCardProps {
    metrics: PerformanceMetrics,
}

#[function_component(MetricsCard)]
fn metrics_card(props: &MetricsCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100 mx-auto">
            <div class="stat">
                <div class="stat-title">{"Overall"}</div>
                <div class="stat-value text-primary">
                    {format!("{:.2}%", props.metrics.accuracy * 100.0)}
                </div>
            </div>
            <div class="stat">
                <div class="stat-title">{"Balanced"}</div>
                <div class="stat-value text-primary">
                    {format!("{:.2}%", props.metrics.balanced_accuracy * 100.0)}
                </div>
            </div>
            <div class="stat">
                <div class="stat-title">{"MAE"}</div>
                <div class="stat-value">{format!("{:.2}", props.metrics.mae)}</div>
            </div>
        </div>
    }
}

/// The confusion-matrix SVGs are opaque artifacts; only the
/// standard/normalized toggle lives here.
#[function_component(ConfusionMatrices)]
fn confusion_matrices() -> Html {
    let show_norm = use_state(|| false);

    let toggle = {
        let show_norm = show_norm.clone();
        Callback::from(move |_| show_norm.set(!*show_norm))
    };

    let settings = settings::get_settings();
    let matrix_src = if *show_norm {
        settings.artifact_url("/performance/norm_cm.svg")
    } else {
        settings.artifact_url("/performance/cm.svg")
    };
    let zone_ele_src = settings.artifact_url("/performance/zone_ele_perf.svg");

    html! {
        <section class="flex flex-col text-center items-center space-y-5 shadow-md mt-10 rounded-lg bg-base-100 p-4">
            <div class="flex flex-col text-center items-center">
                <h3 class="text-lg md:text-xl font-bold w-full text-left">{"Confusion Matrix"}</h3>
                <button class="btn btn-primary btn-sm m-3" onclick={toggle}>
                    {format!("Show {} matrix", if *show_norm { "standard" } else { "normalized" })}
                </button>

                <img
                    src={matrix_src}
                    alt={if *show_norm { "Normalized Confusion Matrix" } else { "Confusion Matrix" }}
                    class="p-4"
                />

                <p class="text-xs lg:text-base opacity-90 px-10 leading-relaxed">
                    {"The matrix compares the model's predicted danger levels to the danger levels the FAC actually issued. "}
                    {format!(
                        "A well-performing model shows high {} along the diagonal.",
                        if *show_norm { "percentages" } else { "counts" }
                    )}
                </p>
                <p class="text-xs lg:text-base opacity-90 px-10 leading-relaxed">
                    {"The model was trained on the past five years of FAC forecasts; a danger rating of 5 was never issued during that period, so only four levels appear."}
                </p>

                <hr class="my-6 border border-black opacity-30 rounded-lg w-full" />
            </div>

            <div class="flex flex-col text-center items-center">
                <h3 class="text-md md:text-xl font-bold w-full text-center md:text-left">
                    {"Performance by Forecast Zone and Elevation Band"}
                </h3>
                <img src={zone_ele_src} alt="Performance across zones and elevations" class="p-4" />
                <p class="text-xs lg:text-base opacity-90 px-10 leading-relaxed">
                    {"The Whitefish upper cell shows N/A: none of the forecast points used to train the model in the Whitefish range sit above 6,500 feet."}
                </p>
            </div>
        </section>
    }
}
