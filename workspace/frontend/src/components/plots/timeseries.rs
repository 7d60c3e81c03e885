use chrono::DateTime;
use common::{ActualDay, ElevationBand, ForecastDay};
use compute::{build_series, elevation_options, zone_options};
use plotly::common::{Mode, Orientation, Title};
use plotly::layout::{Axis, AxisType, Legend};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub predictions: Vec<ForecastDay>,
    pub actuals: Vec<ActualDay>,
}

/// Predicted-vs-actual danger over the season for one zone/band
/// selection. Dropdown options are the union of values observed across
/// both datasets; the defaults are the lexicographically first entries.
#[function_component(TimeSeriesPlot)]
pub fn time_series_plot(props: &Props) -> Html {
    let zones = zone_options(&props.predictions, &props.actuals);
    let elevations = elevation_options(&props.predictions, &props.actuals);

    let zone = use_state(|| zones.first().cloned());
    let elevation = use_state(|| elevations.first().copied());

    let on_zone_change = {
        let zone = zone.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            log::debug!("Series zone selection: {}", select.value());
            zone.set(Some(select.value()));
        })
    };

    let on_elevation_change = {
        let elevation = elevation.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            log::debug!("Series elevation selection: {}", select.value());
            elevation.set(match select.value().as_str() {
                "lower" => Some(ElevationBand::Lower),
                "middle" => Some(ElevationBand::Middle),
                "upper" => Some(ElevationBand::Upper),
                _ => None,
            });
        })
    };

    let predicted = build_series(&props.predictions, zone.as_deref(), *elevation);
    let actual = build_series(&props.actuals, zone.as_deref(), *elevation);

    let subtitle = match (zone.as_deref(), *elevation) {
        (Some(z), Some(e)) => format!("{} - {} elevation", z, e),
        _ => "Select a zone and elevation band".to_string(),
    };

    html! {
        <div class="w-full bg-base-100 rounded-xl shadow-md p-6 space-y-4 mt-16">
            <div>
                <h2 class="text-2xl font-semibold tracking-tight">{"Season Performance"}</h2>
                <p class="text-sm opacity-60">{subtitle}</p>
            </div>

            <div class="flex flex-col md:flex-row gap-6 items-center">
                <label class="flex items-center gap-2 text-sm font-medium">
                    {"Zone"}
                    <select
                        class="select select-bordered select-sm"
                        onchange={on_zone_change}
                        value={zone.as_deref().unwrap_or_default().to_string()}
                    >
                        { for zones.iter().map(|z| html! {
                            <option key={z.clone()} value={z.clone()} selected={zone.as_deref() == Some(z)}>{z}</option>
                        })}
                    </select>
                </label>

                <label class="flex items-center gap-2 text-sm font-medium">
                    {"Elevation"}
                    <select
                        class="select select-bordered select-sm"
                        onchange={on_elevation_change}
                        value={elevation.map(|e| e.as_str()).unwrap_or_default().to_string()}
                    >
                        { for elevations.iter().map(|e| html! {
                            <option key={e.as_str()} value={e.as_str()} selected={*elevation == Some(*e)}>{e.as_str()}</option>
                        })}
                    </select>
                </label>
            </div>

            <SeriesChart predicted={predicted} actual={actual} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SeriesChartProps {
    predicted: Vec<(i64, i8)>,
    actual: Vec<(i64, i8)>,
}

fn iso_date(epoch: i64) -> String {
    match DateTime::from_timestamp(epoch, 0) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => epoch.to_string(),
    }
}

#[function_component(SeriesChart)]
fn series_chart(props: &SeriesChartProps) -> Html {
    let container_ref = use_node_ref();
    let predicted = props.predicted.clone();
    let actual = props.actual.clone();

    use_effect_with(
        (container_ref.clone(), predicted, actual),
        move |(container_ref, predicted, actual)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                let div_id = "danger-timeseries";
                element.set_id(div_id);

                let trace = |points: &[(i64, i8)], name: &str| {
                    let dates: Vec<String> = points.iter().map(|&(d, _)| iso_date(d)).collect();
                    let values: Vec<i8> = points.iter().map(|&(_, v)| v).collect();
                    Scatter::new(dates, values).mode(Mode::LinesMarkers).name(name)
                };

                let layout = Layout::new()
                    .x_axis(Axis::new().type_(AxisType::Date).title(Title::with_text("Date")))
                    .y_axis(Axis::new().title(Title::with_text("Danger Level")).dtick(1.0))
                    .legend(Legend::new().orientation(Orientation::Horizontal))
                    .height(450);

                let data_js = js_sys::Array::new();
                for t in [trace(predicted, "Predicted"), trace(actual, "Actual")] {
                    let trace_json = serde_json::to_string(&t).unwrap_or_default();
                    if let Ok(trace_js) = js_sys::JSON::parse(&trace_json) {
                        data_js.push(&trace_js);
                    }
                }

                let layout_json = serde_json::to_string(&layout).unwrap_or_default();
                if let Ok(layout_js) = js_sys::JSON::parse(&layout_json) {
                    newPlot(div_id, data_js.into(), layout_js);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width: 100%; height: 450px;"></div>
    }
}
