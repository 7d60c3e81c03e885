use common::ForecastDiscussion;
use compute::{format_date, format_date_short, DangerLevel, ZoneView};
use yew::prelude::*;

use crate::components::danger::{danger_color, DangerSwatch};
use crate::components::weather::WeatherTable;

// Elevation-profile sketch geometry, in viewBox units.
const BAND_HEIGHT: i32 = 66;
const BAND_GAP: i32 = 5;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub display_name: AttrValue,
    pub latest_date: i64,
    pub view: ZoneView,
}

/// One forecast zone. Collapsed: a summary row with the three-band danger
/// snapshot. Expanded: the elevation profile, 5-day history, generated
/// discussion, and the zone's weather table. Starts collapsed.
#[function_component(ZoneCard)]
pub fn zone_card(props: &Props) -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let date_str = format_date(props.latest_date);

    if !*expanded {
        return html! {
            <section class="bg-base-100 shadow my-2 p-3 rounded-sm">
                <div class="flex justify-between items-center gap-2">
                    <h2 class="font-black text-lg sm:text-xl md:text-2xl">{&props.display_name}</h2>
                    <p class="hidden lg:block font-bold text-xl">{date_str.clone()}</p>
                    <div class="flex space-x-2">
                        { for props.view.current.iter().map(|level| html! {
                            <DangerSwatch level={*level} skewed=true />
                        })}
                    </div>
                    <button class="btn btn-ghost btn-sm" aria-label="expand forecast" onclick={toggle.clone()}>
                        <i class="fas fa-chevron-right text-xl"></i>
                    </button>
                </div>
            </section>
        };
    }

    let [lower, middle, upper] = props.view.current;

    html! {
        <section class="bg-base-100 shadow my-2 p-3 rounded-sm">
            <div class="flex flex-col text-center">
                <div class="flex justify-between items-center">
                    <h2 class="font-black text-2xl md:text-3xl">{&props.display_name}</h2>
                    <button class="btn btn-ghost btn-sm" aria-label="collapse forecast" onclick={toggle}>
                        <i class="fas fa-chevron-down text-xl"></i>
                    </button>
                </div>

                <p class="font-bold text-xl pb-8">{date_str}</p>

                <h3 class="text-xl md:text-2xl font-bold text-start">{"Avalanche Danger"}</h3>
                <ElevationProfile {lower} {middle} {upper} />

                <h3 class="text-xl md:text-2xl font-bold mt-8">{"Last 5 days"}</h3>
                {if props.view.history.is_empty() {
                    html! { <p class="italic opacity-70">{"No prior forecasts available."}</p> }
                } else {
                    html! {
                        <div class="flex space-x-5 justify-center mt-2">
                            { for props.view.history.iter().map(|day| html! {
                                <div key={day.date} class="flex flex-col items-center gap-1">
                                    <p class="text-xs">{format_date_short(day.date)}</p>
                                    <DangerSwatch level={day.danger} />
                                </div>
                            })}
                        </div>
                    }
                }}

                <h3 class="text-xl md:text-2xl font-bold text-start mt-8">{"Discussion"}</h3>
                <DiscussionSection discussion={props.view.discussion.clone()} />

                <h3 class="text-xl md:text-2xl font-bold text-start mt-8">{"Weather"}</h3>
                <WeatherTable rows={props.view.weather.clone()} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileProps {
    lower: DangerLevel,
    middle: DangerLevel,
    upper: DangerLevel,
}

/// Stylized mountain cross-section: one polygon per elevation band,
/// filled with that band's danger color.
#[function_component(ElevationProfile)]
fn elevation_profile(props: &ProfileProps) -> Html {
    let h = BAND_HEIGHT;
    let gap = BAND_GAP;

    let band_label = |level: DangerLevel| format!("{} - {}", level.code(), level.label());

    html! {
        <div class="flex justify-center bg-white lg:w-4/5 xl:w-2/3 mx-auto py-3">
            <div class="flex flex-col justify-between py-5 space-y-5 text-xs">
                <p>{"Upper Elevation (Above 6500 ft)"}</p>
                <p>{"Mid-Elevation (5000-6500 ft)"}</p>
                <p>{"Low Elevation (Below 5000 ft)"}</p>
            </div>
            <svg class="w-1/2 lg:w-1/3 h-auto" viewBox={format!("0 0 200 {}", h * 3)}>
                <polygon
                    points={format!("100,0 75,{h} 125,{h}")}
                    stroke="black" stroke-width="2"
                    style={format!("fill: {};", danger_color(props.upper))}
                />
                <polygon
                    points={format!("75,{} 125,{} 150,{} 50,{}", h + gap, h + gap, h * 2, h * 2)}
                    stroke="black" stroke-width="2"
                    style={format!("fill: {};", danger_color(props.middle))}
                />
                <polygon
                    points={format!("25,{} 175,{} 150,{} 50,{}", h * 3, h * 3, h * 2 + gap, h * 2 + gap)}
                    stroke="black" stroke-width="2"
                    style={format!("fill: {};", danger_color(props.lower))}
                />
            </svg>
            <div class="flex flex-col justify-between py-5 font-bold text-sm">
                <p>{band_label(props.upper)}</p>
                <p>{band_label(props.middle)}</p>
                <p>{band_label(props.lower)}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DiscussionProps {
    discussion: Option<ForecastDiscussion>,
}

/// Missing discussion fields render an explicit placeholder, never blank.
#[function_component(DiscussionSection)]
fn discussion_section(props: &DiscussionProps) -> Html {
    fn or_unknown(text: &str) -> &str {
        if text.trim().is_empty() {
            "Unknown"
        } else {
            text
        }
    }

    match &props.discussion {
        None => html! {
            <p class="italic opacity-70 text-start">{"No discussion available for this zone."}</p>
        },
        Some(d) => html! {
            <div class="text-start space-y-3">
                <p>
                    <span class="font-bold">{"Primary Concern: "}</span>
                    {or_unknown(&d.primary_concern)}
                </p>
                <p>{or_unknown(&d.discussion)}</p>
                <p>
                    <span class="font-bold">{"Travel Advice: "}</span>
                    {or_unknown(&d.travel_advice)}
                </p>
            </div>
        },
    }
}
