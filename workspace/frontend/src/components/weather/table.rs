use common::WeatherRow;
use compute::{azimuth_to_cardinal, format_date, DangerLevel};
use yew::prelude::*;

use crate::components::danger::DangerPill;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<WeatherRow>,
}

/// Averaged weather observations, one row per zone/band/day.
#[function_component(WeatherTable)]
pub fn weather_table(props: &Props) -> Html {
    if props.rows.is_empty() {
        return html! {
            <div class="alert alert-info mt-4">
                <i class="fas fa-info-circle"></i>
                <span>{"No weather data available for this zone."}</span>
            </div>
        };
    }

    html! {
        <div class="mt-4 w-full">
            <p class="text-sm opacity-70">{"Averaged over 7am of date - 7am next day"}</p>

            <div class="mt-2 overflow-x-auto bg-base-100 shadow rounded-box">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Zone"}</th>
                            <th>{"Band"}</th>
                            <th>{"Aspect"}</th>
                            <th>{"Temp (°F)"}</th>
                            <th>{"RH (%)"}</th>
                            <th>{"Wind (mph)"}</th>
                            <th>{"New Snow 24 (in)"}</th>
                            <th class="hidden md:table-cell">{"Precip 24 (in)"}</th>
                            <th class="hidden lg:table-cell">{"Snow Depth (in)"}</th>
                            <th class="hidden lg:table-cell">{"SWE"}</th>
                            <th>{"Danger"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|r| html! {
                            <tr class="hover" key={format!("{}-{}-{}", r.zone_name, r.elevation_band, r.date_epoch)}>
                                <td class="whitespace-nowrap">{format_date(r.date_epoch)}</td>
                                <td class="whitespace-nowrap">{&r.zone_name}</td>
                                <td class="capitalize">{r.elevation_band.as_str()}</td>
                                <td>{azimuth_to_cardinal(r.slope_azi).to_string()}</td>
                                <td>{format!("{:.1}", r.temp_avg)}</td>
                                <td>{format!("{:.0}", r.rh_avg)}</td>
                                <td>{format!("{:.1}", r.wind_avg)}</td>
                                <td>{format!("{:.1}", r.new_snow_24)}</td>
                                <td class="hidden md:table-cell">{format!("{:.2}", r.precip_total)}</td>
                                <td class="hidden lg:table-cell">{format!("{:.1}", r.snow_depth_avg)}</td>
                                <td class="hidden lg:table-cell">{format!("{:.2}", r.swe_avg)}</td>
                                <td><DangerPill level={DangerLevel::from_code(r.danger_level)} /></td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <p class="mt-2 text-xs opacity-60 md:hidden">
                {"Swipe horizontally to see more columns."}
            </p>
        </div>
    }
}
