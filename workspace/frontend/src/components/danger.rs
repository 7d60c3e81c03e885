//! Shared danger-level swatches. Colors follow the North American public
//! danger scale; the unknown sentinel renders gray.

use compute::DangerLevel;
use yew::prelude::*;

/// CSS value for a level, resolved through the `--danger-<token>`
/// variables declared in index.html so every swatch and SVG fill picks
/// up the same palette.
pub fn danger_color(level: DangerLevel) -> String {
    format!("var(--danger-{})", level.color_token())
}

#[derive(Properties, PartialEq)]
pub struct DangerPillProps {
    pub level: DangerLevel,
}

/// Rounded label used in the weather table, colored by level.
#[function_component(DangerPill)]
pub fn danger_pill(props: &DangerPillProps) -> Html {
    html! {
        <span
            class="inline-flex items-center rounded-full border px-2 py-0.5 text-sm font-medium"
            style={format!("background-color: {};", danger_color(props.level))}
        >
            {props.level.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct DangerSwatchProps {
    pub level: DangerLevel,
    /// Skewed parallelogram variant used on the collapsed card row.
    #[prop_or_default]
    pub skewed: bool,
}

#[function_component(DangerSwatch)]
pub fn danger_swatch(props: &DangerSwatchProps) -> Html {
    let skew = if props.skewed { "transform: skewX(-30deg); " } else { "" };
    html! {
        <div
            class="w-6 md:w-10 h-6 md:h-10 border-2 border-black"
            title={props.level.label()}
            style={format!("{}background-color: {};", skew, danger_color(props.level))}
        ></div>
    }
}
