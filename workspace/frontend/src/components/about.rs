use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="card bg-base-100 shadow max-w-3xl mx-auto mt-10">
            <div class="card-body space-y-4">
                <h1 class="card-title text-3xl">{"About AvyAI"}</h1>
                <p>
                    {"AvyAI is an experiment in machine-generated avalanche forecasting. A model trained on "}
                    {"five seasons of Flathead Avalanche Center forecasts predicts a daily danger rating for "}
                    {"each forecast zone and elevation band from simulated snowpack and weather data."}
                </p>
                <p>
                    {"The dashboard shows the current prediction per zone, the generated forecast discussion, "}
                    {"the weather inputs behind it, and how the model's predictions compare against the "}
                    {"danger ratings the human forecasters actually issued."}
                </p>
                <p class="text-sm opacity-70">
                    {"Nothing here is an official forecast. See the disclaimer on the forecast page."}
                </p>
            </div>
        </div>
    }
}
