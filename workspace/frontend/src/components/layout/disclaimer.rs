use yew::prelude::*;

#[function_component(Disclaimer)]
pub fn disclaimer() -> Html {
    html! {
        <div class="bg-red-600 text-white text-center text-sm md:text-base rounded-sm p-3 space-y-1">
            <p class="font-bold">{"Disclaimer"}</p>
            <p>{"This dashboard is provided for proof-of-concept purposes only."}</p>
            <p>{"The danger levels and forecast discussions are entirely AI-generated and must not be used for decision-making in the backcountry."}</p>
            <p>
                {"For official forecasts prepared by professionals, please visit "}
                <a
                    href="https://flatheadavalanche.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="font-bold hover:underline"
                >
                    {"flatheadavalanche.com"}
                </a>
            </p>
        </div>
    }
}
