use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center bg-primary text-primary-content p-4">
            <aside>
                <p>
                    {"AI-generated avalanche forecasts for the Flathead region. For official forecasts visit "}
                    <a
                        class="font-bold hover:underline"
                        href="https://flatheadavalanche.com"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"flatheadavalanche.com"}
                    </a>
                </p>
            </aside>
        </footer>
    }
}
