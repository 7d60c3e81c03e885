use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use common::toast::ToastProvider;
use components::about::About;
use components::forecast::ForecastView;
use components::layout::layout::Layout;
use components::performance::PerformanceView;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/performance")]
    Performance,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home => {
            html! { <Layout title="Forecast"><ForecastView /></Layout> }
        }
        Route::Performance => {
            html! { <Layout title="Performance"><PerformanceView /></Layout> }
        }
        Route::About => {
            html! { <Layout title="About"><About /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1 class="text-2xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AvyAI Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Data base path: {:?}", settings.data_base_path);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
