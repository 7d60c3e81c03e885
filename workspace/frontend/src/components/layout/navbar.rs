use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <div class="navbar bg-primary text-primary-content shadow-md z-40 sticky top-0">
            <div class="flex-none sm:hidden">
                <div class="dropdown">
                    <label tabindex="0" aria-label="open navigation menu" class="btn btn-square btn-ghost">
                        <i class="fas fa-bars text-xl"></i>
                    </label>
                    <ul tabindex="0" class="menu dropdown-content bg-base-100 text-base-content rounded-box z-50 mt-3 w-52 p-2 shadow">
                        <li><Link<Route> to={Route::Home}>{"Forecast"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Performance}>{"Performance"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="flex-1">
                <Link<Route> to={Route::Home} classes="text-3xl font-extrabold px-2">{"AvyAI"}</Link<Route>>
                <div class="hidden sm:flex items-baseline space-x-2 ml-6">
                    <Link<Route> to={Route::Home} classes="font-bold p-2 hover:underline">{"Forecast"}</Link<Route>>
                    <Link<Route> to={Route::Performance} classes="font-bold p-2 hover:underline">{"Performance"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="font-bold p-2 hover:underline">{"About"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
