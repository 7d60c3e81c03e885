use yew::prelude::*;

use super::footer::Footer;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    {
        let title = props.title.clone();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("AvyAI - {}", title));
            }
            || ()
        });
    }

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 w-full max-w-6xl mx-auto px-4 py-6">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
