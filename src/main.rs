use log::info;
use yew::prelude::*;

mod config;
mod nav;
mod story;
mod tracking;
mod components {
    pub mod lead_form;
}
mod pages {
    pub mod story_page;
}

use pages::story_page::StoryPage;

#[function_component]
fn App() -> Html {
    html! {
        <StoryPage />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
