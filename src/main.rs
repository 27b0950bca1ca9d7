use log::info;
use yew::prelude::*;

mod config;
mod error;
mod motion {
    pub mod count_up;
    pub mod reveal;
    pub mod scroll;
}
mod hooks {
    pub mod scroll;
    pub mod viewport;
}
mod components {
    pub mod brand;
    pub mod counter;
    pub mod icons;
    pub mod nav;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod process;
    pub mod solutions;
    pub mod why_us;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
