use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod animations;
mod api;
mod config;
mod loader;
mod models;
mod components {
    pub mod clients;
    pub mod contact;
    pub mod hero;
    pub mod hover;
    pub mod project_video;
    pub mod scroller;
}
mod pages {
    pub mod portfolio;
}
#[cfg(test)]
mod test_support;

use animations::AnimationSettings;
use pages::portfolio::Portfolio;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    animations::init(AnimationSettings::default());
    yew::Renderer::<App>::new().render();
}
