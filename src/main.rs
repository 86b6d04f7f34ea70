use std::rc::Rc;

use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;
mod scroll {
    pub mod controller;
    pub mod easing;
    pub mod indicator;
    pub mod sections;
    pub mod tracker;
}
mod host {
    pub mod error;
    pub mod frame;
    pub mod listener;
    pub mod observer;
    pub mod storage;
    pub mod viewport;
}
mod components {
    pub mod clock;
    pub mod footer;
    pub mod nav;
    pub mod privacy_dialog;
    pub mod scroll_indicator;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(ThemeStyles)]
fn theme_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg: #f5f5f4;
                --surface: #ffffff;
                --text: #0a0a0a;
                --text-muted: rgba(10, 10, 10, 0.7);
                --text-faint: rgba(10, 10, 10, 0.5);
                --accent: #2563eb;
                --border: rgba(10, 10, 10, 0.1);
                --nav-bg: rgba(255, 255, 255, 0.4);
                --footer-bg: rgba(255, 255, 255, 0.5);
                --chip-bg: rgba(10, 10, 10, 0.06);
                --chip-hover: rgba(10, 10, 10, 0.12);
                --switch-off: rgba(10, 10, 10, 0.2);
                --beam-a: rgba(37, 99, 235, 0.18);
                --beam-b: rgba(14, 165, 233, 0.14);
            }
            :root[data-theme="dark"] {
                --bg: #050505;
                --surface: #171717;
                --text: #ffffff;
                --text-muted: rgba(255, 255, 255, 0.8);
                --text-faint: rgba(255, 255, 255, 0.5);
                --accent: #60a5fa;
                --border: rgba(255, 255, 255, 0.1);
                --nav-bg: rgba(23, 23, 23, 0.3);
                --footer-bg: rgba(0, 0, 0, 0.3);
                --chip-bg: rgba(255, 255, 255, 0.1);
                --chip-hover: rgba(255, 255, 255, 0.2);
                --switch-off: rgba(255, 255, 255, 0.2);
                --beam-a: rgba(59, 130, 246, 0.25);
                --beam-b: rgba(99, 102, 241, 0.2);
            }
            html {
                scroll-behavior: auto;
            }
            body {
                margin: 0;
                font-family: "Montserrat", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                background: var(--bg);
                color: var(--text);
            }
        "#)} />
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load_or_default(), ());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <ThemeStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
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
