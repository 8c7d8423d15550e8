use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{ConnectButton, Navbar, ScrollContainer};
use ui::views::{Home, NotFound, Placeholder};
use ui::ScrollHandle;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/vaults")]
    Vaults {},
    #[route("/earn")]
    Earn {},
    #[route("/zap")]
    Zap {},
    #[route("/labs")]
    Labs {},
    #[route("/stats")]
    Stats {},
    #[route("/:..segments")]
    Missing { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::DEBUG) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Page chrome shared by every route: the scrollable region with the navbar
/// stuck to its top and the routed page below.
#[component]
fn SiteLayout() -> Element {
    let route: Route = use_route();
    let scroll = use_hook(ScrollHandle::new);

    rsx! {
        ScrollContainer { handle: scroll.clone(),
            Navbar { current_path: route.to_string(), scroll,
                ConnectButton {
                    onclick: move |_| tracing::info!("wallet connection requested"),
                }
            }
            main { class: "page-outlet",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Vaults() -> Element {
    rsx! { Placeholder { title: "Vaults".to_string() } }
}

#[component]
fn Earn() -> Element {
    rsx! { Placeholder { title: "Earn".to_string() } }
}

#[component]
fn Zap() -> Element {
    rsx! { Placeholder { title: "Zap".to_string() } }
}

#[component]
fn Labs() -> Element {
    rsx! { Placeholder { title: "Labs".to_string() } }
}

#[component]
fn Stats() -> Element {
    rsx! { Placeholder { title: "Stats".to_string() } }
}

#[component]
fn Missing(segments: Vec<String>) -> Element {
    rsx! { NotFound { path: format!("/{}", segments.join("/")) } }
}
