use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::menu_item::MenuItem;
use crate::components::mobile_menu::MobileMenu;
use crate::core::menu::{builtin as builtin_menu, MenuConfig};
use crate::core::nav_state::{NavEvent, NavState};
use crate::core::scroll::ScrollHandle;
use crate::core::style::{bar_class, BarFlags};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const LOGO: Asset = asset!("/assets/images/logo.svg");

/// Site navigation bar.
///
/// Inputs are explicit:
/// - `current_path` drives "selected" highlighting (compared case-insensitively).
/// - `scroll` is the handle of the scroll container the bar sits in; the bar
///   gains a shadow once that container leaves offset 0.
/// - `menu` defaults to the embedded configuration.
/// - `children` fill the wallet slot (usually a [`ConnectButton`]).
///
/// The bar registers one scroll listener when it mounts and removes it when it
/// unmounts.
///
/// Example (inside a platform layout route):
/// ```ignore
/// let scroll = use_hook(ScrollHandle::new);
/// rsx! {
///     ScrollContainer { handle: scroll.clone(),
///         Navbar { current_path: route.to_string(), scroll, ConnectButton {} }
///         Outlet::<Route> {}
///     }
/// }
/// ```
///
/// [`ConnectButton`]: crate::components::ConnectButton
#[component]
pub fn Navbar(
    current_path: String,
    scroll: ScrollHandle,
    menu: Option<MenuConfig>,
    children: Element,
) -> Element {
    i18n::init();

    let state = use_signal(|| NavState::with_offset(scroll.offset()));

    let subscription = use_hook(|| {
        Rc::new(scroll.subscribe(move |offset| send(state, NavEvent::Scrolled(offset))))
    });
    use_drop(move || subscription.cancel());

    let menu = menu.unwrap_or_else(|| builtin_menu().clone());
    let snapshot = state();

    rsx! {
        // Include navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: bar_class(BarFlags { shadowed: snapshot.shadowed() }),
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    Link { to: "/", class: "navbar__brand-link",
                        img {
                            src: LOGO,
                            alt: t!("nav-logo-alt"),
                            height: "48",
                            width: "150",
                        }
                    }
                }

                if snapshot.mobile_open {
                    MobileMenu {
                        menu: menu.clone(),
                        current_path: current_path.clone(),
                        submenu: snapshot.mobile_submenu.clone(),
                        on_open_change: move |open: bool| {
                            send(state, if open { NavEvent::OpenMobile } else { NavEvent::CloseMobile })
                        },
                        on_submenu_change: move |label: String| {
                            send(state, NavEvent::ToggleMobileSubmenu(label))
                        },
                    }
                }

                if !menu.is_empty() {
                    nav { class: "navbar__links", aria_label: t!("nav-main-label"),
                        ul { class: "navbar__menu",
                            for entry in menu.entries.iter() {
                                MenuItem {
                                    key: "{entry.label}",
                                    entry: entry.clone(),
                                    active: snapshot.active.is(&entry.label),
                                    current_path: current_path.clone(),
                                    on_event: move |event| send(state, event),
                                }
                            }
                        }
                    }
                }

                div { class: "navbar__wallet", {children} }

                div { class: "navbar__mobile-trigger",
                    button {
                        r#type: "button",
                        class: "navbar__hamburger",
                        aria_expanded: snapshot.mobile_open.to_string(),
                        onclick: move |_| send(state, NavEvent::OpenMobile),
                        span { class: "visually-hidden", {t!("nav-open-menu")} }
                        Icon { kind: IconKind::Menu }
                    }
                }
            }
        }
    }
}

/// Apply `event`; the signal is written only when the state changed.
fn send(mut state: Signal<NavState>, event: NavEvent) {
    let mut next = state.peek().clone();
    tracing::debug!(?event, "navbar event");
    if next.apply(event) {
        tracing::trace!(active = ?next.active.label(), at_top = next.at_top, "navbar state changed");
        state.set(next);
    }
}
