use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::core::format::px;
use crate::core::links::LinkKind;
use crate::core::menu::{FlyoutMeta, LinkSpec};
use crate::core::style::{flyout_class, FlyoutFlags};

/// Positioned submenu panel. Always mounted; `open` only swaps the visibility
/// class.
#[component]
pub fn FlyoutPanel(
    open: bool,
    links: Vec<LinkSpec>,
    meta: FlyoutMeta,
    on_follow: EventHandler<()>,
) -> Element {
    let position = format!(
        "left: -{}; --flyout-pointer: {};",
        px(meta.center_position),
        px(meta.pointer())
    );
    let width = format!("width: {};", px(meta.width()));
    let hidden = (!open).to_string();
    let external_hint = crate::t!("nav-external-hint");

    rsx! {
        div {
            class: flyout_class(FlyoutFlags { open }),
            style: "{position}",
            aria_hidden: hidden,
            div { class: "flyout__panel", style: "{width}",
                for link in links.iter() {
                    if LinkKind::of(&link.href).is_external() {
                        a {
                            key: "{link.href}",
                            class: "flyout__row",
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            title: "{external_hint}",
                            onclick: move |_| on_follow.call(()),
                            div { class: "flyout__item",
                                span { class: "flyout__title", "{link.title}" }
                                Icon { kind: IconKind::ArrowRight }
                            }
                            if let Some(description) = link.description.as_ref() {
                                p { class: "flyout__description", "{description}" }
                            }
                        }
                    } else {
                        Link {
                            key: "{link.href}",
                            class: "flyout__row",
                            to: link.href.clone(),
                            onclick: move |_| on_follow.call(()),
                            div { class: "flyout__item",
                                span { class: "flyout__title", "{link.title}" }
                            }
                            if let Some(description) = link.description.as_ref() {
                                p { class: "flyout__description", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
