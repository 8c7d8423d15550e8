use dioxus::prelude::*;

use crate::components::flyout::FlyoutPanel;
use crate::core::links::{any_selected, is_selected, LinkKind};
use crate::core::menu::{MenuEntry, MenuTarget};
use crate::core::nav_state::{label_key_event, NavEvent};
use crate::core::style::{item_class, ItemFlags};

/// One top-level entry of the desktop menu: either a plain link or a label
/// owning a flyout panel.
#[component]
pub fn MenuItem(
    entry: MenuEntry,
    active: bool,
    current_path: String,
    on_event: EventHandler<NavEvent>,
) -> Element {
    let MenuEntry {
        label,
        target,
        flyout,
    } = entry;

    match target {
        MenuTarget::Group(links) => {
            let class = item_class(ItemFlags {
                active,
                selected: any_selected(&links, &current_path),
                hoverable: true,
            });
            let expanded = active.to_string();
            let click_label = label.clone();
            let enter_label = label.clone();
            let key_label = label.clone();

            rsx! {
                li {
                    class: "navbar__item navbar__item--group",
                    onmouseleave: move |_| on_event.call(NavEvent::Leave),
                    a {
                        class,
                        tabindex: 0,
                        role: "button",
                        aria_haspopup: "true",
                        aria_expanded: expanded,
                        onclick: move |_| on_event.call(NavEvent::Activate(click_label.clone())),
                        onmouseenter: move |_| on_event.call(NavEvent::Activate(enter_label.clone())),
                        onkeydown: move |evt| {
                            let key = evt.key().to_string();
                            if let Some(event) = label_key_event(&key_label, &key) {
                                evt.prevent_default();
                                on_event.call(event);
                            }
                        },
                        span { class: "navbar__label", "data-text": "{label}", "{label}" }
                    }
                    FlyoutPanel {
                        open: active,
                        links,
                        meta: flyout,
                        on_follow: move |_| on_event.call(NavEvent::Dismiss),
                    }
                }
            }
        }
        MenuTarget::Single(link) if LinkKind::of(&link.href).is_external() => {
            // External destinations are never "the current page".
            let class = item_class(ItemFlags {
                hoverable: true,
                ..Default::default()
            });
            rsx! {
                li { class: "navbar__item",
                    a {
                        class,
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        span { class: "navbar__label", "data-text": "{label}", "{label}" }
                    }
                }
            }
        }
        MenuTarget::Single(link) => {
            let class = item_class(ItemFlags {
                selected: is_selected(&link.href, &current_path),
                hoverable: true,
                ..Default::default()
            });
            rsx! {
                li { class: "navbar__item",
                    Link { class, to: link.href.clone(),
                        span { class: "navbar__label", "data-text": "{label}", "{label}" }
                    }
                }
            }
        }
    }
}
