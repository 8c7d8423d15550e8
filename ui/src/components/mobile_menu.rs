use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::core::links::{any_selected, is_selected, LinkKind};
use crate::core::menu::{LinkSpec, MenuConfig, MenuEntry, MenuTarget};
use crate::core::nav_state::ActiveMenu;
use crate::core::style::{mobile_link_class, section_class, LinkFlags, SectionFlags};

/// Full-screen menu for narrow viewports. Mounted by the navbar only while
/// open; it owns no state and reports changes through the two handlers.
#[component]
pub fn MobileMenu(
    menu: MenuConfig,
    current_path: String,
    submenu: ActiveMenu,
    on_open_change: EventHandler<bool>,
    on_submenu_change: EventHandler<String>,
) -> Element {
    let close_label = crate::t!("nav-close-menu");

    rsx! {
        div { class: "mobile-menu", role: "dialog", aria_modal: "true",
            div { class: "mobile-menu__header",
                button {
                    r#type: "button",
                    class: "mobile-menu__close",
                    onclick: move |_| on_open_change.call(false),
                    span { class: "visually-hidden", "{close_label}" }
                    Icon { kind: IconKind::Close }
                }
            }
            ul { class: "mobile-menu__sections",
                for entry in menu.entries.iter() {
                    {render_section(entry, &submenu, &current_path, on_open_change, on_submenu_change)}
                }
            }
        }
    }
}

fn render_section(
    entry: &MenuEntry,
    submenu: &ActiveMenu,
    current_path: &str,
    on_open_change: EventHandler<bool>,
    on_submenu_change: EventHandler<String>,
) -> Element {
    let label = entry.label.clone();

    match &entry.target {
        MenuTarget::Group(links) => {
            let expanded = submenu.is(&label);
            let class = section_class(SectionFlags {
                expanded,
                selected: any_selected(links, current_path),
            });
            let toggle_label = label.clone();
            let rows: Vec<Element> = if expanded {
                links
                    .iter()
                    .map(|link| mobile_link(link, current_path, on_open_change))
                    .collect()
            } else {
                Vec::new()
            };

            rsx! {
                li { key: "{label}", class,
                    button {
                        r#type: "button",
                        class: "mobile-menu__toggle",
                        aria_expanded: expanded.to_string(),
                        onclick: move |_| on_submenu_change.call(toggle_label.clone()),
                        "{label}"
                        Icon { kind: IconKind::ChevronDown }
                    }
                    if expanded {
                        ul { class: "mobile-menu__links",
                            for row in rows.into_iter() {
                                li { {row} }
                            }
                        }
                    }
                }
            }
        }
        MenuTarget::Single(link) => {
            let class = section_class(SectionFlags {
                selected: is_selected(&link.href, current_path),
                ..Default::default()
            });
            let titled = LinkSpec {
                title: label.clone(),
                ..link.clone()
            };

            rsx! {
                li { key: "{label}", class,
                    {mobile_link(&titled, current_path, on_open_change)}
                }
            }
        }
    }
}

fn mobile_link(link: &LinkSpec, current_path: &str, on_open_change: EventHandler<bool>) -> Element {
    if LinkKind::of(&link.href).is_external() {
        rsx! {
            a {
                class: "mobile-menu__link",
                href: "{link.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_| on_open_change.call(false),
                "{link.title}"
                Icon { kind: IconKind::ArrowRight }
            }
        }
    } else {
        let class = mobile_link_class(LinkFlags {
            selected: is_selected(&link.href, current_path),
        });
        rsx! {
            Link {
                class,
                to: link.href.clone(),
                onclick: move |_| on_open_change.call(false),
                "{link.title}"
            }
        }
    }
}
