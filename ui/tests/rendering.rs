//! Markup produced by the navigation components, rendered through a
//! `VirtualDom` inside a router and serialized with `dioxus-ssr`.

use dioxus::prelude::*;

use ui::components::flyout::FlyoutPanel;
use ui::components::mobile_menu::MobileMenu;
use ui::components::Navbar;
use ui::core::menu::{FlyoutMeta, LinkSpec, MenuConfig, MenuEntry};
use ui::core::nav_state::ActiveMenu;
use ui::ScrollHandle;

fn sample_menu() -> MenuConfig {
    MenuConfig::new(vec![
        MenuEntry::single("Vaults", LinkSpec::new("/vaults", "Vaults")),
        MenuEntry::group(
            "Products",
            vec![LinkSpec::new("/earn", "Earn"), LinkSpec::new("/zap", "Zap")],
            FlyoutMeta::default(),
        ),
        MenuEntry::group(
            "Governance",
            vec![
                LinkSpec::new("https://gov.example.finance", "Forum"),
                LinkSpec::new("/stats", "Stats"),
            ],
            FlyoutMeta {
                center_position: 48.0,
                menu_width: Some(200.0),
                pointer: Some(80.0),
            },
        ),
    ])
    .expect("sample menu is valid")
}

/// What the catch-all route renders.
#[derive(Clone, PartialEq)]
enum Scene {
    Bar { path: String, scroll: ScrollHandle },
    Flyout { open: bool },
    Mobile { submenu: ActiveMenu },
}

// Every path parses, so router links stay internal whatever their target.
#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[route("/:..segments")]
    Stage { segments: Vec<String> },
}

#[component]
fn Harness(scene: Scene) -> Element {
    use_context_provider(|| scene);
    rsx! { Router::<Route> {} }
}

#[component]
fn Stage(segments: Vec<String>) -> Element {
    let _ = segments;
    match use_context::<Scene>() {
        Scene::Bar { path, scroll } => rsx! {
            Navbar { current_path: path, scroll, menu: sample_menu() }
        },
        Scene::Flyout { open } => {
            let governance = sample_menu().entries[2].clone();
            rsx! {
                FlyoutPanel {
                    open,
                    links: governance.target.links().to_vec(),
                    meta: governance.flyout,
                    on_follow: |_: ()| {},
                }
            }
        }
        Scene::Mobile { submenu } => rsx! {
            MobileMenu {
                menu: sample_menu(),
                current_path: "/stats".to_string(),
                submenu,
                on_open_change: |_: bool| {},
                on_submenu_change: |_: String| {},
            }
        },
    }
}

fn mount(scene: Scene) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { scene });
    dom.rebuild_in_place();
    dom
}

/// The opening `<a ...>` tag carrying `href`.
fn anchor<'a>(html: &'a str, href: &str) -> &'a str {
    let needle = format!("href=\"{href}\"");
    let at = html
        .find(&needle)
        .unwrap_or_else(|| panic!("no anchor for {href} in:\n{html}"));
    let start = html[..at].rfind("<a").expect("anchor opening");
    let end = at + html[at..].find('>').expect("anchor end");
    &html[start..=end]
}

#[test]
fn navbar_marks_current_page_and_keeps_flyouts_mounted() {
    let dom = mount(Scene::Bar {
        path: "/VAULTS".to_string(),
        scroll: ScrollHandle::new(),
    });
    let html = dioxus_ssr::render(&dom);

    assert!(anchor(&html, "/vaults").contains("navbar__item-link--selected"));
    assert!(!anchor(&html, "/earn").contains("navbar__item-link--selected"));

    // Both flyouts exist while closed.
    assert_eq!(html.matches("flyout flyout--hidden").count(), 2);
    assert!(!html.contains("flyout--open"));
}

#[test]
fn navbar_gains_shadow_once_the_container_scrolls() {
    let scroll = ScrollHandle::new();
    let mut dom = mount(Scene::Bar {
        path: "/".to_string(),
        scroll: scroll.clone(),
    });
    let before = dioxus_ssr::render(&dom);
    assert!(before.contains("class=\"navbar\""));
    assert!(!before.contains("navbar--shadow"));
    assert_eq!(scroll.listener_count(), 1);

    dom.in_runtime(|| scroll.dispatch(50.0));
    dom.render_immediate_to_vec();
    let after = dioxus_ssr::render(&dom);
    assert!(after.contains("navbar navbar--shadow"));

    dom.in_runtime(|| scroll.dispatch(0.0));
    dom.render_immediate_to_vec();
    assert!(!dioxus_ssr::render(&dom).contains("navbar--shadow"));
}

#[test]
fn unmounting_the_navbar_releases_its_listener() {
    let scroll = ScrollHandle::new();
    let dom = mount(Scene::Bar {
        path: "/".to_string(),
        scroll: scroll.clone(),
    });
    assert_eq!(scroll.listener_count(), 1);

    drop(dom);
    assert_eq!(scroll.listener_count(), 0);
}

#[test]
fn navbar_starts_with_mobile_menu_closed() {
    let dom = mount(Scene::Bar {
        path: "/".to_string(),
        scroll: ScrollHandle::new(),
    });
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("navbar__hamburger"));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("class=\"mobile-menu\""));
}

#[test]
fn flyout_rows_split_external_and_router_links() {
    let html = dioxus_ssr::render(&mount(Scene::Flyout { open: false }));

    assert!(html.contains("flyout flyout--hidden"));
    assert!(html.contains("--flyout-pointer: 80px"));
    assert!(html.contains("width: 200px"));

    let external = anchor(&html, "https://gov.example.finance");
    assert!(external.contains("target=\"_blank\""));
    assert!(external.contains("noopener noreferrer"));

    let internal = anchor(&html, "/stats");
    assert!(internal.contains("flyout__row"));
    assert!(!internal.contains("_blank"));
}

#[test]
fn open_flyout_swaps_only_the_visibility_class() {
    let html = dioxus_ssr::render(&mount(Scene::Flyout { open: true }));

    assert!(html.contains("flyout flyout--open"));
    assert!(!html.contains("flyout--hidden"));
    assert!(html.contains("Forum"));
    assert!(html.contains("Stats"));
}

#[test]
fn mobile_menu_expands_only_the_chosen_section() {
    let html = dioxus_ssr::render(&mount(Scene::Mobile {
        submenu: ActiveMenu::Active("Governance".to_string()),
    }));

    assert!(html.contains("class=\"mobile-menu\""));
    assert!(html.contains("mobile-menu__section--expanded"));
    assert!(anchor(&html, "https://gov.example.finance").contains("target=\"_blank\""));
    assert!(anchor(&html, "/stats").contains("mobile-menu__link--selected"));

    // Products stays collapsed.
    assert!(!html.contains("href=\"/earn\""));
}

#[test]
fn collapsed_mobile_menu_lists_top_level_entries() {
    let html = dioxus_ssr::render(&mount(Scene::Mobile {
        submenu: ActiveMenu::None,
    }));

    assert!(!html.contains("mobile-menu__section--expanded"));
    assert!(html.contains("href=\"/vaults\""));
    assert!(html.contains("Products"));
    assert!(html.contains("Governance"));
}
