use dioxus::prelude::*;

/// Stand-in body for routes whose content lives outside this workspace.
#[component]
pub fn Placeholder(title: String) -> Element {
    rsx! {
        section { class: "page page-placeholder",
            h1 { "{title}" }
            p { {crate::t!("page-placeholder")} }
        }
    }
}
