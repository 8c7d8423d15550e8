use dioxus::prelude::*;

#[component]
pub fn NotFound(path: String) -> Element {
    let body = crate::t!("page-not-found-body", path = path.as_str());
    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("page-not-found-title")} }
            p { "{body}" }
        }
    }
}
