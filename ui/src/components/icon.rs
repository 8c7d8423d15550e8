use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Menu,
    Close,
    ChevronDown,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "M5 12h14M13 6l6 6-6 6",
            IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
            IconKind::Close => "M6 18L18 6M6 6l12 12",
            IconKind::ChevronDown => "M6 9l6 6 6-6",
        }
    }

    fn class(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "icon icon--arrow-right",
            IconKind::Menu => "icon icon--menu",
            IconKind::Close => "icon icon--close",
            IconKind::ChevronDown => "icon icon--chevron-down",
        }
    }
}

/// Stroke icon drawn in `currentColor`; decorative, hidden from assistive tech.
#[component]
pub fn Icon(kind: IconKind) -> Element {
    rsx! {
        svg {
            class: kind.class(),
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: kind.path(),
            }
        }
    }
}
