//! Shared UI crate for Vaultbar: the navigation bar, its pure state logic, and
//! the pages the platform crates route to.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod connect_button;
    pub mod flyout;
    pub mod icon;
    pub mod menu_item;
    pub mod mobile_menu;
    pub mod navbar;
    pub mod scroll_container;

    pub use connect_button::ConnectButton;
    pub use navbar::Navbar;
    pub use scroll_container::ScrollContainer;
}

pub mod theme {
    use dioxus::prelude::*;

    /// Shared theme (colors, layout primitives). Platform crates link it once at the root.
    pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
}

pub use crate::core::scroll::ScrollHandle;
pub use theme::THEME_CSS;
