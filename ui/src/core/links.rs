//! Link classification and selection against the current path.

use super::menu::LinkSpec;

/// How a link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Router navigation inside the app.
    Internal,
    /// Plain anchor opened in a new browsing context.
    External,
}

impl LinkKind {
    /// Any href mentioning `http` leaves the app; everything else is routed.
    pub fn of(href: &str) -> Self {
        if href.contains("http") {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    pub fn is_external(self) -> bool {
        self == LinkKind::External
    }
}

/// A link is selected when its href equals the current path, ignoring case.
pub fn is_selected(href: &str, current_path: &str) -> bool {
    href.to_lowercase() == current_path.to_lowercase()
}

/// A flyout group is selected when any of its links is.
pub fn any_selected(links: &[LinkSpec], current_path: &str) -> bool {
    links.iter().any(|l| is_selected(&l.href, current_path))
}
