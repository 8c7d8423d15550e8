//! Static menu configuration: which labels appear in the bar, where they link,
//! and how each flyout panel is laid out.
//!
//! The built-in configuration is embedded from `assets/config/menu_links.json`
//! and parsed once. Entries keep their declaration order, which is also the
//! display order in both the desktop bar and the mobile menu.
//!
//! File shape:
//! ```text
//! [
//!   { "label": "Vaults", "link": { "href": "/vaults", "title": "Vaults" } },
//!   { "label": "Products",
//!     "links": [ { "href": "/earn", "title": "Earn", "description": "..." } ],
//!     "flyout": { "center_position": 60, "menu_width": 220, "pointer": 90 } }
//! ]
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_MENU_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/config/menu_links.json"
));

/// Panel width used when an entry does not set `menu_width`.
pub const DEFAULT_MENU_WIDTH: f64 = 184.0;
/// Arrow offset used when an entry does not set `pointer`.
pub const DEFAULT_POINTER: f64 = 67.5;

#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("menu configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu label `{0}` is declared more than once")]
    DuplicateLabel(String),
    #[error("menu `{0}` declares an empty link list")]
    EmptyGroup(String),
    #[error("menu `{0}` contains a link with an empty href")]
    EmptyHref(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkSpec {
    pub href: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl LinkSpec {
    pub fn new(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
            description: None,
        }
    }
}

/// Layout of a flyout panel relative to its label, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct FlyoutMeta {
    #[serde(default)]
    pub center_position: f64,
    #[serde(default)]
    pub menu_width: Option<f64>,
    #[serde(default)]
    pub pointer: Option<f64>,
}

impl FlyoutMeta {
    pub fn width(&self) -> f64 {
        self.menu_width.unwrap_or(DEFAULT_MENU_WIDTH)
    }

    pub fn pointer(&self) -> f64 {
        self.pointer.unwrap_or(DEFAULT_POINTER)
    }
}

/// What a top-level label points at.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuTarget {
    Single(LinkSpec),
    Group(Vec<LinkSpec>),
}

impl MenuTarget {
    pub fn links(&self) -> &[LinkSpec] {
        match self {
            MenuTarget::Single(link) => std::slice::from_ref(link),
            MenuTarget::Group(links) => links,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub target: MenuTarget,
    pub flyout: FlyoutMeta,
}

impl MenuEntry {
    pub fn single(label: impl Into<String>, link: LinkSpec) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Single(link),
            flyout: FlyoutMeta::default(),
        }
    }

    pub fn group(label: impl Into<String>, links: Vec<LinkSpec>, flyout: FlyoutMeta) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Group(links),
            flyout,
        }
    }
}

// On-disk form. A `link` key means a single link, `links` a flyout group.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    label: String,
    #[serde(default)]
    link: Option<LinkSpec>,
    #[serde(default)]
    links: Option<Vec<LinkSpec>>,
    #[serde(default)]
    flyout: FlyoutMeta,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuConfig {
    pub entries: Vec<MenuEntry>,
}

impl MenuConfig {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuConfigError> {
        let config = Self { entries };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, MenuConfigError> {
        let raw_entries: Vec<RawEntry> = serde_json::from_str(raw)?;
        let mut entries = Vec::with_capacity(raw_entries.len());
        for raw in raw_entries {
            let target = match (raw.link, raw.links) {
                (_, Some(links)) => MenuTarget::Group(links),
                (Some(link), None) => MenuTarget::Single(link),
                (None, None) => return Err(MenuConfigError::EmptyGroup(raw.label)),
            };
            entries.push(MenuEntry {
                label: raw.label,
                target,
                flyout: raw.flyout,
            });
        }
        Self::new(entries)
    }

    pub fn entry(&self, label: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self) -> Result<(), MenuConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.label.as_str()) {
                return Err(MenuConfigError::DuplicateLabel(entry.label.clone()));
            }
            if let MenuTarget::Group(links) = &entry.target {
                if links.is_empty() {
                    return Err(MenuConfigError::EmptyGroup(entry.label.clone()));
                }
            }
            if entry.target.links().iter().any(|l| l.href.trim().is_empty()) {
                return Err(MenuConfigError::EmptyHref(entry.label.clone()));
            }
        }
        Ok(())
    }
}

static BUILTIN: Lazy<MenuConfig> = Lazy::new(|| match MenuConfig::from_json(BUILTIN_MENU_JSON) {
    Ok(config) => {
        tracing::debug!(entries = config.entries.len(), "loaded built-in menu configuration");
        config
    }
    Err(err) => {
        tracing::error!("built-in menu configuration rejected ({err}); rendering without menu");
        MenuConfig::default()
    }
});

/// The embedded menu configuration (parsed on first use).
pub fn builtin() -> &'static MenuConfig {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_parses_and_is_not_empty() {
        let parsed = MenuConfig::from_json(BUILTIN_MENU_JSON).expect("built-in config is valid");
        assert!(!parsed.is_empty());
        assert_eq!(builtin(), &parsed);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let config = MenuConfig::from_json(
            r#"[
                { "label": "Zeta", "link": { "href": "/z", "title": "Z" } },
                { "label": "Alpha", "links": [ { "href": "/a", "title": "A" } ] }
            ]"#,
        )
        .unwrap();
        let labels: Vec<_> = config.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Zeta", "Alpha"]);
    }

    #[test]
    fn single_and_group_targets_are_distinguished() {
        let config = MenuConfig::from_json(
            r#"[
                { "label": "Vaults", "link": { "href": "/vaults", "title": "Vaults" } },
                { "label": "More", "links": [
                    { "href": "/earn", "title": "Earn", "description": "Lend assets" },
                    { "href": "https://docs.example.org", "title": "Docs" }
                ], "flyout": { "center_position": 40, "menu_width": 220 } }
            ]"#,
        )
        .unwrap();

        assert!(matches!(config.entries[0].target, MenuTarget::Single(_)));
        let more = config.entry("More").unwrap();
        assert_eq!(more.target.links().len(), 2);
        assert_eq!(
            more.target.links()[0].description.as_deref(),
            Some("Lend assets")
        );
        assert_eq!(more.flyout.width(), 220.0);
        assert_eq!(more.flyout.pointer(), DEFAULT_POINTER);
        assert_eq!(more.flyout.center_position, 40.0);
    }

    #[test]
    fn missing_flyout_meta_uses_defaults() {
        let meta = FlyoutMeta::default();
        assert_eq!(meta.width(), DEFAULT_MENU_WIDTH);
        assert_eq!(meta.pointer(), DEFAULT_POINTER);
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let err = MenuConfig::from_json(
            r#"[
                { "label": "Vaults", "link": { "href": "/vaults", "title": "Vaults" } },
                { "label": "Vaults", "link": { "href": "/v2", "title": "V2" } }
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuConfigError::DuplicateLabel(l) if l == "Vaults"));
    }

    #[test]
    fn empty_groups_and_hrefs_are_rejected() {
        let empty_group =
            MenuConfig::from_json(r#"[ { "label": "Nothing", "links": [] } ]"#).unwrap_err();
        assert!(matches!(empty_group, MenuConfigError::EmptyGroup(_)));

        let no_target = MenuConfig::from_json(r#"[ { "label": "Nothing" } ]"#).unwrap_err();
        assert!(matches!(no_target, MenuConfigError::EmptyGroup(_)));

        let empty_href = MenuConfig::new(vec![MenuEntry::single("Blank", LinkSpec::new(" ", "Blank"))])
            .unwrap_err();
        assert!(matches!(empty_href, MenuConfigError::EmptyHref(l) if l == "Blank"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MenuConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, MenuConfigError::Parse(_)));
    }
}
