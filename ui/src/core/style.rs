//! Class-name rule tables keyed by visual state.
//!
//! Components never branch on state to build class strings; they describe the
//! state as flags and look the modifiers up here. The matching declarations
//! live in `assets/styling/navbar.css`.

/// Visual state of a top-level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Its flyout is open (colored + bold).
    pub active: bool,
    /// It, or one of its links, matches the current path (underlined).
    pub selected: bool,
    /// Hover highlight applies.
    pub hoverable: bool,
}

type Rule<F> = (fn(&F) -> bool, &'static str);

const ITEM_BASE: &str = "navbar__item-link";
const ITEM_RULES: &[Rule<ItemFlags>] = &[
    (|f| f.active, "navbar__item-link--active"),
    (|f| f.selected, "navbar__item-link--selected"),
    (|f| f.hoverable, "navbar__item-link--hoverable"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarFlags {
    pub shadowed: bool,
}

const BAR_BASE: &str = "navbar";
const BAR_RULES: &[Rule<BarFlags>] = &[(|f| f.shadowed, "navbar--shadow")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlyoutFlags {
    pub open: bool,
}

const FLYOUT_BASE: &str = "flyout";
const FLYOUT_RULES: &[Rule<FlyoutFlags>] = &[
    (|f| f.open, "flyout--open"),
    (|f| !f.open, "flyout--hidden"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionFlags {
    pub expanded: bool,
    pub selected: bool,
}

const SECTION_BASE: &str = "mobile-menu__section";
const SECTION_RULES: &[Rule<SectionFlags>] = &[
    (|f| f.expanded, "mobile-menu__section--expanded"),
    (|f| f.selected, "mobile-menu__section--selected"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkFlags {
    pub selected: bool,
}

const MOBILE_LINK_BASE: &str = "mobile-menu__link";
const MOBILE_LINK_RULES: &[Rule<LinkFlags>] = &[(|f| f.selected, "mobile-menu__link--selected")];

fn compose<F>(base: &str, rules: &[Rule<F>], flags: &F) -> String {
    let mut class = String::from(base);
    for (applies, modifier) in rules {
        if applies(flags) {
            class.push(' ');
            class.push_str(modifier);
        }
    }
    class
}

pub fn item_class(flags: ItemFlags) -> String {
    compose(ITEM_BASE, ITEM_RULES, &flags)
}

pub fn bar_class(flags: BarFlags) -> String {
    compose(BAR_BASE, BAR_RULES, &flags)
}

pub fn flyout_class(flags: FlyoutFlags) -> String {
    compose(FLYOUT_BASE, FLYOUT_RULES, &flags)
}

pub fn section_class(flags: SectionFlags) -> String {
    compose(SECTION_BASE, SECTION_RULES, &flags)
}

pub fn mobile_link_class(flags: LinkFlags) -> String {
    compose(MOBILE_LINK_BASE, MOBILE_LINK_RULES, &flags)
}

/// Every modifier class the tables can emit (used by the stylesheet lint).
pub fn all_modifiers() -> Vec<&'static str> {
    ITEM_RULES
        .iter()
        .map(|(_, m)| *m)
        .chain(BAR_RULES.iter().map(|(_, m)| *m))
        .chain(FLYOUT_RULES.iter().map(|(_, m)| *m))
        .chain(SECTION_RULES.iter().map(|(_, m)| *m))
        .chain(MOBILE_LINK_RULES.iter().map(|(_, m)| *m))
        .collect()
}
