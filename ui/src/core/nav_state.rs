//! Navigation bar state machine.
//!
//! All interaction funnels through [`NavState::apply`]; components only
//! translate DOM events into [`NavEvent`]s. A single [`ActiveMenu`] value
//! tracks the open flyout, so at most one is ever open.

/// Which menu label (if any) currently has its panel open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveMenu {
    #[default]
    None,
    Active(String),
}

impl ActiveMenu {
    pub fn is(&self, label: &str) -> bool {
        matches!(self, ActiveMenu::Active(current) if current == label)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ActiveMenu::None => None,
            ActiveMenu::Active(label) => Some(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Pointer-enter, click, or key press on a flyout label.
    Activate(String),
    /// Pointer left a menu item. Closes whatever flyout is open.
    Leave,
    /// Escape, or a link inside a flyout was followed.
    Dismiss,
    OpenMobile,
    CloseMobile,
    /// Expand the given mobile section, collapsing it if it is already open.
    ToggleMobileSubmenu(String),
    /// The scroll container reported a new vertical offset.
    Scrolled(f64),
}

/// Map a key pressed on a focused flyout label to an event.
///
/// Any character key, Enter or ArrowDown opens the label. Escape closes it.
/// Other named keys map to nothing: Tab and Shift+Tab must keep moving focus
/// through the bar, and modifiers alone are not a press.
pub fn label_key_event(label: &str, key: &str) -> Option<NavEvent> {
    match key {
        "Escape" => Some(NavEvent::Dismiss),
        "Enter" | "ArrowDown" => Some(NavEvent::Activate(label.to_string())),
        key if key.chars().count() == 1 => Some(NavEvent::Activate(label.to_string())),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub active: ActiveMenu,
    pub mobile_open: bool,
    pub mobile_submenu: ActiveMenu,
    pub at_top: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::with_offset(0.0)
    }
}

impl NavState {
    pub fn with_offset(offset: f64) -> Self {
        Self {
            active: ActiveMenu::None,
            mobile_open: false,
            mobile_submenu: ActiveMenu::None,
            at_top: offset == 0.0,
        }
    }

    /// Apply an event. Returns `true` when anything changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let before = self.clone();
        match event {
            NavEvent::Activate(label) => self.active = ActiveMenu::Active(label),
            NavEvent::Leave | NavEvent::Dismiss => self.active = ActiveMenu::None,
            NavEvent::OpenMobile => {
                self.mobile_open = true;
                self.active = ActiveMenu::None;
            }
            NavEvent::CloseMobile => {
                self.mobile_open = false;
                self.mobile_submenu = ActiveMenu::None;
            }
            NavEvent::ToggleMobileSubmenu(label) => {
                self.mobile_submenu = if self.mobile_submenu.is(&label) {
                    ActiveMenu::None
                } else {
                    ActiveMenu::Active(label)
                };
            }
            NavEvent::Scrolled(offset) => self.at_top = offset == 0.0,
        }
        *self != before
    }

    /// Shadow is drawn once the page has scrolled away from the top.
    pub fn shadowed(&self) -> bool {
        !self.at_top
    }
}
