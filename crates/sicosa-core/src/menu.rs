//! Mobile navigation toggle.
//!
//! The toggle button and the navigation panel share one open/closed flag.
//! While open, the page body is scroll-locked.

/// Classes and inline style the DOM layer should apply after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// `active` class on the toggle.
    pub toggle_active: bool,
    /// `open` class on the nav panel.
    pub nav_open: bool,
    /// Value for `document.body.style.overflow`.
    pub body_overflow: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button clicked.
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// A navigation link was followed; always closes.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        self.view()
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            toggle_active: self.open,
            nav_open: self.open,
            body_overflow: if self.open { "hidden" } else { "" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_locks_and_unlocks_scroll() {
        let mut menu = MobileMenu::new();
        assert_eq!(
            menu.toggle(),
            MenuView {
                toggle_active: true,
                nav_open: true,
                body_overflow: "hidden",
            }
        );
        assert_eq!(
            menu.toggle(),
            MenuView {
                toggle_active: false,
                nav_open: false,
                body_overflow: "",
            }
        );
    }

    #[test]
    fn link_click_closes() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        let view = menu.close();
        assert!(!menu.is_open());
        assert_eq!(view.body_overflow, "");

        // Closing an already closed menu stays closed.
        assert_eq!(menu.close(), MobileMenu::new().view());
    }
}
