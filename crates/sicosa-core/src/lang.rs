//! Language switcher dropdown.
//!
//! Two states, driven only by where a click lands. Clicks inside the
//! switcher are swallowed so the document-level handler never sees them.

/// Where a click landed relative to the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The current-language control.
    Current,
    /// Anywhere else inside the switcher (e.g. a language option).
    Inside,
    /// Anywhere else in the document.
    Outside,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LangState {
    #[default]
    Closed,
    Open,
}

/// Result of dispatching a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub state: LangState,
    /// Whether the DOM layer must call `stopPropagation()`.
    pub stop_propagation: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LangSwitcher {
    state: LangState,
}

impl LangSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LangState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == LangState::Open
    }

    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        let stop_propagation = match target {
            ClickTarget::Current => {
                self.state = match self.state {
                    LangState::Closed => LangState::Open,
                    LangState::Open => LangState::Closed,
                };
                true
            }
            ClickTarget::Inside => true,
            ClickTarget::Outside => {
                self.state = LangState::Closed;
                false
            }
        };
        ClickOutcome {
            state: self.state,
            stop_propagation,
        }
    }
}
