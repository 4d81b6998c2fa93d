//! One-shot reveal-on-scroll tracking.
//!
//! Elements are identified by their index in the document-order list the
//! DOM layer collected. Each moves `Pending → Visible` at most once.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

/// What the DOM layer should do with an intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the `visible` class and stop observing the element.
    Reveal,
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Pending; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Number of elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }

    /// Process an intersection entry for element `index`.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        let Some(state) = self.states.get_mut(index) else {
            log::warn!("reveal entry for unknown element #{index}");
            return RevealAction::Ignore;
        };
        if !is_intersecting || *state == RevealState::Visible {
            return RevealAction::Ignore;
        }
        *state = RevealState::Visible;
        log::trace!("REVEAL #{index}");
        RevealAction::Reveal
    }
}
