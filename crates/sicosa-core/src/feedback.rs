//! Transient "sent" confirmation on the submit control.
//!
//! Each submission swaps the control's label and schedules a restore.
//! Overlapping submissions share one remembered original label, and only
//! the most recent restore is honoured, so a burst of clicks can never
//! leave the confirmation label stuck in place.

/// Identifies one scheduled restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackToken(u64);

#[derive(Debug, Clone, Default)]
pub struct SubmitFeedback {
    original: Option<String>,
    generation: u64,
}

impl SubmitFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a confirmation is currently showing.
    pub fn is_pending(&self) -> bool {
        self.original.is_some()
    }

    /// Start (or extend) a confirmation. `current_label` is whatever the
    /// control shows right now; it is only remembered if no confirmation
    /// is already pending.
    pub fn begin(&mut self, current_label: &str) -> FeedbackToken {
        if self.original.is_none() {
            self.original = Some(current_label.to_string());
        }
        self.generation += 1;
        FeedbackToken(self.generation)
    }

    /// A restore timer fired. Returns the label to put back, or `None`
    /// if a later submission superseded this timer.
    pub fn finish(&mut self, token: FeedbackToken) -> Option<String> {
        if token.0 != self.generation {
            log::trace!("stale feedback token {} (latest {})", token.0, self.generation);
            return None;
        }
        self.original.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_submission_restores_label() {
        let mut fb = SubmitFeedback::new();
        let t = fb.begin("Send");
        assert!(fb.is_pending());
        assert_eq!(fb.finish(t).as_deref(), Some("Send"));
        assert!(!fb.is_pending());
    }

    #[test]
    fn overlapping_submissions_restore_true_original() {
        let mut fb = SubmitFeedback::new();
        let first = fb.begin("Send");
        // Second click lands while the control already shows the checkmark.
        let second = fb.begin("✓");
        assert_eq!(fb.finish(first), None);
        assert_eq!(fb.finish(second).as_deref(), Some("Send"));
    }

    #[test]
    fn finished_token_is_not_reused() {
        let mut fb = SubmitFeedback::new();
        let t = fb.begin("Send");
        assert!(fb.finish(t).is_some());
        assert_eq!(fb.finish(t), None);
    }
}
