//! Per-session input state and scenario selection.
//!
//! One interactive session owns one [`SessionState`] and passes it into
//! every render cycle; nothing here is process-global, so concurrent
//! sessions never share input state. A demo trigger queues its text in the
//! state and the next cycle consumes it ahead of any typed entry.

/// Input state carried across the render cycles of a single session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Text queued by a demo trigger, waiting to be analyzed.
    pub pending_text: String,
    /// True while the queued text should run without a manual submission.
    pub auto_run: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue preset scenario text for the next render cycle.
    pub fn queue_demo(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
        self.auto_run = true;
    }

    /// Drop the queued text once a cycle's remote call has completed.
    ///
    /// Never called for a failed call: an interrupted cycle leaves the
    /// fields exactly as the selector left them, with no rollback.
    pub fn finish_cycle(&mut self) {
        self.pending_text.clear();
    }
}

/// Choose the scenario for this render cycle, if any.
///
/// Queued demo text wins over text submitted in the same cycle. The
/// auto-run flag is consumed as soon as the queued text is chosen, before
/// any remote call is issued, so a later failure cannot leave it stuck.
/// Whitespace-only candidates select nothing, silently. Returns the
/// original, untrimmed text.
pub fn select_scenario(state: &mut SessionState, submitted: Option<&str>) -> Option<String> {
    if state.auto_run && !state.pending_text.trim().is_empty() {
        state.auto_run = false;
        return Some(state.pending_text.clone());
    }
    match submitted {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        _ => None,
    }
}
