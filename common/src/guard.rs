//! Duplicate-submission guard for the confirm control.
//!
//! Two independent gates: an in-flight flag cleared only by the network
//! completion path, and a cooldown counter that starts when a submission
//! attempt is accepted and counts down once per second. A confirm is
//! accepted only when both are clear. All transitions are synchronous, so
//! on a single-threaded event loop the gates are set before the request is
//! ever awaited.

use tracing::debug;

/// Default cooldown length in one-second ticks.
pub const DEFAULT_COOLDOWN_SECS: u32 = 10;

/// Combined view of both gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Submitting,
    Cooling(u32),
    SubmittingWhileCooling(u32),
}

#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    in_flight: bool,
    cooldown_remaining: u32,
    cooldown_secs: u32,
    /// Confirm label captured on first activation.
    original_label: Option<String>,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_SECS)
    }
}

impl SubmissionGuard {
    pub fn new(cooldown_secs: u32) -> Self {
        Self {
            in_flight: false,
            cooldown_remaining: 0,
            cooldown_secs,
            original_label: None,
        }
    }

    pub fn state(&self) -> GuardState {
        match (self.in_flight, self.cooldown_remaining) {
            (false, 0) => GuardState::Idle,
            (true, 0) => GuardState::Submitting,
            (false, n) => GuardState::Cooling(n),
            (true, n) => GuardState::SubmittingWhileCooling(n),
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    /// Whether a confirm would be accepted right now.
    pub fn is_accepting(&self) -> bool {
        !self.in_flight && self.cooldown_remaining == 0
    }

    /// Try to take the in-flight gate. Returns false, with no other effect,
    /// when either gate is still closed.
    pub fn try_acquire(&mut self) -> bool {
        if !self.is_accepting() {
            debug!(state = ?self.state(), "Confirm discarded");
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Clear the in-flight gate. Leaves any running cooldown alone.
    pub fn release(&mut self) {
        self.in_flight = false;
    }

    /// Start the cooldown. `current_label` is remembered the first time
    /// only, so repeated cycles always restore the same text.
    pub fn start_cooldown(&mut self, current_label: &str) {
        if self.original_label.is_none() {
            self.original_label = Some(current_label.to_string());
        }
        self.cooldown_remaining = self.cooldown_secs;
    }

    /// Advance the cooldown by one second. Returns true while still cooling.
    pub fn tick(&mut self) -> bool {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
        if self.cooldown_remaining == 0 {
            debug!("Cooldown finished");
        }
        self.cooldown_remaining > 0
    }

    /// Text for the confirm control: `"<label> (<n>)"` while cooling,
    /// otherwise the original label (or `fallback` before first activation).
    pub fn label(&self, fallback: &str) -> String {
        let original = self.original_label.as_deref().unwrap_or(fallback);
        match self.cooldown_remaining {
            0 => original.to_string(),
            n => format!("{original} ({n})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_blocks_second_confirm() {
        let mut guard = SubmissionGuard::default();
        assert!(guard.try_acquire());
        assert_eq!(guard.state(), GuardState::Submitting);
        assert!(!guard.try_acquire());
        assert!(guard.in_flight());
    }

    #[test]
    fn test_gates_clear_independently() {
        let mut guard = SubmissionGuard::new(3);
        assert!(guard.try_acquire());
        guard.start_cooldown("Confirm");
        assert_eq!(guard.state(), GuardState::SubmittingWhileCooling(3));

        guard.release();
        assert_eq!(guard.state(), GuardState::Cooling(3));
        assert!(!guard.try_acquire());

        assert!(guard.tick());
        assert!(guard.tick());
        assert!(!guard.tick());
        assert_eq!(guard.state(), GuardState::Idle);
        assert!(guard.try_acquire());
    }

    #[test]
    fn test_cooldown_expiry_does_not_clear_in_flight() {
        let mut guard = SubmissionGuard::new(1);
        assert!(guard.try_acquire());
        guard.start_cooldown("Confirm");
        assert!(!guard.tick());
        assert_eq!(guard.state(), GuardState::Submitting);
        assert!(!guard.try_acquire());
    }

    #[test]
    fn test_countdown_labels() {
        let mut guard = SubmissionGuard::default();
        assert!(guard.try_acquire());
        guard.start_cooldown("Confirm");
        guard.release();

        let mut labels = vec![guard.label("Confirm")];
        while guard.tick() {
            labels.push(guard.label("Confirm"));
        }
        let expected: Vec<String> = (1..=10).rev().map(|n| format!("Confirm ({n})")).collect();
        assert_eq!(labels, expected);
        assert_eq!(guard.label("Confirm"), "Confirm");
    }

    #[test]
    fn test_original_label_does_not_drift() {
        let mut guard = SubmissionGuard::new(2);
        for cycle in 0..3 {
            assert!(guard.try_acquire());
            // Later cycles hand in stale countdown text; it must be ignored.
            let shown = match cycle {
                0 => "Confirm".to_string(),
                n => format!("Confirm ({n})"),
            };
            guard.start_cooldown(&shown);
            guard.release();
            assert_eq!(guard.label("ignored"), "Confirm (2)");
            while guard.tick() {}
        }
        assert_eq!(guard.label("ignored"), "Confirm");
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut guard = SubmissionGuard::default();
        assert!(!guard.tick());
        assert_eq!(guard.state(), GuardState::Idle);
    }
}
