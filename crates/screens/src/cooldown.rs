use std::time::{Duration, Instant};

/// Cooldown window after a navbar visibility switch. Switch requests
/// inside the window are dropped.
pub const NAV_SWITCH_COOLDOWN: Duration = Duration::from_millis(1500);

/// Re-entrancy guard around navbar visibility switches.
///
/// The deadline is plain data compared against a caller-supplied
/// `Instant`, so the single-threaded event loop needs no scheduled
/// callback and teardown cannot leave one dangling. Tests pick their
/// own `now`.
#[derive(Debug)]
pub struct NavSwitchGuard {
    deadline: Option<Instant>,
    window: Duration,
}

impl NavSwitchGuard {
    pub fn new() -> Self {
        Self::with_window(NAV_SWITCH_COOLDOWN)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            deadline: None,
            window,
        }
    }

    /// Whether a previous switch is still inside its cooldown window.
    pub fn is_armed(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Arm the guard if it is not already armed. Returns false while a
    /// previous switch is still cooling down; the caller must then
    /// drop the change request.
    pub fn try_arm(&mut self, now: Instant) -> bool {
        if self.is_armed(now) {
            return false;
        }
        self.deadline = Some(now + self.window);
        true
    }

    /// Clear the guard, e.g. on screen teardown.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for NavSwitchGuard {
    fn default() -> Self {
        Self::new()
    }
}
