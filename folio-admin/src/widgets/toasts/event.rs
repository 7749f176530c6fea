use std::time::Instant;

/// Expiry tick interval while any toast is visible.
pub(crate) const TOASTS_TICK_MS: u64 = 250;

/// Events handled by the toast stack.
#[derive(Debug, Clone)]
pub(crate) enum ToastsEvent {
    /// A toast was clicked.
    Dismiss { id: u64 },
    /// Periodic expiry check.
    Tick(Instant),
}
