use std::time::{Duration, Instant};

use super::model::{Toast, ToastKind};

/// How long a toast stays on screen.
pub(crate) const TOAST_TTL: Duration = Duration::from_secs(4);
/// Older toasts are dropped beyond this count.
pub(crate) const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Debug, Default)]
pub(crate) struct ToastsState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    pub(crate) fn push(&mut self, kind: ToastKind, message: String, now: Instant) {
        self.next_id += 1;
        self.toasts
            .push(Toast::new(self.next_id, kind, message, now));

        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    pub(crate) fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id() != id);
    }

    /// Drop every toast whose lifetime ended at `now`.
    pub(crate) fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| {
            now.saturating_duration_since(toast.created_at()) < TOAST_TTL
        });
    }

    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
