use std::time::Instant;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Failure,
    Info,
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
    created_at: Instant,
}

impl Toast {
    pub(crate) fn new(
        id: u64,
        kind: ToastKind,
        message: String,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            kind,
            message,
            created_at,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn kind(&self) -> ToastKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn created_at(&self) -> Instant {
        self.created_at
    }
}

/// Read-only view model for the toast stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastsViewModel<'a> {
    /// Oldest first; the newest toast renders at the bottom.
    pub(crate) toasts: &'a [Toast],
}
