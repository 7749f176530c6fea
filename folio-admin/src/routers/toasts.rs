use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::toasts::{ToastKind, ToastsEvent};

/// Route a toasts event through the widget.
pub(crate) fn route_event(app: &mut App, event: ToastsEvent) -> Task<AppEvent> {
    app.widgets.toasts.reduce(event);
    Task::none()
}

/// Show a toast right away.
pub(crate) fn push(app: &mut App, kind: ToastKind, message: impl Into<String>) {
    app.widgets.toasts.push(kind, message, Instant::now());
}
