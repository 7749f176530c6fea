use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::toasts::{TOASTS_TICK_MS, ToastsEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Toast expiry only runs while something is on screen.
    if app.widgets.toasts.has_toasts() {
        let tick = iced::time::every(Duration::from_millis(TOASTS_TICK_MS))
            .map(|now| AppEvent::Toasts(ToastsEvent::Tick(now)));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
