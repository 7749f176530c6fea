use iced::{Task, window};

use super::{App, AppEvent};
use crate::guards::{OverlayGuard, overlay_guard};
use crate::routers;

/// Guard overlays, then route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let Some(overlay) = app.open_overlay() else {
        return route(app, event);
    };

    match overlay_guard(overlay, &event) {
        OverlayGuard::Allow => route(app, event),
        OverlayGuard::Ignore => {
            log::debug!("ignoring event while {overlay:?} is open");
            Task::none()
        },
        OverlayGuard::Dismiss => {
            let dismiss = routers::dismiss_overlay(app, overlay);
            Task::batch([dismiss, route(app, event)])
        },
    }
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Shell(event) => routers::shell::route_event(app, event),
        AppEvent::SessionChanged(view) => routers::session::route(app, view),
        AppEvent::Login(event) => routers::login::route_event(app, event),
        AppEvent::Toasts(event) => routers::toasts::route_event(app, event),
        AppEvent::Certifications(event) => {
            routers::certifications::route_event(app, event)
        },
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
