use folio_shell::{RedirectTarget, SessionStore, ShellCommand, ShellEffect};
use iced::Task;

use super::{certifications, login, session, toasts};
use crate::app::{App, AppEvent};
use crate::widgets::certifications::CertificationsIntent;
use crate::widgets::login::LoginIntent;
use crate::widgets::shell::{ShellEvent, ShellWidget};
use crate::widgets::toasts::ToastKind;

/// Route a chrome event through the mounted shell.
pub(crate) fn route_event(app: &mut App, event: ShellEvent) -> Task<AppEvent> {
    let Some(widget) = app.widgets.shell.as_mut() else {
        log::debug!("dropping shell event without a mounted shell: {event:?}");
        return Task::none();
    };

    let effects = widget.reduce(event);
    route_effects(app, effects)
}

/// Route an app-level command to the mounted shell, if any.
pub(crate) fn route_command(
    app: &mut App,
    command: ShellCommand,
) -> Task<AppEvent> {
    let Some(widget) = app.widgets.shell.as_mut() else {
        return Task::none();
    };

    let effects = widget.apply(command);
    route_effects(app, effects)
}

/// Mount a fresh shell for the current session.
pub(crate) fn mount(app: &mut App) -> Task<AppEvent> {
    let (widget, effects) = ShellWidget::mount(
        app.registry.clone(),
        app.session.view(),
        app.layout_mode,
    );
    log::debug!("dashboard shell mounted");
    app.widgets.shell = Some(widget);
    route_effects(app, effects)
}

/// Run shell effects in order.
///
/// Session changes caused by the effects are delivered afterwards as separate
/// events, so a notification always lands before the redirect it triggers.
fn route_effects(app: &mut App, effects: Vec<ShellEffect>) -> Task<AppEvent> {
    let mut tasks = Vec::new();

    for effect in effects {
        match effect {
            ShellEffect::ClearSession => app.session.logout(),
            ShellEffect::NotifySuccess(message) => {
                toasts::push(app, ToastKind::Success, message);
            },
            ShellEffect::NotifyFailure(message) => {
                toasts::push(app, ToastKind::Failure, message);
            },
            ShellEffect::Redirect(RedirectTarget::Login) => {
                log::info!("session ended, redirecting to login");
                app.widgets.shell = None;
                tasks.push(login::route_intent(app, LoginIntent::Reset));
                tasks.push(certifications::route_intent(
                    app,
                    CertificationsIntent::CancelForm,
                ));
                tasks.push(certifications::route_intent(
                    app,
                    CertificationsIntent::CancelDelete,
                ));
            },
        }
    }

    tasks.push(session::drain(app));
    Task::batch(tasks)
}
