use folio_shell::{SessionStore, SessionView, ShellCommand};
use iced::Task;

use super::{login, shell};
use crate::app::{App, AppEvent};
use crate::widgets::login::LoginIntent;

/// Deliver every queued session change as its own event, in order.
pub(crate) fn drain(app: &mut App) -> Task<AppEvent> {
    app.session
        .take_changes()
        .into_iter()
        .fold(Task::none(), |task, view| {
            task.chain(Task::done(AppEvent::SessionChanged(view)))
        })
}

/// Route a session change to whichever surface is mounted.
pub(crate) fn route(app: &mut App, view: SessionView) -> Task<AppEvent> {
    if app.widgets.shell.is_some() {
        return shell::route_command(app, ShellCommand::SessionChanged(view));
    }

    if view.is_authenticated {
        let reset = login::route_intent(app, LoginIntent::SessionChanged(view));
        return Task::batch([reset, shell::mount(app)]);
    }

    login::route_intent(app, LoginIntent::SessionChanged(view))
}

#[cfg(test)]
mod tests {
    use folio_shell::{PanelKind, SessionStore, SessionView};

    use super::route;
    use crate::routers::testing::{
        EMAIL, PASSWORD, signed_in_app, signed_out_app,
    };

    #[test]
    fn given_no_shell_when_authenticated_view_routed_then_dashboard_is_mounted()
     {
        let mut app = signed_out_app();
        assert!(app.widgets.shell.is_none());
        app.session
            .login(EMAIL, PASSWORD)
            .expect("credentials should match");

        let view = app.session.view().clone();
        let _ = route(&mut app, view);

        let shell = app.widgets.shell.as_ref().expect("shell should mount");
        assert_eq!(shell.vm().active_item.id(), "dashboard");
        assert_eq!(shell.active_panel(), Some(PanelKind::Dashboard));
    }

    #[test]
    fn given_mounted_shell_when_signed_out_view_routed_then_shell_unmounts() {
        let mut app = signed_in_app();

        let _ = route(&mut app, SessionView::signed_out());

        assert!(app.widgets.shell.is_none());
    }

    #[test]
    fn given_mounted_shell_when_same_error_routed_twice_then_one_failure_toast()
     {
        let mut app = signed_in_app();
        let failing = app.session.view().clone().with_error("Network Error");

        let _ = route(&mut app, failing.clone());
        let _ = route(&mut app, failing);

        let toasts = app.widgets.toasts.vm().toasts;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message(), "Network Error");
        assert!(app.widgets.shell.is_some());
    }
}
