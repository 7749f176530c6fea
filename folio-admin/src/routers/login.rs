use iced::Task;

use super::{session, toasts};
use crate::app::{App, AppEvent};
use crate::widgets::login::{LoginEffect, LoginEvent, LoginIntent};
use crate::widgets::toasts::ToastKind;

/// Route a login event through the widget reducer or out to the app.
pub(crate) fn route_event(app: &mut App, event: LoginEvent) -> Task<AppEvent> {
    match event {
        LoginEvent::Intent(intent) => route_intent(app, intent),
        LoginEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a login intent directly.
pub(crate) fn route_intent(app: &mut App, intent: LoginIntent) -> Task<AppEvent> {
    app.widgets.login.reduce(intent).map(AppEvent::Login)
}

fn route_effect(app: &mut App, effect: LoginEffect) -> Task<AppEvent> {
    match effect {
        LoginEffect::SubmitCredentials { email, password } => {
            // The outcome reaches the widgets through the session change.
            if let Err(err) = app.session.login(&email, &password) {
                log::debug!("login attempt failed: {err}");
            }
            session::drain(app)
        },
        LoginEffect::NotifyFailure(message) => {
            toasts::push(app, ToastKind::Failure, message);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use folio_shell::SessionStore;

    use super::route_event;
    use crate::routers::testing::{EMAIL, PASSWORD, signed_out_app};
    use crate::widgets::login::{LoginEffect, LoginEvent};

    fn submit(email: &str, password: &str) -> LoginEvent {
        LoginEvent::Effect(LoginEffect::SubmitCredentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[test]
    fn given_wrong_password_when_submitted_then_session_records_error() {
        let mut app = signed_out_app();

        let _ = route_event(&mut app, submit(EMAIL, "wrong"));

        let view = app.session.view();
        assert!(!view.is_authenticated);
        assert_eq!(view.error.as_deref(), Some("Invalid email or password"));
        assert!(app.widgets.shell.is_none());
    }

    #[test]
    fn given_valid_credentials_when_submitted_then_session_is_authenticated() {
        let mut app = signed_out_app();

        let _ = route_event(&mut app, submit(EMAIL, PASSWORD));

        assert!(app.session.view().is_authenticated);
    }
}
