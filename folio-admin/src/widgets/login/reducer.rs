use iced::Task;

use super::event::{LoginEffect, LoginEvent, LoginIntent};
use super::state::LoginState;

/// Reduce a login intent into state updates and effect tasks.
pub(crate) fn reduce(state: &mut LoginState, intent: LoginIntent) -> Task<LoginEvent> {
    match intent {
        LoginIntent::EmailChanged(value) => {
            state.set_email(value);
            Task::none()
        },
        LoginIntent::PasswordChanged(value) => {
            state.set_password(value);
            Task::none()
        },
        LoginIntent::Submit => {
            state.begin_attempt();
            Task::done(LoginEvent::Effect(LoginEffect::SubmitCredentials {
                email: state.email().to_string(),
                password: state.password().to_string(),
            }))
        },
        LoginIntent::SessionChanged(view) => {
            if view.is_authenticated {
                state.reset();
                return Task::none();
            }

            match state.observe_error(view.error.as_deref()) {
                Some(message) => {
                    Task::done(LoginEvent::Effect(LoginEffect::NotifyFailure(
                        message,
                    )))
                },
                None => Task::none(),
            }
        },
        LoginIntent::Reset => {
            state.reset();
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use folio_shell::{SessionView, UserProfile};

    use super::reduce;
    use crate::widgets::login::event::LoginIntent;
    use crate::widgets::login::state::LoginState;

    fn filled_state() -> LoginState {
        let mut state = LoginState::default();
        let _ = reduce(
            &mut state,
            LoginIntent::EmailChanged(String::from("owner@example.com")),
        );
        let _ = reduce(
            &mut state,
            LoginIntent::PasswordChanged(String::from("secret")),
        );
        state
    }

    #[test]
    fn given_filled_form_when_checked_then_submit_is_allowed() {
        let state = filled_state();

        assert!(state.can_submit());
    }

    #[test]
    fn given_blank_password_when_checked_then_submit_is_blocked() {
        let mut state = filled_state();
        let _ = reduce(&mut state, LoginIntent::PasswordChanged(String::new()));

        assert!(!state.can_submit());
    }

    #[test]
    fn given_rejected_attempt_when_error_arrives_then_it_is_shown_and_password_cleared()
     {
        let mut state = filled_state();
        let _ = reduce(&mut state, LoginIntent::Submit);

        let _ = reduce(
            &mut state,
            LoginIntent::SessionChanged(
                SessionView::signed_out().with_error("Invalid email or password"),
            ),
        );

        assert_eq!(state.error(), Some("Invalid email or password"));
        assert!(state.password().is_empty());
        assert_eq!(state.email(), "owner@example.com");
    }

    #[test]
    fn given_same_error_twice_when_observed_then_latch_reports_once() {
        let mut state = filled_state();

        let first = state.observe_error(Some("Invalid email or password"));
        let second = state.observe_error(Some("Invalid email or password"));
        state.begin_attempt();
        let third = state.observe_error(Some("Invalid email or password"));

        assert!(first.is_some());
        assert!(second.is_none());
        assert!(third.is_some());
    }

    #[test]
    fn given_authenticated_change_when_reduced_then_form_is_cleared() {
        let mut state = filled_state();

        let _ = reduce(
            &mut state,
            LoginIntent::SessionChanged(SessionView::signed_in(
                UserProfile::new("Eugene Agesa", None),
            )),
        );

        assert!(state.email().is_empty());
        assert!(state.password().is_empty());
        assert!(state.error().is_none());
    }
}
