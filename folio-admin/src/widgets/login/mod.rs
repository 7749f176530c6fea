pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{LoginEffect, LoginEvent, LoginIntent};
use self::model::LoginViewModel;
use self::state::LoginState;

/// Sign-in form shown whenever no session is active.
#[derive(Default)]
pub(crate) struct LoginWidget {
    state: LoginState,
}

impl LoginWidget {
    /// Reduce a login intent into state updates and effects.
    pub(crate) fn reduce(&mut self, intent: LoginIntent) -> Task<LoginEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Produce the login form view model.
    pub(crate) fn vm(&self) -> LoginViewModel<'_> {
        LoginViewModel {
            email: self.state.email(),
            password: self.state.password(),
            error: self.state.error(),
            can_submit: self.state.can_submit(),
        }
    }
}
