pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use self::event::{TOASTS_TICK_MS, ToastsEvent};
pub(crate) use self::model::ToastKind;
use self::model::ToastsViewModel;
use self::state::ToastsState;

/// Toast notification stack shown over every surface.
#[derive(Default)]
pub(crate) struct ToastsWidget {
    state: ToastsState,
}

impl ToastsWidget {
    /// Queue a new notification created at `now`.
    pub(crate) fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: Instant,
    ) {
        self.state.push(kind, message.into(), now);
    }

    /// Reduce a toasts event into state updates.
    pub(crate) fn reduce(&mut self, event: ToastsEvent) {
        reducer::reduce(&mut self.state, event);
    }

    /// Whether the expiry tick must run.
    pub(crate) fn has_toasts(&self) -> bool {
        !self.state.is_empty()
    }

    /// Produce the toast stack view model.
    pub(crate) fn vm(&self) -> ToastsViewModel<'_> {
        ToastsViewModel {
            toasts: self.state.toasts(),
        }
    }
}
