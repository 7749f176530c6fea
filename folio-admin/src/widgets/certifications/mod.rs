mod errors;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
mod storage;
pub(crate) mod view;

use std::path::PathBuf;

use iced::Task;

pub(crate) use self::event::{
    CertificationsEffect, CertificationsEvent, CertificationsIntent,
};
use self::model::CertificationsViewModel;
use self::state::CertificationsState;

/// Runtime context of the certifications panel.
#[derive(Debug, Clone)]
pub(crate) struct CertificationsCtx {
    /// Directory holding `certifications.json`.
    pub(crate) data_dir: PathBuf,
}

/// Certifications panel: list, add/edit form and delete confirmation.
pub(crate) struct CertificationsWidget {
    state: CertificationsState,
    ctx: CertificationsCtx,
}

impl CertificationsWidget {
    pub(crate) fn new(ctx: CertificationsCtx) -> Self {
        Self {
            state: CertificationsState::default(),
            ctx,
        }
    }

    /// Reduce an intent into state updates and effect tasks.
    pub(crate) fn reduce(
        &mut self,
        intent: CertificationsIntent,
    ) -> Task<CertificationsEvent> {
        reducer::reduce(&mut self.state, &self.ctx, intent)
    }

    /// Whether the delete confirmation dialog is showing.
    pub(crate) fn has_pending_delete(&self) -> bool {
        self.state.has_pending_delete()
    }

    pub(crate) fn vm(&self) -> CertificationsViewModel<'_> {
        CertificationsViewModel {
            items: self.state.items(),
            form: self.state.form(),
            pending_delete: self.state.pending_delete(),
            is_loaded: self.state.is_loaded(),
        }
    }
}
