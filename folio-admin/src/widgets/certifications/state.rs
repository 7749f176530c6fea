use super::errors::CertificationsError;
use super::model::{
    Certification, CertificationDraft, CertificationField, CertificationForm,
};

/// Which write a successful submit performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Added,
    Updated,
}

/// Certifications panel state.
#[derive(Debug, Default)]
pub(crate) struct CertificationsState {
    items: Vec<Certification>,
    form: Option<CertificationForm>,
    pending_delete: Option<u64>,
    loaded: bool,
    dirty: bool,
    persist_in_flight: bool,
}

impl CertificationsState {
    pub(crate) fn items(&self) -> &[Certification] {
        &self.items
    }

    pub(crate) fn form(&self) -> Option<&CertificationForm> {
        self.form.as_ref()
    }

    pub(crate) fn pending_delete(&self) -> Option<&Certification> {
        let id = self.pending_delete?;
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn has_pending_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn is_persist_in_flight(&self) -> bool {
        self.persist_in_flight
    }

    /// Start a save when the list changed and no save is running.
    ///
    /// Returns the snapshot to write. Mutations made while the save runs keep
    /// the state dirty so the next completion writes them.
    pub(crate) fn begin_persist(&mut self) -> Option<Vec<Certification>> {
        if !self.dirty || self.persist_in_flight {
            return None;
        }

        self.dirty = false;
        self.persist_in_flight = true;
        Some(self.items.clone())
    }

    pub(crate) fn complete_persist(&mut self) {
        self.persist_in_flight = false;
    }

    /// The snapshot was not written; keep it dirty for the next mutation.
    pub(crate) fn fail_persist(&mut self) {
        self.persist_in_flight = false;
        self.dirty = true;
    }

    /// Replace the list with freshly loaded items.
    pub(crate) fn replace_items(&mut self, items: Vec<Certification>) {
        self.items = items;
        self.pending_delete = None;
        self.loaded = true;
    }

    pub(crate) fn open_add(&mut self) {
        self.form = Some(CertificationForm::default());
    }

    /// Open the form for `id`; returns `false` when no such item exists.
    pub(crate) fn open_edit(&mut self, id: u64) -> bool {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            return false;
        };

        self.form = Some(CertificationForm {
            editing: Some(id),
            draft: CertificationDraft::from_certification(item),
        });
        true
    }

    pub(crate) fn close_form(&mut self) {
        self.form = None;
    }

    pub(crate) fn set_field(&mut self, field: CertificationField, value: String) {
        if let Some(form) = self.form.as_mut() {
            form.draft.set_field(field, value);
        }
    }

    /// Validate the open form and write it into the list.
    ///
    /// New items go to the front. The form stays open when validation fails.
    pub(crate) fn submit(&mut self) -> Result<SubmitOutcome, CertificationsError> {
        let Some(form) = self.form.as_ref() else {
            return Err(CertificationsError::Validation(String::from(
                "No certification form is open",
            )));
        };
        let input = form.draft.validate()?;
        let editing = form.editing;

        let position = editing
            .and_then(|id| self.items.iter().position(|item| item.id == id));

        let outcome = match position {
            Some(index) => {
                let item = &mut self.items[index];
                item.title = input.title;
                item.issuer = input.issuer;
                item.date = input.date;
                item.credential_url = input.credential_url;
                item.description = input.description;
                SubmitOutcome::Updated
            },
            None => {
                let id = self.next_id();
                self.items.insert(
                    0,
                    Certification {
                        id,
                        title: input.title,
                        issuer: input.issuer,
                        date: input.date,
                        credential_url: input.credential_url,
                        description: input.description,
                    },
                );
                SubmitOutcome::Added
            },
        };

        self.form = None;
        self.dirty = true;
        Ok(outcome)
    }

    /// Ask for confirmation; returns `false` for unknown ids.
    pub(crate) fn request_delete(&mut self, id: u64) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }

        self.pending_delete = Some(id);
        true
    }

    pub(crate) fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the item awaiting confirmation.
    pub(crate) fn confirm_delete(&mut self) -> Option<Certification> {
        let id = self.pending_delete.take()?;
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.form.as_ref().and_then(|form| form.editing) == Some(id) {
            self.form = None;
        }

        self.dirty = true;
        Some(self.items.remove(index))
    }

    fn next_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::CertificationsState;
    use crate::widgets::certifications::model::sample_certifications;

    fn dirty_state() -> CertificationsState {
        let mut state = CertificationsState::default();
        state.replace_items(sample_certifications());
        assert!(state.request_delete(1));
        assert!(state.confirm_delete().is_some());
        state
    }

    #[test]
    fn given_default_state_when_created_then_not_dirty() {
        let state = CertificationsState::default();

        assert!(!state.is_dirty());
        assert!(!state.is_persist_in_flight());
    }

    #[test]
    fn given_save_in_flight_when_persist_requested_again_then_no_snapshot() {
        let mut state = dirty_state();
        assert!(state.begin_persist().is_some());

        assert!(state.request_delete(2));
        assert!(state.confirm_delete().is_some());

        assert!(state.begin_persist().is_none());
        assert!(state.is_dirty());
    }

    #[test]
    fn given_failed_save_when_reported_then_state_stays_dirty() {
        let mut state = dirty_state();
        let _ = state.begin_persist();

        state.fail_persist();

        assert!(!state.is_persist_in_flight());
        assert!(state.is_dirty());
    }
}
