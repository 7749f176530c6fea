use std::path::PathBuf;

use iced::Task;

use super::CertificationsCtx;
use super::event::{
    CertificationsEffect, CertificationsEvent, CertificationsIntent,
};
use super::model::{
    ADDED_MESSAGE, Certification, DELETED_MESSAGE, SAMPLES_RESTORED_MESSAGE,
    SAVE_FAILED_MESSAGE, UPDATED_MESSAGE,
};
use super::state::{CertificationsState, SubmitOutcome};
use super::storage::{
    CertificationsLoadStatus, load_certifications, save_certifications,
};

/// Reduce a certifications intent into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut CertificationsState,
    ctx: &CertificationsCtx,
    intent: CertificationsIntent,
) -> Task<CertificationsEvent> {
    use CertificationsIntent::*;

    match intent {
        Load => request_load(ctx.data_dir.clone()),
        Loaded(load) => {
            let (items, status) = load.into_parts();
            state.replace_items(items);
            match status {
                CertificationsLoadStatus::Loaded => Task::none(),
                CertificationsLoadStatus::Missing => {
                    log::info!("no stored certifications, using samples");
                    Task::none()
                },
                CertificationsLoadStatus::Invalid(message) => {
                    log::warn!("certifications file invalid: {message}");
                    Task::done(CertificationsEvent::Effect(
                        CertificationsEffect::NotifyInfo(String::from(
                            SAMPLES_RESTORED_MESSAGE,
                        )),
                    ))
                },
            }
        },
        LoadFailed(message) => {
            log::warn!("certifications read failed: {message}");
            state.replace_items(Vec::new());
            Task::none()
        },
        StartAdd => {
            state.open_add();
            Task::none()
        },
        Edit { id } => {
            if !state.open_edit(id) {
                log::debug!("ignoring edit of unknown certification {id}");
            }
            Task::none()
        },
        CancelForm => {
            state.close_form();
            Task::none()
        },
        FieldChanged { field, value } => {
            state.set_field(field, value);
            Task::none()
        },
        Submit => match state.submit() {
            Ok(outcome) => {
                let message = match outcome {
                    SubmitOutcome::Added => ADDED_MESSAGE,
                    SubmitOutcome::Updated => UPDATED_MESSAGE,
                };
                Task::batch([notify_success(message), persist(state, ctx)])
            },
            Err(err) => Task::done(CertificationsEvent::Effect(
                CertificationsEffect::NotifyFailure(err.to_string()),
            )),
        },
        RequestDelete { id } => {
            if !state.request_delete(id) {
                log::debug!("ignoring delete of unknown certification {id}");
            }
            Task::none()
        },
        ConfirmDelete => match state.confirm_delete() {
            Some(_) => Task::batch([
                notify_success(DELETED_MESSAGE),
                persist(state, ctx),
            ]),
            None => Task::none(),
        },
        CancelDelete => {
            state.cancel_delete();
            Task::none()
        },
        Persisted => {
            state.complete_persist();
            persist(state, ctx)
        },
        PersistFailed(message) => {
            log::warn!("certifications save failed: {message}");
            state.fail_persist();
            Task::done(CertificationsEvent::Effect(
                CertificationsEffect::NotifyFailure(String::from(
                    SAVE_FAILED_MESSAGE,
                )),
            ))
        },
    }
}

fn notify_success(message: &str) -> Task<CertificationsEvent> {
    Task::done(CertificationsEvent::Effect(
        CertificationsEffect::NotifySuccess(message.to_string()),
    ))
}

/// Write the current list unless a save is already running.
fn persist(
    state: &mut CertificationsState,
    ctx: &CertificationsCtx,
) -> Task<CertificationsEvent> {
    match state.begin_persist() {
        Some(items) => request_save(ctx.data_dir.clone(), items),
        None => Task::none(),
    }
}

fn request_load(data_dir: PathBuf) -> Task<CertificationsEvent> {
    Task::perform(async move { load_certifications(&data_dir) }, |result| {
        match result {
            Ok(load) => {
                CertificationsEvent::Intent(CertificationsIntent::Loaded(load))
            },
            Err(err) => CertificationsEvent::Intent(
                CertificationsIntent::LoadFailed(format!("{err}")),
            ),
        }
    })
}

fn request_save(
    data_dir: PathBuf,
    items: Vec<Certification>,
) -> Task<CertificationsEvent> {
    Task::perform(
        async move {
            save_certifications(&data_dir, &items).map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(()) => CertificationsEvent::Intent(CertificationsIntent::Persisted),
            Err(message) => CertificationsEvent::Intent(
                CertificationsIntent::PersistFailed(message),
            ),
        },
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::reduce;
    use crate::widgets::certifications::CertificationsCtx;
    use crate::widgets::certifications::event::CertificationsIntent;
    use crate::widgets::certifications::model::{
        CertificationField, sample_certifications,
    };
    use crate::widgets::certifications::state::CertificationsState;
    use crate::widgets::certifications::storage::{
        CertificationsLoad, CertificationsLoadStatus,
    };

    fn ctx() -> CertificationsCtx {
        CertificationsCtx {
            data_dir: PathBuf::from("/nonexistent/folio-tests"),
        }
    }

    fn loaded_state() -> CertificationsState {
        let mut state = CertificationsState::default();
        state.replace_items(sample_certifications());
        state
    }

    fn fill(state: &mut CertificationsState, title: &str, date: &str) {
        for (field, value) in [
            (CertificationField::Title, title),
            (CertificationField::Issuer, "Linux Foundation"),
            (CertificationField::Date, date),
        ] {
            let _ = reduce(
                state,
                &ctx(),
                CertificationsIntent::FieldChanged {
                    field,
                    value: value.to_string(),
                },
            );
        }
    }

    #[test]
    fn given_valid_form_when_submitted_then_item_is_prepended() {
        let mut state = loaded_state();
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::StartAdd);
        fill(&mut state, "CKA", "2024-02-01");

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Submit);

        assert_eq!(state.items().len(), 3);
        assert_eq!(state.items()[0].title, "CKA");
        assert_eq!(state.items()[0].id, 3);
        assert!(state.form().is_none());
    }

    #[test]
    fn given_missing_date_when_submitted_then_form_stays_open_and_list_unchanged()
     {
        let mut state = loaded_state();
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::StartAdd);
        fill(&mut state, "CKA", "");

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Submit);

        assert_eq!(state.items().len(), 2);
        assert!(state.form().is_some());
    }

    #[test]
    fn given_edit_when_submitted_then_item_is_updated_in_place() {
        let mut state = loaded_state();
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Edit { id: 2 });
        assert_eq!(
            state.form().map(|form| form.draft.date.as_str()),
            Some("2023-08-22")
        );
        fill(&mut state, "React Expert", "2023-09-01");

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Submit);

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[1].id, 2);
        assert_eq!(state.items()[1].title, "React Expert");
        assert_eq!(state.items()[1].display_date(), "September 1, 2023");
    }

    #[test]
    fn given_delete_request_when_cancelled_then_item_is_kept() {
        let mut state = loaded_state();
        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 1 },
        );
        assert_eq!(state.pending_delete().map(|item| item.id), Some(1));

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::CancelDelete);

        assert!(state.pending_delete().is_none());
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn given_delete_request_when_confirmed_then_item_is_removed() {
        let mut state = loaded_state();
        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 1 },
        );

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::ConfirmDelete);

        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].id, 2);
        assert!(!state.has_pending_delete());
    }

    #[test]
    fn given_save_in_flight_when_list_changes_again_then_save_is_deferred() {
        let mut state = loaded_state();
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::StartAdd);
        fill(&mut state, "CKA", "2024-02-01");
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Submit);
        assert!(state.is_persist_in_flight());
        assert!(!state.is_dirty());

        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 1 },
        );
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::ConfirmDelete);

        assert!(state.is_persist_in_flight());
        assert!(state.is_dirty());
        assert!(state.begin_persist().is_none());
    }

    #[test]
    fn given_dirty_state_when_save_completes_then_next_save_starts() {
        let mut state = loaded_state();
        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 1 },
        );
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::ConfirmDelete);
        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 2 },
        );
        let _ = reduce(&mut state, &ctx(), CertificationsIntent::ConfirmDelete);
        assert!(state.is_dirty());

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Persisted);

        assert!(state.is_persist_in_flight());
        assert!(!state.is_dirty());

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Persisted);

        assert!(!state.is_persist_in_flight());
        assert!(!state.is_dirty());
    }

    #[test]
    fn given_invalid_stored_file_when_loaded_then_samples_show_without_a_save() {
        let mut state = CertificationsState::default();
        let load = CertificationsLoad::new(
            sample_certifications(),
            CertificationsLoadStatus::Invalid(String::from("expected value")),
        );

        let _ = reduce(&mut state, &ctx(), CertificationsIntent::Loaded(load));

        assert!(state.is_loaded());
        assert_eq!(state.items().len(), 2);
        assert!(!state.is_dirty());
        assert!(!state.is_persist_in_flight());
    }

    #[test]
    fn given_unknown_id_when_delete_requested_then_nothing_is_pending() {
        let mut state = loaded_state();

        let _ = reduce(
            &mut state,
            &ctx(),
            CertificationsIntent::RequestDelete { id: 99 },
        );

        assert!(!state.has_pending_delete());
    }
}
