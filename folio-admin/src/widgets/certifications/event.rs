use super::model::CertificationField;
use super::storage::CertificationsLoad;

/// Intent events handled by the certifications panel.
#[derive(Debug, Clone)]
pub(crate) enum CertificationsIntent {
    /// Request a fresh load from disk.
    Load,
    Loaded(CertificationsLoad),
    LoadFailed(String),
    /// Open an empty form.
    StartAdd,
    /// Open the form pre-filled with an existing certification.
    Edit { id: u64 },
    CancelForm,
    FieldChanged {
        field: CertificationField,
        value: String,
    },
    Submit,
    /// Ask for confirmation before deleting.
    RequestDelete { id: u64 },
    ConfirmDelete,
    CancelDelete,
    Persisted,
    PersistFailed(String),
}

/// Effect events produced by the certifications reducer.
#[derive(Debug, Clone)]
pub(crate) enum CertificationsEffect {
    NotifySuccess(String),
    NotifyFailure(String),
    NotifyInfo(String),
}

/// Certifications event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum CertificationsEvent {
    Intent(CertificationsIntent),
    Effect(CertificationsEffect),
}
