use folio_shell::{SessionStore, SessionView};
use thiserror::Error;

use crate::config::AccountConfig;

/// Errors returned by a failed sign-in attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum SessionStoreError {
    #[error("Please enter your email and password")]
    MissingCredentials,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Session store backed by the single account from the admin config.
///
/// Every mutation queues the resulting view; the session router drains the
/// queue and delivers each view as its own event.
#[derive(Debug)]
pub(crate) struct LocalSessionStore {
    account: AccountConfig,
    view: SessionView,
    pending: Vec<SessionView>,
}

impl LocalSessionStore {
    /// Create a signed-out store for `account`.
    pub(crate) fn new(account: AccountConfig) -> Self {
        Self {
            account,
            view: SessionView::signed_out(),
            pending: Vec::new(),
        }
    }

    /// Check the credentials against the configured account.
    ///
    /// A failure is also recorded on the published view so observers can
    /// surface it.
    pub(crate) fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), SessionStoreError> {
        match self.check_credentials(email, password) {
            Ok(()) => {
                log::info!("signed in as {}", self.account.email);
                self.publish(SessionView::signed_in(self.account.profile()));
                Ok(())
            },
            Err(err) => {
                log::warn!("sign-in rejected: {err}");
                self.publish(SessionView::signed_out().with_error(err.to_string()));
                Err(err)
            },
        }
    }

    fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), SessionStoreError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SessionStoreError::MissingCredentials);
        }

        let email_matches = email.eq_ignore_ascii_case(self.account.email.trim());
        if !email_matches || password != self.account.password {
            return Err(SessionStoreError::InvalidCredentials);
        }

        Ok(())
    }

    fn publish(&mut self, view: SessionView) {
        self.view = view.clone();
        self.pending.push(view);
    }
}

impl SessionStore for LocalSessionStore {
    fn view(&self) -> &SessionView {
        &self.view
    }

    fn logout(&mut self) {
        if self.view.is_authenticated {
            log::info!("signed out");
        }
        self.publish(SessionView::signed_out());
    }

    fn take_changes(&mut self) -> Vec<SessionView> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use folio_shell::{SessionStore, SessionView};

    use super::{LocalSessionStore, SessionStoreError};
    use crate::config::AccountConfig;

    fn store() -> LocalSessionStore {
        LocalSessionStore::new(AccountConfig {
            full_name: String::from("Eugene Agesa"),
            email: String::from("owner@example.com"),
            password: String::from("1234abcd"),
            avatar_url: None,
        })
    }

    #[test]
    fn given_new_store_when_viewed_then_session_is_signed_out() {
        let store = store();

        assert_eq!(store.view(), &SessionView::signed_out());
    }

    #[test]
    fn given_valid_credentials_when_login_then_signed_in_change_is_queued() {
        let mut store = store();

        store
            .login(" Owner@Example.com ", "1234abcd")
            .expect("credentials should match");
        let changes = store.take_changes();

        assert_eq!(changes.len(), 1);
        assert!(changes[0].is_authenticated);
        assert_eq!(
            changes[0].user.as_ref().map(|user| user.full_name()),
            Some("Eugene Agesa")
        );
        assert!(store.take_changes().is_empty());
    }

    #[test]
    fn given_wrong_password_when_login_then_error_is_published() {
        let mut store = store();

        let result = store.login("owner@example.com", "nope");
        let changes = store.take_changes();

        assert_eq!(result, Err(SessionStoreError::InvalidCredentials));
        assert!(!store.view().is_authenticated);
        assert_eq!(
            changes[0].error.as_deref(),
            Some("Invalid email or password")
        );
    }

    #[test]
    fn given_blank_fields_when_login_then_missing_credentials() {
        let mut store = store();

        assert_eq!(
            store.login("  ", ""),
            Err(SessionStoreError::MissingCredentials)
        );
    }

    #[test]
    fn given_signed_in_store_when_logout_then_signed_out_change_is_queued() {
        let mut store = store();
        store
            .login("owner@example.com", "1234abcd")
            .expect("credentials should match");
        store.take_changes();

        store.logout();

        assert_eq!(store.take_changes(), vec![SessionView::signed_out()]);
        assert!(!store.view().is_authenticated);
    }
}
