/// Display data of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    full_name: String,
    avatar_url: Option<String>,
}

impl UserProfile {
    pub fn new(full_name: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            full_name: full_name.into(),
            avatar_url,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Up to two uppercase initials used when no avatar can be drawn.
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            String::from("?")
        } else {
            initials
        }
    }
}

/// Read-only projection of the session store consumed by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
}

impl SessionView {
    /// A signed-out session without errors.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// A signed-in session for `user`.
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            error: None,
        }
    }

    /// Attach a human-readable error message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Authority for authentication state.
///
/// Stores never push into their observers directly. Every mutation queues the
/// resulting [`SessionView`] and the host drains the queue with
/// [`SessionStore::take_changes`], delivering each view as a discrete event.
pub trait SessionStore {
    /// Current session snapshot.
    fn view(&self) -> &SessionView;

    /// Clear the current session.
    fn logout(&mut self);

    /// Drain change notifications queued since the last call, oldest first.
    fn take_changes(&mut self) -> Vec<SessionView>;
}

/// Authentication transition between two consecutive session views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEdge {
    SignedIn,
    SignedOut,
    Unchanged,
}

impl AuthEdge {
    pub fn between(previous: bool, next: bool) -> Self {
        match (previous, next) {
            (false, true) => AuthEdge::SignedIn,
            (true, false) => AuthEdge::SignedOut,
            _ => AuthEdge::Unchanged,
        }
    }
}

/// Remembers the last surfaced error so each distinct value is reported once.
///
/// Clearing the error resets the latch; the same message appearing again
/// after a clear counts as a new occurrence.
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    last: Option<String>,
}

impl ErrorLatch {
    /// Observe the current error and return it if it has not been reported.
    pub fn observe(&mut self, error: Option<&str>) -> Option<String> {
        match error {
            None => {
                self.last = None;
                None
            },
            Some(message) if self.last.as_deref() == Some(message) => None,
            Some(message) => {
                self.last = Some(message.to_string());
                self.last.clone()
            },
        }
    }
}
