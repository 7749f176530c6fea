use folio_shell::SessionView;

/// Intent events handled by the login widget.
#[derive(Debug, Clone)]
pub(crate) enum LoginIntent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    /// The session store published a new view while signed out.
    SessionChanged(SessionView),
    /// Clear the form after a redirect back to the login surface.
    Reset,
}

/// Effect events produced by the login reducer.
#[derive(Debug, Clone)]
pub(crate) enum LoginEffect {
    /// Ask the session store to check the credentials.
    SubmitCredentials { email: String, password: String },
    /// Surface a sign-in failure as a toast.
    NotifyFailure(String),
}

/// Login event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum LoginEvent {
    Intent(LoginIntent),
    Effect(LoginEffect),
}
