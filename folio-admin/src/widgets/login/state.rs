use folio_shell::ErrorLatch;

#[derive(Debug, Default)]
pub(crate) struct LoginState {
    email: String,
    password: String,
    error: Option<String>,
    error_latch: ErrorLatch,
}

impl LoginState {
    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub(crate) fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub(crate) fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Start a new attempt so its failure is reported even when the message
    /// repeats the previous one.
    pub(crate) fn begin_attempt(&mut self) {
        self.error = None;
        self.error_latch = ErrorLatch::default();
    }

    /// Record the store error; returns the message when it is new.
    pub(crate) fn observe_error(&mut self, error: Option<&str>) -> Option<String> {
        self.error = error.map(str::to_string);
        if error.is_some() {
            self.password.clear();
        }
        self.error_latch.observe(error)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
