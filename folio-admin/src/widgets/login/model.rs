/// Read-only view model for the login form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoginViewModel<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) error: Option<&'a str>,
    pub(crate) can_submit: bool,
}
