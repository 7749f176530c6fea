pub(crate) mod certifications;
pub(crate) mod login;
pub(crate) mod shell;
pub(crate) mod toasts;
