use thiserror::Error;

use crate::registry::NavSection;

/// Errors raised while assembling a navigation registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two items share the same identifier.
    #[error("duplicate navigation id `{id}`")]
    DuplicateId { id: &'static str },
    /// An item identifier is empty.
    #[error("navigation item `{label}` has an empty id")]
    EmptyId { label: &'static str },
    /// No item exists in the section that provides the default view.
    #[error("registry has no {section} items to use as the default view")]
    MissingDefault { section: NavSection },
}
