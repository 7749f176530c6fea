//! Core of the Folio admin dashboard: the navigation registry, the session
//! contract and the dashboard shell state machine.
//!
//! The crate is UI-agnostic. Every transition of [`DashboardShell`] returns
//! an ordered list of [`ShellEffect`] values that the host application turns
//! into real side effects (toasts, redirects, session commands):
//!
//! ```
//! use std::sync::Arc;
//!
//! use folio_shell::{
//!     DashboardShell, NavigationRegistry, SessionView, ShellEffect,
//!     UserProfile,
//! };
//!
//! let registry = Arc::new(NavigationRegistry::admin());
//! let session = SessionView::signed_in(UserProfile::new("Ada Lovelace", None));
//! let (mut shell, effects) = DashboardShell::mount(registry, &session);
//! assert!(effects.is_empty());
//! assert_eq!(shell.active_item_id(), "dashboard");
//!
//! shell.select_item("add-skill");
//! assert_eq!(shell.active_item_id(), "add-skill");
//!
//! let effects = shell.logout();
//! assert_eq!(effects[0], ShellEffect::ClearSession);
//! ```

mod errors;
mod layout;
mod registry;
mod session;
mod shell;

pub use errors::RegistryError;
pub use layout::{
    LayoutMode, MOBILE_BREAKPOINT, SIDEBAR_COLLAPSED_WIDTH,
    SIDEBAR_EXPANDED_WIDTH, content_offset, sidebar_width,
};
pub use registry::{
    NavIcon, NavSection, NavigationItem, NavigationRegistry, PanelKind,
};
pub use session::{AuthEdge, ErrorLatch, SessionStore, SessionView, UserProfile};
pub use shell::{
    DashboardShell, LOGOUT_MESSAGE, RedirectTarget, ShellCommand, ShellEffect,
};
