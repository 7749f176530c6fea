/// UI events emitted by the dashboard chrome.
#[derive(Debug, Clone)]
pub(crate) enum ShellEvent {
    /// A sidebar entry was clicked.
    ItemSelected { id: String },
    /// An entry of the mobile overlay was clicked.
    MobileItemSelected { id: String },
    ToggleSidebar,
    OpenMobileNav,
    CloseMobileNav,
    Logout,
}
