pub(crate) mod certifications;
pub(crate) mod login;
pub(crate) mod session;
pub(crate) mod shell;
pub(crate) mod toasts;
pub(crate) mod window;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::guards::Overlay;
use crate::widgets::certifications::CertificationsIntent;

/// Close `overlay` ahead of dispatching the event that dismissed it.
pub(crate) fn dismiss_overlay(app: &mut App, overlay: Overlay) -> Task<AppEvent> {
    match overlay {
        Overlay::MobileNav => {
            shell::route_command(app, folio_shell::ShellCommand::CloseMobileNav)
        },
        Overlay::DeleteDialog => {
            certifications::route_intent(app, CertificationsIntent::CancelDelete)
        },
    }
}
