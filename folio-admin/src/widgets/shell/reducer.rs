use folio_shell::{DashboardShell, ShellCommand, ShellEffect};

use super::event::ShellEvent;

/// Reduce a chrome event through the shell state machine.
///
/// Effects come back in the order they must run.
pub(crate) fn reduce(
    shell: &mut DashboardShell,
    event: ShellEvent,
) -> Vec<ShellEffect> {
    shell.reduce(map_event_to_command(event))
}

fn map_event_to_command(event: ShellEvent) -> ShellCommand {
    use {ShellCommand as C, ShellEvent as E};

    match event {
        E::ItemSelected { id } => C::SelectItem { id },
        E::MobileItemSelected { id } => C::SelectFromMobileNav { id },
        E::ToggleSidebar => C::ToggleSidebar,
        E::OpenMobileNav => C::OpenMobileNav,
        E::CloseMobileNav => C::CloseMobileNav,
        E::Logout => C::Logout,
    }
}
