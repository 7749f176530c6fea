pub(crate) mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod view;

use std::sync::Arc;

use folio_shell::{
    DashboardShell, LayoutMode, NavigationRegistry, PanelKind, SessionView,
    ShellCommand, ShellEffect,
};

pub(crate) use self::event::ShellEvent;
use self::model::ShellViewModel;

/// Dashboard chrome around the active panel: sidebar, mobile overlay and
/// welcome header, driven by the shell state machine.
pub(crate) struct ShellWidget {
    shell: DashboardShell,
}

impl ShellWidget {
    /// Mount a fresh shell for `session` laid out for `layout`.
    pub(crate) fn mount(
        registry: Arc<NavigationRegistry>,
        session: &SessionView,
        layout: LayoutMode,
    ) -> (Self, Vec<ShellEffect>) {
        let (mut shell, effects) = DashboardShell::mount(registry, session);
        shell.reduce(ShellCommand::LayoutChanged(layout));
        (Self { shell }, effects)
    }

    /// Reduce a chrome event; effects are returned in execution order.
    pub(crate) fn reduce(&mut self, event: ShellEvent) -> Vec<ShellEffect> {
        reducer::reduce(&mut self.shell, event)
    }

    /// Forward an app-level command (session or layout change).
    pub(crate) fn apply(&mut self, command: ShellCommand) -> Vec<ShellEffect> {
        self.shell.reduce(command)
    }

    pub(crate) fn active_panel(&self) -> Option<PanelKind> {
        self.shell.active_panel()
    }

    pub(crate) fn is_mobile_nav_open(&self) -> bool {
        self.shell.is_mobile_nav_open()
    }

    pub(crate) fn vm(&self) -> ShellViewModel<'_> {
        ShellViewModel {
            sections: self.shell.registry().list_sections(),
            active_item: self.shell.active_item(),
            sidebar_collapsed: self.shell.is_sidebar_collapsed(),
            layout: self.shell.layout(),
            user: self.shell.user(),
            logout_pending: self.shell.is_logout_pending(),
        }
    }
}
