use std::sync::Arc;

use crate::layout::LayoutMode;
use crate::registry::{NavigationItem, NavigationRegistry, PanelKind};
use crate::session::{AuthEdge, ErrorLatch, SessionView, UserProfile};

/// Message shown once a logout has been requested.
pub const LOGOUT_MESSAGE: &str = "Logged Out!";

/// Surfaces the shell can navigate away to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
}

/// Side effects requested by a shell transition, in the order they must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Ask the session store to clear the current session.
    ClearSession,
    /// Show a one-shot success notification.
    NotifySuccess(String),
    /// Show a one-shot failure notification.
    NotifyFailure(String),
    /// Leave the shell for another surface; the shell is finished afterwards.
    Redirect(RedirectTarget),
}

/// Inputs accepted by [`DashboardShell::reduce`].
#[derive(Debug, Clone)]
pub enum ShellCommand {
    /// An item was clicked in the desktop sidebar.
    SelectItem { id: String },
    /// An item was clicked in the mobile overlay; the overlay closes.
    SelectFromMobileNav { id: String },
    ToggleSidebar,
    OpenMobileNav,
    CloseMobileNav,
    /// The window crossed the mobile breakpoint.
    LayoutChanged(LayoutMode),
    /// The session store published a new view.
    SessionChanged(SessionView),
    Logout,
}

/// View-selection state machine of the admin dashboard.
///
/// The shell owns which item is active and whether the sidebar is collapsed.
/// Once the session becomes unauthenticated it requests a single redirect and
/// stops reacting; a new shell is mounted after the next sign-in.
#[derive(Debug)]
pub struct DashboardShell {
    registry: Arc<NavigationRegistry>,
    active: &'static str,
    sidebar_collapsed: bool,
    mobile_nav_open: bool,
    layout: LayoutMode,
    user: Option<UserProfile>,
    authenticated: bool,
    logout_pending: bool,
    exited: bool,
    error_latch: ErrorLatch,
}

impl DashboardShell {
    /// Mount a shell with the default item active and the sidebar expanded.
    ///
    /// The initial session is evaluated immediately: an unauthenticated
    /// session yields the redirect before anything is rendered.
    pub fn mount(
        registry: Arc<NavigationRegistry>,
        session: &SessionView,
    ) -> (Self, Vec<ShellEffect>) {
        let active = registry.default_item().id();
        let mut shell = Self {
            registry,
            active,
            sidebar_collapsed: false,
            mobile_nav_open: false,
            layout: LayoutMode::default(),
            user: None,
            authenticated: session.is_authenticated,
            logout_pending: false,
            exited: false,
            error_latch: ErrorLatch::default(),
        };
        let effects = shell.on_session_change(session);
        (shell, effects)
    }

    /// Apply a command and return the effects it requests.
    pub fn reduce(&mut self, command: ShellCommand) -> Vec<ShellEffect> {
        match command {
            ShellCommand::SelectItem { id } => {
                self.select_item(&id);
                Vec::new()
            },
            ShellCommand::SelectFromMobileNav { id } => {
                self.select_item(&id);
                self.mobile_nav_open = false;
                Vec::new()
            },
            ShellCommand::ToggleSidebar => {
                self.toggle_sidebar();
                Vec::new()
            },
            ShellCommand::OpenMobileNav => {
                if !self.exited && self.layout.is_mobile() {
                    self.mobile_nav_open = true;
                }
                Vec::new()
            },
            ShellCommand::CloseMobileNav => {
                self.mobile_nav_open = false;
                Vec::new()
            },
            ShellCommand::LayoutChanged(layout) => {
                self.set_layout(layout);
                Vec::new()
            },
            ShellCommand::SessionChanged(session) => {
                self.on_session_change(&session)
            },
            ShellCommand::Logout => self.logout(),
        }
    }

    /// Make `id` the active item.
    ///
    /// Returns `true` when the selection changed. Unknown ids are ignored so a
    /// stale click target never takes the view down.
    pub fn select_item(&mut self, id: &str) -> bool {
        if self.exited {
            return false;
        }

        let Some(item) = self.registry.resolve(id) else {
            log::debug!("ignoring selection of unknown navigation id `{id}`");
            return false;
        };
        if item.id() == self.active {
            return false;
        }

        self.active = item.id();
        true
    }

    /// Flip between the expanded and collapsed sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// React to a session store notification.
    pub fn on_session_change(
        &mut self,
        session: &SessionView,
    ) -> Vec<ShellEffect> {
        if self.exited {
            return Vec::new();
        }

        let mut effects = Vec::new();
        match AuthEdge::between(self.authenticated, session.is_authenticated) {
            AuthEdge::SignedOut => log::info!("session ended"),
            AuthEdge::SignedIn => log::info!("session started"),
            AuthEdge::Unchanged => {},
        }
        self.authenticated = session.is_authenticated;
        self.user = session.user.clone();

        if let Some(error) = self.error_latch.observe(session.error.as_deref())
        {
            effects.push(ShellEffect::NotifyFailure(error));
        }

        if session.is_authenticated {
            self.logout_pending = false;
        } else {
            self.exited = true;
            self.mobile_nav_open = false;
            effects.push(ShellEffect::Redirect(RedirectTarget::Login));
        }

        effects
    }

    /// Request the end of the session.
    ///
    /// The redirect is not issued here; it follows the store's notification
    /// that the session is no longer authenticated.
    pub fn logout(&mut self) -> Vec<ShellEffect> {
        if self.exited || self.logout_pending {
            return Vec::new();
        }

        self.logout_pending = true;
        self.mobile_nav_open = false;
        vec![
            ShellEffect::ClearSession,
            ShellEffect::NotifySuccess(String::from(LOGOUT_MESSAGE)),
        ]
    }

    fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
        if !layout.is_mobile() {
            self.mobile_nav_open = false;
        }
    }

    pub fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    pub fn active_item_id(&self) -> &'static str {
        self.active
    }

    /// The active item, or the default item should the id no longer resolve.
    pub fn active_item(&self) -> &NavigationItem {
        self.registry
            .resolve(self.active)
            .unwrap_or_else(|| self.registry.default_item())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Panel to mount, or `None` once the shell has redirected away.
    pub fn active_panel(&self) -> Option<PanelKind> {
        if self.exited {
            return None;
        }
        Some(self.registry.panel_for(self.active))
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_mobile_nav_open(&self) -> bool {
        self.mobile_nav_open
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_logout_pending(&self) -> bool {
        self.logout_pending
    }

    /// Whether the shell has redirected away and must not render content.
    pub fn is_exited(&self) -> bool {
        self.exited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> SessionView {
        SessionView::signed_in(UserProfile::new("Eugene Agesa", None))
    }

    fn mounted() -> DashboardShell {
        let (shell, effects) = DashboardShell::mount(
            Arc::new(NavigationRegistry::admin()),
            &signed_in(),
        );
        assert!(effects.is_empty());
        shell
    }

    #[test]
    fn given_fresh_mount_when_inspected_then_default_item_is_active() {
        let shell = mounted();
        assert_eq!(shell.active_item_id(), "dashboard");
        assert!(!shell.is_sidebar_collapsed());
        assert!(!shell.is_mobile_nav_open());
        assert_eq!(shell.active_panel(), Some(PanelKind::Dashboard));
        assert_eq!(
            shell.user().map(UserProfile::full_name),
            Some("Eugene Agesa")
        );
    }

    #[test]
    fn given_same_item_when_selected_then_selection_is_unchanged() {
        let mut shell = mounted();
        assert!(!shell.select_item("dashboard"));
        assert_eq!(shell.active_item_id(), "dashboard");
    }

    #[test]
    fn given_mobile_layout_when_item_selected_from_overlay_then_overlay_closes()
    {
        let mut shell = mounted();
        shell.reduce(ShellCommand::LayoutChanged(LayoutMode::Mobile));
        shell.reduce(ShellCommand::OpenMobileNav);
        assert!(shell.is_mobile_nav_open());

        shell.reduce(ShellCommand::SelectFromMobileNav {
            id: String::from("messages"),
        });

        assert!(!shell.is_mobile_nav_open());
        assert_eq!(shell.active_item_id(), "messages");
    }

    #[test]
    fn given_desktop_layout_when_overlay_requested_then_it_stays_closed() {
        let mut shell = mounted();
        shell.reduce(ShellCommand::OpenMobileNav);
        assert!(!shell.is_mobile_nav_open());
    }

    #[test]
    fn given_open_overlay_when_layout_becomes_desktop_then_overlay_closes() {
        let mut shell = mounted();
        shell.reduce(ShellCommand::LayoutChanged(LayoutMode::Mobile));
        shell.reduce(ShellCommand::OpenMobileNav);

        shell.reduce(ShellCommand::LayoutChanged(LayoutMode::Desktop));

        assert!(!shell.is_mobile_nav_open());
    }

    #[test]
    fn given_pending_logout_when_logout_repeated_then_no_effects_are_emitted() {
        let mut shell = mounted();
        assert_eq!(shell.logout().len(), 2);
        assert!(shell.logout().is_empty());
        assert!(shell.is_logout_pending());
    }

    #[test]
    fn given_exited_shell_when_item_selected_then_nothing_changes() {
        let mut shell = mounted();
        shell.on_session_change(&SessionView::signed_out());

        assert!(!shell.select_item("add-skill"));
        assert_eq!(shell.active_panel(), None);
        assert!(shell.logout().is_empty());
    }

    #[test]
    fn given_error_and_signed_out_session_when_observed_then_notify_precedes_redirect()
     {
        let mut shell = mounted();
        let effects = shell.on_session_change(
            &SessionView::signed_out().with_error("Token expired"),
        );

        assert_eq!(
            effects,
            vec![
                ShellEffect::NotifyFailure(String::from("Token expired")),
                ShellEffect::Redirect(RedirectTarget::Login),
            ]
        );
    }
}
