use std::sync::Arc;

use folio_shell::{
    DashboardShell, LOGOUT_MESSAGE, NavigationRegistry, PanelKind,
    RedirectTarget, SessionStore, SessionView, ShellCommand, ShellEffect,
    UserProfile,
};

/// In-memory store that records every published view.
struct RecordingStore {
    view: SessionView,
    pending: Vec<SessionView>,
}

impl RecordingStore {
    fn signed_in() -> Self {
        Self {
            view: SessionView::signed_in(UserProfile::new(
                "Eugene Agesa",
                Some(String::from("https://example.com/avatar.png")),
            )),
            pending: Vec::new(),
        }
    }

    fn publish(&mut self, view: SessionView) {
        self.view = view.clone();
        self.pending.push(view);
    }
}

impl SessionStore for RecordingStore {
    fn view(&self) -> &SessionView {
        &self.view
    }

    fn logout(&mut self) {
        self.publish(SessionView::signed_out());
    }

    fn take_changes(&mut self) -> Vec<SessionView> {
        std::mem::take(&mut self.pending)
    }
}

fn registry() -> Arc<NavigationRegistry> {
    Arc::new(NavigationRegistry::admin())
}

fn mount(store: &RecordingStore) -> DashboardShell {
    let (shell, effects) = DashboardShell::mount(registry(), store.view());
    assert!(effects.is_empty(), "unexpected mount effects: {effects:?}");
    shell
}

fn redirects(effects: &[ShellEffect]) -> usize {
    effects
        .iter()
        .filter(|effect| {
            matches!(effect, ShellEffect::Redirect(RedirectTarget::Login))
        })
        .count()
}

/// Route shell effects the way the host application does.
fn run_effects(
    effects: Vec<ShellEffect>,
    store: &mut RecordingStore,
    log: &mut Vec<ShellEffect>,
) {
    for effect in effects {
        if effect == ShellEffect::ClearSession {
            store.logout();
        }
        log.push(effect);
    }
}

#[test]
fn given_no_prior_state_when_mounted_then_dashboard_is_active_and_sidebar_expanded()
 {
    let store = RecordingStore::signed_in();
    let shell = mount(&store);

    assert_eq!(shell.active_item_id(), "dashboard");
    assert!(!shell.is_sidebar_collapsed());
}

#[test]
fn given_unknown_ids_when_selected_then_active_item_is_unchanged() {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);

    for id in ["bogus-id", "", "Dashboard", "Add Skill", "ADD-SKILL", " add-skill"]
    {
        let before = shell.active_item_id();
        let effects = shell.reduce(ShellCommand::SelectItem {
            id: id.to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(shell.active_item_id(), before, "id {id:?} changed state");
    }
}

#[test]
fn given_every_valid_id_when_selected_then_only_its_panel_is_mounted() {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);
    let items: Vec<(&'static str, PanelKind)> = shell
        .registry()
        .items()
        .map(|item| (item.id(), item.panel()))
        .collect();

    for (id, panel) in items {
        shell.select_item(id);
        assert_eq!(shell.active_item_id(), id);
        assert_eq!(shell.active_panel(), Some(panel));

        let active_count = shell
            .registry()
            .items()
            .filter(|item| shell.is_active(item.id()))
            .count();
        assert_eq!(active_count, 1);
    }
}

#[test]
fn given_add_skill_then_bogus_id_when_selected_then_add_skill_remains_active() {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);

    shell.reduce(ShellCommand::SelectItem {
        id: String::from("add-skill"),
    });
    shell.reduce(ShellCommand::SelectItem {
        id: String::from("bogus-id"),
    });

    assert_eq!(shell.active_item_id(), "add-skill");
    assert_eq!(shell.active_panel(), Some(PanelKind::AddSkill));
}

#[test]
fn given_any_selection_when_sidebar_toggled_twice_then_collapse_state_round_trips()
 {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);

    for start_collapsed in [false, true] {
        if shell.is_sidebar_collapsed() != start_collapsed {
            shell.toggle_sidebar();
        }
        shell.select_item("messages");

        shell.reduce(ShellCommand::ToggleSidebar);
        assert_eq!(shell.is_sidebar_collapsed(), !start_collapsed);
        shell.reduce(ShellCommand::ToggleSidebar);

        assert_eq!(shell.is_sidebar_collapsed(), start_collapsed);
        assert_eq!(shell.active_item_id(), "messages");
    }
}

#[test]
fn given_unauthenticated_session_when_mounted_then_one_redirect_and_no_panel() {
    let (mut shell, effects) =
        DashboardShell::mount(registry(), &SessionView::signed_out());

    assert_eq!(effects, vec![ShellEffect::Redirect(RedirectTarget::Login)]);
    assert_eq!(shell.active_panel(), None);

    let again = shell.on_session_change(&SessionView::signed_out());
    assert!(again.is_empty());
}

#[test]
fn given_repeated_signed_out_notifications_when_observed_then_exactly_one_redirect()
 {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);
    let mut effects = Vec::new();

    for _ in 0..3 {
        effects.extend(shell.reduce(ShellCommand::SessionChanged(
            SessionView::signed_out(),
        )));
    }

    assert_eq!(redirects(&effects), 1);
    assert!(shell.is_exited());
    assert_eq!(shell.active_panel(), None);
}

#[test]
fn given_same_error_on_consecutive_notifications_when_observed_then_one_failure_toast()
 {
    let store = RecordingStore::signed_in();
    let mut shell = mount(&store);
    let failing = store.view().clone().with_error("Network Error");

    let first = shell.on_session_change(&failing);
    let second = shell.on_session_change(&failing);

    assert_eq!(
        first,
        vec![ShellEffect::NotifyFailure(String::from("Network Error"))]
    );
    assert!(second.is_empty());
    assert_eq!(shell.active_panel(), Some(PanelKind::Dashboard));
}

#[test]
fn given_logout_when_store_confirms_then_notify_precedes_single_redirect() {
    let mut store = RecordingStore::signed_in();
    let mut shell = mount(&store);
    shell.select_item("certifications");
    let mut log = Vec::new();

    let effects = shell.reduce(ShellCommand::Logout);
    assert_eq!(redirects(&effects), 0, "logout must not redirect on its own");
    run_effects(effects, &mut store, &mut log);

    for change in store.take_changes() {
        let effects = shell.reduce(ShellCommand::SessionChanged(change));
        run_effects(effects, &mut store, &mut log);
    }

    assert_eq!(
        log,
        vec![
            ShellEffect::ClearSession,
            ShellEffect::NotifySuccess(String::from(LOGOUT_MESSAGE)),
            ShellEffect::Redirect(RedirectTarget::Login),
        ]
    );
}

#[test]
fn given_logout_then_login_when_remounted_then_default_item_is_active_again() {
    let mut store = RecordingStore::signed_in();
    let mut shell = mount(&store);
    shell.select_item("account");
    shell.toggle_sidebar();

    let mut log = Vec::new();
    run_effects(shell.logout(), &mut store, &mut log);
    for change in store.take_changes() {
        shell.on_session_change(&change);
    }
    assert!(shell.is_exited());

    store.publish(SessionView::signed_in(UserProfile::new("Eugene", None)));
    let shell = mount(&store);

    assert_eq!(shell.active_item_id(), "dashboard");
    assert!(!shell.is_sidebar_collapsed());
}
