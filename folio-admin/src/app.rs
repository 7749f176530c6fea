#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use folio_shell::{LayoutMode, NavigationRegistry, SessionView};
use iced::{Element, Subscription, Task, Theme, window};

use crate::config::AdminConfig;
use crate::config::storage::load_or_init_config;
use crate::guards::Overlay;
use crate::routers;
use crate::session_store::LocalSessionStore;
use crate::theme::ThemeManager;
use crate::widgets::certifications::{
    CertificationsCtx, CertificationsEvent, CertificationsIntent,
    CertificationsWidget,
};
use crate::widgets::login::{LoginEvent, LoginWidget};
use crate::widgets::shell::{ShellEvent, ShellWidget};
use crate::widgets::toasts::{ToastsEvent, ToastsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 560.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Dashboard chrome
    Shell(ShellEvent),
    // Session store notifications
    SessionChanged(SessionView),
    // Login widget
    Login(LoginEvent),
    // Toast stack
    Toasts(ToastsEvent),
    // Certifications panel
    Certifications(CertificationsEvent),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    /// Mounted only while a session is active.
    pub(crate) shell: Option<ShellWidget>,
    pub(crate) login: LoginWidget,
    pub(crate) toasts: ToastsWidget,
    pub(crate) certifications: CertificationsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) layout_mode: LayoutMode,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) config: AdminConfig,
    pub(crate) registry: Arc<NavigationRegistry>,
    pub(crate) session: LocalSessionStore,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        Self::with_config(load_or_init_config())
    }

    /// Build the application around an already loaded configuration.
    pub(crate) fn with_config(config: AdminConfig) -> (Self, Task<AppEvent>) {
        let session = LocalSessionStore::new(config.account.clone());
        let certifications = CertificationsWidget::new(CertificationsCtx {
            data_dir: config.data_dir(),
        });

        let mut app = Self {
            layout_mode: LayoutMode::for_width(DEFAULT_WINDOW_WIDTH),
            theme_manager: ThemeManager::default(),
            config,
            registry: Arc::new(NavigationRegistry::admin()),
            session,
            widgets: Widgets {
                shell: None,
                login: LoginWidget::default(),
                toasts: ToastsWidget::default(),
                certifications,
            },
        };

        // Nobody is signed in yet: the shell redirects to login right away.
        let mount = routers::shell::mount(&mut app);
        let load = Task::done(AppEvent::Certifications(
            CertificationsEvent::Intent(CertificationsIntent::Load),
        ));

        (app, Task::batch([mount, load]))
    }

    pub(crate) fn title(&self) -> String {
        match &self.widgets.shell {
            Some(shell) => {
                format!("{} - PortfolioHub", shell.vm().active_item.label())
            },
            None => String::from("PortfolioHub Admin"),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// The overlay currently capturing input, if any.
    pub(crate) fn open_overlay(&self) -> Option<Overlay> {
        let shell = self.widgets.shell.as_ref()?;
        if shell.is_mobile_nav_open() {
            return Some(Overlay::MobileNav);
        }

        let on_certifications = shell.active_panel()
            == Some(folio_shell::PanelKind::Certifications);
        if on_certifications && self.widgets.certifications.has_pending_delete()
        {
            return Some(Overlay::DeleteDialog);
        }

        None
    }
}
