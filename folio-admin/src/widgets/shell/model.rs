use folio_shell::{
    LayoutMode, NavSection, NavigationItem, UserProfile, sidebar_width,
};

/// Read-only view model for the dashboard chrome.
#[derive(Debug, Clone)]
pub(crate) struct ShellViewModel<'a> {
    pub(crate) sections: Vec<(NavSection, &'a [NavigationItem])>,
    pub(crate) active_item: &'a NavigationItem,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) layout: LayoutMode,
    pub(crate) user: Option<&'a UserProfile>,
    pub(crate) logout_pending: bool,
}

impl ShellViewModel<'_> {
    pub(crate) fn is_active(&self, item: &NavigationItem) -> bool {
        item.id() == self.active_item.id()
    }

    pub(crate) fn sidebar_width(&self) -> f32 {
        sidebar_width(self.sidebar_collapsed)
    }

    pub(crate) fn welcome_title(&self) -> String {
        welcome_title(self.user)
    }

    pub(crate) fn display_name(&self) -> &str {
        self.user.map_or("Admin", UserProfile::full_name)
    }

    pub(crate) fn initials(&self) -> String {
        self.user
            .map_or_else(|| String::from("?"), UserProfile::initials)
    }
}

fn welcome_title(user: Option<&UserProfile>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.full_name()),
        None => String::from("Welcome back"),
    }
}
