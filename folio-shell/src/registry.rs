use std::collections::HashSet;
use std::fmt;

use crate::errors::RegistryError;

/// Navigation groups shown in the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavSection {
    Content,
    Communication,
    Profile,
}

impl NavSection {
    /// All sections in display order.
    pub const ALL: [NavSection; 3] = [
        NavSection::Content,
        NavSection::Communication,
        NavSection::Profile,
    ];

    /// Heading rendered above the section.
    pub fn title(self) -> &'static str {
        match self {
            NavSection::Content => "Content Management",
            NavSection::Communication => "Communication",
            NavSection::Profile => "Profile & Settings",
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Symbolic icon reference; the host maps it to a real glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    FolderGit,
    PencilRuler,
    LayoutGrid,
    History,
    MessageSquare,
    User,
    Award,
}

/// Content panel mounted when a navigation item is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Dashboard,
    AddProject,
    AddSkill,
    AddUses,
    AddTimeline,
    Messages,
    Account,
    Certifications,
}

/// A single navigable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    id: &'static str,
    label: &'static str,
    icon: NavIcon,
    badge: bool,
    section: NavSection,
    panel: PanelKind,
}

impl NavigationItem {
    /// Create an item without an unread badge.
    pub const fn new(
        id: &'static str,
        label: &'static str,
        icon: NavIcon,
        section: NavSection,
        panel: PanelKind,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            badge: false,
            section,
            panel,
        }
    }

    /// Mark the item as carrying a "has unread" badge.
    pub const fn with_badge(mut self) -> Self {
        self.badge = true;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn icon(&self) -> NavIcon {
        self.icon
    }

    pub fn has_badge(&self) -> bool {
        self.badge
    }

    pub fn section(&self) -> NavSection {
        self.section
    }

    pub fn panel(&self) -> PanelKind {
        self.panel
    }
}

const ADMIN_ITEMS: [NavigationItem; 8] = [
    NavigationItem::new(
        "dashboard",
        "Dashboard",
        NavIcon::Home,
        NavSection::Content,
        PanelKind::Dashboard,
    ),
    NavigationItem::new(
        "add-project",
        "Add Project",
        NavIcon::FolderGit,
        NavSection::Content,
        PanelKind::AddProject,
    ),
    NavigationItem::new(
        "add-skill",
        "Add Skill",
        NavIcon::PencilRuler,
        NavSection::Content,
        PanelKind::AddSkill,
    ),
    NavigationItem::new(
        "add-uses",
        "Add Uses",
        NavIcon::LayoutGrid,
        NavSection::Content,
        PanelKind::AddUses,
    ),
    NavigationItem::new(
        "add-timeline",
        "Add Timeline",
        NavIcon::History,
        NavSection::Content,
        PanelKind::AddTimeline,
    ),
    NavigationItem::new(
        "messages",
        "Messages",
        NavIcon::MessageSquare,
        NavSection::Communication,
        PanelKind::Messages,
    )
    .with_badge(),
    NavigationItem::new(
        "account",
        "Account",
        NavIcon::User,
        NavSection::Profile,
        PanelKind::Account,
    ),
    NavigationItem::new(
        "certifications",
        "Certifications",
        NavIcon::Award,
        NavSection::Profile,
        PanelKind::Certifications,
    ),
];

#[derive(Debug, Clone)]
struct SectionEntry {
    section: NavSection,
    items: Vec<NavigationItem>,
}

/// Static, ordered catalogue of navigation items grouped by section.
///
/// Identifiers are unique across the whole registry and the first item of
/// [`NavSection::Content`] is the default view.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    sections: Vec<SectionEntry>,
}

impl NavigationRegistry {
    /// Build a registry from items in declaration order.
    ///
    /// Items keep their relative order inside each section; sections are
    /// laid out in [`NavSection::ALL`] order.
    pub fn new(
        items: impl IntoIterator<Item = NavigationItem>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut sections: Vec<SectionEntry> = NavSection::ALL
            .iter()
            .map(|&section| SectionEntry {
                section,
                items: Vec::new(),
            })
            .collect();

        for item in items {
            if item.id.is_empty() {
                return Err(RegistryError::EmptyId { label: item.label });
            }
            if !seen.insert(item.id) {
                return Err(RegistryError::DuplicateId { id: item.id });
            }

            let Some(entry) =
                sections.iter_mut().find(|entry| entry.section == item.section)
            else {
                continue;
            };
            entry.items.push(item);
        }

        let has_default = sections
            .iter()
            .any(|entry| entry.section == NavSection::Content && !entry.items.is_empty());
        if !has_default {
            return Err(RegistryError::MissingDefault {
                section: NavSection::Content,
            });
        }

        sections.retain(|entry| !entry.items.is_empty());
        Ok(Self { sections })
    }

    /// The admin dashboard catalogue.
    pub fn admin() -> Self {
        Self::new(ADMIN_ITEMS).expect("built-in admin registry is valid")
    }

    /// Look up an item by id.
    pub fn resolve(&self, id: &str) -> Option<&NavigationItem> {
        self.items().find(|item| item.id == id)
    }

    /// First item of the content section.
    pub fn default_item(&self) -> &NavigationItem {
        // `new` rejects registries without content items and keeps sections
        // in `NavSection::ALL` order, so the content section is first.
        &self.sections[0].items[0]
    }

    /// Non-empty sections with their items, in display order.
    pub fn list_sections(&self) -> Vec<(NavSection, &[NavigationItem])> {
        self.sections
            .iter()
            .map(|entry| (entry.section, entry.items.as_slice()))
            .collect()
    }

    /// Every item across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &NavigationItem> {
        self.sections.iter().flat_map(|entry| entry.items.iter())
    }

    /// Resolve the item id to its panel, falling back to the default panel.
    pub fn panel_for(&self, id: &str) -> PanelKind {
        self.resolve(id)
            .unwrap_or_else(|| self.default_item())
            .panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_admin_registry_when_listing_sections_then_order_matches_sidebar() {
        let registry = NavigationRegistry::admin();
        let sections: Vec<(NavSection, Vec<&str>)> = registry
            .list_sections()
            .into_iter()
            .map(|(section, items)| {
                (section, items.iter().map(|item| item.id()).collect())
            })
            .collect();

        assert_eq!(
            sections,
            vec![
                (
                    NavSection::Content,
                    vec![
                        "dashboard",
                        "add-project",
                        "add-skill",
                        "add-uses",
                        "add-timeline"
                    ]
                ),
                (NavSection::Communication, vec!["messages"]),
                (NavSection::Profile, vec!["account", "certifications"]),
            ]
        );
    }

    #[test]
    fn given_admin_registry_when_default_requested_then_dashboard_is_returned() {
        let registry = NavigationRegistry::admin();
        assert_eq!(registry.default_item().id(), "dashboard");
        assert_eq!(registry.default_item().panel(), PanelKind::Dashboard);
    }

    #[test]
    fn given_unknown_id_when_resolved_then_none_is_returned() {
        let registry = NavigationRegistry::admin();
        assert!(registry.resolve("bogus-id").is_none());
        assert!(registry.resolve("Add Skill").is_none());
    }

    #[test]
    fn given_unknown_id_when_panel_requested_then_default_panel_is_used() {
        let registry = NavigationRegistry::admin();
        assert_eq!(registry.panel_for("bogus-id"), PanelKind::Dashboard);
        assert_eq!(registry.panel_for("messages"), PanelKind::Messages);
    }

    #[test]
    fn given_messages_item_when_resolved_then_badge_is_set() {
        let registry = NavigationRegistry::admin();
        let messages = registry.resolve("messages").expect("messages exists");
        assert!(messages.has_badge());
        assert!(!registry.default_item().has_badge());
    }

    #[test]
    fn given_duplicate_ids_when_building_then_error_names_the_id() {
        let result = NavigationRegistry::new([
            NavigationItem::new(
                "dashboard",
                "Dashboard",
                NavIcon::Home,
                NavSection::Content,
                PanelKind::Dashboard,
            ),
            NavigationItem::new(
                "dashboard",
                "Account",
                NavIcon::User,
                NavSection::Profile,
                PanelKind::Account,
            ),
        ]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateId { id: "dashboard" }
        );
    }

    #[test]
    fn given_no_content_items_when_building_then_missing_default_is_reported() {
        let result = NavigationRegistry::new([NavigationItem::new(
            "account",
            "Account",
            NavIcon::User,
            NavSection::Profile,
            PanelKind::Account,
        )]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingDefault {
                section: NavSection::Content
            }
        );
    }

    #[test]
    fn given_profile_item_declared_first_when_building_then_content_stays_first()
     {
        let registry = NavigationRegistry::new([
            NavigationItem::new(
                "account",
                "Account",
                NavIcon::User,
                NavSection::Profile,
                PanelKind::Account,
            ),
            NavigationItem::new(
                "add-skill",
                "Add Skill",
                NavIcon::PencilRuler,
                NavSection::Content,
                PanelKind::AddSkill,
            ),
        ])
        .expect("registry should build");

        assert_eq!(registry.default_item().id(), "add-skill");
        assert_eq!(registry.list_sections().len(), 2);
    }
}
