use crate::app::AppEvent;
use crate::widgets::certifications::{CertificationsEvent, CertificationsIntent};
use crate::widgets::shell::ShellEvent;

/// Overlays that take over pointer input while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overlay {
    MobileNav,
    DeleteDialog,
}

/// Determines how the event loop should treat an incoming event when an
/// overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlayGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the overlay.
    Ignore,
    /// Close the overlay before dispatching.
    Dismiss,
}

/// Classify an incoming event while `overlay` is open.
pub(crate) fn overlay_guard(overlay: Overlay, event: &AppEvent) -> OverlayGuard {
    use OverlayGuard::*;

    match event {
        AppEvent::Shell(event) => match (overlay, event) {
            (
                Overlay::MobileNav,
                ShellEvent::MobileItemSelected { .. }
                | ShellEvent::CloseMobileNav
                | ShellEvent::Logout,
            ) => Allow,
            (_, ShellEvent::OpenMobileNav) => Ignore,
            _ => Dismiss,
        },
        AppEvent::Certifications(CertificationsEvent::Intent(intent)) => {
            use CertificationsIntent as I;
            match (overlay, intent) {
                (
                    _,
                    I::Load
                    | I::Loaded(_)
                    | I::LoadFailed(_)
                    | I::Persisted
                    | I::PersistFailed(_),
                ) => Allow,
                (Overlay::DeleteDialog, I::ConfirmDelete | I::CancelDelete) => {
                    Allow
                },
                (Overlay::DeleteDialog, _) => Ignore,
                (Overlay::MobileNav, _) => Dismiss,
            }
        },
        AppEvent::Certifications(CertificationsEvent::Effect(_))
        | AppEvent::SessionChanged(_)
        | AppEvent::Login(_)
        | AppEvent::Toasts(_)
        | AppEvent::Window(_) => Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::{Overlay, OverlayGuard, overlay_guard};
    use crate::app::AppEvent;
    use crate::widgets::certifications::{
        CertificationsEvent, CertificationsIntent,
    };
    use crate::widgets::shell::ShellEvent;
    use crate::widgets::toasts::ToastsEvent;

    fn certifications(intent: CertificationsIntent) -> AppEvent {
        AppEvent::Certifications(CertificationsEvent::Intent(intent))
    }

    #[test]
    fn given_mobile_nav_open_when_overlay_item_selected_then_allowed() {
        let event = AppEvent::Shell(ShellEvent::MobileItemSelected {
            id: String::from("messages"),
        });

        assert_eq!(
            overlay_guard(Overlay::MobileNav, &event),
            OverlayGuard::Allow
        );
    }

    #[test]
    fn given_mobile_nav_open_when_panel_is_edited_then_overlay_is_dismissed() {
        let event = certifications(CertificationsIntent::StartAdd);

        assert_eq!(
            overlay_guard(Overlay::MobileNav, &event),
            OverlayGuard::Dismiss
        );
    }

    #[test]
    fn given_delete_dialog_open_when_other_card_is_edited_then_ignored() {
        let event = certifications(CertificationsIntent::Edit { id: 2 });

        assert_eq!(
            overlay_guard(Overlay::DeleteDialog, &event),
            OverlayGuard::Ignore
        );
    }

    #[test]
    fn given_delete_dialog_open_when_confirmed_then_allowed() {
        let event = certifications(CertificationsIntent::ConfirmDelete);

        assert_eq!(
            overlay_guard(Overlay::DeleteDialog, &event),
            OverlayGuard::Allow
        );
    }

    #[test]
    fn given_delete_dialog_open_when_navigating_then_dialog_is_dismissed() {
        let event = AppEvent::Shell(ShellEvent::ItemSelected {
            id: String::from("dashboard"),
        });

        assert_eq!(
            overlay_guard(Overlay::DeleteDialog, &event),
            OverlayGuard::Dismiss
        );
    }

    #[test]
    fn given_any_overlay_when_toast_ticks_then_allowed() {
        let event = AppEvent::Toasts(ToastsEvent::Tick(std::time::Instant::now()));

        for overlay in [Overlay::MobileNav, Overlay::DeleteDialog] {
            assert_eq!(overlay_guard(overlay, &event), OverlayGuard::Allow);
        }
    }
}
