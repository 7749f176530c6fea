use iced::Task;

use super::toasts;
use crate::app::{App, AppEvent};
use crate::widgets::certifications::{
    CertificationsEffect, CertificationsEvent, CertificationsIntent,
};
use crate::widgets::toasts::ToastKind;

/// Route a certifications event through the widget reducer or out to the app.
pub(crate) fn route_event(
    app: &mut App,
    event: CertificationsEvent,
) -> Task<AppEvent> {
    match event {
        CertificationsEvent::Intent(intent) => route_intent(app, intent),
        CertificationsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Route a certifications intent directly.
pub(crate) fn route_intent(
    app: &mut App,
    intent: CertificationsIntent,
) -> Task<AppEvent> {
    app.widgets
        .certifications
        .reduce(intent)
        .map(AppEvent::Certifications)
}

fn route_effect(app: &mut App, effect: CertificationsEffect) -> Task<AppEvent> {
    match effect {
        CertificationsEffect::NotifySuccess(message) => {
            toasts::push(app, ToastKind::Success, message);
        },
        CertificationsEffect::NotifyFailure(message) => {
            toasts::push(app, ToastKind::Failure, message);
        },
        CertificationsEffect::NotifyInfo(message) => {
            toasts::push(app, ToastKind::Info, message);
        },
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::route_event;
    use crate::routers::testing::signed_out_app;
    use crate::widgets::certifications::{
        CertificationsEffect, CertificationsEvent,
    };
    use crate::widgets::toasts::ToastKind;

    #[test]
    fn given_info_effect_when_routed_then_info_toast_is_shown() {
        let mut app = signed_out_app();

        let _ = route_event(
            &mut app,
            CertificationsEvent::Effect(CertificationsEffect::NotifyInfo(
                String::from("showing samples"),
            )),
        );

        let toasts = app.widgets.toasts.vm().toasts;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), ToastKind::Info);
        assert_eq!(toasts[0].message(), "showing samples");
    }
}
