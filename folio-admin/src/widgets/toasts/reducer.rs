use super::event::ToastsEvent;
use super::state::ToastsState;

/// Reduce a toasts event into state updates.
pub(crate) fn reduce(state: &mut ToastsState, event: ToastsEvent) {
    match event {
        ToastsEvent::Dismiss { id } => state.dismiss(id),
        ToastsEvent::Tick(now) => state.expire(now),
    }
}
