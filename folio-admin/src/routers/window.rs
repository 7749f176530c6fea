use folio_shell::{LayoutMode, ShellCommand};
use iced::{Size, Task};

use super::shell;
use crate::app::{App, AppEvent};

/// Switch layouts at the mobile breakpoint.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    let mode = LayoutMode::for_width(size.width);
    if mode == app.layout_mode {
        return Task::none();
    }

    log::debug!("layout switched to {mode:?} at width {}", size.width);
    app.layout_mode = mode;
    shell::route_command(app, ShellCommand::LayoutChanged(mode))
}
