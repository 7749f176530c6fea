/// Sidebar width while expanded.
pub const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;
/// Sidebar width while collapsed to the icon rail.
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 80.0;
/// Window widths below this use the mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 640.0;

/// Which navigation surface is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Persistent, collapsible sidebar.
    #[default]
    Desktop,
    /// Header menu button opening a slide-over navigation list.
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }
}

pub fn sidebar_width(collapsed: bool) -> f32 {
    if collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_EXPANDED_WIDTH
    }
}

/// Horizontal space taken by navigation before the content area starts.
pub fn content_offset(mode: LayoutMode, collapsed: bool) -> f32 {
    match mode {
        LayoutMode::Desktop => sidebar_width(collapsed),
        LayoutMode::Mobile => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_width_below_breakpoint_when_classified_then_mobile_is_used() {
        assert_eq!(LayoutMode::for_width(639.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(MOBILE_BREAKPOINT), LayoutMode::Desktop);
    }

    #[test]
    fn given_mobile_layout_when_offset_requested_then_sidebar_is_ignored() {
        assert_eq!(content_offset(LayoutMode::Mobile, false), 0.0);
        assert_eq!(
            content_offset(LayoutMode::Desktop, true),
            SIDEBAR_COLLAPSED_WIDTH
        );
        assert_eq!(
            content_offset(LayoutMode::Desktop, false),
            SIDEBAR_EXPANDED_WIDTH
        );
    }
}
