use folio_shell::NavIcon;

pub(crate) const BRAND: &[u8] = include_bytes!("../../assets/svg/package.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../assets/svg/chevron-right.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../assets/svg/chevron-left.svg");
pub(crate) const MENU: &[u8] =
    include_bytes!("../../assets/svg/panel-left.svg");
pub(crate) const LOG_OUT: &[u8] =
    include_bytes!("../../assets/svg/log-out.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../../assets/svg/close.svg");

const HOME: &[u8] = include_bytes!("../../assets/svg/home.svg");
const FOLDER_GIT: &[u8] = include_bytes!("../../assets/svg/folder-git.svg");
const PENCIL_RULER: &[u8] =
    include_bytes!("../../assets/svg/pencil-ruler.svg");
const LAYOUT_GRID: &[u8] = include_bytes!("../../assets/svg/layout-grid.svg");
const HISTORY: &[u8] = include_bytes!("../../assets/svg/history.svg");
const MESSAGE_SQUARE: &[u8] =
    include_bytes!("../../assets/svg/message-square.svg");
const USER: &[u8] = include_bytes!("../../assets/svg/user.svg");
const AWARD: &[u8] = include_bytes!("../../assets/svg/award.svg");

/// SVG bytes for a navigation icon.
pub(crate) fn nav_icon(icon: NavIcon) -> &'static [u8] {
    match icon {
        NavIcon::Home => HOME,
        NavIcon::FolderGit => FOLDER_GIT,
        NavIcon::PencilRuler => PENCIL_RULER,
        NavIcon::LayoutGrid => LAYOUT_GRID,
        NavIcon::History => HISTORY,
        NavIcon::MessageSquare => MESSAGE_SQUARE,
        NavIcon::User => USER,
        NavIcon::Award => AWARD,
    }
}
