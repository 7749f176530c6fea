pub(crate) mod action_button;
pub(crate) mod icon_button;
pub(crate) mod menu_item;
pub(crate) mod nav_item;
pub(crate) mod text_field;
