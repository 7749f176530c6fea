pub(crate) mod header;
pub(crate) mod mobile_nav;
pub(crate) mod sidebar;
