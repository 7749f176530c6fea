pub(crate) mod certification_form;
pub(crate) mod certifications_panel;
pub(crate) mod delete_dialog;
