pub mod confirm_dialog;
pub mod date_input;
pub mod status_snackbar;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use date_input::DateInput;
pub use status_snackbar::StatusSnackbar;
