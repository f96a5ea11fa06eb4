pub mod api;
pub mod queries;
pub mod ui;
