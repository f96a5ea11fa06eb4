pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod navigation;
pub mod query;
pub mod status;
pub mod unsaved_changes;
