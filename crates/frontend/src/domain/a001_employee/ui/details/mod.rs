//! Employee add/edit page
//!
//! - model.rs: form state and rules for dirty / saving, no reactivity
//! - view_model.rs: signals, data loading and the save command
//! - view.rs: Leptos components

pub mod model;
mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
