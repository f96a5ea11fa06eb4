use contracts::domain::a001_employee::Employee;

use crate::shared::query::{QueryState, QueryStatus};
use crate::shared::status::StatusMessage;

pub const DELETE_TITLE: &str = "Delete Employee";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";
pub const MSG_DELETED: &str = "Deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Delete failed";
pub const MSG_LOAD_FAILED: &str = "Failed to load. Try refresh.";

/// What the list page body shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Failed,
    Rows(Vec<Employee>),
    Empty,
}

impl ListPhase {
    pub fn from_state(state: &QueryState<Vec<Employee>>) -> Self {
        match state.status() {
            QueryStatus::Idle | QueryStatus::Loading => ListPhase::Loading,
            QueryStatus::Error => ListPhase::Failed,
            QueryStatus::Success => match &state.data {
                Some(rows) if !rows.is_empty() => ListPhase::Rows(rows.clone()),
                _ => ListPhase::Empty,
            },
        }
    }
}

/// Two-step delete: pick a row, then confirm or cancel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPageState {
    pending_delete: Option<String>,
}

impl ListPageState {
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn cancel(&mut self) {
        self.pending_delete = None;
    }

    /// Close the prompt and hand back the id to delete
    pub fn confirm(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn is_confirming(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn delete_outcome<E>(result: &Result<(), E>) -> StatusMessage {
        match result {
            Ok(()) => StatusMessage::success(MSG_DELETED),
            Err(_) => StatusMessage::error(MSG_DELETE_FAILED),
        }
    }
}
