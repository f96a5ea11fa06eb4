use contracts::domain::a001_employee::{
    validate, Employee, EmployeeDraft, EmployeeField, ValidatedEmployee, ValidationErrors,
};

use crate::shared::query::{QueryState, QueryStatus};

pub const MSG_SAVE_FAILED: &str = "Failed to save. Please try again.";
pub const LABEL_SUBMIT: &str = "Submit";
pub const LABEL_SAVING: &str = "Saving…";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => FormMode::Edit(id),
            _ => FormMode::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }

    /// Flash carried back to the list after a successful save
    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Employee created successfully",
            FormMode::Edit(_) => "Employee updated successfully",
        }
    }
}

/// What the details page body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsPhase {
    Loading,
    /// The record could not be fetched; the form stays hidden
    Failed,
    Ready,
}

impl DetailsPhase {
    /// `None` in create mode, where there is nothing to load
    pub fn from_state<T>(record: Option<&QueryState<T>>) -> Self {
        let Some(state) = record else {
            return DetailsPhase::Ready;
        };
        match state.status() {
            QueryStatus::Idle | QueryStatus::Loading => DetailsPhase::Loading,
            QueryStatus::Error => DetailsPhase::Failed,
            QueryStatus::Success if state.is_fetching => DetailsPhase::Loading,
            QueryStatus::Success => DetailsPhase::Ready,
        }
    }
}

/// Form state without any reactivity: draft, last-loaded initial values,
/// field errors, and the dirty / saving flags.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    initial: EmployeeDraft,
    draft: EmployeeDraft,
    errors: ValidationErrors,
    dirty: bool,
    saving: bool,
}

impl EmployeeForm {
    pub fn new(mode: FormMode) -> Self {
        let initial = EmployeeDraft::blank();
        Self {
            mode,
            draft: initial.clone(),
            initial,
            errors: ValidationErrors::default(),
            dirty: false,
            saving: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: EmployeeField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn submit_label(&self) -> &'static str {
        if self.saving {
            LABEL_SAVING
        } else {
            LABEL_SUBMIT
        }
    }

    /// Edits made while a save is in flight do not count as dirty.
    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        self.draft.set_field(field, value);
        if !self.saving {
            self.dirty = true;
        }
    }

    /// Back to the last-loaded values. The dirty flag is left as is.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.errors = ValidationErrors::default();
    }

    /// New initial values arrived (edit record loaded)
    pub fn sync_initial(&mut self, employee: &Employee) {
        self.initial = EmployeeDraft::from_employee(employee);
        self.reset();
    }

    /// Validate the draft. On success the form enters the saving state and
    /// the validated values are returned; on failure the field errors are
    /// kept for display. A second submit while saving is ignored.
    pub fn begin_submit(&mut self) -> Option<ValidatedEmployee> {
        if self.saving {
            return None;
        }
        match validate(&self.draft) {
            Ok(validated) => {
                self.errors = ValidationErrors::default();
                self.saving = true;
                Some(validated)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, saved: bool) {
        self.saving = false;
        if saved {
            self.dirty = false;
        }
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigation::{NavOutcome, NavigationState, PendingNavigation};
    use crate::shared::unsaved_changes::{decide, GuardDecision, PromptGate};
    use contracts::domain::a001_employee::Gender;

    fn record() -> Employee {
        Employee {
            id: "3".into(),
            first_name: "Marcuss".into(),
            last_name: "Tanaka".into(),
            email_address: "m@t.sg".into(),
            phone_number: "61234567".into(),
            gender: Gender::Male,
            date_of_birth: "1985-06-01T12:00:00.000Z".into(),
            joined_date: "2015-06-01T12:00:00.000Z".into(),
        }
    }

    fn fetched(result: Result<Employee, &str>) -> QueryState<Employee> {
        let (data, error) = match result {
            Ok(employee) => (Some(employee), None),
            Err(message) => (None, Some(message.to_string())),
        };
        QueryState {
            data,
            error,
            is_fetching: false,
            is_stale: false,
        }
    }

    #[test]
    fn test_create_mode_is_ready_without_record() {
        assert_eq!(DetailsPhase::from_state::<Employee>(None), DetailsPhase::Ready);
    }

    #[test]
    fn test_failed_record_fetch_hides_form() {
        let failed = fetched(Err("HTTP 404"));
        assert_eq!(DetailsPhase::from_state(Some(&failed)), DetailsPhase::Failed);

        // the blank draft never reaches the page
        let form = EmployeeForm::new(FormMode::Edit("x".into()));
        assert_eq!(form.draft().first_name, "");
    }

    #[test]
    fn test_record_phases() {
        let mut state = QueryState::<Employee>::default();
        assert_eq!(DetailsPhase::from_state(Some(&state)), DetailsPhase::Loading);
        state.is_fetching = true;
        assert_eq!(DetailsPhase::from_state(Some(&state)), DetailsPhase::Loading);

        let mut loaded = fetched(Ok(record()));
        assert_eq!(DetailsPhase::from_state(Some(&loaded)), DetailsPhase::Ready);
        loaded.is_fetching = true;
        assert_eq!(DetailsPhase::from_state(Some(&loaded)), DetailsPhase::Loading);

        // a retry after a failure shows the loader again
        let mut retry = fetched(Err("HTTP 500"));
        retry.is_fetching = true;
        assert_eq!(DetailsPhase::from_state(Some(&retry)), DetailsPhase::Loading);
    }

    #[test]
    fn test_mode_texts() {
        assert_eq!(FormMode::from_id(None), FormMode::Create);
        assert_eq!(FormMode::from_id(Some(String::new())), FormMode::Create);
        let edit = FormMode::from_id(Some("3".into()));
        assert_eq!(edit.id(), Some("3"));
        assert_eq!(edit.title(), "Edit Employee");
        assert_eq!(FormMode::Create.title(), "Add Employee");
        assert_eq!(edit.success_message(), "Employee updated successfully");
    }

    #[test]
    fn test_field_change_marks_dirty() {
        let mut form = EmployeeForm::new(FormMode::Create);
        assert!(!form.is_dirty());
        form.set_field(EmployeeField::FirstName, "Jasmine".into());
        assert!(form.is_dirty());
        assert_eq!(form.draft().first_name, "Jasmine");
    }

    #[test]
    fn test_edit_while_saving_not_dirty() {
        let mut form = EmployeeForm::new(FormMode::Edit("3".into()));
        form.sync_initial(&record());
        assert!(form.begin_submit().is_some());
        assert!(form.is_saving());
        assert_eq!(form.submit_label(), LABEL_SAVING);
        form.set_field(EmployeeField::LastName, "Tanakaa".into());
        assert!(!form.is_dirty());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_invalid_submit_shows_errors_and_stays_idle() {
        let mut form = EmployeeForm::new(FormMode::Create);
        form.set_field(EmployeeField::FirstName, "Al".into());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(EmployeeField::FirstName), Some("Min 6 chars"));
        assert_eq!(form.error(EmployeeField::Gender), None);
        assert!(!form.is_saving());
        assert_eq!(form.submit_label(), LABEL_SUBMIT);
    }

    #[test]
    fn test_reset_restores_initial_and_clears_errors() {
        let mut form = EmployeeForm::new(FormMode::Edit("3".into()));
        form.sync_initial(&record());
        form.set_field(EmployeeField::EmailAddress, "nope".into());
        assert!(form.begin_submit().is_none());
        assert!(!form.errors().is_empty());

        form.reset();
        assert_eq!(form.draft().email_address, "m@t.sg");
        assert!(form.errors().is_empty());
        assert!(form.is_dirty());
    }

    #[test]
    fn test_sync_initial_replaces_draft() {
        let mut form = EmployeeForm::new(FormMode::Edit("3".into()));
        assert_eq!(form.draft().first_name, "");
        form.sync_initial(&record());
        assert_eq!(form.draft().first_name, "Marcuss");
        assert_eq!(form.draft().gender, "Male");
        assert_eq!(form.draft().date_of_birth.len(), 10);
    }

    #[test]
    fn test_failed_save_keeps_dirty_draft() {
        let mut form = EmployeeForm::new(FormMode::Edit("3".into()));
        form.sync_initial(&record());
        form.set_field(EmployeeField::FirstName, "Marcusss".into());
        assert!(form.begin_submit().is_some());
        form.finish_submit(false);
        assert!(form.is_dirty());
        assert!(!form.is_saving());
        assert_eq!(form.draft().first_name, "Marcusss");
    }

    #[test]
    fn test_dirty_guard_prompts_once_per_attempt() {
        let mut form = EmployeeForm::new(FormMode::Create);
        form.set_field(EmployeeField::FirstName, "Jasmine".into());

        let mut nav = NavigationState::default();
        let mut gate = PromptGate::default();
        let mut prompts = 0;

        // Back, then cancel
        assert_eq!(
            nav.request(PendingNavigation::to("/"), form.is_dirty()),
            NavOutcome::Blocked
        );
        let decision = decide(nav.is_blocked(), form.is_dirty(), &mut gate, || {
            prompts += 1;
            false
        });
        assert_eq!(decision, GuardDecision::Stay);
        nav.reset();
        gate.release();
        assert_eq!(prompts, 1);
        assert!(form.is_dirty());
        assert_eq!(form.draft().first_name, "Jasmine");

        // Back again, then confirm
        nav.request(PendingNavigation::to("/"), form.is_dirty());
        let decision = decide(nav.is_blocked(), form.is_dirty(), &mut gate, || {
            prompts += 1;
            true
        });
        assert_eq!(decision, GuardDecision::Proceed);
        form.mark_clean();
        assert!(nav.proceed().is_some());
        assert_eq!(prompts, 2);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_clean_form_navigates_without_prompt() {
        let form = EmployeeForm::new(FormMode::Create);
        let mut nav = NavigationState::default();
        assert!(matches!(
            nav.request(PendingNavigation::to("/"), form.is_dirty()),
            NavOutcome::Go(_)
        ));
    }
}
