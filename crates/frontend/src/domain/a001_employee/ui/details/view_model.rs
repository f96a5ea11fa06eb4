use contracts::domain::a001_employee::{Employee, EmployeeField};
use leptos::prelude::*;

use super::model::{DetailsPhase, EmployeeForm, FormMode, MSG_SAVE_FAILED};
use crate::domain::a001_employee::api::EmployeesApi;
use crate::domain::a001_employee::queries::{
    create_employee, update_employee, use_employee, EmployeesCache,
};
use crate::shared::config::Config;
use crate::shared::navigation::{use_app_navigator, AppNavigator};
use crate::shared::status::{StatusHandle, StatusMessage};
use crate::shared::unsaved_changes::use_unsaved_changes_prompt;

/// ViewModel for the employee add/edit page
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub status: StatusHandle,
    pub phase: Signal<DetailsPhase>,
    api: StoredValue<EmployeesApi>,
    cache: EmployeesCache,
    navigator: AppNavigator,
}

impl EmployeeDetailsViewModel {
    pub fn new(mode: FormMode) -> Self {
        let config = use_context::<Config>().expect("Config not provided");
        let api = use_context::<EmployeesApi>().expect("EmployeesApi not provided");
        let cache = use_context::<EmployeesCache>().expect("EmployeesCache not provided");
        let navigator = use_app_navigator();

        let form = RwSignal::new(EmployeeForm::new(mode.clone()));
        let record = mode.id().map(|id| use_employee(id.to_string()));

        let phase = Memo::new(move |_| match record {
            Some(r) => r.with(|s| DetailsPhase::from_state(Some(s))),
            None => DetailsPhase::from_state::<Employee>(None),
        });

        if let Some(record) = record {
            // Only a changed record re-seeds the draft
            let loaded = Memo::new(move |_| record.with(|s| s.data.clone()));
            Effect::new(move |_| {
                if let Some(employee) = loaded.get() {
                    form.update(|f| f.sync_initial(&employee));
                }
            });
        }

        let dirty = Signal::derive(move || form.with(EmployeeForm::is_dirty));
        use_unsaved_changes_prompt(
            dirty,
            Some(Callback::new(move |_: ()| form.update(EmployeeForm::mark_clean))),
        );

        Self {
            form,
            status: StatusHandle::new(config.ui.error_hide_ms),
            phase: phase.into(),
            api: StoredValue::new(api),
            cache,
            navigator,
        }
    }

    pub fn title(&self) -> &'static str {
        self.form.with_untracked(|f| f.mode().title())
    }

    pub fn field_value(&self, field: EmployeeField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.draft().field(field).to_string()))
    }

    pub fn field_error(&self, field: EmployeeField) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    }

    pub fn set_field(&self, field: EmployeeField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn reset_command(&self) {
        self.form.update(EmployeeForm::reset);
    }

    pub fn back_command(&self) {
        self.navigator.navigate("/");
    }

    /// Validate, then create or update. Success returns to the list with a
    /// flash; failure keeps the draft and shows a transient error.
    pub fn save_command(&self) {
        if self.phase.get_untracked() != DetailsPhase::Ready {
            return;
        }
        let Some(validated) = self.form.try_update(EmployeeForm::begin_submit).flatten() else {
            return;
        };
        let payload = validated.to_api_payload();
        let mode = self.form.with_untracked(|f| f.mode().clone());
        let api = self.api.get_value();
        let (form, status, cache, navigator) = (self.form, self.status, self.cache, self.navigator);

        wasm_bindgen_futures::spawn_local(async move {
            let result: Result<Employee, _> = match mode.id() {
                Some(id) => update_employee(&api, cache, id, &payload).await,
                None => create_employee(&api, cache, &payload).await,
            };
            form.try_update(|f| f.finish_submit(result.is_ok()));
            match result {
                Ok(saved) => {
                    log::info!("saved employee {}", saved.id);
                    navigator.navigate_with_flash("/", mode.success_message());
                }
                Err(_) => status.show(StatusMessage::error(MSG_SAVE_FAILED)),
            }
        });
    }
}
