pub mod state;

use leptos::prelude::*;

use self::state::{ListPageState, ListPhase, DELETE_PROMPT, DELETE_TITLE, MSG_LOAD_FAILED};
use super::table::EmployeeTable;
use crate::domain::a001_employee::api::EmployeesApi;
use crate::domain::a001_employee::queries::{delete_employee, use_employees, EmployeesCache};
use crate::shared::components::{ConfirmDialog, StatusSnackbar};
use crate::shared::config::Config;
use crate::shared::navigation::use_app_navigator;
use crate::shared::status::{StatusHandle, StatusMessage};

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not provided");
    let api = StoredValue::new(use_context::<EmployeesApi>().expect("EmployeesApi not provided"));
    let cache = use_context::<EmployeesCache>().expect("EmployeesCache not provided");
    let navigator = use_app_navigator();

    let employees = use_employees();
    let phase = Memo::new(move |_| employees.with(ListPhase::from_state));
    let fetching = Signal::derive(move || employees.with(|s| s.is_fetching));

    let page = RwSignal::new(ListPageState::default());
    let confirm_open = RwSignal::new(false);
    let status = StatusHandle::new(config.ui.status_hide_ms);

    if let Some(flash) = navigator.take_flash() {
        status.show(StatusMessage::success(flash));
    }

    let handle_delete = Callback::new(move |id: String| {
        page.update(|p| p.request_delete(id));
        confirm_open.set(true);
    });

    let handle_cancel = Callback::new(move |_: ()| page.update(ListPageState::cancel));

    let handle_confirm = Callback::new(move |_: ()| {
        let Some(id) = page.try_update(ListPageState::confirm).flatten() else {
            return;
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let result = delete_employee(&api, cache, &id).await;
            status.show(ListPageState::delete_outcome(&result));
        });
    });

    view! {
        <div class="page employee-list" data-testid="employee-list-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Employees"</h1>
                </div>
            </div>

            <EmployeeTable
                phase=phase
                on_add=Callback::new(move |_: ()| navigator.navigate("/employee/add"))
                on_edit=Callback::new(move |id: String| {
                    navigator.navigate(&format!("/employee/edit/{}", urlencoding::encode(&id)))
                })
                on_delete=handle_delete
            />

            <ConfirmDialog
                open=confirm_open
                title=DELETE_TITLE.to_string()
                message=DELETE_PROMPT.to_string()
                on_confirm=handle_confirm
                on_cancel=handle_cancel
            />

            <Show when=move || fetching.get()>
                <div class="page__loading" aria-label="loading">"Loading…"</div>
            </Show>
            <Show when=move || phase.get() == ListPhase::Failed>
                <div class="alert alert--error" data-testid="load-error">{MSG_LOAD_FAILED}</div>
            </Show>

            <StatusSnackbar status=status />
        </div>
    }
}
