use crate::domain::a001_employee::api::EmployeesApi;
use crate::domain::a001_employee::queries::EmployeesCache;
use crate::routes::routes::AppRoutes;
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // REST client and the query cache shared by every page
    provide_context(EmployeesApi::new(config.api.base_url.clone()));
    provide_context(EmployeesCache::new());
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
