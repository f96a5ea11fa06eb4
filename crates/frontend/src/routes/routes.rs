use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::layout::Shell;
use crate::shared::navigation::{provide_app_navigator, use_app_navigator};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

#[component]
fn EmployeeAddPage() -> impl IntoView {
    view! { <EmployeeDetails id=None /> }
}

#[component]
fn EmployeeEditPage() -> impl IntoView {
    let params = use_params_map();
    // A different id is a different form
    move || {
        let id = params.with(|p| p.get("id"));
        view! { <EmployeeDetails id=id /> }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let navigator = use_app_navigator();
    view! {
        <div class="page not-found">
            <h1 class="header__title">"Page not found"</h1>
            <a href="/" on:click=move |ev| {
                ev.prevent_default();
                navigator.navigate("/");
            }>
                "Back to employees"
            </a>
        </div>
    }
}

/// Owns the in-app navigator; must sit inside `<Router>`
#[component]
fn NavigationScope(children: Children) -> impl IntoView {
    provide_app_navigator();
    children()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavigationScope>
                <Shell>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=EmployeeList />
                        <Route path=path!("/employee/add") view=EmployeeAddPage />
                        <Route path=path!("/employee/edit/:id") view=EmployeeEditPage />
                    </Routes>
                </Shell>
            </NavigationScope>
        </Router>
    }
}
