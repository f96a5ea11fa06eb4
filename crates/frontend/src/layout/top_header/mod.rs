//! Application top bar

use crate::shared::icons::icon;
use crate::shared::navigation::use_app_navigator;
use leptos::prelude::*;

pub const APP_TITLE: &str = "Employee Management System";

#[component]
pub fn TopHeader() -> impl IntoView {
    let navigator = use_app_navigator();

    view! {
        <div class="top-header">
            <div class="top-header__brand" on:click=move |_| navigator.navigate("/")>
                {icon("users")}
                <span class="top-header__title">{APP_TITLE}</span>
            </div>
        </div>
    }
}
