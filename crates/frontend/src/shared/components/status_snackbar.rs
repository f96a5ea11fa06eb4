use leptos::prelude::*;

use crate::shared::status::StatusHandle;

#[component]
pub fn StatusSnackbar(status: StatusHandle) -> impl IntoView {
    view! {
        {move || status.current().map(|msg| view! {
            <div class=msg.severity.css_class() role="status" on:click=move |_| status.dismiss()>
                {msg.text}
            </div>
        })}
    }
}
