use leptos::prelude::*;

/// Native date picker with label and error line
#[component]
pub fn DateInput(
    #[prop(into)] label: String,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Receives yyyy-mm-dd, or "" when cleared
    on_change: Callback<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>{label}</label>
            <input
                id=input_id
                type="date"
                class=move || if has_error() { "form__input form__input--error" } else { "form__input" }
                aria-invalid=move || has_error().to_string()
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
