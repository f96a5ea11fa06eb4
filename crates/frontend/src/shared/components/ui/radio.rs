use leptos::prelude::*;

#[component]
pub fn Radio(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Currently selected value of the group
    #[prop(into)]
    checked_value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let radio_id = format!("radio-{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();
    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| on_change.run(value_for_change.clone())
            />
            <label class="form__radio-label" for=radio_id>
                {label}
            </label>
        </div>
    }
}

/// Radio group over `(value, label)` options
#[component]
pub fn RadioGroup(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    name: String,
    options: Vec<(String, String)>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(val, lbl)| view! {
                        <Radio
                            label=lbl
                            value=val
                            checked_value=value
                            on_change=on_change
                            name=name.clone()
                        />
                    })
                    .collect_view()}
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
