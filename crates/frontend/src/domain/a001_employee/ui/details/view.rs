use contracts::domain::a001_employee::{EmployeeField, Gender};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

use super::model::{DetailsPhase, FormMode};
use super::view_model::EmployeeDetailsViewModel;
use crate::shared::components::ui::{Input, RadioGroup};
use crate::domain::a001_employee::ui::list::state::MSG_LOAD_FAILED;
use crate::shared::components::{DateInput, StatusSnackbar};
use crate::shared::icons::icon;

#[component]
fn TextField(vm: EmployeeDetailsViewModel, field: EmployeeField, #[prop(optional, into)] input_type: Option<String>) -> impl IntoView {
    view! {
        <Input
            id=field.key().to_string()
            label=field.label().to_string()
            input_type=input_type.unwrap_or_else(|| "text".to_string())
            value=vm.field_value(field)
            error=vm.field_error(field)
            on_input=Callback::new(move |v: String| vm.set_field(field, v))
        />
    }
}

#[component]
fn DateField(vm: EmployeeDetailsViewModel, field: EmployeeField) -> impl IntoView {
    view! {
        <DateInput
            id=field.key().to_string()
            label=field.label()
            value=vm.field_value(field)
            error=vm.field_error(field)
            on_change=Callback::new(move |v: String| vm.set_field(field, v))
        />
    }
}

#[component]
fn EmployeeFormFields(vm: EmployeeDetailsViewModel) -> impl IntoView {
    let genders: Vec<(String, String)> = Gender::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();
    let saving = Signal::derive(move || vm.form.with(|f| f.is_saving()));

    view! {
        <div class="details-form employee-form">
            <div class="form__row">
                <TextField vm=vm field=EmployeeField::FirstName />
                <TextField vm=vm field=EmployeeField::LastName />
            </div>
            <div class="form__row">
                <TextField vm=vm field=EmployeeField::EmailAddress input_type="email" />
                <TextField vm=vm field=EmployeeField::PhoneNumber input_type="tel" />
            </div>
            <div class="form__row">
                <RadioGroup
                    label=EmployeeField::Gender.label().to_string()
                    name=EmployeeField::Gender.key().to_string()
                    value=vm.field_value(EmployeeField::Gender)
                    options=genders
                    error=vm.field_error(EmployeeField::Gender)
                    on_change=Callback::new(move |v: String| vm.set_field(EmployeeField::Gender, v))
                />
            </div>
            <div class="form__row">
                <DateField vm=vm field=EmployeeField::DateOfBirth />
                <DateField vm=vm field=EmployeeField::JoinedDate />
            </div>

            <Flex gap=FlexGap::Small class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=move |_| vm.save_command()
                >
                    {icon("save")}
                    {move || vm.form.with(|f| f.submit_label())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset_command()
                >
                    {icon("undo")}
                    "Reset"
                </Button>
            </Flex>
        </div>
    }
}

/// Add / edit page for one employee
#[component]
pub fn EmployeeDetails(
    /// `None` for a new employee
    #[prop(default = None)]
    id: Option<String>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(FormMode::from_id(id));

    view! {
        <div class="page details-container employee-details">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{vm.title()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.back_command()>
                        {icon("arrow-left")}
                        "Back"
                    </Button>
                </div>
            </div>

            {move || match vm.phase.get() {
                DetailsPhase::Loading => {
                    view! { <div class="page__loading">"Loading…"</div> }.into_any()
                }
                DetailsPhase::Failed => {
                    view! { <div class="alert alert--error" data-testid="load-error">{MSG_LOAD_FAILED}</div> }
                        .into_any()
                }
                DetailsPhase::Ready => view! { <EmployeeFormFields vm=vm /> }.into_any(),
            }}

            <StatusSnackbar status=vm.status />
        </div>
    }
}
