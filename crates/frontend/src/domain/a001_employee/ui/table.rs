use contracts::domain::a001_employee::Employee;
use leptos::prelude::*;
use thaw::*;

use super::list::state::ListPhase;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

pub const EMPTY_TEXT: &str = "No employees yet";
pub const COLUMNS: [&str; 8] = ["First", "Last", "Email", "Phone", "Gender", "DOB", "Joined", "Actions"];

#[component]
fn EmployeeRow(row: Employee, on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <TableRow>
            <TableCell><TableCellLayout truncate=true>{row.first_name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{row.last_name}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{row.email_address}</TableCellLayout></TableCell>
            <TableCell>{row.phone_number}</TableCell>
            <TableCell>{row.gender.as_str()}</TableCell>
            <TableCell>{format_date(&row.date_of_birth)}</TableCell>
            <TableCell>{format_date(&row.joined_date)}</TableCell>
            <TableCell>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        attr:title="Edit"
                        attr:aria-label=format!("edit-{}", row.id)
                        on_click=move |_| on_edit.run(edit_id.clone())
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        attr:title="Delete"
                        attr:aria-label=format!("delete-{}", row.id)
                        on_click=move |_| on_delete.run(delete_id.clone())
                    >
                        {icon("delete")}
                    </Button>
                </Flex>
            </TableCell>
        </TableRow>
    }
}

/// Employee grid with the "Add Employee" action above it
#[component]
pub fn EmployeeTable(
    #[prop(into)] phase: Signal<ListPhase>,
    on_add: Callback<()>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Flex justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_add.run(())>
                    {icon("plus")}
                    "Add Employee"
                </Button>
            </Flex>
            <Table attr:aria-label="employees">
                <TableHeader>
                    <TableRow>
                        {COLUMNS
                            .iter()
                            .map(|c| view! { <TableHeaderCell>{*c}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || match phase.get() {
                        ListPhase::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <EmployeeRow row=row on_edit=on_edit on_delete=on_delete /> })
                            .collect_view()
                            .into_any(),
                        ListPhase::Empty => view! {
                            <TableRow>
                                <TableCell attr:colspan=COLUMNS.len().to_string()>
                                    <div class="table__empty">{EMPTY_TEXT}</div>
                                </TableCell>
                            </TableRow>
                        }
                        .into_any(),
                        ListPhase::Loading | ListPhase::Failed => ().into_any(),
                    }}
                </TableBody>
            </Table>
        </Flex>
    }
}
