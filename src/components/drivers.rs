use yew::prelude::*;

use crate::hooks::use_drivers;
use crate::viewmodels::{DriverRow, DriversViewModel};

#[function_component(Drivers)]
pub fn drivers() -> Html {
    let roster = use_drivers();
    let rows = DriversViewModel::rows(&roster);
    let updated = roster
        .loaded()
        .map(|r| r.fetched_at.with_timezone(&chrono::Local).format("%H:%M").to_string());

    html! {
        <section class={classes!("drivers", roster.is_loading().then_some("loading"))}>
            <table class="drivers-info">
                <thead>
                    <tr>
                        <th>{"Drivers"}</th>
                        <th>{"Employee ID"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.into_iter().map(render_row) }
                </tbody>
            </table>
            {
                if let Some(time) = updated {
                    html! { <p class="drivers-updated">{format!("Updated {}", time)}</p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn render_row(row: DriverRow) -> Html {
    match row {
        DriverRow::Driver {
            name,
            employee_id,
            status,
        } => {
            let status_class = format!("status status-{}", status.to_lowercase().replace(' ', "-"));
            html! {
                <tr>
                    <td>{name}</td>
                    <td>{employee_id}</td>
                    <td><span class={status_class}>{status}</span></td>
                </tr>
            }
        }
        DriverRow::Message { text, is_error } => html! {
            <tr>
                <td colspan="3" class={classes!("table-message", is_error.then_some("error"))}>
                    {text}
                </td>
            </tr>
        },
    }
}
