use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{SalesTable, Status};
use crate::hooks::use_rows::use_rows;
use crate::models::sales::{InvalidFilter, SalesRows, TableFilters};

/// Sales rows with their quality flags
#[function_component(TableView)]
pub fn table_view() -> Html {
    let filters = use_state(TableFilters::default);
    let handle = use_rows(filters.invalid_only);

    // Rows stay on screen while a refetch is in flight
    let last_rows = use_mut_ref(|| None::<Rc<SalesRows>>);
    let rows = handle.state.latest(&mut last_rows.borrow_mut());

    let on_toggle = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set((*filters).with_invalid_only(input.checked()));
        })
    };

    let on_filter = {
        let filters = filters.clone();
        Callback::from(move |client: InvalidFilter| filters.set((*filters).with_client(client)))
    };

    html! {
        <section class="card">
            <header class="card-header">
                <div>
                    <h2>{"Rows"}</h2>
                    <p class="subtitle">
                        {"Raw CSV rows with quality flags"}
                        if let Some(rows) = &rows {
                            {format!(" · {} rows, {} invalid", rows.len(), rows.invalid_count())}
                        }
                    </p>
                </div>
                <label class="switch">
                    <span>{"Invalid only"}</span>
                    <input type="checkbox" checked={filters.invalid_only} onchange={on_toggle} />
                </label>
            </header>

            if rows.is_none() || handle.state.error().is_some() {
                <Status phase={handle.state.phase()} on_retry={handle.retry.clone()} />
            }

            if let Some(rows) = rows {
                <SalesTable
                    {rows}
                    filter={filters.client}
                    {on_filter}
                    loading={handle.state.is_loading()}
                />
            }
        </section>
    }
}
