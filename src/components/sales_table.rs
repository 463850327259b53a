use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{issue_tags::IssueTags, pagination::Pagination, raw_cell::RawCell};
use crate::config::Config;
use crate::models::sales::{InvalidFilter, SalesRow, SalesRows};

#[derive(Properties, PartialEq)]
pub struct SalesTableProps {
    pub rows: Rc<SalesRows>,
    /// Client-side filter, owned by the page so it outlives refetches
    pub filter: InvalidFilter,
    pub on_filter: Callback<InvalidFilter>,
    /// A newer response is on its way; the current rows stay visible
    #[prop_or_default]
    pub loading: bool,
}

/// Paginated grid of sales rows with a client-side filter on the invalid
/// flag. The filter works on top of the server-side `invalid_only` toggle.
#[function_component(SalesTable)]
pub fn sales_table(props: &SalesTableProps) -> Html {
    let page = use_state(|| 0usize);

    // New data or a new filter starts from the first page
    {
        let page = page.clone();
        use_effect_with((props.rows.clone(), props.filter), move |_| {
            page.set(0);
            || ()
        });
    }

    let on_filter = {
        let callback = props.on_filter.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(next) = target.value().parse::<InvalidFilter>() {
                callback.emit(next);
            }
        })
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    let page_size = Config::TABLE_PAGE_SIZE;
    let filter = props.filter;
    let page_count = props.rows.page_count(filter, page_size);
    let current_page = (*page).min(page_count.saturating_sub(1));
    let visible = props.rows.page(filter, current_page, page_size);

    html! {
        <div class={classes!("sales-table", props.loading.then_some("is-loading"))}>
            if props.loading {
                <div class="loading-overlay" aria-busy="true">
                    <div class="spinner"></div>
                </div>
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Order"}</th>
                        <th>{"Date"}</th>
                        <th>{"Country"}</th>
                        <th>{"Category"}</th>
                        <th>{"Product"}</th>
                        <th>{"Qty"}</th>
                        <th>{"Price"}</th>
                        <th>{"Discount"}</th>
                        <th>
                            {"Invalid "}
                            <select
                                class="invalid-filter"
                                onchange={on_filter}
                                aria-label="Filter rows by validity"
                            >
                                {
                                    InvalidFilter::all().iter().map(|f| {
                                        let selected = *f == filter;
                                        html! {
                                            <option value={f.code()} {selected}>{f.label()}</option>
                                        }
                                    }).collect::<Html>()
                                }
                            </select>
                        </th>
                        <th>{"Issues"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible.into_iter().map(|(index, row)| html! {
                        <SalesRowView key={row.row_key(index)} row={row.clone()} />
                    }) }
                </tbody>
            </table>
            if page_count == 0 {
                <p class="empty">{"No rows"}</p>
            }
            <Pagination page={current_page} {page_count} on_change={on_page} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SalesRowViewProps {
    row: SalesRow,
}

#[function_component(SalesRowView)]
fn sales_row_view(props: &SalesRowViewProps) -> Html {
    let row = &props.row;
    let (badge_class, badge_label) = if row.is_invalid {
        ("tag tag-invalid", "YES")
    } else {
        ("tag tag-ok", "OK")
    };

    html! {
        <tr>
            <td>{or_missing(row.order_id_label())}</td>
            <td>{or_missing(row.order_date_label())}</td>
            <td>{row.country.clone().unwrap_or_default()}</td>
            <td>{row.category.clone().unwrap_or_default()}</td>
            <td>{row.product.clone().unwrap_or_default()}</td>
            <td><RawCell value={row.quantity.clone()} /></td>
            <td><RawCell value={row.unit_price.clone()} /></td>
            <td><RawCell value={row.discount_pct.clone()} /></td>
            <td><span class={badge_class}>{badge_label}</span></td>
            <td><IssueTags issues={row.issues.clone()} /></td>
        </tr>
    }
}

/// Empty labels get a visually distinct placeholder
fn or_missing(label: String) -> Html {
    if label.is_empty() {
        html! { <span class="missing">{"missing"}</span> }
    } else {
        html! { {label} }
    }
}
