use yew::prelude::*;

use crate::components::{QualityTable, Status};
use crate::hooks::use_data_quality::use_data_quality;

#[function_component(QualityView)]
pub fn quality_view() -> Html {
    let handle = use_data_quality();

    html! {
        <section class="card">
            <header class="card-header">
                <div>
                    <h2>{"Data quality"}</h2>
                    <p class="subtitle">{"Share of missing and invalid values per column"}</p>
                </div>
            </header>

            <Status phase={handle.state.phase()} on_retry={handle.retry.clone()} />

            if let Some(columns) = handle.state.data() {
                <QualityTable columns={columns.clone()} />
            }
        </section>
    }
}
