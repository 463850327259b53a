use yew::prelude::*;

use crate::components::{GranularitySelector, KpiCards, RevenueChart, Status};
use crate::hooks::{fetch_state::FetchState, use_dashboard::use_dashboard};
use crate::models::sales::Granularity;
use crate::utils::format::MoneyLocale;

/// KPI cards and the revenue series
#[function_component(ChartsView)]
pub fn charts_view() -> Html {
    let granularity = use_state(Granularity::default);
    let locale = use_state(MoneyLocale::default);
    let handle = use_dashboard(*granularity);

    let on_granularity = {
        let granularity = granularity.clone();
        Callback::from(move |g: Granularity| granularity.set(g))
    };

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |l: MoneyLocale| locale.set(l))
    };

    let kpis = handle.state.data().map(|d| d.kpis.clone());

    html! {
        <div class="charts-view">
            <KpiCards {kpis} locale={*locale} {on_locale} />

            <section class="card">
                <header class="card-header">
                    <div>
                        <h2>{"Revenue over time"}</h2>
                        <p class="subtitle">{"Based on /timeseries"}</p>
                    </div>
                    <GranularitySelector granularity={*granularity} on_change={on_granularity} />
                </header>

                {
                    match &handle.state {
                        FetchState::Loading => html! { <p class="loading-text">{"Loading…"}</p> },
                        FetchState::Loaded(dashboard) => html! {
                            <RevenueChart dashboard={dashboard.clone()} />
                        },
                        FetchState::Failed(_) => html! {
                            <Status phase={handle.state.phase()} on_retry={handle.retry.clone()} />
                        },
                    }
                }
            </section>
        </div>
    }
}
