use yew::prelude::*;

use crate::components::{EnergyParamsForm, Status};
use crate::hooks::use_energy::use_energy_telemetry;
use crate::models::energy::{EnergyParams, TelemetrySummary};
use crate::utils::format::{format_count, format_money};

/// Energy telemetry. Only the fetch is wired up; the page shows a
/// placeholder and a one-line summary instead of tables or charts.
#[function_component(EnergyView)]
pub fn energy_view() -> Html {
    let params = use_state(EnergyParams::default);
    let handle = use_energy_telemetry(*params);

    let on_params = {
        let params = params.clone();
        Callback::from(move |next: EnergyParams| params.set(next))
    };

    html! {
        <section class="card">
            <header class="card-header">
                <h2>{"Energy"}</h2>
            </header>

            <EnergyParamsForm params={*params} on_change={on_params} />
            <Status phase={handle.state.phase()} on_retry={handle.retry.clone()} />

            <p class="placeholder">{"Energie page"}</p>
            if let Some(readings) = handle.state.data() {
                <p class="subtitle">{summary_line(&TelemetrySummary::from_readings(readings))}</p>
            }
        </section>
    }
}

fn summary_line(summary: &TelemetrySummary) -> String {
    let count = format_count(summary.readings as u64);
    let cost = format_money(summary.total_cost_eur);
    match summary.span {
        Some((first, last)) => format!(
            "{count} readings from {} to {}, {cost} total cost",
            first.format("%Y-%m-%d %H:%M"),
            last.format("%Y-%m-%d %H:%M"),
        ),
        None => format!("{count} readings loaded, {cost} total cost"),
    }
}
