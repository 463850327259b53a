use crate::hooks::use_fetch::{FetchHandle, use_fetch};
use crate::models::energy::{EnergyParams, EnergyTelemetry};
use crate::services::api::{EnergyQuery, fetch_energy_telemetry};
use yew::prelude::*;

/// Telemetry for the bound parameters; any field change re-fetches.
#[hook]
pub fn use_energy_telemetry(params: EnergyParams) -> FetchHandle<Vec<EnergyTelemetry>> {
    use_fetch("energy telemetry", params, |params| {
        fetch_energy_telemetry(EnergyQuery::from(params))
    })
}
