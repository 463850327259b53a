use crate::hooks::use_fetch::{FetchHandle, use_fetch};
use crate::models::{
    error::AppError,
    sales::{Dashboard, Granularity},
};
use crate::services::api::AnalyticsClient;
use yew::prelude::*;

/// Requests KPIs and the revenue series concurrently. Nothing is returned
/// unless both succeed, so the view never shows one without the other.
pub async fn load_dashboard(
    client: &AnalyticsClient,
    granularity: Granularity,
) -> Result<Dashboard, AppError> {
    let (kpis, series) = futures::try_join!(
        client.fetch_kpis(),
        client.fetch_timeseries(granularity)
    )?;

    Ok(Dashboard::new(kpis, series))
}

#[hook]
pub fn use_dashboard(granularity: Granularity) -> FetchHandle<Dashboard> {
    use_fetch("dashboard", granularity, |granularity| async move {
        let client = AnalyticsClient::new()?;
        load_dashboard(&client, granularity).await
    })
}
