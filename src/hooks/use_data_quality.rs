use crate::hooks::use_fetch::{FetchHandle, use_fetch};
use crate::models::sales::DataQualityColumn;
use crate::services::api::fetch_data_quality;
use yew::prelude::*;

#[hook]
pub fn use_data_quality() -> FetchHandle<Vec<DataQualityColumn>> {
    use_fetch("data quality", (), |()| fetch_data_quality())
}
