pub mod fetch_state;
pub mod use_dashboard;
pub mod use_data_quality;
pub mod use_energy;
pub mod use_fetch;
pub mod use_rows;
