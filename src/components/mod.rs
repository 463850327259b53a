pub mod chart;
pub mod energy_params;
pub mod granularity_selector;
pub mod issue_tags;
pub mod kpi_cards;
pub mod nav;
pub mod pagination;
pub mod quality_table;
pub mod raw_cell;
pub mod sales_table;
pub mod status;

pub use chart::RevenueChart;
pub use energy_params::EnergyParamsForm;
pub use granularity_selector::GranularitySelector;
pub use kpi_cards::KpiCards;
pub use nav::Nav;
pub use quality_table::QualityTable;
pub use sales_table::SalesTable;
pub use status::Status;
