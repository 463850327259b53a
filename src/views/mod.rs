pub mod charts;
pub mod energy;
pub mod quality;
pub mod table;

pub use charts::ChartsView;
pub use energy::EnergyView;
pub use quality::QualityView;
pub use table::TableView;
