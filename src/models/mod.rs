pub mod energy;
pub mod error;
pub mod raw;
pub mod sales;
