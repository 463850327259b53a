/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Rows requested per `/rows` call by the table view
    pub const TABLE_FETCH_LIMIT: u32 = 300;

    /// Offset of the first row requested by the table view
    pub const TABLE_FETCH_OFFSET: u32 = 0;

    /// Rows shown per page of the sales grid
    pub const TABLE_PAGE_SIZE: usize = 25;

    /// Issue tags rendered inline before collapsing into a `+N` counter
    pub const MAX_INLINE_ISSUES: usize = 3;

    /// Delay before an edited energy parameter triggers a re-fetch
    pub const PARAM_DEBOUNCE_MS: u32 = 400;

    /// Placeholder shown in KPI cards until data arrives
    pub const CARD_PLACEHOLDER: &'static str = "…";

    // Energy telemetry request defaults
    pub const ENERGY_DEFAULT_DAYS: u32 = 7;
    pub const ENERGY_DEFAULT_INTERVAL_MINUTES: u32 = 15;
    pub const ENERGY_DEFAULT_SITES: u32 = 4;
    pub const ENERGY_DEFAULT_METERS_PER_SITE: u32 = 6;
    pub const ENERGY_DEFAULT_SEED: u64 = 42;
}
