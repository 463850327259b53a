use super::{error::AppError, raw::RawValue};
use crate::utils::format::{MoneyLocale, as_string, format_count, format_money_in, format_percent};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Placeholder used in row keys when the order id is absent
const MISSING_KEY: &str = "missing";

/// A single sales record with its data-quality flags
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRow {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub quantity: RawValue,
    #[serde(default)]
    pub unit_price: RawValue,
    #[serde(default)]
    pub discount_pct: RawValue,
    #[serde(default)]
    pub shipping_cost: RawValue,
    #[serde(default)]
    pub returned: RawValue,
    /// `/rows/raw` serves uncleaned rows without quality flags
    #[serde(default)]
    pub is_invalid: bool,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub issues: Vec<String>,
}

/// Treats an explicit `null` list like an absent one
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Issue tags split into the inline part and the overflow count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueBadges<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

impl<'a> IssueBadges<'a> {
    pub fn split(issues: &'a [String], max_inline: usize) -> Self {
        let shown = &issues[..issues.len().min(max_inline)];
        Self {
            shown,
            overflow: issues.len() - shown.len(),
        }
    }

    /// Inline tags with a key that stays unique when a tag repeats
    pub fn keyed(self) -> impl Iterator<Item = (String, &'a str)> {
        self.shown
            .iter()
            .enumerate()
            .map(|(i, tag)| (format!("{i}-{tag}"), tag.as_str()))
    }
}

impl SalesRow {
    /// Key used by the grid. The dataset has no unique id, so the position
    /// in the response is appended to the order id.
    pub fn row_key(&self, index: usize) -> String {
        format!("{}-{index}", self.order_id.as_deref().unwrap_or(MISSING_KEY))
    }

    /// Order id as displayed; empty when missing
    pub fn order_id_label(&self) -> String {
        as_string(self.order_id.as_deref())
    }

    pub fn order_date_label(&self) -> String {
        as_string(self.order_date.as_deref())
    }

    pub fn issue_badges(&self, max_inline: usize) -> IssueBadges<'_> {
        IssueBadges::split(&self.issues, max_inline)
    }
}

/// Client-side filter on the invalid flag, applied on top of whatever the
/// server returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidFilter {
    #[default]
    All,
    Invalid,
    Valid,
}

impl InvalidFilter {
    pub const fn matches(&self, row: &SalesRow) -> bool {
        match self {
            Self::All => true,
            Self::Invalid => row.is_invalid,
            Self::Valid => !row.is_invalid,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Invalid => "invalid",
            Self::Valid => "ok",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All rows",
            Self::Invalid => "Invalid",
            Self::Valid => "OK",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::Invalid, Self::Valid]
    }
}

/// Row filters of the table page. `invalid_only` goes to the server and
/// `client` narrows the loaded rows; setting one leaves the other alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableFilters {
    pub invalid_only: bool,
    pub client: InvalidFilter,
}

impl TableFilters {
    pub const fn with_invalid_only(self, invalid_only: bool) -> Self {
        Self {
            invalid_only,
            ..self
        }
    }

    pub const fn with_client(self, client: InvalidFilter) -> Self {
        Self { client, ..self }
    }
}

impl std::str::FromStr for InvalidFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "invalid" => Ok(Self::Invalid),
            "ok" => Ok(Self::Valid),
            _ => Err(AppError::ConfigError(format!("Invalid row filter: {s}"))),
        }
    }
}

/// Number of pages needed for `len` rows
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// One `/rows` response, in server order
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SalesRows {
    data: Vec<SalesRow>,
}

impl SalesRows {
    pub fn new(data: Vec<SalesRow>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rows(&self) -> &[SalesRow] {
        &self.data
    }

    /// Rows passing `filter`, each paired with its position in the response
    pub fn filtered(&self, filter: InvalidFilter) -> Vec<(usize, &SalesRow)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| filter.matches(row))
            .collect()
    }

    pub fn page_count(&self, filter: InvalidFilter, page_size: usize) -> usize {
        page_count(self.filtered(filter).len(), page_size)
    }

    /// Rows of page `page` (zero based). Pages past the end clamp to the last one.
    pub fn page(
        &self,
        filter: InvalidFilter,
        page: usize,
        page_size: usize,
    ) -> Vec<(usize, &SalesRow)> {
        let rows = self.filtered(filter);
        let pages = page_count(rows.len(), page_size);
        if pages == 0 {
            return vec![];
        }

        let start = page.min(pages - 1) * page_size;
        rows.into_iter().skip(start).take(page_size).collect()
    }

    pub fn invalid_count(&self) -> usize {
        self.data.iter().filter(|r| r.is_invalid).count()
    }
}

/// Headline aggregates served by `/kpis`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kpis {
    pub total_revenue: f64,
    pub order_count: u64,
    pub avg_order_value: f64,
    pub invalid_row_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

impl Kpis {
    /// Display values for the four summary cards, in render order
    pub fn cards_in(&self, locale: MoneyLocale) -> [KpiCard; 4] {
        [
            KpiCard {
                title: "Total revenue",
                value: format_money_in(self.total_revenue, locale),
            },
            KpiCard {
                title: "Orders",
                value: format_count(self.order_count),
            },
            KpiCard {
                title: "Avg order value",
                value: format_money_in(self.avg_order_value, locale),
            },
            KpiCard {
                title: "Invalid row rate",
                value: format_percent(self.invalid_row_rate),
            },
        ]
    }

    /// Card titles with a placeholder value, shown before the first load
    pub fn placeholder_cards(placeholder: &str) -> [KpiCard; 4] {
        ["Total revenue", "Orders", "Avg order value", "Invalid row rate"].map(|title| KpiCard {
            title,
            value: placeholder.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub revenue: f64,
}

impl TimeSeriesPoint {
    /// Calendar day of the bucket. The server may append a time part.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Axis label: the bare date when parseable, the raw string otherwise
    pub fn label(&self) -> String {
        self.day()
            .map_or_else(|| self.date.clone(), |d| d.format("%Y-%m-%d").to_string())
    }
}

/// Time bucket used by `/timeseries`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Returns the value sent as the `granularity` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Week => "Weekly",
            Self::Month => "Monthly",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Day, Self::Week, Self::Month]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(AppError::ConfigError(format!("Invalid granularity: {s}"))),
        }
    }
}

/// KPIs and revenue series, loaded and replaced together
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub kpis: Kpis,
    pub series: Vec<TimeSeriesPoint>,
}

impl Dashboard {
    pub fn new(kpis: Kpis, series: Vec<TimeSeriesPoint>) -> Self {
        Self { kpis, series }
    }

    /// Chart axes in server order; the series is never re-sorted
    pub fn series_data(&self) -> (Vec<String>, Vec<f64>) {
        self.series
            .iter()
            .map(|p| (p.label(), p.revenue))
            .unzip()
    }
}

/// Missing and invalid rates for one source column, from `/data-quality`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataQualityColumn {
    pub column: String,
    pub missing_rate: f64,
    pub invalid_rate: f64,
}
