use crate::models::{
    energy::{EnergyParams, EnergyTelemetry},
    error::AppError,
    sales::{DataQualityColumn, Granularity, Kpis, SalesRow, TimeSeriesPoint},
};
use reqwest::Url;
use serde::de::DeserializeOwned;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Base URL baked in at build time, e.g. `ANALYTICS_API_BASE_URL=https://api.example trunk build`
const BUILD_BASE_URL: Option<&str> = option_env!("ANALYTICS_API_BASE_URL");

/// Status text for codes without a standard reason phrase
const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

// REQUEST TYPES
/// Query parameters for `/rows`. Absent fields are left out of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Only sent when true, as `invalid_only=true`
    pub invalid_only: bool,
}

impl RowsQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if self.invalid_only {
            pairs.push(("invalid_only", "true".to_string()));
        }
        pairs
    }
}

/// Query parameters for `/energy/telemetry`. Absent fields are left out of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnergyQuery {
    pub days: Option<u32>,
    pub interval_minutes: Option<u32>,
    pub sites: Option<u32>,
    pub meters_per_site: Option<u32>,
    pub seed: Option<u64>,
}

impl EnergyQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("days", self.days.map(u64::from)),
            ("interval_minutes", self.interval_minutes.map(u64::from)),
            ("sites", self.sites.map(u64::from)),
            ("meters_per_site", self.meters_per_site.map(u64::from)),
            ("seed", self.seed),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
        .collect()
    }
}

impl From<EnergyParams> for EnergyQuery {
    fn from(p: EnergyParams) -> Self {
        Self {
            days: Some(p.days),
            interval_minutes: Some(p.interval_minutes),
            sites: Some(p.sites),
            meters_per_site: Some(p.meters_per_site),
            seed: Some(p.seed),
        }
    }
}

// API CONFIGURATION
/// Configuration for the analytics API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// URL for `/rows`.
    pub fn rows_url(&self, query: &RowsQuery) -> Result<Url, AppError> {
        self.endpoint("/rows", &query.query_pairs())
    }

    /// URL for `/rows/raw`, the uncleaned source rows.
    pub fn raw_rows_url(&self, limit: Option<u32>) -> Result<Url, AppError> {
        let pairs: Vec<_> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        self.endpoint("/rows/raw", &pairs)
    }

    pub fn kpis_url(&self) -> Result<Url, AppError> {
        self.endpoint("/kpis", &[])
    }

    /// URL for `/timeseries`; the granularity is always sent.
    pub fn timeseries_url(&self, granularity: Granularity) -> Result<Url, AppError> {
        self.endpoint(
            "/timeseries",
            &[("granularity", granularity.as_str().to_string())],
        )
    }

    pub fn energy_telemetry_url(&self, query: &EnergyQuery) -> Result<Url, AppError> {
        self.endpoint("/energy/telemetry", &query.query_pairs())
    }

    pub fn data_quality_url(&self) -> Result<Url, AppError> {
        self.endpoint("/data-quality", &[])
    }

    fn endpoint(&self, path: &str, pairs: &[(&'static str, String)]) -> Result<Url, AppError> {
        let raw = format!("{}{path}", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::ConfigError(format!("Invalid API URL '{raw}': {e}")))?;

        // An empty pair list would still leave a dangling '?'
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| BUILD_BASE_URL.unwrap_or(DEFAULT_BASE_URL).to_string()),
        }
    }
}

// ANALYTICS CLIENT
/// HTTP client for the sales and energy analytics API.
///
/// Every call is a single GET: no retries, no timeout, no caching. Failures
/// are handed back to the calling view.
pub struct AnalyticsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AnalyticsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches one page of cleaned sales rows.
    pub async fn fetch_rows(&self, query: &RowsQuery) -> Result<Vec<SalesRow>, AppError> {
        self.get_json(self.config.rows_url(query)?).await
    }

    /// Fetches source rows before cleaning; quality flags may be absent.
    pub async fn fetch_raw_rows(&self, limit: Option<u32>) -> Result<Vec<SalesRow>, AppError> {
        self.get_json(self.config.raw_rows_url(limit)?).await
    }

    pub async fn fetch_kpis(&self) -> Result<Kpis, AppError> {
        self.get_json(self.config.kpis_url()?).await
    }

    /// Fetches revenue per time bucket, in the server's order.
    pub async fn fetch_timeseries(
        &self,
        granularity: Granularity,
    ) -> Result<Vec<TimeSeriesPoint>, AppError> {
        self.get_json(self.config.timeseries_url(granularity)?).await
    }

    pub async fn fetch_energy_telemetry(
        &self,
        query: &EnergyQuery,
    ) -> Result<Vec<EnergyTelemetry>, AppError> {
        self.get_json(self.config.energy_telemetry_url(query)?).await
    }

    /// Fetches per-column missing and invalid rates.
    pub async fn fetch_data_quality(&self) -> Result<Vec<DataQualityColumn>, AppError> {
        self.get_json(self.config.data_quality_url()?).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error_for_status(status));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_decode() {
            AppError::ParseError(format!("Failed to decode response: {error}"))
        } else if error.is_builder() {
            AppError::ConfigError(format!("Invalid request: {error}"))
        } else {
            AppError::NetworkError(error.to_string())
        }
    }

    /// Creates an error carrying the status code and its reason phrase.
    fn error_for_status(&self, status: reqwest::StatusCode) -> AppError {
        AppError::HttpError {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or(UNKNOWN_STATUS_TEXT)
                .to_string(),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches sales rows using default configuration.
pub async fn fetch_rows(query: RowsQuery) -> Result<Vec<SalesRow>, AppError> {
    AnalyticsClient::new()?.fetch_rows(&query).await
}

/// Fetches KPIs using default configuration.
pub async fn fetch_kpis() -> Result<Kpis, AppError> {
    AnalyticsClient::new()?.fetch_kpis().await
}

/// Fetches the revenue series using default configuration.
pub async fn fetch_timeseries(granularity: Granularity) -> Result<Vec<TimeSeriesPoint>, AppError> {
    AnalyticsClient::new()?.fetch_timeseries(granularity).await
}

/// Fetches energy telemetry using default configuration.
pub async fn fetch_energy_telemetry(
    query: EnergyQuery,
) -> Result<Vec<EnergyTelemetry>, AppError> {
    AnalyticsClient::new()?.fetch_energy_telemetry(&query).await
}

/// Fetches the data-quality report using default configuration.
pub async fn fetch_data_quality() -> Result<Vec<DataQualityColumn>, AppError> {
    AnalyticsClient::new()?.fetch_data_quality().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder().base_url("http://127.0.0.1:8000").build()
    }

    #[test]
    fn test_rows_url_serializes_only_present_params() {
        let config = config();

        let url = config
            .rows_url(&RowsQuery {
                limit: Some(300),
                offset: Some(0),
                invalid_only: true,
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/rows?limit=300&offset=0&invalid_only=true"
        );

        let url = config
            .rows_url(&RowsQuery {
                limit: Some(50),
                ..RowsQuery::default()
            })
            .unwrap();
        assert_eq!(url.query(), Some("limit=50"));

        let url = config.rows_url(&RowsQuery::default()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/rows");
    }

    #[test]
    fn test_invalid_only_never_sent_as_false() {
        let url = config()
            .rows_url(&RowsQuery {
                limit: Some(300),
                offset: Some(0),
                invalid_only: false,
            })
            .unwrap();
        assert!(!url.as_str().contains("invalid_only"));
    }

    #[test]
    fn test_timeseries_url() {
        let url = config().timeseries_url(Granularity::default()).unwrap();
        assert_eq!(url.query(), Some("granularity=day"));

        let url = config().timeseries_url(Granularity::Month).unwrap();
        assert_eq!(url.query(), Some("granularity=month"));
    }

    #[test]
    fn test_energy_url_uses_meters_per_site() {
        let query = EnergyQuery::from(EnergyParams {
            days: 7,
            interval_minutes: 15,
            sites: 4,
            meters_per_site: 6,
            seed: 42,
        });
        let url = config().energy_telemetry_url(&query).unwrap();
        assert_eq!(
            url.query(),
            Some("days=7&interval_minutes=15&sites=4&meters_per_site=6&seed=42")
        );

        let url = config()
            .energy_telemetry_url(&EnergyQuery {
                seed: Some(1),
                ..EnergyQuery::default()
            })
            .unwrap();
        assert_eq!(url.query(), Some("seed=1"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("https://analytics.example.com/api/")
            .build();
        let url = config.kpis_url().unwrap();
        assert_eq!(url.as_str(), "https://analytics.example.com/api/kpis");
    }

    #[test]
    fn test_status_without_reason_phrase() {
        let client = AnalyticsClient::new().unwrap();

        let err = client.error_for_status(reqwest::StatusCode::from_u16(599).unwrap());
        assert_eq!(err.to_string(), "599 Unknown Status");

        let err = client.error_for_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::builder().base_url("not a url").build();
        assert!(matches!(config.kpis_url(), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_client_creation() {
        let client = AnalyticsClient::new();
        assert!(client.is_ok());
    }
}
