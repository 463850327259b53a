use super::error::AppError;
use crate::config::Config;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// One meter reading from `/energy/telemetry`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyTelemetry {
    pub site_id: String,
    pub meter_id: String,
    pub ts: String,
    pub interval_minutes: u32,
    pub energy_kwh: f64,
    pub power_kw: f64,
    pub price_eur_per_kwh: f64,
    pub cost_eur: f64,
    pub temperature_c: f64,
    pub source: String,
}

impl EnergyTelemetry {
    /// Parses `ts`, accepting RFC 3339 as well as naive ISO-8601 timestamps.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.ts) {
            return Some(dt.naive_utc());
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.ts, fmt).ok())
    }
}

/// Overview of one telemetry response
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySummary {
    pub readings: usize,
    /// Earliest and latest parseable timestamps
    pub span: Option<(NaiveDateTime, NaiveDateTime)>,
    pub total_cost_eur: f64,
}

impl TelemetrySummary {
    pub fn from_readings(readings: &[EnergyTelemetry]) -> Self {
        let span = readings
            .iter()
            .filter_map(EnergyTelemetry::timestamp)
            .fold(None, |span, ts| match span {
                None => Some((ts, ts)),
                Some((first, last)) => Some((first.min(ts), last.max(ts))),
            });

        Self {
            readings: readings.len(),
            span,
            total_cost_eur: readings.iter().map(|r| r.cost_eur).sum(),
        }
    }
}

/// Request parameters bound to the energy view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyParams {
    pub days: u32,
    pub interval_minutes: u32,
    pub sites: u32,
    pub meters_per_site: u32,
    pub seed: u64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            days: Config::ENERGY_DEFAULT_DAYS,
            interval_minutes: Config::ENERGY_DEFAULT_INTERVAL_MINUTES,
            sites: Config::ENERGY_DEFAULT_SITES,
            meters_per_site: Config::ENERGY_DEFAULT_METERS_PER_SITE,
            seed: Config::ENERGY_DEFAULT_SEED,
        }
    }
}

/// An editable field of [`EnergyParams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyParam {
    Days,
    IntervalMinutes,
    Sites,
    MetersPerSite,
    Seed,
}

impl EnergyParam {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::IntervalMinutes => "Interval (min)",
            Self::Sites => "Sites",
            Self::MetersPerSite => "Meters per site",
            Self::Seed => "Seed",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::Days,
            Self::IntervalMinutes,
            Self::Sites,
            Self::MetersPerSite,
            Self::Seed,
        ]
    }

    /// Seed is the only field where zero is meaningful.
    const fn allows_zero(&self) -> bool {
        matches!(self, Self::Seed)
    }

    pub fn get(&self, params: &EnergyParams) -> u64 {
        match self {
            Self::Days => params.days.into(),
            Self::IntervalMinutes => params.interval_minutes.into(),
            Self::Sites => params.sites.into(),
            Self::MetersPerSite => params.meters_per_site.into(),
            Self::Seed => params.seed,
        }
    }

    /// Returns `params` with this field set from user input.
    pub fn apply(&self, params: EnergyParams, input: &str) -> Result<EnergyParams, AppError> {
        let value: u64 = input.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a whole number, got '{input}'", self.label()))
        })?;

        if value == 0 && !self.allows_zero() {
            return Err(AppError::ConfigError(format!(
                "{} must be positive",
                self.label()
            )));
        }

        let narrow = |v: u64| {
            u32::try_from(v)
                .map_err(|_| AppError::ConfigError(format!("{} is too large", self.label())))
        };

        let mut next = params;
        match self {
            Self::Days => next.days = narrow(value)?,
            Self::IntervalMinutes => next.interval_minutes = narrow(value)?,
            Self::Sites => next.sites = narrow(value)?,
            Self::MetersPerSite => next.meters_per_site = narrow(value)?,
            Self::Seed => next.seed = value,
        }
        Ok(next)
    }
}

/// State of the parameter form: the last valid parameters and the most
/// recent validation error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamDraft {
    pub params: EnergyParams,
    pub error: Option<String>,
}

impl ParamDraft {
    pub const fn new(params: EnergyParams) -> Self {
        Self {
            params,
            error: None,
        }
    }

    /// Applies one edit and returns the parameters to send if it is valid.
    /// An invalid edit only records the error; `params` keeps earlier valid
    /// edits to other fields.
    pub fn edit(&mut self, param: EnergyParam, input: &str) -> Option<EnergyParams> {
        match param.apply(self.params, input) {
            Ok(next) => {
                self.params = next;
                self.error = None;
                Some(next)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = EnergyParams::default();
        assert_eq!(params.days, 7);
        assert_eq!(params.interval_minutes, 15);
        assert_eq!(params.sites, 4);
        assert_eq!(params.meters_per_site, 6);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_apply_param() {
        let params = EnergyParams::default();

        let next = EnergyParam::MetersPerSite.apply(params, " 9 ").unwrap();
        assert_eq!(next.meters_per_site, 9);
        assert_eq!(next.interval_minutes, 15);

        let next = EnergyParam::Seed.apply(params, "0").unwrap();
        assert_eq!(next.seed, 0);
    }

    #[test]
    fn test_apply_rejects_bad_input() {
        let params = EnergyParams::default();
        assert!(EnergyParam::IntervalMinutes.apply(params, "0").is_err());
        assert!(EnergyParam::Days.apply(params, "-1").is_err());
        assert!(EnergyParam::Sites.apply(params, "four").is_err());
        assert!(EnergyParam::Days.apply(params, "99999999999").is_err());
    }

    #[test]
    fn test_invalid_edit_keeps_earlier_valid_edit() {
        let mut draft = ParamDraft::new(EnergyParams::default());

        assert_eq!(draft.edit(EnergyParam::Days, "10").map(|p| p.days), Some(10));
        assert_eq!(draft.edit(EnergyParam::Sites, "0"), None);

        assert_eq!(draft.params.days, 10);
        assert_eq!(draft.params.sites, 4);
        assert_eq!(draft.error.as_deref(), Some("Configuration error: Sites must be positive"));

        assert!(draft.edit(EnergyParam::Sites, "2").is_some());
        assert!(draft.error.is_none());
        assert_eq!((draft.params.days, draft.params.sites), (10, 2));
    }

    #[test]
    fn test_telemetry_summary() {
        let reading = |ts: &str, cost: f64| EnergyTelemetry {
            site_id: "site-1".to_string(),
            meter_id: "site-1-m1".to_string(),
            ts: ts.to_string(),
            interval_minutes: 15,
            energy_kwh: 1.0,
            power_kw: 4.0,
            price_eur_per_kwh: cost,
            cost_eur: cost,
            temperature_c: 18.0,
            source: "telemetry".to_string(),
        };

        let summary = TelemetrySummary::from_readings(&[
            reading("2024-06-01T00:15:00", 0.5),
            reading("not a time", 0.25),
            reading("2024-06-01T00:00:00Z", 0.25),
        ]);

        assert_eq!(summary.readings, 3);
        assert!((summary.total_cost_eur - 1.0).abs() < 1e-9);
        let (first, last) = summary.span.unwrap();
        assert_eq!(first.to_string(), "2024-06-01 00:00:00");
        assert_eq!(last.to_string(), "2024-06-01 00:15:00");

        let empty = TelemetrySummary::from_readings(&[]);
        assert_eq!(empty.span, None);
        assert_eq!(empty.total_cost_eur, 0.0);
    }

    #[test]
    fn test_telemetry_timestamp_formats() {
        let json = r#"{
            "site_id": "site-1",
            "meter_id": "meter-1-1",
            "ts": "2024-05-01T00:15:00",
            "interval_minutes": 15,
            "energy_kwh": 1.25,
            "power_kw": 5.0,
            "price_eur_per_kwh": 0.2,
            "cost_eur": 0.25,
            "temperature_c": 12.5,
            "source": "telemetry"
        }"#;

        let mut reading: EnergyTelemetry = serde_json::from_str(json).unwrap();
        let ts = reading.timestamp().unwrap();
        assert_eq!(ts.format("%H:%M").to_string(), "00:15");

        reading.ts = "2024-05-01T00:15:00+02:00".to_string();
        let ts = reading.timestamp().unwrap();
        assert_eq!(ts.format("%d %H:%M").to_string(), "30 22:15");

        reading.ts = "yesterday".to_string();
        assert!(reading.timestamp().is_none());
    }
}
