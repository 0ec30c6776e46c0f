use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domains::reports::MapRegion;
use crate::i18n::Locale;
use crate::kernel::ReachabilityProbe;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: Locale,
    /// Artificial delay before a submitted form reaches the store
    pub submit_delay: Duration,
    pub probe_addr: String,
    pub probe_interval: Duration,
    pub probe_timeout: Duration,
    pub map_base_lat: f64,
    pub map_base_lng: f64,
    pub notification_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = lookup("RELIEF_LOCALE")
            .map(|v| v.parse::<Locale>())
            .transpose()
            .context("RELIEF_LOCALE must be one of en, si, ta")?
            .unwrap_or_default();

        Ok(Self {
            locale,
            submit_delay: Duration::from_millis(parse_or(
                &lookup,
                "RELIEF_SUBMIT_DELAY_MS",
                1000u64,
            )?),
            probe_addr: lookup("RELIEF_PROBE_ADDR").unwrap_or_else(|| "1.1.1.1:53".to_string()),
            probe_interval: Duration::from_secs(positive_or(
                &lookup,
                "RELIEF_PROBE_INTERVAL_SECS",
                5u64,
            )?),
            probe_timeout: Duration::from_millis(positive_or(
                &lookup,
                "RELIEF_PROBE_TIMEOUT_MS",
                1500u64,
            )?),
            map_base_lat: parse_or(&lookup, "RELIEF_MAP_BASE_LAT", 6.0f64)?,
            map_base_lng: parse_or(&lookup, "RELIEF_MAP_BASE_LNG", 80.0f64)?,
            notification_capacity: positive_or(
                &lookup,
                "RELIEF_NOTIFICATION_CAPACITY",
                256usize,
            )?,
        })
    }

    pub fn map_region(&self) -> MapRegion {
        MapRegion::new(self.map_base_lat, self.map_base_lng)
    }

    pub fn probe(&self) -> ReachabilityProbe {
        ReachabilityProbe::new(self.probe_addr.clone(), self.probe_interval, self.probe_timeout)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number, got {raw:?}")),
        None => Ok(default),
    }
}

/// Like [`parse_or`], but zero is rejected: these values feed a timer
/// period, a connect timeout and a channel capacity.
fn positive_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = parse_or(lookup, key, default)?;
    anyhow::ensure!(value != T::default(), "{key} must be greater than zero");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.submit_delay, Duration::from_secs(1));
        assert_eq!(config.probe_addr, "1.1.1.1:53");
        assert_eq!(config.map_region(), MapRegion::new(6.0, 80.0));
        assert_eq!(config.notification_capacity, 256);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("RELIEF_LOCALE", "ta"),
            ("RELIEF_SUBMIT_DELAY_MS", "0"),
            ("RELIEF_MAP_BASE_LAT", "7.5"),
        ])
        .unwrap();
        assert_eq!(config.locale, Locale::Ta);
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.map_base_lat, 7.5);
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = config(&[("RELIEF_PROBE_INTERVAL_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("RELIEF_PROBE_INTERVAL_SECS"));
    }

    #[test]
    fn test_zero_probe_settings_are_rejected() {
        for key in [
            "RELIEF_PROBE_INTERVAL_SECS",
            "RELIEF_PROBE_TIMEOUT_MS",
            "RELIEF_NOTIFICATION_CAPACITY",
        ] {
            let err = config(&[(key, "0")]).unwrap_err();
            assert_eq!(err.to_string(), format!("{key} must be greater than zero"));
        }

        let config = config(&[("RELIEF_PROBE_INTERVAL_SECS", "1")]).unwrap();
        assert_eq!(config.probe().interval, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_locale_is_error() {
        assert!(config(&[("RELIEF_LOCALE", "fr")]).is_err());
    }
}
