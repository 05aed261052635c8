use std::net::SocketAddr;

use serde::Deserialize;

use crate::types::{FinancialBaseline, Threshold};

/// Canonical LRF limits, in percent of net current revenue.
pub const DEFAULT_ALERT_LIMIT_PCT: f64 = 54.0;
pub const DEFAULT_PRUDENTIAL_LIMIT_PCT: f64 = 57.0;
pub const DEFAULT_MAXIMUM_LIMIT_PCT: f64 = 60.0;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the API server binds to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Alert threshold, percent of revenue (default: 54)
    pub alert_limit_pct: f64,

    /// Prudential threshold, percent of revenue (default: 57)
    pub prudential_limit_pct: f64,

    /// Maximum threshold, percent of revenue (default: 60)
    pub maximum_limit_pct: f64,

    /// Revenue pre-filled when a request omits it (default: 1,000,000)
    pub default_revenue: f64,

    /// Personnel expense pre-filled when a request omits it (default: 520,000)
    pub default_expense: f64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            bind_addr: lookup("API_BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_BIND_ADDR must be a valid socket address"))?,
            alert_limit_pct: parse_f64(&lookup, "THRESHOLD_ALERT_PCT", DEFAULT_ALERT_LIMIT_PCT)?,
            prudential_limit_pct: parse_f64(
                &lookup,
                "THRESHOLD_PRUDENTIAL_PCT",
                DEFAULT_PRUDENTIAL_LIMIT_PCT,
            )?,
            maximum_limit_pct: parse_f64(
                &lookup,
                "THRESHOLD_MAXIMUM_PCT",
                DEFAULT_MAXIMUM_LIMIT_PCT,
            )?,
            default_revenue: parse_f64(&lookup, "DEFAULT_REVENUE", 1_000_000.0)?,
            default_expense: parse_f64(&lookup, "DEFAULT_EXPENSE", 520_000.0)?,
        };

        tracing::debug!(
            alert = config.alert_limit_pct,
            prudential = config.prudential_limit_pct,
            maximum = config.maximum_limit_pct,
            "Loaded threshold configuration"
        );

        Ok(config)
    }

    /// The configured thresholds, in escalating order.
    pub fn thresholds(&self) -> Vec<Threshold> {
        vec![
            Threshold::new("Alert", self.alert_limit_pct),
            Threshold::new("Prudential", self.prudential_limit_pct),
            Threshold::new("Maximum", self.maximum_limit_pct),
        ]
    }

    /// Baseline used to fill in omitted request fields.
    pub fn default_baseline(&self) -> FinancialBaseline {
        FinancialBaseline::new(self.default_revenue, self.default_expense)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            alert_limit_pct: DEFAULT_ALERT_LIMIT_PCT,
            prudential_limit_pct: DEFAULT_PRUDENTIAL_LIMIT_PCT,
            maximum_limit_pct: DEFAULT_MAXIMUM_LIMIT_PCT,
            default_revenue: 1_000_000.0,
            default_expense: 520_000.0,
        }
    }
}

fn parse_f64<F>(lookup: &F, key: &str, default: f64) -> anyhow::Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| anyhow::anyhow!("{} must be a finite number, got '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.alert_limit_pct, 54.0);
        assert_eq!(config.prudential_limit_pct, 57.0);
        assert_eq!(config.maximum_limit_pct, 60.0);
        assert_eq!(config.default_baseline(), FinancialBaseline::new(1_000_000.0, 520_000.0));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_BIND_ADDR", "127.0.0.1:8080"),
            ("THRESHOLD_ALERT_PCT", "45"),
            ("THRESHOLD_PRUDENTIAL_PCT", " 47.5 "),
            ("THRESHOLD_MAXIMUM_PCT", "50"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);

        let names: Vec<_> = config.thresholds().into_iter().map(|t| (t.name, t.limit_pct)).collect();
        assert_eq!(
            names,
            vec![
                ("Alert".to_string(), 45.0),
                ("Prudential".to_string(), 47.5),
                ("Maximum".to_string(), 50.0),
            ]
        );
    }

    #[test]
    fn test_rejects_unparseable_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("THRESHOLD_ALERT_PCT", "high")]))
            .unwrap_err();
        assert!(err.to_string().contains("THRESHOLD_ALERT_PCT"));

        assert!(AppConfig::from_lookup(lookup_from(&[("DEFAULT_REVENUE", "NaN")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("API_BIND_ADDR", "nowhere")])).is_err());
    }
}
