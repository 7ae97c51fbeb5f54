//! Server configuration.

use anyhow::Result;
use serde::Deserialize;

/// Server configuration.
///
/// The accepted year window belongs to this boundary layer only: the
/// core enforces nothing beyond the Gregorian floor of 1583, so an
/// operator can widen or narrow what the API accepts without touching
/// resolution logic.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the REST API.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Smallest year the API accepts.
    #[serde(default = "default_min_year")]
    pub min_year: u16,

    /// Largest year the API accepts.
    #[serde(default = "default_max_year")]
    pub max_year: u16,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_min_year() -> u16 {
    1984
}

fn default_max_year() -> u16 {
    9999
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var("FESTIVOS_ADDR").unwrap_or_else(|_| default_addr());

        let min_year = std::env::var("FESTIVOS_MIN_YEAR")
            .map(|v| v.parse().unwrap_or_else(|_| default_min_year()))
            .unwrap_or_else(|_| default_min_year());

        let max_year = std::env::var("FESTIVOS_MAX_YEAR")
            .map(|v| v.parse().unwrap_or_else(|_| default_max_year()))
            .unwrap_or_else(|_| default_max_year());

        anyhow::ensure!(
            min_year <= max_year,
            "FESTIVOS_MIN_YEAR ({min_year}) exceeds FESTIVOS_MAX_YEAR ({max_year})"
        );

        Ok(Self {
            addr,
            min_year,
            max_year,
        })
    }

    /// Whether `year` falls inside the accepted window.
    pub fn accepts_year(&self, year: i64) -> bool {
        (self.min_year as i64..=self.max_year as i64).contains(&year)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}
