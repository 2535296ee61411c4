use chrono_tz::Tz;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::modules::work_logs::core::zone::parse_zone;

pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";
pub const REPORT_TIME_ZONE_VAR: &str = "REPORT_TIME_ZONE";
pub const WORK_LOG_SEED_FILE_VAR: &str = "WORK_LOG_SEED_FILE";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_REPORT_TIME_ZONE: &str = "Europe/Bucharest";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Zone every report is rendered in unless a caller passes another one.
    pub report_zone: Tz,
    pub work_log_seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_address = lookup(BIND_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: BIND_ADDRESS_VAR,
            value: bind_address.clone(),
        })?;

        let zone_id = lookup(REPORT_TIME_ZONE_VAR).unwrap_or_else(|| DEFAULT_REPORT_TIME_ZONE.to_string());
        let report_zone = parse_zone(&zone_id).ok_or(ConfigError::Invalid {
            name: REPORT_TIME_ZONE_VAR,
            value: zone_id,
        })?;

        let work_log_seed_file = lookup(WORK_LOG_SEED_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_address,
            report_zone,
            work_log_seed_file,
        })
    }
}
