use config::{Config, ConfigError, File};
use serde::Deserialize;
use shared::OfficeDays;

use crate::domain::engine::SchedulingConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub data_service: DataServiceSettings,
    pub scheduling: SchedulingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataServiceSettings {
    pub url: String,
}

/// Mirrors [`SchedulingConfig`] field-for-field; kept separate so the
/// engine crate-internals stay free of the `config`/`serde` wiring.
#[derive(Debug, Deserialize, Clone)]
pub struct SchedulingSettings {
    pub timezone: String,
    pub fairness_window_days: i64,
    pub atm_rest_rule_enabled: bool,
    pub atm_b_cooldown_days: i64,
    pub sysaid_week_days: OfficeDays,
    pub sysaid_required_office_days: OfficeDays,
    pub default_aggressiveness: u8,
}

impl From<SchedulingSettings> for SchedulingConfig {
    fn from(settings: SchedulingSettings) -> Self {
        Self {
            timezone: settings.timezone,
            fairness_window_days: settings.fairness_window_days,
            atm_rest_rule_enabled: settings.atm_rest_rule_enabled,
            atm_b_cooldown_days: settings.atm_b_cooldown_days,
            sysaid_week_days: settings.sysaid_week_days,
            sysaid_required_office_days: settings.sysaid_required_office_days,
            default_aggressiveness: settings.default_aggressiveness,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
