pub mod store;

pub use store::{AppSettings, load_settings, save_settings, settings_path};

use crate::gateway::{DEFAULT_API_BASE, GatewayConfig, MAX_SCHEDULE_HOURS};
use std::time::Duration;

/// Values resolved from CLI/env on top of the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub guide_refresh_secs: Option<u64>,
    pub schedule_hours: Option<u32>,
}

/// Effective runtime configuration: CLI/env > settings file > defaults.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub gateway: GatewayConfig,
    pub guide_refresh: Duration,
    pub schedule_hours: u32,
}

impl RuntimeConfig {
    pub fn resolve(settings: &AppSettings, overrides: &Overrides) -> Self {
        let api_base = overrides
            .api_base
            .clone()
            .or_else(|| settings.api_base.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let refresh_secs = overrides
            .guide_refresh_secs
            .unwrap_or(settings.guide_refresh_secs)
            .max(1);
        let schedule_hours = overrides
            .schedule_hours
            .unwrap_or(settings.schedule_hours)
            .clamp(1, MAX_SCHEDULE_HOURS);

        Self {
            gateway: GatewayConfig {
                api_base,
                timeout_secs: settings.http_timeout_secs,
                connect_timeout_secs: settings.http_connect_timeout_secs,
            },
            guide_refresh: Duration::from_secs(refresh_secs),
            schedule_hours,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::resolve(&AppSettings::default(), &Overrides::default())
    }
}
