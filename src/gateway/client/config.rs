use directories::ProjectDirs;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8001/api";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_base: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout_secs: 15,
            connect_timeout_secs: 5,
        }
    }
}

impl GatewayConfig {
    /// Joins `path` onto the base URL without doubling or dropping slashes.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Local data directory for settings and logs.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "tvguide", "tvguide-ratui")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("tvguide-ratui"))
}
