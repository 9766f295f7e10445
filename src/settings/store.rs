use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Remote API base, e.g. `http://localhost:8001/api`. `None` uses the default.
    #[serde(default)]
    pub api_base: Option<String>,

    // Polling and HTTP tuning
    #[serde(default = "default_guide_refresh_secs")]
    pub guide_refresh_secs: u64,
    #[serde(default = "default_schedule_hours")]
    pub schedule_hours: u32,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_http_connect_timeout_secs")]
    pub http_connect_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: None,
            guide_refresh_secs: default_guide_refresh_secs(),
            schedule_hours: default_schedule_hours(),
            http_timeout_secs: default_http_timeout_secs(),
            http_connect_timeout_secs: default_http_connect_timeout_secs(),
        }
    }
}

fn default_guide_refresh_secs() -> u64 { 30 }
fn default_schedule_hours() -> u32 { 48 }
fn default_http_timeout_secs() -> u64 { 15 }
fn default_http_connect_timeout_secs() -> u64 { 5 }

pub fn load_settings(data_dir: &Path) -> AppSettings {
    let p = settings_path(data_dir);
    let Ok(bytes) = fs::read(&p) else {
        return AppSettings::default();
    };
    match serde_json::from_slice(&bytes) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %p.display(), err = %e, "settings file unreadable, using defaults");
            AppSettings::default()
        }
    }
}

pub fn save_settings(data_dir: &Path, s: &AppSettings) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let p = settings_path(data_dir);
    let tmp = p.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(s).map_err(std::io::Error::other)?;
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, &p) {
        let _ = fs::remove_file(&p);
        fs::rename(&tmp, &p).map_err(|_| e)?;
    }
    Ok(())
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"api_base":"http://x/api"}"#).expect("parse");
        assert_eq!(s.api_base.as_deref(), Some("http://x/api"));
        assert_eq!(s.guide_refresh_secs, 30);
        assert_eq!(s.schedule_hours, 48);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_settings(dir.path()), AppSettings::default());
    }
}
