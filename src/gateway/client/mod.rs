mod config;
mod error;

pub use config::{DEFAULT_API_BASE, GatewayConfig, default_data_dir};
pub use error::GatewayError;

use crate::domain::{
    Channel, ChannelId, LiveGuideRow, Program, ProgramType, RegionCount, RegionId, ScheduleEntry,
};
use crate::gateway::models::{ModelError, convert, dto};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const MAX_SCHEDULE_HOURS: u32 = 168;
pub const MAX_PROGRAMS_LIMIT: u32 = 100;

/// Thin typed wrapper over the TV catalog REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    pub cfg: GatewayConfig,
}

impl GatewayClient {
    pub fn new(cfg: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tvguide-ratui/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs.max(1)))
            .build()
            .map_err(GatewayError::Http)?;
        Ok(Self { http, cfg })
    }

    // ========== Endpoints ==========

    /// `GET /` banner, handy as a connectivity check.
    pub async fn ping(&self) -> Result<String, GatewayError> {
        let resp: dto::MessageResp = self.get("", &[]).await?;
        Ok(resp.message)
    }

    /// Asks the backend to seed its sample dataset. Idempotent on the server.
    pub async fn init_sample_data(&self) -> Result<String, GatewayError> {
        let url = self.cfg.url("init-data");
        tracing::debug!(url = %url, "POST");
        let resp = self.http.post(&url).send().await?;
        let resp: dto::MessageResp = decode(&url, resp).await?;
        Ok(resp.message)
    }

    pub async fn list_region_counts(&self) -> Result<Vec<RegionCount>, GatewayError> {
        let items: Vec<dto::RegionCountInfo> = self.get("regions", &[]).await?;
        Ok(convert::to_region_counts(items))
    }

    pub async fn list_channels(&self, region: RegionId) -> Result<Vec<Channel>, GatewayError> {
        let items: Vec<dto::ChannelInfo> = self
            .get("channels", &[("region", region.as_str().to_owned())])
            .await?;
        Ok(convert::to_channels(items)?)
    }

    pub async fn channel(&self, id: &ChannelId) -> Result<Channel, GatewayError> {
        if id.as_str().is_empty() {
            return Err(GatewayError::BadInput("channel id must not be empty"));
        }
        let item: dto::ChannelInfo = self.get(&format!("channels/{id}"), &[]).await?;
        Ok(convert::to_channel(item)?)
    }

    pub async fn live_guide(&self, region: RegionId) -> Result<Vec<LiveGuideRow>, GatewayError> {
        let items: Vec<dto::CurrentShowInfo> = self
            .get("live-guide", &[("region", region.as_str().to_owned())])
            .await?;
        Ok(convert::to_live_guide(items)?)
    }

    /// Upcoming airings for one channel, in server order (ascending start).
    pub async fn schedule(
        &self,
        channel_id: &ChannelId,
        hours: u32,
    ) -> Result<Vec<ScheduleEntry>, GatewayError> {
        if channel_id.as_str().is_empty() {
            return Err(GatewayError::BadInput("channel id must not be empty"));
        }
        if hours == 0 || hours > MAX_SCHEDULE_HOURS {
            return Err(GatewayError::BadInput("hours must be within 1..=168"));
        }
        let items: Vec<dto::ScheduleInfo> = self
            .get(
                &format!("schedule/{channel_id}"),
                &[("hours", hours.to_string())],
            )
            .await?;
        Ok(convert::to_schedule(items)?)
    }

    pub async fn programs(
        &self,
        kind: Option<ProgramType>,
        limit: u32,
    ) -> Result<Vec<Program>, GatewayError> {
        if limit == 0 || limit > MAX_PROGRAMS_LIMIT {
            return Err(GatewayError::BadInput("limit must be within 1..=100"));
        }
        let mut query = vec![("limit", limit.to_string())];
        if let Some(kind) = kind {
            query.push(("type", kind.as_str().to_owned()));
        }
        let items: Vec<dto::ProgramInfo> = self.get("programs", &query).await?;
        Ok(convert::to_programs(items)?)
    }

    // ========== Request Methods ==========

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let url = self.cfg.url(path);
        tracing::debug!(url = %url, ?query, "GET");
        let resp = self.http.get(&url).query(query).send().await?;
        decode(&url, resp).await
    }
}

async fn decode<T: DeserializeOwned>(url: &str, resp: reqwest::Response) -> Result<T, GatewayError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(GatewayError::Status {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(ModelError::BadJson(e)))
}
