use crate::domain::{Channel, ChannelId, LiveGuideRow, RegionCount, RegionId, ScheduleEntry};
use crate::gateway::{GatewayClient, GatewayConfig};

use tokio::sync::mpsc;

/// Which endpoint a request or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    InitData,
    RegionCounts,
    Channels,
    LiveGuide,
    Schedule,
}

#[derive(Debug)]
pub enum GatewayCommand {
    InitSampleData { req_id: u64 },
    RegionCounts { req_id: u64 },
    Channels { req_id: u64, region: RegionId },
    LiveGuide { req_id: u64, region: RegionId },
    Schedule {
        req_id: u64,
        channel_id: ChannelId,
        hours: u32,
    },
}

#[derive(Debug)]
pub enum GatewayEvent {
    SampleDataReady {
        req_id: u64,
        message: String,
    },
    RegionCounts {
        req_id: u64,
        counts: Vec<RegionCount>,
    },
    Channels {
        req_id: u64,
        region: RegionId,
        channels: Vec<Channel>,
    },
    LiveGuide {
        req_id: u64,
        region: RegionId,
        rows: Vec<LiveGuideRow>,
    },
    Schedule {
        req_id: u64,
        channel_id: ChannelId,
        entries: Vec<ScheduleEntry>,
    },
    Error {
        req_id: u64,
        op: GatewayOp,
        message: String,
    },
}

impl GatewayEvent {
    pub fn req_id(&self) -> u64 {
        match self {
            GatewayEvent::SampleDataReady { req_id, .. }
            | GatewayEvent::RegionCounts { req_id, .. }
            | GatewayEvent::Channels { req_id, .. }
            | GatewayEvent::LiveGuide { req_id, .. }
            | GatewayEvent::Schedule { req_id, .. }
            | GatewayEvent::Error { req_id, .. } => *req_id,
        }
    }
}

async fn emit_error<E: std::fmt::Display>(
    tx_evt: &mpsc::Sender<GatewayEvent>,
    req_id: u64,
    op: GatewayOp,
    err: E,
) {
    tracing::warn!(req_id, ?op, err = %err, "gateway request failed");
    let _ = tx_evt
        .send(GatewayEvent::Error {
            req_id,
            op,
            message: err.to_string(),
        })
        .await;
}

/// Runs every command on its own task so a slow schedule fetch never holds
/// up a guide refresh. Ordering between replies is not guaranteed; callers
/// match replies by `req_id`.
pub fn spawn_gateway_actor(
    cfg: GatewayConfig,
) -> (mpsc::Sender<GatewayCommand>, mpsc::Receiver<GatewayEvent>) {
    let (tx_cmd, mut rx_cmd) = mpsc::channel::<GatewayCommand>(64);
    let (tx_evt, rx_evt) = mpsc::channel::<GatewayEvent>(64);

    tokio::spawn(async move {
        let client = match GatewayClient::new(cfg) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(err = %e, "failed to build GatewayClient");
                // Fail every request instead of going silent.
                while let Some(cmd) = rx_cmd.recv().await {
                    let (req_id, op) = command_meta(&cmd);
                    emit_error(&tx_evt, req_id, op, &e).await;
                }
                return;
            }
        };

        while let Some(cmd) = rx_cmd.recv().await {
            let client = client.clone();
            let tx_evt = tx_evt.clone();
            tokio::spawn(async move {
                run_command(&client, cmd, &tx_evt).await;
            });
        }
        tracing::debug!("gateway actor stopped");
    });

    (tx_cmd, rx_evt)
}

fn command_meta(cmd: &GatewayCommand) -> (u64, GatewayOp) {
    match cmd {
        GatewayCommand::InitSampleData { req_id } => (*req_id, GatewayOp::InitData),
        GatewayCommand::RegionCounts { req_id } => (*req_id, GatewayOp::RegionCounts),
        GatewayCommand::Channels { req_id, .. } => (*req_id, GatewayOp::Channels),
        GatewayCommand::LiveGuide { req_id, .. } => (*req_id, GatewayOp::LiveGuide),
        GatewayCommand::Schedule { req_id, .. } => (*req_id, GatewayOp::Schedule),
    }
}

async fn run_command(
    client: &GatewayClient,
    cmd: GatewayCommand,
    tx_evt: &mpsc::Sender<GatewayEvent>,
) {
    match cmd {
        GatewayCommand::InitSampleData { req_id } => match client.init_sample_data().await {
            Ok(message) => {
                let _ = tx_evt
                    .send(GatewayEvent::SampleDataReady { req_id, message })
                    .await;
            }
            Err(e) => emit_error(tx_evt, req_id, GatewayOp::InitData, e).await,
        },
        GatewayCommand::RegionCounts { req_id } => match client.list_region_counts().await {
            Ok(counts) => {
                let _ = tx_evt
                    .send(GatewayEvent::RegionCounts { req_id, counts })
                    .await;
            }
            Err(e) => emit_error(tx_evt, req_id, GatewayOp::RegionCounts, e).await,
        },
        GatewayCommand::Channels { req_id, region } => match client.list_channels(region).await {
            Ok(channels) => {
                let _ = tx_evt
                    .send(GatewayEvent::Channels {
                        req_id,
                        region,
                        channels,
                    })
                    .await;
            }
            Err(e) => emit_error(tx_evt, req_id, GatewayOp::Channels, e).await,
        },
        GatewayCommand::LiveGuide { req_id, region } => match client.live_guide(region).await {
            Ok(rows) => {
                let _ = tx_evt
                    .send(GatewayEvent::LiveGuide {
                        req_id,
                        region,
                        rows,
                    })
                    .await;
            }
            Err(e) => emit_error(tx_evt, req_id, GatewayOp::LiveGuide, e).await,
        },
        GatewayCommand::Schedule {
            req_id,
            channel_id,
            hours,
        } => match client.schedule(&channel_id, hours).await {
            Ok(entries) => {
                let _ = tx_evt
                    .send(GatewayEvent::Schedule {
                        req_id,
                        channel_id,
                        entries,
                    })
                    .await;
            }
            Err(e) => emit_error(tx_evt, req_id, GatewayOp::Schedule, e).await,
        },
    }
}
