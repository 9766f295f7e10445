use crate::domain::{ChannelId, ProgramType, RegionId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tvguide-ratui",
    version,
    about = "Terminal client for a global TV channel catalog (Rust + ratatui)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the data directory (defaults to the platform data dir)
    #[arg(long, env = "TVGUIDE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the log directory (defaults to `{data_dir}/logs`)
    #[arg(long, env = "TVGUIDE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter, same syntax as RUST_LOG
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// Catalog API base URL (default http://localhost:8001/api)
    #[arg(long, env = "TVGUIDE_API_BASE")]
    pub api_base: Option<String>,

    /// Live guide refresh period in seconds
    #[arg(long, env = "TVGUIDE_REFRESH_SECS")]
    pub refresh_secs: Option<u64>,

    /// Schedule horizon in hours for the channel view
    #[arg(long, env = "TVGUIDE_SCHEDULE_HOURS")]
    pub schedule_hours: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the TUI (default)
    Tui,

    /// Print channel counts per region
    Regions,

    /// Print the live guide of a region
    Guide {
        /// north_america, europe, asia, oceania, africa or south_america
        region: RegionId,
    },

    /// Print a channel schedule grouped by day
    Schedule {
        channel_id: ChannelId,

        #[arg(long)]
        hours: Option<u32>,
    },

    /// Ask the backend to seed its sample data
    InitData,

    /// List programs, optionally of one type
    Programs {
        #[arg(long = "type")]
        kind: Option<ProgramType>,

        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// Check that the backend answers
    Ping,

    /// Print the effective configuration
    Config {
        /// Also write it to settings.json
        #[arg(long)]
        write: bool,
    },
}
