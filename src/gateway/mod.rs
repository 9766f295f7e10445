pub mod actor;
mod client;
pub mod models;

pub use client::{
    DEFAULT_API_BASE, GatewayClient, GatewayConfig, GatewayError, MAX_PROGRAMS_LIMIT,
    MAX_SCHEDULE_HOURS, default_data_dir,
};
