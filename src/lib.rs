//! Terminal client for a global TV channel catalog: a world map of regions,
//! a live guide per region and a schedule per channel.

pub mod app;
pub mod core;
pub mod domain;
pub mod error;
pub mod features;
pub mod gateway;
pub mod logging;
pub mod messages;
pub mod settings;
pub mod ui;
