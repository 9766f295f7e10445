use clap::Parser;
use std::path::Path;
use tvguide_ratui::app::{App, AppSnapshot};
use tvguide_ratui::core::spawn_app_actor;
use tvguide_ratui::error::AppError;
use tvguide_ratui::gateway::{GatewayClient, default_data_dir};
use tvguide_ratui::logging;
use tvguide_ratui::settings::{self, Overrides, RuntimeConfig};
use tvguide_ratui::ui::{Cli, Command, report, run_tui};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let _log_guard = logging::init(
        &data_dir,
        logging::LogConfig {
            dir: cli.log_dir.clone(),
            filter: cli.log_filter.clone(),
        },
    );
    tracing::info!(data_dir = %data_dir.display(), "tvguide-ratui starting");

    let stored = settings::load_settings(&data_dir);
    let overrides = Overrides {
        api_base: cli.api_base.clone(),
        guide_refresh_secs: cli.refresh_secs,
        schedule_hours: cli.schedule_hours,
    };
    let cfg = RuntimeConfig::resolve(&stored, &overrides);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let (tx, rx) = spawn_app_actor(cfg);
            run_tui(AppSnapshot::from_app(&App::default()), tx, rx).await?;
            tracing::info!("tvguide-ratui exiting");
            Ok(())
        }
        Command::Regions => {
            let client = GatewayClient::new(cfg.gateway)?;
            let counts = client.list_region_counts().await?;
            print!("{}", report::regions(&counts));
            Ok(())
        }
        Command::Guide { region } => {
            let client = GatewayClient::new(cfg.gateway)?;
            let rows = client.live_guide(region).await?;
            print!("{}", report::live_guide(&rows));
            Ok(())
        }
        Command::Schedule { channel_id, hours } => {
            let client = GatewayClient::new(cfg.gateway)?;
            let hours = hours.unwrap_or(cfg.schedule_hours);
            match client.channel(&channel_id).await {
                Ok(channel) => println!("{} {}", channel.number, channel.name),
                Err(e) if e.is_not_found() => {
                    return Err(AppError::Other(format!("no channel with id {channel_id}")));
                }
                Err(e) => return Err(e.into()),
            }
            let entries = client.schedule(&channel_id, hours).await?;
            print!("{}", report::schedule(&entries));
            Ok(())
        }
        Command::InitData => {
            let client = GatewayClient::new(cfg.gateway)?;
            println!("{}", client.init_sample_data().await?);
            Ok(())
        }
        Command::Programs { kind, limit } => {
            let client = GatewayClient::new(cfg.gateway)?;
            let items = client.programs(kind, limit).await?;
            print!("{}", report::programs(&items));
            Ok(())
        }
        Command::Ping => {
            let client = GatewayClient::new(cfg.gateway)?;
            match client.ping().await {
                Ok(banner) => println!("{banner}"),
                Err(e) if e.is_network_error() => {
                    return Err(AppError::Other(format!(
                        "backend unreachable at {}: {e}",
                        client.cfg.api_base
                    )));
                }
                Err(e) => return Err(e.into()),
            }
            Ok(())
        }
        Command::Config { write } => {
            print_config(&data_dir, &cfg);
            if write {
                let mut updated = stored;
                updated.api_base = Some(cfg.gateway.api_base.clone());
                updated.guide_refresh_secs = cfg.guide_refresh.as_secs();
                updated.schedule_hours = cfg.schedule_hours;
                settings::save_settings(&data_dir, &updated).map_err(|source| {
                    AppError::Settings {
                        path: settings::settings_path(&data_dir),
                        source,
                    }
                })?;
                println!("written to {}", settings::settings_path(&data_dir).display());
            }
            Ok(())
        }
    }
}

fn print_config(data_dir: &Path, cfg: &RuntimeConfig) {
    println!("data_dir        {}", data_dir.display());
    println!("api_base        {}", cfg.gateway.api_base);
    println!("refresh_secs    {}", cfg.guide_refresh.as_secs());
    println!("schedule_hours  {}", cfg.schedule_hours);
    println!("http_timeout    {}s", cfg.gateway.timeout_secs);
}
