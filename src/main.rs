mod cli;
mod config;
mod gateways;
mod monitor;
mod registry;

use anyhow::{bail, Result};
use clap::Parser;

use gfc_core::{entities::*, gateways::location::LocationGateway as _, usecases};

use crate::cli::{Cli, Command};

/// Zoom applied when centering the viewport on a fresh position fix.
const DEFAULT_VIEWPORT_SPAN: MapSpan = MapSpan {
    lat_delta_deg: 0.005,
    lng_delta_deg: 0.005,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::Config::try_load_from_file_or_default(cli.config.as_deref())?;
    let registry = registry::create()?;
    match cli.command {
        Command::Locate => locate(&cfg),
        Command::Watch => watch(&cfg, registry).await,
        Command::Regions => {
            print_regions(&registry);
            Ok(())
        }
    }
}

/// Foreground flow: one-shot position fix plus viewport refresh.
///
/// Duplicate invocations are idempotent; the last successful fix
/// wins.
fn locate(cfg: &config::Config) -> Result<()> {
    let viewport_repo = gateways::viewport_repo(&cfg.store)?;
    if let Some(cached) = usecases::load_last_viewport(&viewport_repo) {
        println!("Last viewport centered at {}", cached.center);
    }

    let location_gw = gateways::location_gateway(&cfg.gateway);
    let state = location_gw.request_permission(PermissionTier::Foreground);
    if !state.allows(PermissionTier::Foreground) {
        bail!("Location permission denied: enable location access to use this feature");
    }
    let position = location_gw.current_position()?;
    println!("Current position: {position}");

    let viewport = Viewport {
        center: position,
        span: DEFAULT_VIEWPORT_SPAN,
    };
    if let Err(err) = usecases::store_last_viewport(&viewport_repo, &viewport) {
        log::warn!("Unable to persist the last viewport: {err}");
    }
    Ok(())
}

/// Background flow: monitor the geofences until interrupted.
async fn watch(cfg: &config::Config, registry: GeofenceRegistry) -> Result<()> {
    let location_gw = gateways::location_gateway(&cfg.gateway);
    let state = location_gw.request_permission(PermissionTier::Background);
    if !state.allows(PermissionTier::Background) {
        bail!("Background location permission denied: geofence monitoring is unavailable");
    }

    let notification_gw = gateways::notification_gateway(&cfg.gateway, &cfg.monitor);
    let region_watch = monitor::start(
        registry,
        location_gw,
        notification_gw,
        cfg.monitor.poll_interval,
    );
    log::info!("Geofence monitoring started");

    tokio::signal::ctrl_c().await?;
    log::info!("Shutting down geofence monitoring");
    region_watch.cancel().await;
    Ok(())
}

fn print_regions(registry: &GeofenceRegistry) {
    for region in registry {
        println!(
            "{}: center {} radius {}m (enter: {}, exit: {})",
            region.id,
            region.center,
            region.radius.to_meters(),
            region.notify_on_enter,
            region.notify_on_exit
        );
    }
}
