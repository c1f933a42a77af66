//! Headless dry run of the player bootstrap.
//!
//! Negotiates against a simulated view and prints the content URL the player would load.

//local shortcuts
use rmmv_player_bootstrap::*;
use rmmv_player_host::*;
use rmmv_player_utils::*;

//third-party shortcuts
use bevy::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

//standard shortcuts
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(about = "Dry-run the RPG Maker MV player bootstrap against a simulated view")]
struct SimCli
{
    /// Bootstrap config as JSON.
    #[arg(long, value_parser = parse_json::<BootstrapConfig>, conflicts_with = "config_file")]
    config: Option<BootstrapConfig>,
    /// Path to a JSON bootstrap config.
    #[arg(long)]
    config_file: Option<PathBuf>,
    /// Simulated platform capability level.
    #[arg(long, default_value_t = DEFAULT_MIN_BRIDGE_LEVEL)]
    platform_level: u32,
    /// Simulated detection result: WebGL available.
    #[arg(long)]
    webgl: bool,
    /// Simulated detection result: WebAudio available.
    #[arg(long)]
    webaudio: bool,
    /// Simulated detection result: FPS overlay requested.
    #[arg(long)]
    show_fps: bool,
    /// The simulated script context never reports.
    #[arg(long)]
    silent: bool,
    /// Give up after this many app updates.
    #[arg(long, default_value_t = 100)]
    max_ticks: u32,
}

//-------------------------------------------------------------------------------------------------------------------

fn load_config(cli: &SimCli) -> Result<BootstrapConfig, Box<dyn std::error::Error + Send + Sync + 'static>>
{
    if let Some(config) = &cli.config { return Ok(config.clone()); }
    if let Some(path) = &cli.config_file { return BootstrapConfig::from_json_file(path); }
    Ok(BootstrapConfig::default())
}

//-------------------------------------------------------------------------------------------------------------------

fn main() -> ExitCode
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = SimCli::parse();

    let config = match load_config(&cli)
    {
        Ok(config) => config,
        Err(err) =>
        {
            tracing::error!(?err, "failed loading bootstrap config");
            return ExitCode::FAILURE;
        }
    };
    let Ok(pack) = config.into_pack()
    else
    {
        tracing::error!("bootstrap config is invalid");
        return ExitCode::FAILURE;
    };

    let capabilities = CapabilityReport::new(cli.webgl, cli.webaudio, cli.show_fps);
    let delivery = if cli.silent { ReportDelivery::Silent } else { ReportDelivery::Threaded };

    let mut app = App::new();
    app.add_plugins(BootstrapPlugin::new(
            pack,
            PlatformLevel(cli.platform_level),
            move |poster| SimulatedView::new(poster, capabilities, delivery),
        ));

    for _ in 0..cli.max_ticks
    {
        app.update();

        let launches: Vec<ContentLaunched> = app.world_mut()
            .resource_mut::<Events<ContentLaunched>>()
            .drain()
            .collect();
        if let Some(launch) = launches.into_iter().next()
        {
            println!("{}", launch.url);
            return ExitCode::SUCCESS;
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    // no timeout exists in the protocol itself, this only bounds the dry run
    tracing::warn!(cli.max_ticks, "no content was launched");
    ExitCode::FAILURE
}

//-------------------------------------------------------------------------------------------------------------------
