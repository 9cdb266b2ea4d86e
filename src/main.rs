use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use shadow_core::{App, Config};
use shadow_ui::{AppOptions, Layout, WeatherServices};

/// Terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "shadow-weather", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// City to add on startup; repeat for more
    #[arg(long = "city", value_name = "NAME")]
    cities: Vec<String>,

    /// Skip the current-location fetch at startup
    #[arg(long)]
    no_locate: bool,

    /// Fixed latitude instead of IP lookup
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Fixed longitude instead of IP lookup
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

fn main() -> Result<()> {
    shadow_core::init()?;
    let cli = Cli::parse();

    let overrides = |config: &mut Config| {
        if cli.dark {
            config.ui.dark_mode = true;
        }
        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            config.location.latitude = Some(lat);
            config.location.longitude = Some(lon);
        }
    };

    let mut app = match App::new(cli.config.as_deref(), overrides) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };

    tracing::info!("Shadow Weather started");

    let services = Arc::new(WeatherServices::from_config(app.config())?);
    let options = AppOptions {
        initial_cities: cli.cities,
        locate_on_start: !cli.no_locate,
        layout: Layout::from_env(),
    };

    let stdin = io::stdin();
    shadow_ui::run(
        app.config(),
        services,
        options,
        stdin.lock(),
        io::stdout().lock(),
    )?;

    app.shutdown();
    Ok(())
}
