// ./src/main.rs
use std::process::ExitCode;

// Eigene Module deklarieren
pub mod config;
pub mod math;
pub mod scene;
pub mod setup; // Kamera für den Viewer
pub mod visualization;

use bevy::log::info;
use config::{Backend, CliCommand, ConfigError, RoseConfig, parse_args};
use math::error::MathError;
use scene::build_scene;
use thiserror::Error;
use visualization::{RenderBackend, RenderError, backend_for};

/// Alles, was einen Lauf abbrechen kann.
#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parameter(#[from] MathError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// 2 für Eingabefehler, 1 für Fehler bei der Ausgabe.
    fn exit_code(&self) -> u8 {
        match self {
            // Hilfe und Version enden mit 0
            AppError::Config(ConfigError::Cli(err)) => u8::try_from(err.exit_code()).unwrap_or(2),
            AppError::Config(_) | AppError::Parameter(_) => 2,
            AppError::Render(_) | AppError::Serialize(_) => 1,
        }
    }
}

/// Logging ohne Bevy-App; im Viewer übernimmt das `LogPlugin`.
fn init_headless_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hue_rose=debug"));
    // Ein zweiter Aufruf (z.B. in Tests) ist harmlos
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Ein kompletter Lauf: Argumente auswerten, Szene erzeugen, ausgeben.
/// Das Backend wird erst nach erfolgreicher Erzeugung angelegt.
fn run<I, F>(args: I, make_backend: F) -> Result<(), AppError>
where
    I: IntoIterator<Item = String>,
    F: FnOnce(&RoseConfig) -> Box<dyn RenderBackend>,
{
    let config = match parse_args(args)? {
        CliCommand::PrintConfig(config) => {
            println!("{}", config.to_json_pretty()?);
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    if config.backend == Backend::Svg {
        init_headless_logging();
    }

    let scene = build_scene(&config)?;
    let mut backend = make_backend(&config);
    info!("Rendering with the {} backend.", backend.name());
    backend.render(scene)?;
    Ok(())
}

fn main() -> ExitCode {
    match run(std::env::args().skip(1), backend_for) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                // clap formatiert selbst und schreibt Hilfe nach stdout
                AppError::Config(ConfigError::Cli(cli_err)) => {
                    let _ = cli_err.print();
                }
                other => eprintln!("{other}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}
