mod cli;
mod error_mapping;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use outfit_core::{AppError, Config, ConfigError, TemperatureUnit};
use outfit_wardrobe::{OutfitSession, Recommendation, Wardrobe};
use outfit_weather::{Location, WeatherProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Cli, Command, WardrobeArgs};
use crate::error_mapping::IntoAppError;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = outfit_core::init() {
        eprintln!("{}", e);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.alert());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Config => show_config(cli.config),
        Command::Recommend {
            temperature,
            wardrobe,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let (mut session, mut rng) = start_session(&config, &wardrobe);
            session.recommend_for(temperature, &mut rng);
            print_session(&session, config.weather.display_unit);
            Ok(())
        }
        Command::Generate {
            latitude,
            longitude,
            wardrobe,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let (mut session, mut rng) = start_session(&config, &wardrobe);
            let location = match (latitude, longitude) {
                (Some(lat), Some(lon)) => Location::new(lat, lon),
                _ => Location::new(config.weather.latitude, config.weather.longitude)
                    .with_place(config.weather.city.clone(), config.weather.state.clone()),
            };

            let provider = WeatherProvider::with_endpoints(
                &config.weather.forecast_url,
                &config.weather.geocode_url,
                Duration::from_secs(config.weather.timeout_secs),
            )
            .map_err(IntoAppError::into_app_error)?;

            // Wait for the fetch before touching the session
            let data = provider
                .fetch(&location)
                .await
                .map_err(IntoAppError::into_app_error)?;
            session
                .generate_outfit(&data, &mut rng)
                .map_err(IntoAppError::into_app_error)?;

            println!("Conditions: {}", data.current.condition.description());
            print_session(&session, config.weather.display_unit);
            Ok(())
        }
        Command::Wardrobe { wardrobe } => {
            let config = load_config(cli.config.as_deref())?;
            let (session, _) = start_session(&config, &wardrobe);
            print_wardrobe(session.wardrobe());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    Config::load_validated(path)
        .map(|(config, _)| config)
        .map_err(config_error)
}

/// Surface a `ConfigError` from the config layer as `AppError::Config`.
fn config_error(e: anyhow::Error) -> AppError {
    match e.downcast::<ConfigError>() {
        Ok(config_err) => AppError::Config(config_err),
        Err(other) => AppError::Other(other),
    }
}

/// Build the session and random source. Rejected items are reported and
/// skipped; the rest of the wardrobe is still used.
fn start_session(config: &Config, args: &WardrobeArgs) -> (OutfitSession, StdRng) {
    let (session, rejected) = build_session(config, args);
    for e in &rejected {
        eprintln!("{}", e.alert());
    }

    let rng = match rng_seed(config, args) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (session, rng)
}

/// Apply `--item` arguments in order, collecting the rejected ones.
fn build_session(config: &Config, args: &WardrobeArgs) -> (OutfitSession, Vec<AppError>) {
    let wardrobe = if args.empty || !config.wardrobe.seed_defaults {
        Wardrobe::new()
    } else {
        Wardrobe::with_defaults()
    };
    let mut session = OutfitSession::new(wardrobe);

    let mut rejected = Vec::new();
    for item in &args.items {
        if let Err(e) = session.add_clothes(item.clone()) {
            rejected.push(e.into_app_error());
        }
    }
    (session, rejected)
}

/// `--seed` wins over `wardrobe.rng_seed`.
fn rng_seed(config: &Config, args: &WardrobeArgs) -> Option<u64> {
    args.seed.or(config.wardrobe.rng_seed)
}

fn print_session(session: &OutfitSession, unit: TemperatureUnit) {
    if let Some(label) = session.location_label() {
        println!("Location: {}", label);
    }
    if let Some(temperature) = session.temperature() {
        println!(
            "Current Temperature: {:.0}{}",
            unit.from_fahrenheit(temperature),
            unit.symbol()
        );
    }
    if let Some(rec) = session.recommendation().filter(|r| !r.is_empty()) {
        print_recommendation(rec);
    }
}

fn print_recommendation(rec: &Recommendation) {
    println!();
    println!("Outfit Recommendation:");
    println!("{}", rec);
}

fn print_wardrobe(wardrobe: &Wardrobe) {
    for (category, items) in wardrobe.iter() {
        println!("{} ({})", category, items.len());
        for item in items {
            println!(
                "  {:<24} {}..{}",
                item.label(),
                format_bound(item.temperature.min),
                format_bound(item.temperature.max)
            );
        }
    }
}

fn format_bound(value: f64) -> String {
    if value.is_infinite() {
        String::new()
    } else {
        format!("{}", value)
    }
}

fn show_config(path: Option<PathBuf>) -> Result<(), AppError> {
    let path = match path {
        Some(p) => p,
        None => Config::config_path().map_err(config_error)?,
    };
    let config = Config::load_from(&path).map_err(config_error)?;
    let validation = config.validate();

    println!("Config file: {}", path.display());
    for warning in &validation.warnings {
        println!("  warning: {}", warning);
    }
    for error in &validation.errors {
        println!("  error: {}", error);
    }
    Ok(())
}
