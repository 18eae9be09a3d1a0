use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use outfit_wardrobe::{NewClothing, TemperatureRange};

#[derive(Debug, Parser)]
#[command(name = "outfit", version, about = "Recommend an outfit from your wardrobe for the current weather")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend an outfit for a given temperature (Fahrenheit)
    Recommend {
        #[arg(long, short = 't', allow_negative_numbers = true)]
        temperature: f64,

        #[command(flatten)]
        wardrobe: WardrobeArgs,
    },
    /// Fetch the current weather and recommend an outfit
    Generate {
        #[arg(long, allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,

        #[command(flatten)]
        wardrobe: WardrobeArgs,
    },
    /// List the wardrobe
    Wardrobe {
        #[command(flatten)]
        wardrobe: WardrobeArgs,
    },
    /// Show the config file location and validation warnings
    Config,
}

#[derive(Debug, Clone, Args)]
pub struct WardrobeArgs {
    /// Add an item: Category:Name[:Color[:Min[:Max]]]; empty Min/Max are unbounded
    #[arg(long = "item", value_name = "SPEC", value_parser = parse_item)]
    pub items: Vec<NewClothing>,

    /// Start from an empty wardrobe instead of the built-in catalog
    #[arg(long)]
    pub empty: bool,

    /// Seed for the random pick
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse `Category:Name[:Color[:Min[:Max]]]`. Text fields are passed on as
/// typed: the category is checked later by the wardrobe (exact name), so an
/// unknown or differently-cased one is reported like any other rejected item.
/// An empty color field means no color.
pub fn parse_item(spec: &str) -> Result<NewClothing, String> {
    let mut parts = spec.splitn(5, ':');
    let category = parts.next().unwrap_or_default();
    let name = parts.next().ok_or_else(|| {
        format!(
            "expected Category:Name[:Color[:Min[:Max]]], got '{}'",
            spec
        )
    })?;

    let color = parts.next().filter(|c| !c.is_empty()).map(str::to_string);
    let min = parse_bound(parts.next(), f64::NEG_INFINITY)?;
    let max = parse_bound(parts.next(), f64::INFINITY)?;

    Ok(NewClothing::new(
        category,
        name,
        color,
        TemperatureRange::new(min, max),
    ))
}

fn parse_bound(raw: Option<&str>, unbounded: f64) -> Result<f64, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(unbounded),
        Some(value) => value
            .parse::<f64>()
            .map_err(|_| format!("invalid temperature '{}'", value)),
    }
}
