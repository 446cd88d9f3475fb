// galaxy_sim/src/cli.rs

use bevy::prelude::Resource;
use clap::Parser;
use std::path::PathBuf;

/// Galaxy: a procedural spiral-galaxy point cloud viewer.
///
/// This struct defines the command-line arguments that can be passed to any
/// binary application that uses the galaxy simulation library.
#[derive(Parser, Debug, Resource, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the TOML config file. Missing files fall back to defaults.
    #[arg(short, long, default_value = "assets/galaxy.toml")]
    pub config: PathBuf,

    /// Directory scanned for `*.toml` galaxy presets.
    #[arg(short, long, default_value = "assets/presets")]
    pub presets: PathBuf,

    /// Start from this catalog preset instead of the config's `[galaxy]` table.
    #[arg(long)]
    pub preset: Option<String>,

    /// Override the seed after the config and preset are applied.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate once, log a summary and exit without opening a window.
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self::parse_from(["galaxy"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_assets_directory() {
        let cli = Cli::default();
        assert_eq!(cli.config, PathBuf::from("assets/galaxy.toml"));
        assert_eq!(cli.presets, PathBuf::from("assets/presets"));
        assert!(cli.preset.is_none());
        assert!(!cli.headless);
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::parse_from([
            "galaxy",
            "--seed",
            "54321",
            "--preset",
            "barred",
            "--headless",
        ]);
        assert_eq!(cli.seed, Some(54_321));
        assert_eq!(cli.preset.as_deref(), Some("barred"));
        assert!(cli.headless);
    }
}
