use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tata-playlist")]
#[command(about = "Static M3U playlist generator for Tata Sky/Play channels")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors and warnings only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: ./tata-playlist.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides output.dir from the config)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate all playlists and the JSON export (default)
    Generate,

    /// Report catalogue entries with placeholder or missing metadata
    Check,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., playlist.referrer)
        key: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
