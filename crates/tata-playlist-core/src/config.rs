use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlaylistError, Result};
use crate::m3u::PlaylistSettings;

pub const CONFIG_FILE: &str = "tata-playlist.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tata-playlist configuration file
# Looked up in the current directory unless --config is given.

[output]
# Directory the playlists and the JSON export are written to
# Default: "."
dir = "."

[playlist]
# EPG source declared in every playlist header
epg_url = "https://raw.githubusercontent.com/iptv-org/epg/master/xml/tata_play.xml"

# Logo of the INFO entry in the header
header_logo = "https://www.tataplay.com/images/logo.png"

# Logo of the category separator entries
separator_logo = "https://i.imgur.com/1.png"

# Client options written after every entry
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
referrer = "https://www.tataplay.com/"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub playlist: PlaylistSettings,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl Config {
    /// Default config location (current directory)
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Load config from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| PlaylistError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Write the commented default template unless the file already exists
    pub fn init(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path.to_path_buf())
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "output.dir" => self.output.dir.display().to_string(),
            "playlist.epg_url" => self.playlist.epg_url.clone(),
            "playlist.header_logo" => self.playlist.header_logo.clone(),
            "playlist.separator_logo" => self.playlist.separator_logo.clone(),
            "playlist.user_agent" => self.playlist.user_agent.clone(),
            "playlist.referrer" => self.playlist.referrer.clone(),
            _ => {
                return Err(PlaylistError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        };
        Ok(value)
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "output.dir",
            "playlist.epg_url",
            "playlist.header_logo",
            "playlist.separator_logo",
            "playlist.user_agent",
            "playlist.referrer",
        ]
        .into_iter()
        .filter_map(|key| self.get(key).ok().map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Constant values for the playlist renderer
    pub fn settings(&self) -> &PlaylistSettings {
        &self.playlist
    }
}
