//! # M3U Module
//!
//! Renders catalogue records into extended M3U text.
//!
//! - `entry`: directive lines for a single header, channel or separator
//! - `playlist`: the four playlist views assembled from a catalogue

mod entry;
mod playlist;

use serde::{Deserialize, Serialize};

pub use entry::{
    category_separator, channel_entry, client_options, escape_attr, escape_title, header, ExtInf,
};
pub use playlist::{
    by_category, complete, hd_only, sd_only, Playlist, CATEGORY_TITLE, COMPLETE_TITLE, HD_TITLE,
    SD_TITLE,
};

pub const DEFAULT_EPG_URL: &str =
    "https://raw.githubusercontent.com/iptv-org/epg/master/xml/tata_play.xml";
pub const DEFAULT_HEADER_LOGO: &str = "https://www.tataplay.com/images/logo.png";
pub const DEFAULT_SEPARATOR_LOGO: &str = "https://i.imgur.com/1.png";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_REFERRER: &str = "https://www.tataplay.com/";

/// Constant values written into every playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// `x-tvg-url` of the header
    pub epg_url: String,
    /// Logo of the header's INFO entry
    pub header_logo: String,
    /// Logo of category separator entries
    pub separator_logo: String,
    pub user_agent: String,
    pub referrer: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            epg_url: DEFAULT_EPG_URL.to_string(),
            header_logo: DEFAULT_HEADER_LOGO.to_string(),
            separator_logo: DEFAULT_SEPARATOR_LOGO.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referrer: DEFAULT_REFERRER.to_string(),
        }
    }
}
