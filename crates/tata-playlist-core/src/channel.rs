//! Channel record type

use serde::{Deserialize, Serialize};

/// Suffix appended to the display name of high-definition variants
pub const HD_SUFFIX: &str = " HD";

/// A single catalogue entry
///
/// Field order matches the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    /// Human-readable name (may contain spaces and ampersands)
    pub name: String,
    /// Stable tuner/EPG key, unique within a catalogue
    pub id: String,
    /// Logo URL, emitted as-is
    pub logo: String,
    /// Category label
    pub group: String,
    /// High-definition variant
    pub hd: bool,
    /// Logical channel number
    pub epg: Option<u32>,
}

impl ChannelRecord {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        logo: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            logo: logo.into(),
            group: group.into(),
            hd: false,
            epg: None,
        }
    }

    /// Mark as the HD variant
    pub fn hd(mut self) -> Self {
        self.hd = true;
        self
    }

    /// Set channel number
    pub fn with_epg(mut self, epg: u32) -> Self {
        self.epg = Some(epg);
        self
    }

    /// Name shown to players. HD records always get the suffix, even when
    /// the catalogue name already carries one.
    pub fn display_name(&self) -> String {
        if self.hd {
            format!("{}{}", self.name, HD_SUFFIX)
        } else {
            self.name.clone()
        }
    }

    /// Channel number for the `tvg-chno` tag; zero counts as absent
    pub fn channel_number(&self) -> Option<u32> {
        self.epg.filter(|n| *n > 0)
    }
}
