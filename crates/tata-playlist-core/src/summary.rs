//! JSON export of the catalogue

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::channel::ChannelRecord;
use crate::error::Result;

/// Machine-readable summary written next to the playlists
///
/// Field order is the key order of the exported document.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub generated_at: DateTime<Local>,
    pub total_channels: usize,
    pub hd_channels: usize,
    pub sd_channels: usize,
    pub categories: usize,
    pub channels: &'a [ChannelRecord],
}

impl<'a> Summary<'a> {
    pub fn new(catalogue: &'a Catalogue, generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            total_channels: catalogue.len(),
            hd_channels: catalogue.hd_count(),
            sd_channels: catalogue.sd_count(),
            categories: catalogue.category_count(),
            channels: catalogue.records(),
        }
    }

    /// Pretty-printed JSON, two-space indent, no trailing newline
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
