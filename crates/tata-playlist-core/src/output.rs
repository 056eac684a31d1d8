//! Output files and the writer
//!
//! Outputs are produced one at a time in [`OutputKind::ALL`] order. Each
//! write owns its file handle for the duration of the call only.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::catalogue::{Catalogue, LintWarning};
use crate::error::{PlaylistError, Result};
use crate::m3u::{self, PlaylistSettings};
use crate::summary::Summary;

/// One generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Complete,
    Hd,
    Sd,
    Categories,
    Summary,
}

impl OutputKind {
    /// Fixed write order
    pub const ALL: [OutputKind; 5] = [
        OutputKind::Complete,
        OutputKind::Hd,
        OutputKind::Sd,
        OutputKind::Categories,
        OutputKind::Summary,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Complete => "tata_sky_playlist.m3u",
            Self::Hd => "tata_sky_playlist_hd.m3u",
            Self::Sd => "tata_sky_playlist_sd.m3u",
            Self::Categories => "tata_sky_playlist_categories.m3u",
            Self::Summary => "tata_sky_channels.json",
        }
    }

    /// Progress label
    pub fn stage(self) -> &'static str {
        match self {
            Self::Complete => "complete playlist",
            Self::Hd => "HD playlist",
            Self::Sd => "SD playlist",
            Self::Categories => "categories playlist",
            Self::Summary => "channel data JSON",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Complete => "Complete playlist",
            Self::Hd => "HD channels only",
            Self::Sd => "SD channels only",
            Self::Categories => "Organized by category",
            Self::Summary => "Channel data in JSON format",
        }
    }
}

/// Result of a successful write
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Write `content` to `dir/file_name`, replacing any existing file
///
/// The handle is closed when this returns, on success or failure. Nothing is
/// retried and a partially written file is left in place.
pub fn save_playlist(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let write_err = |source: std::io::Error| PlaylistError::Write {
        path: path.clone(),
        source,
    };

    let mut file = File::create(&path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    debug!(path = %path.display(), bytes = content.len(), "saved output");
    Ok(path)
}

/// Renders and writes every output for one run
#[derive(Debug)]
pub struct Generator<'a> {
    catalogue: &'a Catalogue,
    settings: &'a PlaylistSettings,
    output_dir: PathBuf,
    generated_at: DateTime<Local>,
}

impl<'a> Generator<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        settings: &'a PlaylistSettings,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalogue,
            settings,
            output_dir: output_dir.into(),
            generated_at: Local::now(),
        }
    }

    /// Pin the summary timestamp
    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Lint the catalogue, logging each finding
    pub fn check(&self) -> Vec<LintWarning> {
        let warnings = self.catalogue.lint();
        for warning in &warnings {
            warn!(channel = warning.id(), "{}", warning);
        }
        warnings
    }

    pub fn render(&self, kind: OutputKind) -> Result<String> {
        let content = match kind {
            OutputKind::Complete => m3u::complete(self.catalogue, self.settings).into_string(),
            OutputKind::Hd => m3u::hd_only(self.catalogue, self.settings).into_string(),
            OutputKind::Sd => m3u::sd_only(self.catalogue, self.settings).into_string(),
            OutputKind::Categories => {
                m3u::by_category(self.catalogue, self.settings).into_string()
            }
            OutputKind::Summary => Summary::new(self.catalogue, self.generated_at).to_json()?,
        };
        Ok(content)
    }

    pub fn write(&self, kind: OutputKind) -> Result<WrittenFile> {
        let content = self.render(kind)?;
        let path = save_playlist(&self.output_dir, kind.file_name(), &content)?;
        Ok(WrittenFile {
            kind,
            path,
            bytes: content.len(),
        })
    }

    /// Write every output in order, stopping at the first failure
    pub fn write_all(&self) -> Result<Vec<WrittenFile>> {
        OutputKind::ALL.iter().map(|kind| self.write(*kind)).collect()
    }
}
