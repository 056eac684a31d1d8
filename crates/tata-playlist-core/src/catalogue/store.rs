//! Catalogue Store
//!
//! Immutable, ordered collection of channel records.
//! All queries hand out shared borrows; nothing mutates the records after construction.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use super::builtin::BUILTIN_CHANNELS;
use crate::channel::ChannelRecord;
use crate::error::{PlaylistError, Result};

/// Ordered channel catalogue
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    records: Vec<ChannelRecord>,
}

impl Catalogue {
    /// Catalogue built from the embedded table
    pub fn builtin() -> Self {
        Self {
            records: BUILTIN_CHANNELS.iter().map(ChannelRecord::from).collect(),
        }
    }

    /// Build from arbitrary records, keeping their order
    ///
    /// Fails on the first id that appears twice.
    pub fn from_records(records: Vec<ChannelRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(PlaylistError::DuplicateChannelId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// All records in catalogue order
    pub fn records(&self) -> &[ChannelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChannelRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// HD records in catalogue order
    pub fn hd(&self) -> impl Iterator<Item = &ChannelRecord> {
        self.records.iter().filter(|r| r.hd)
    }

    /// SD records in catalogue order
    pub fn sd(&self) -> impl Iterator<Item = &ChannelRecord> {
        self.records.iter().filter(|r| !r.hd)
    }

    pub fn hd_count(&self) -> usize {
        self.hd().count()
    }

    pub fn sd_count(&self) -> usize {
        self.sd().count()
    }

    /// Records partitioned by group label
    ///
    /// Labels iterate in lexicographic order; records inside a group keep
    /// catalogue order.
    pub fn groups(&self) -> BTreeMap<&str, Vec<&ChannelRecord>> {
        let mut groups: BTreeMap<&str, Vec<&ChannelRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.group.as_str()).or_default().push(record);
        }
        groups
    }

    /// Number of distinct group labels
    pub fn category_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.group.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Find records whose metadata looks incomplete
    ///
    /// Findings are advisory: rendering still emits every record unchanged.
    pub fn lint(&self) -> Vec<LintWarning> {
        let mut logo_users: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            if !record.logo.is_empty() {
                *logo_users.entry(record.logo.as_str()).or_default() += 1;
            }
        }

        let mut warnings = Vec::new();
        for record in &self.records {
            if record.logo.is_empty() {
                warnings.push(LintWarning::EmptyLogo {
                    id: record.id.clone(),
                });
            } else if logo_users.get(record.logo.as_str()).copied().unwrap_or(0) > 1 {
                warnings.push(LintWarning::PlaceholderLogo {
                    id: record.id.clone(),
                    logo: record.logo.clone(),
                });
            }

            if record.channel_number().is_none() {
                warnings.push(LintWarning::MissingChannelNumber {
                    id: record.id.clone(),
                });
            }
        }
        warnings
    }
}

/// Advisory finding from [`Catalogue::lint`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    EmptyLogo { id: String },
    /// Logo URL shared with at least one other record
    PlaceholderLogo { id: String, logo: String },
    MissingChannelNumber { id: String },
}

impl LintWarning {
    pub fn id(&self) -> &str {
        match self {
            Self::EmptyLogo { id }
            | Self::PlaceholderLogo { id, .. }
            | Self::MissingChannelNumber { id } => id,
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLogo { id } => write!(f, "{}: empty logo URL", id),
            Self::PlaceholderLogo { id, logo } => {
                write!(f, "{}: logo {} is shared with other channels", id, logo)
            }
            Self::MissingChannelNumber { id } => write!(f, "{}: no channel number", id),
        }
    }
}
