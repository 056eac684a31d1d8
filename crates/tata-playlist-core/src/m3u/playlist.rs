//! Playlist assemblers
//!
//! Each view is a pure projection of the catalogue: it never reorders or
//! touches the source records, only the order it emits them in.

use super::entry::{category_separator, channel_entry, header};
use super::PlaylistSettings;
use crate::catalogue::Catalogue;
use crate::channel::ChannelRecord;

pub const COMPLETE_TITLE: &str = "Tata Sky Complete Playlist";
pub const HD_TITLE: &str = "Tata Sky HD Channels";
pub const SD_TITLE: &str = "Tata Sky SD Channels";
pub const CATEGORY_TITLE: &str = "Tata Sky Channels by Category";

/// An assembled playlist document
#[derive(Debug, Clone)]
pub struct Playlist<'s> {
    settings: &'s PlaylistSettings,
    content: String,
    channels: usize,
    separators: usize,
}

impl<'s> Playlist<'s> {
    /// Start a document with its header block
    pub fn new(title: &str, settings: &'s PlaylistSettings) -> Self {
        let mut content = String::new();
        header(title, settings, &mut content);
        Self {
            settings,
            content,
            channels: 0,
            separators: 0,
        }
    }

    pub fn push_channel(&mut self, record: &ChannelRecord) {
        channel_entry(record, self.settings, &mut self.content);
        self.channels += 1;
    }

    pub fn push_separator(&mut self, group: &str) {
        category_separator(group, self.settings, &mut self.content);
        self.separators += 1;
    }

    pub fn extend<'r>(&mut self, records: impl IntoIterator<Item = &'r ChannelRecord>) {
        for record in records {
            self.push_channel(record);
        }
    }

    /// Number of channel entries (separators excluded)
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    pub fn separator_count(&self) -> usize {
        self.separators
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Every record in catalogue order
pub fn complete<'s>(catalogue: &Catalogue, settings: &'s PlaylistSettings) -> Playlist<'s> {
    let mut playlist = Playlist::new(COMPLETE_TITLE, settings);
    playlist.extend(catalogue.records());
    playlist
}

/// HD records in catalogue order
pub fn hd_only<'s>(catalogue: &Catalogue, settings: &'s PlaylistSettings) -> Playlist<'s> {
    let mut playlist = Playlist::new(HD_TITLE, settings);
    playlist.extend(catalogue.hd());
    playlist
}

/// SD records in catalogue order
pub fn sd_only<'s>(catalogue: &Catalogue, settings: &'s PlaylistSettings) -> Playlist<'s> {
    let mut playlist = Playlist::new(SD_TITLE, settings);
    playlist.extend(catalogue.sd());
    playlist
}

/// Records grouped by category
///
/// Groups appear in lexicographic label order, each opened by a separator
/// entry. Inside a group records are sorted by name; the sort is stable, so
/// equal names keep catalogue order.
pub fn by_category<'s>(catalogue: &Catalogue, settings: &'s PlaylistSettings) -> Playlist<'s> {
    let mut playlist = Playlist::new(CATEGORY_TITLE, settings);
    for (group, mut records) in catalogue.groups() {
        records.sort_by(|a, b| a.name.cmp(&b.name));
        playlist.push_separator(group);
        playlist.extend(records);
    }
    playlist
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn tvg_ids(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|line| {
                let start = line.find("tvg-id=\"")? + "tvg-id=\"".len();
                let len = line[start..].find('"')?;
                Some(&line[start..start + len])
            })
            .collect()
    }

    fn group_titles(text: &str) -> Vec<&str> {
        text.lines()
            .filter(|line| line.ends_with(" Channels") && !line.contains("tvg-id="))
            .filter(|line| !line.contains("group-title=\"INFO\""))
            .filter_map(|line| {
                let start = line.find("group-title=\"")? + "group-title=\"".len();
                let len = line[start..].find('"')?;
                Some(&line[start..start + len])
            })
            .collect()
    }

    fn scenario() -> Catalogue {
        Catalogue::from_records(vec![
            ChannelRecord::new(
                "Star Plus",
                "starplus",
                "https://i.imgur.com/1.png",
                "Hindi Entertainment",
            )
            .with_epg(117),
            ChannelRecord::new(
                "Star Plus HD",
                "starplus_hd",
                "https://i.imgur.com/1hd.png",
                "Hindi Entertainment",
            )
            .hd()
            .with_epg(115),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_views() {
        let catalogue = scenario();
        let settings = PlaylistSettings::default();

        let all = complete(&catalogue, &settings);
        assert_eq!(all.channel_count(), 2);
        assert_eq!(tvg_ids(all.as_str()), vec!["starplus", "starplus_hd"]);

        let hd = hd_only(&catalogue, &settings);
        assert_eq!(tvg_ids(hd.as_str()), vec!["starplus_hd"]);

        let sd = sd_only(&catalogue, &settings);
        assert_eq!(tvg_ids(sd.as_str()), vec!["starplus"]);

        let grouped = by_category(&catalogue, &settings);
        assert_eq!(grouped.separator_count(), 1);
        assert_eq!(group_titles(grouped.as_str()), vec!["Hindi Entertainment"]);
        // prefix sorts first
        assert_eq!(tvg_ids(grouped.as_str()), vec!["starplus", "starplus_hd"]);
    }

    #[test]
    fn test_hd_and_sd_partition_complete() {
        let catalogue = Catalogue::builtin();
        let settings = PlaylistSettings::default();

        let all_text = complete(&catalogue, &settings).into_string();
        let hd_text = hd_only(&catalogue, &settings).into_string();
        let sd_text = sd_only(&catalogue, &settings).into_string();

        let all: HashSet<_> = tvg_ids(&all_text).into_iter().collect();
        let hd: HashSet<_> = tvg_ids(&hd_text).into_iter().collect();
        let sd: HashSet<_> = tvg_ids(&sd_text).into_iter().collect();

        assert!(hd.is_disjoint(&sd));
        assert_eq!(hd.union(&sd).copied().collect::<HashSet<_>>(), all);
        assert_eq!(all.len(), catalogue.len());
    }

    #[test]
    fn test_complete_preserves_catalogue_order() {
        let catalogue = Catalogue::builtin();
        let settings = PlaylistSettings::default();
        let text = complete(&catalogue, &settings).into_string();

        let expected: Vec<_> = catalogue.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(tvg_ids(&text), expected);
    }

    #[test]
    fn test_category_view_sorted_and_complete() {
        let catalogue = Catalogue::builtin();
        let settings = PlaylistSettings::default();
        let playlist = by_category(&catalogue, &settings);
        assert_eq!(playlist.channel_count(), catalogue.len());
        assert_eq!(playlist.separator_count(), catalogue.category_count());

        let text = playlist.into_string();
        let titles = group_titles(&text);
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);

        let ids = tvg_ids(&text);
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), catalogue.len());
        assert_eq!(unique.len(), catalogue.len());

        // Walk the ids back to records and check grouping and name order
        let records: Vec<_> = ids.iter().map(|id| catalogue.get(id).unwrap()).collect();
        for pair in records.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.group <= b.group, "{} before {}", a.group, b.group);
            if a.group == b.group {
                assert!(a.name <= b.name, "{} before {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_category_names_case_sensitive() {
        let catalogue = Catalogue::from_records(vec![
            ChannelRecord::new("alpha", "alpha", "", "b"),
            ChannelRecord::new("Zulu", "zulu", "", "b"),
            ChannelRecord::new("Beta", "beta", "", "B"),
        ])
        .unwrap();
        let settings = PlaylistSettings::default();
        let text = by_category(&catalogue, &settings).into_string();

        assert_eq!(group_titles(&text), vec!["B", "b"]);
        assert_eq!(tvg_ids(&text), vec!["beta", "zulu", "alpha"]);
    }

    #[test]
    fn test_ids_round_trip() {
        let catalogue = Catalogue::builtin();
        let settings = PlaylistSettings::default();
        for record in catalogue.records() {
            let mut out = String::new();
            channel_entry(record, &settings, &mut out);
            assert_eq!(tvg_ids(&out), vec![record.id.as_str()]);
        }
    }

    #[test]
    fn test_empty_catalogue_is_header_only() {
        let catalogue = Catalogue::default();
        let settings = PlaylistSettings::default();

        let mut expected = String::new();
        header(CATEGORY_TITLE, &settings, &mut expected);

        let playlist = by_category(&catalogue, &settings);
        assert_eq!(playlist.channel_count(), 0);
        assert_eq!(playlist.as_str(), expected);
        assert_eq!(complete(&catalogue, &settings).as_str().lines().count(), 4);
    }

    #[test]
    fn test_views_are_deterministic() {
        let catalogue = Catalogue::builtin();
        let settings = PlaylistSettings::default();
        assert_eq!(
            by_category(&catalogue, &settings).into_string(),
            by_category(&catalogue, &settings).into_string()
        );
    }
}
