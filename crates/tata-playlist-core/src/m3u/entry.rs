//! EXTINF entry rendering
//!
//! Every directive line goes through [`ExtInf`], so attribute escaping lives in one place.

use std::borrow::Cow;

use super::PlaylistSettings;
use crate::channel::ChannelRecord;

pub const EXTM3U: &str = "#EXTM3U";
pub const EXTINF: &str = "#EXTINF:-1";
pub const EXTVLCOPT: &str = "#EXTVLCOPT:";

/// Builder for a single `#EXTINF` line
#[derive(Debug, Clone)]
pub struct ExtInf<'a> {
    attributes: Vec<(&'static str, Cow<'a, str>)>,
    title: Cow<'a, str>,
    title_separator: &'static str,
}

impl<'a> ExtInf<'a> {
    pub fn new(title: impl Into<Cow<'a, str>>) -> Self {
        Self {
            attributes: Vec::new(),
            title: title.into(),
            title_separator: ", ",
        }
    }

    /// Add a `key="value"` attribute; order is preserved
    pub fn attr(mut self, key: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    /// Add an attribute only when a value is present
    pub fn attr_opt<V>(self, key: &'static str, value: Option<V>) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    /// Title directly after the comma (header style)
    pub fn tight_title(mut self) -> Self {
        self.title_separator = ",";
        self
    }

    pub fn render(&self, out: &mut String) {
        out.push_str(EXTINF);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push_str(self.title_separator);
        out.push_str(&escape_title(&self.title));
        out.push('\n');
    }
}

/// Make a value safe inside a double-quoted attribute
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if value.contains(['"', '\r', '\n']) {
        Cow::Owned(
            value
                .chars()
                .map(|c| match c {
                    '"' => '\'',
                    '\r' | '\n' => ' ',
                    other => other,
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

/// Keep a title on one line
pub fn escape_title(value: &str) -> Cow<'_, str> {
    if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// The two `#EXTVLCOPT` lines shared by the header and every entry
pub fn client_options(settings: &PlaylistSettings, out: &mut String) {
    out.push_str(EXTVLCOPT);
    out.push_str("http-user-agent=");
    out.push_str(&escape_title(&settings.user_agent));
    out.push('\n');
    out.push_str(EXTVLCOPT);
    out.push_str("http-referrer=");
    out.push_str(&escape_title(&settings.referrer));
    out.push('\n');
}

/// Playlist header block
pub fn header(title: &str, settings: &PlaylistSettings, out: &mut String) {
    out.push_str(EXTM3U);
    out.push_str(" x-tvg-url=\"");
    out.push_str(&escape_attr(&settings.epg_url));
    out.push_str("\"\n");

    ExtInf::new(title)
        .attr("tvg-name", title)
        .attr("tvg-logo", settings.header_logo.as_str())
        .attr("group-title", "INFO")
        .tight_title()
        .render(out);
    client_options(settings, out);
}

/// Entry block for one channel
pub fn channel_entry(record: &ChannelRecord, settings: &PlaylistSettings, out: &mut String) {
    let display_name = record.display_name();

    ExtInf::new(display_name.as_str())
        .attr("tvg-id", record.id.as_str())
        .attr("tvg-name", display_name.as_str())
        .attr("tvg-logo", record.logo.as_str())
        .attr("group-title", record.group.as_str())
        .attr_opt("tvg-chno", record.channel_number().map(|n| n.to_string()))
        .render(out);
    client_options(settings, out);
}

/// Separator entry opening a category section, followed by a blank line
pub fn category_separator(group: &str, settings: &PlaylistSettings, out: &mut String) {
    ExtInf::new(format!("{} Channels", group))
        .attr("group-title", group)
        .attr("tvg-logo", settings.separator_logo.as_str())
        .render(out);
    client_options(settings, out);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    const UA_LINE: &str = "#EXTVLCOPT:http-user-agent=Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36\n";
    const REFERRER_LINE: &str = "#EXTVLCOPT:http-referrer=https://www.tataplay.com/\n";

    fn render_entry(record: &ChannelRecord) -> String {
        let mut out = String::new();
        channel_entry(record, &PlaylistSettings::default(), &mut out);
        out
    }

    #[test]
    fn test_channel_entry_sd() {
        let record = ChannelRecord::new(
            "Star Plus",
            "starplus",
            "https://i.imgur.com/1.png",
            "Hindi Entertainment",
        )
        .with_epg(117);

        let expected = format!(
            "#EXTINF:-1 tvg-id=\"starplus\" tvg-name=\"Star Plus\" tvg-logo=\"https://i.imgur.com/1.png\" group-title=\"Hindi Entertainment\" tvg-chno=\"117\", Star Plus\n{}{}",
            UA_LINE, REFERRER_LINE
        );
        assert_eq!(render_entry(&record), expected);
    }

    #[test]
    fn test_channel_entry_hd_suffix() {
        let record = ChannelRecord::new("Zee Cafe HD", "zeecafe_hd", "l", "English Entertainment")
            .hd()
            .with_epg(221);
        let entry = render_entry(&record);
        assert!(entry.contains("tvg-name=\"Zee Cafe HD HD\""));
        assert!(entry.lines().next().unwrap().ends_with(", Zee Cafe HD HD"));
    }

    #[test]
    fn test_channel_entry_without_epg() {
        let record = ChannelRecord::new("A", "a", "", "G");
        let entry = render_entry(&record);
        assert!(!entry.contains("tvg-chno"));
        assert!(entry.starts_with(
            "#EXTINF:-1 tvg-id=\"a\" tvg-name=\"A\" tvg-logo=\"\" group-title=\"G\", A\n"
        ));
        assert_eq!(entry.lines().count(), 3);
    }

    #[test]
    fn test_ampersand_kept_quotes_replaced() {
        let record = ChannelRecord::new("Say \"Hi\" & Co", "hi", "", "Lifestyle & Infotainment");
        let entry = render_entry(&record);
        assert!(entry.contains("tvg-name=\"Say 'Hi' & Co\""));
        assert!(entry.contains("group-title=\"Lifestyle & Infotainment\""));
        assert!(entry.contains(", Say \"Hi\" & Co\n"));
    }

    #[test]
    fn test_newlines_never_split_entry() {
        let record = ChannelRecord::new("Two\nLines", "two", "", "G\r\nX");
        let entry = render_entry(&record);
        assert_eq!(entry.lines().count(), 3);
        assert!(entry.contains("group-title=\"G  X\""));
    }

    #[test]
    fn test_header_block() {
        let mut out = String::new();
        header("Tata Sky HD Channels", &PlaylistSettings::default(), &mut out);
        let expected = format!(
            "#EXTM3U x-tvg-url=\"https://raw.githubusercontent.com/iptv-org/epg/master/xml/tata_play.xml\"\n\
             #EXTINF:-1 tvg-name=\"Tata Sky HD Channels\" tvg-logo=\"https://www.tataplay.com/images/logo.png\" group-title=\"INFO\",Tata Sky HD Channels\n{}{}",
            UA_LINE, REFERRER_LINE
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_category_separator() {
        let mut out = String::new();
        category_separator("Kids", &PlaylistSettings::default(), &mut out);
        let expected = format!(
            "#EXTINF:-1 group-title=\"Kids\" tvg-logo=\"https://i.imgur.com/1.png\", Kids Channels\n{}{}\n",
            UA_LINE, REFERRER_LINE
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_escape_borrows_clean_values() {
        assert!(matches!(escape_attr("plain & simple"), Cow::Borrowed(_)));
        assert!(matches!(escape_title("plain"), Cow::Borrowed(_)));
    }
}
