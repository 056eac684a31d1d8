//! Builtin Channel Catalogue
//!
//! Hand-curated Tata Sky/Play line-up embedded at build time.
//! Every view and export is derived from this table.

use crate::channel::ChannelRecord;

/// Static definition of a builtin channel
#[derive(Debug, Clone, Copy)]
pub struct BuiltinChannel {
    pub name: &'static str,
    pub id: &'static str,
    pub logo: &'static str,
    pub group: &'static str,
    pub hd: bool,
    pub epg: Option<u32>,
}

const fn ch(
    name: &'static str,
    id: &'static str,
    logo: &'static str,
    group: &'static str,
    hd: bool,
    epg: Option<u32>,
) -> BuiltinChannel {
    BuiltinChannel {
        name,
        id,
        logo,
        group,
        hd,
        epg,
    }
}

/// Builtin catalogue, in playlist order
#[rustfmt::skip]
pub const BUILTIN_CHANNELS: &[BuiltinChannel] = &[
    // Hindi Entertainment
    ch("Star Plus", "starplus", "https://i.imgur.com/1.png", "Hindi Entertainment", false, Some(117)),
    ch("Star Plus HD", "starplus_hd", "https://i.imgur.com/1hd.png", "Hindi Entertainment", true, Some(115)),
    ch("Star Bharat", "starbharat", "https://i.imgur.com/2.png", "Hindi Entertainment", false, Some(122)),
    ch("Star Bharat HD", "starbharat_hd", "https://i.imgur.com/2hd.png", "Hindi Entertainment", true, Some(121)),
    ch("Sony Entertainment Television", "sony_ent", "https://i.imgur.com/3.png", "Hindi Entertainment", false, Some(130)),
    ch("Sony Entertainment Television HD", "sony_ent_hd", "https://i.imgur.com/3hd.png", "Hindi Entertainment", true, Some(128)),
    ch("Sony SAB", "sony_sab", "https://i.imgur.com/4.png", "Hindi Entertainment", false, Some(134)),
    ch("Sony SAB HD", "sony_sab_hd", "https://i.imgur.com/4hd.png", "Hindi Entertainment", true, Some(132)),
    ch("&TV", "andtv", "https://i.imgur.com/5.png", "Hindi Entertainment", false, Some(139)),
    ch("&TV HD", "andtv_hd", "https://i.imgur.com/5hd.png", "Hindi Entertainment", true, Some(137)),
    ch("Zee TV", "zeetv", "https://i.imgur.com/6.png", "Hindi Entertainment", false, Some(143)),
    ch("Zee TV HD", "zeetv_hd", "https://i.imgur.com/6hd.png", "Hindi Entertainment", true, Some(141)),
    ch("Colors", "colors", "https://i.imgur.com/7.png", "Hindi Entertainment", false, Some(149)),
    ch("Colors HD", "colors_hd", "https://i.imgur.com/7hd.png", "Hindi Entertainment", true, Some(147)),
    // Hindi Movies
    ch("Star Gold", "stargold", "https://i.imgur.com/8.png", "Hindi Movies", false, Some(150)),
    ch("Star Gold HD", "stargold_hd", "https://i.imgur.com/8hd.png", "Hindi Movies", true, Some(148)),
    ch("Star Gold 2", "stargold2", "https://i.imgur.com/9.png", "Hindi Movies", false, Some(152)),
    ch("Star Gold 2 HD", "stargold2_hd", "https://i.imgur.com/9hd.png", "Hindi Movies", true, Some(151)),
    ch("Sony Max", "sonymax", "https://i.imgur.com/10.png", "Hindi Movies", false, Some(154)),
    ch("Sony Max HD", "sonymax_hd", "https://i.imgur.com/10hd.png", "Hindi Movies", true, Some(153)),
    ch("Sony Max 2", "sonymax2", "https://i.imgur.com/11.png", "Hindi Movies", false, Some(156)),
    ch("Sony Max 2 HD", "sonymax2_hd", "https://i.imgur.com/11hd.png", "Hindi Movies", true, Some(155)),
    ch("Zee Cinema", "zeecinema", "https://i.imgur.com/12.png", "Hindi Movies", false, Some(158)),
    ch("Zee Cinema HD", "zeecinema_hd", "https://i.imgur.com/12hd.png", "Hindi Movies", true, Some(157)),
    // News
    ch("Aaj Tak", "aajtak", "https://i.imgur.com/13.png", "News", false, Some(200)),
    ch("India Today", "indiatoday", "https://i.imgur.com/14.png", "News", false, Some(201)),
    ch("NDTV 24x7", "ndtv24x7", "https://i.imgur.com/15.png", "News", false, Some(202)),
    ch("Times Now", "timesnow", "https://i.imgur.com/16.png", "News", false, Some(203)),
    ch("Republic TV", "republictv", "https://i.imgur.com/17.png", "News", false, Some(204)),
    // Sports
    ch("Star Sports 1", "starsports1", "https://i.imgur.com/18.png", "Sports", false, Some(300)),
    ch("Star Sports 1 HD", "starsports1_hd", "https://i.imgur.com/18hd.png", "Sports", true, Some(298)),
    ch("Star Sports 2", "starsports2", "https://i.imgur.com/19.png", "Sports", false, Some(301)),
    ch("Star Sports 2 HD", "starsports2_hd", "https://i.imgur.com/19hd.png", "Sports", true, Some(299)),
    ch("Star Sports 3", "starsports3", "https://i.imgur.com/20.png", "Sports", false, Some(302)),
    ch("Star Sports 3 HD", "starsports3_hd", "https://i.imgur.com/20hd.png", "Sports", true, Some(303)),
    ch("Sony Sports Ten 1", "sonysportsten1", "https://i.imgur.com/21.png", "Sports", false, Some(304)),
    ch("Sony Sports Ten 1 HD", "sonysportsten1_hd", "https://i.imgur.com/21hd.png", "Sports", true, Some(305)),
    ch("Sony Sports Ten 2", "sonysportsten2", "https://i.imgur.com/22.png", "Sports", false, Some(306)),
    ch("Sony Sports Ten 2 HD", "sonysportsten2_hd", "https://i.imgur.com/22hd.png", "Sports", true, Some(307)),
    ch("Sony Sports Ten 3", "sonysportsten3", "https://i.imgur.com/23.png", "Sports", false, Some(308)),
    ch("Sony Sports Ten 3 HD", "sonysportsten3_hd", "https://i.imgur.com/23hd.png", "Sports", true, Some(309)),
    // English Entertainment
    ch("Star World Premiere HD", "starworld_hd", "https://i.imgur.com/24hd.png", "English Entertainment", true, Some(208)),
    ch("WB", "wb", "https://i.imgur.com/25.png", "English Entertainment", false, Some(369)),
    ch("Zee Cafe", "zeecafe", "https://i.imgur.com/26.png", "English Entertainment", false, Some(220)),
    ch("Zee Cafe HD", "zeecafe_hd", "https://i.imgur.com/26hd.png", "English Entertainment", true, Some(221)),
    // Kids
    ch("Cartoon Network", "cartoonnetwork", "https://i.imgur.com/27.png", "Kids", false, Some(400)),
    ch("Cartoon Network HD", "cartoonnetwork_hd", "https://i.imgur.com/27hd.png", "Kids", true, Some(401)),
    ch("Pogo", "pogo", "https://i.imgur.com/28.png", "Kids", false, Some(402)),
    ch("Nickelodeon", "nickelodeon", "https://i.imgur.com/29.png", "Kids", false, Some(403)),
    ch("Nick HD", "nickhd", "https://i.imgur.com/29hd.png", "Kids", true, Some(404)),
    // Regional (Tamil)
    ch("Sun TV", "suntv", "https://i.imgur.com/30.png", "Regional Tamil", false, Some(500)),
    ch("Sun TV HD", "suntv_hd", "https://i.imgur.com/30hd.png", "Regional Tamil", true, Some(501)),
    ch("Sun Music", "sunmusic", "https://i.imgur.com/31.png", "Regional Tamil", false, Some(502)),
    ch("Sun Music HD", "sunmusic_hd", "https://i.imgur.com/31hd.png", "Regional Tamil", true, Some(503)),
    ch("Sun News", "sunnews", "https://i.imgur.com/32.png", "Regional Tamil", false, Some(504)),
    // Regional (Telugu)
    ch("ETV Telugu", "etvtelugu", "https://i.imgur.com/33.png", "Regional Telugu", false, Some(510)),
    ch("ETV Telugu HD", "etvtelugu_hd", "https://i.imgur.com/33hd.png", "Regional Telugu", true, Some(511)),
    ch("Gemini TV", "geminiv", "https://i.imgur.com/34.png", "Regional Telugu", false, Some(512)),
    ch("Gemini TV HD", "geminiv_hd", "https://i.imgur.com/34hd.png", "Regional Telugu", true, Some(513)),
    // Regional (Kannada)
    ch("Udaya TV", "udayatv", "https://i.imgur.com/35.png", "Regional Kannada", false, Some(520)),
    ch("Udaya TV HD", "udayatv_hd", "https://i.imgur.com/35hd.png", "Regional Kannada", true, Some(521)),
    ch("Udaya Music", "udayamusic", "https://i.imgur.com/36.png", "Regional Kannada", false, Some(522)),
    // Regional (Malayalam)
    ch("Asianet", "asianet", "https://i.imgur.com/37.png", "Regional Malayalam", false, Some(530)),
    ch("Asianet HD", "asianet_hd", "https://i.imgur.com/37hd.png", "Regional Malayalam", true, Some(531)),
    ch("Surya TV", "suryatv", "https://i.imgur.com/38.png", "Regional Malayalam", false, Some(532)),
    ch("Surya TV HD", "suryatv_hd", "https://i.imgur.com/38hd.png", "Regional Malayalam", true, Some(533)),
    // Regional (Bengali)
    ch("Zee Bangla", "zeebangla", "https://i.imgur.com/39.png", "Regional Bengali", false, Some(540)),
    ch("Zee Bangla HD", "zeebangla_hd", "https://i.imgur.com/39hd.png", "Regional Bengali", true, Some(541)),
    ch("Zee Bangla Cinema", "zeebanglacinema", "https://i.imgur.com/40.png", "Regional Bengali", false, Some(542)),
    // Regional (Marathi)
    ch("Zee Marathi", "zeemarathi", "https://i.imgur.com/41.png", "Regional Marathi", false, Some(550)),
    ch("Zee Marathi HD", "zeemarathi_hd", "https://i.imgur.com/41hd.png", "Regional Marathi", true, Some(551)),
    ch("Zee Marathi Cinema", "zeemarathicinema", "https://i.imgur.com/42.png", "Regional Marathi", false, Some(552)),
    // Regional (Gujarati)
    ch("Zee Gujarati", "zeegujarati", "https://i.imgur.com/43.png", "Regional Gujarati", false, Some(560)),
    ch("Zee Gujarati HD", "zeegujarati_hd", "https://i.imgur.com/43hd.png", "Regional Gujarati", true, Some(561)),
    ch("Zee Gujarati Cinema", "zeegujaratcinema", "https://i.imgur.com/44.png", "Regional Gujarati", false, Some(562)),
    // Music
    ch("9XM", "9xm", "https://i.imgur.com/45.png", "Music", false, Some(600)),
    ch("MTV India", "mtvindia", "https://i.imgur.com/46.png", "Music", false, Some(601)),
    ch("Bollywood HD", "bollywoodhd", "https://i.imgur.com/47hd.png", "Music", true, Some(602)),
    ch("Bollywood Beats", "bollywoodbeats", "https://i.imgur.com/48.png", "Music", false, Some(603)),
    // Lifestyle & Infotainment
    ch("Discovery Channel", "discovery", "https://i.imgur.com/49.png", "Lifestyle & Infotainment", false, Some(700)),
    ch("Discovery Channel HD", "discovery_hd", "https://i.imgur.com/49hd.png", "Lifestyle & Infotainment", true, Some(701)),
    ch("National Geographic", "natgeo", "https://i.imgur.com/50.png", "Lifestyle & Infotainment", false, Some(702)),
    ch("National Geographic HD", "natgeo_hd", "https://i.imgur.com/50hd.png", "Lifestyle & Infotainment", true, Some(703)),
    ch("Animal Planet", "animalplanet", "https://i.imgur.com/51.png", "Lifestyle & Infotainment", false, Some(704)),
    ch("Animal Planet HD", "animalplanet_hd", "https://i.imgur.com/51hd.png", "Lifestyle & Infotainment", true, Some(705)),
    // Religious
    ch("Aastha TV", "aasthatv", "https://i.imgur.com/52.png", "Religious", false, Some(800)),
    ch("Sadhna TV", "sadhnav", "https://i.imgur.com/53.png", "Religious", false, Some(801)),
    ch("Sanskar TV", "sanskartv", "https://i.imgur.com/54.png", "Religious", false, Some(802)),
    // Shopping
    ch("Jewellery TV", "jewellerytv", "https://i.imgur.com/55.png", "Shopping", false, Some(900)),
    ch("Fashion TV", "fashiontv", "https://i.imgur.com/56.png", "Shopping", false, Some(901)),
];

impl From<&BuiltinChannel> for ChannelRecord {
    fn from(builtin: &BuiltinChannel) -> Self {
        Self {
            name: builtin.name.to_string(),
            id: builtin.id.to_string(),
            logo: builtin.logo.to_string(),
            group: builtin.group.to_string(),
            hd: builtin.hd,
            epg: builtin.epg,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_channels_exist() {
        assert_eq!(BUILTIN_CHANNELS.len(), 90);
        assert!(BUILTIN_CHANNELS.iter().any(|c| c.id == "starplus"));
        assert!(BUILTIN_CHANNELS.iter().any(|c| c.id == "fashiontv"));
    }

    #[test]
    fn test_builtin_ids_unique() {
        let ids: HashSet<_> = BUILTIN_CHANNELS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), BUILTIN_CHANNELS.len());
    }

    #[test]
    fn test_builtin_ids_lowercase() {
        for c in BUILTIN_CHANNELS {
            assert_eq!(c.id, c.id.to_lowercase(), "id not lowercase: {}", c.id);
        }
    }

    #[test]
    fn test_builtin_split() {
        let hd = BUILTIN_CHANNELS.iter().filter(|c| c.hd).count();
        assert_eq!(hd, 36);
        assert_eq!(BUILTIN_CHANNELS.len() - hd, 54);

        let groups: HashSet<_> = BUILTIN_CHANNELS.iter().map(|c| c.group).collect();
        assert_eq!(groups.len(), 17);
    }

    #[test]
    fn test_record_from_builtin() {
        let builtin = &BUILTIN_CHANNELS[1];
        let record = ChannelRecord::from(builtin);
        assert_eq!(record.id, "starplus_hd");
        assert_eq!(record.name, "Star Plus HD");
        assert!(record.hd);
        assert_eq!(record.epg, Some(115));
    }
}
