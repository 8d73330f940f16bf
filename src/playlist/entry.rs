// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Written in place of a missing logo URL
pub const LOGO_PLACEHOLDER: &str = "None";

/// One playable channel discovered in a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub category_name: String,
    pub title: String,
    pub stream_url: String,
    pub logo_url: Option<String>,
}

impl ChannelEntry {
    /// The `#EXTINF` line and the stream URL line of this entry, without a
    /// trailing newline
    pub fn to_m3u(&self) -> String {
        let logo = self
            .logo_url
            .as_deref()
            .filter(|logo| !logo.is_empty())
            .unwrap_or(LOGO_PLACEHOLDER);

        format!(
            "#EXTINF:-1 tvg-id=\"{title}\" tvg-name=\"{title}\" tvg-logo=\"{logo}\" group-title=\"{group}\",{title}\n{url}",
            title = self.title,
            group = self.category_name,
            url = self.stream_url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(logo_url: Option<&str>) -> ChannelEntry {
        ChannelEntry {
            category_name: "Movies".to_string(),
            title: "Cine 1".to_string(),
            stream_url: "https://cdn.example.com/cine1.m3u8".to_string(),
            logo_url: logo_url.map(String::from),
        }
    }

    #[test]
    fn to_m3u_writes_attributes_in_order() {
        assert_eq!(
            entry(Some("https://example.com/cine1.png")).to_m3u(),
            "#EXTINF:-1 tvg-id=\"Cine 1\" tvg-name=\"Cine 1\" tvg-logo=\"https://example.com/cine1.png\" group-title=\"Movies\",Cine 1\nhttps://cdn.example.com/cine1.m3u8"
        );
    }

    #[test]
    fn missing_logo_uses_placeholder() {
        assert!(entry(None).to_m3u().contains("tvg-logo=\"None\""));
        assert!(entry(Some("")).to_m3u().contains("tvg-logo=\"None\""));
    }
}
