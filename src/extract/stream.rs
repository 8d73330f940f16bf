// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// An HTTPS URL ending in `.m3u8`, not crossing a quote
static DIRECT_STREAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://[^"']*\.m3u8"#).expect("valid direct stream regex")
});

/// An embedmax player page URL, up to the closing quote
static EMBED_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://abc\.embedmax\.site/[^"']*"#).expect("valid embed URL regex")
});

const EMBED_PAGE_SUFFIX: &str = "/embed.html?autoplay=0";
const EMBED_TRACK_SUFFIX: &str = "/tracks-v1/index.fmp4.m3u8";

/// All direct `.m3u8` URLs in a post body, left to right
pub fn find_direct_streams(html: &str) -> Vec<&str> {
    DIRECT_STREAM_REGEX
        .find_iter(html)
        .map(|m| m.as_str())
        .collect()
}

/// All embedmax player URLs in a post body, left to right
pub fn find_embed_urls(html: &str) -> Vec<&str> {
    EMBED_URL_REGEX
        .find_iter(html)
        .map(|m| m.as_str())
        .collect()
}

/// Turn an embedmax player page URL into the URL of its HLS track.
///
/// Only a trailing `/embed.html?autoplay=0` is replaced; anything else is
/// returned unchanged.
pub fn rewrite_embed_url(url: &str) -> Cow<'_, str> {
    match url.strip_suffix(EMBED_PAGE_SUFFIX) {
        Some(base) => Cow::Owned(format!("{base}{EMBED_TRACK_SUFFIX}")),
        None => Cow::Borrowed(url),
    }
}

/// Every stream URL in a post body.
///
/// Direct `.m3u8` URLs come first in order of appearance, followed by the
/// rewritten embed URLs in order of appearance. Both passes always run, so a
/// URL matching both shapes is listed twice. Embed URLs without the player
/// page suffix are kept as found.
pub fn find_streams(html: &str) -> Vec<String> {
    let direct = find_direct_streams(html).into_iter().map(String::from);

    let embedded = find_embed_urls(html)
        .into_iter()
        .map(rewrite_embed_url)
        .map(Cow::into_owned);

    direct.chain(embedded).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_direct_streams_in_order() {
        let html = r#"<video src="https://cdn1.example.com/live/one.m3u8"></video>
<a href='https://cdn2.example.com/two/index.m3u8'>backup</a>"#;

        assert_eq!(
            find_direct_streams(html),
            vec![
                "https://cdn1.example.com/live/one.m3u8",
                "https://cdn2.example.com/two/index.m3u8"
            ]
        );
    }

    #[test]
    fn direct_stream_ignores_plain_http_and_other_extensions() {
        let html = r#"<a href="http://insecure.example.com/a.m3u8">x</a>
<a href="https://example.com/video.mp4">y</a>"#;

        assert!(find_direct_streams(html).is_empty());
    }

    #[test]
    fn rewrites_embed_page_to_track() {
        assert_eq!(
            rewrite_embed_url("https://abc.embedmax.site/x/y/embed.html?autoplay=0"),
            "https://abc.embedmax.site/x/y/tracks-v1/index.fmp4.m3u8"
        );
    }

    #[test]
    fn leaves_other_embed_urls_unchanged() {
        let url = "https://abc.embedmax.site/x/y/player.html";
        assert!(matches!(rewrite_embed_url(url), Cow::Borrowed(u) if u == url));
    }

    #[test]
    fn rewrite_touches_only_trailing_suffix() {
        let url = "https://abc.embedmax.site/x/embed.html?autoplay=0/y";
        assert_eq!(rewrite_embed_url(url), url);
    }

    #[test]
    fn finds_direct_then_embed_streams() {
        let html = r#"<iframe src="https://abc.embedmax.site/ch1/embed.html?autoplay=0"></iframe>
<p>Fallback: <a href="https://cdn.example.com/ch1.m3u8">link</a></p>"#;

        assert_eq!(
            find_streams(html),
            vec![
                "https://cdn.example.com/ch1.m3u8",
                "https://abc.embedmax.site/ch1/tracks-v1/index.fmp4.m3u8"
            ]
        );
    }

    #[test]
    fn url_matching_both_shapes_is_listed_twice() {
        let html = r#"<source src="https://abc.embedmax.site/ch2/index.m3u8">"#;

        assert_eq!(
            find_streams(html),
            vec![
                "https://abc.embedmax.site/ch2/index.m3u8",
                "https://abc.embedmax.site/ch2/index.m3u8"
            ]
        );
    }

    #[test]
    fn embed_urls_without_suffix_are_kept() {
        let html = r#"<iframe src="https://abc.embedmax.site/ch3/player.php"></iframe>
<iframe src="https://abc.embedmax.site/ch4/embed.html?autoplay=0"></iframe>
<a href="https://cdn.example.com/ch5.m3u8">x</a>"#;

        assert_eq!(
            find_streams(html),
            vec![
                "https://cdn.example.com/ch5.m3u8",
                "https://abc.embedmax.site/ch3/player.php",
                "https://abc.embedmax.site/ch4/tracks-v1/index.fmp4.m3u8"
            ]
        );
    }

    #[test]
    fn embed_with_other_autoplay_value_is_not_rewritten() {
        let html = r#"<iframe src="https://abc.embedmax.site/ch9/embed.html?autoplay=1"></iframe>"#;

        assert_eq!(
            find_streams(html),
            vec!["https://abc.embedmax.site/ch9/embed.html?autoplay=1"]
        );
    }

    #[test]
    fn no_streams_in_plain_text() {
        assert!(find_streams("<p>Coming soon</p>").is_empty());
    }
}
