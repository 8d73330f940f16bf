// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::LazyLock;

use regex::Regex;

use crate::wordpress::Article;

/// Full-size, centered image inserted through the WordPress editor
static FEATURED_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="size-full wp-image-\d+ aligncenter" src="([^"]+)""#)
        .expect("valid featured image regex")
});

/// `src` of the first editor-inserted featured image in a post body
pub fn find_image_in_body(html: &str) -> Option<&str> {
    FEATURED_IMAGE_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Logo URL for an article: the explicit thumbnail if the API sent one,
/// otherwise the first featured image in the body
pub fn resolve_image(article: &Article) -> Option<String> {
    article
        .thumbnail_url
        .clone()
        .or_else(|| find_image_in_body(&article.body_html).map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY_WITH_IMAGE: &str = r#"<p><img decoding="async" class="size-full wp-image-1234 aligncenter" src="https://example.com/uploads/logo.png" alt="" width="300" height="169" /></p>
<p><img class="size-full wp-image-99 aligncenter" src="https://example.com/uploads/second.png" /></p>"#;

    fn article(body: &str, thumbnail: Option<&str>) -> Article {
        Article {
            id: 1,
            title: "Channel".to_string(),
            body_html: body.to_string(),
            thumbnail_url: thumbnail.map(String::from),
        }
    }

    #[test]
    fn finds_first_featured_image() {
        assert_eq!(
            find_image_in_body(BODY_WITH_IMAGE),
            Some("https://example.com/uploads/logo.png")
        );
    }

    #[test]
    fn ignores_images_with_other_classes() {
        let body = r#"<img class="size-medium wp-image-1 alignleft" src="https://example.com/a.png" />
<img class="size-full wp-image-abc aligncenter" src="https://example.com/b.png" />"#;

        assert_eq!(find_image_in_body(body), None);
    }

    #[test]
    fn thumbnail_wins_over_body() {
        let article = article(BODY_WITH_IMAGE, Some("https://cdn.example.com/thumb.jpg"));

        assert_eq!(
            resolve_image(&article),
            Some("https://cdn.example.com/thumb.jpg".to_string())
        );
    }

    #[test]
    fn falls_back_to_body_image() {
        let article = article(BODY_WITH_IMAGE, None);

        assert_eq!(
            resolve_image(&article),
            Some("https://example.com/uploads/logo.png".to_string())
        );
    }

    #[test]
    fn no_image_is_absent() {
        let article = article("<p>just text</p>", None);

        assert_eq!(resolve_image(&article), None);
    }
}
