mod image;
mod stream;

pub use image::{find_image_in_body, resolve_image};
pub use stream::{find_direct_streams, find_embed_urls, find_streams, rewrite_embed_url};

use crate::playlist::ChannelEntry;
use crate::wordpress::Article;

/// One playlist entry per stream URL found in the article, all sharing the
/// article's title and logo and the category name
pub fn extract_entries(category_name: &str, article: &Article) -> Vec<ChannelEntry> {
    let logo_url = resolve_image(article);

    find_streams(&article.body_html)
        .into_iter()
        .map(|stream_url| ChannelEntry {
            category_name: category_name.to_string(),
            title: article.title.clone(),
            stream_url,
            logo_url: logo_url.clone(),
        })
        .collect()
}
