// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

/// REST API root of the site harvested when no other base URL is given
pub const DEFAULT_BASE_URL: &str = "https://ultratvonline.org/wp-json/wp/v2/";

/// The two REST endpoints the harvester talks to, resolved against one base URL
#[derive(Debug, Clone)]
pub struct Endpoints {
    categories: Url,
    posts: Url,
}

impl Endpoints {
    /// Resolve the endpoints against `base_url`.
    ///
    /// A missing trailing slash is added, so `.../wp/v2` and `.../wp/v2/`
    /// resolve to the same endpoints.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            categories: base.join("categories")?,
            posts: base.join("posts")?,
        })
    }

    /// URL listing all categories
    pub fn categories_url(&self) -> &Url {
        &self.categories
    }

    /// URL of one page of posts in a category
    pub fn posts_url(&self, category_id: i64, page: u32, per_page: usize) -> Url {
        let mut url = self.posts.clone();
        url.query_pairs_mut()
            .append_pair("categories", &category_id.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        url
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("valid default base URL")
    }
}
