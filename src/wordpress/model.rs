// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;
use serde_json::Value;

/// A category as returned by the REST API, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// A category with both an id and a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl CategoryRecord {
    /// The validated category, or `None` if the id is missing or zero or
    /// the name is missing or empty
    pub fn usable(&self) -> Option<Category> {
        let id = self.id.filter(|id| *id != 0)?;
        let name = self.name.as_deref().filter(|n| !n.is_empty())?;

        Some(Category {
            id,
            name: name.to_string(),
        })
    }
}

/// A `{ "rendered": "..." }` field of a post
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    pub rendered: Option<String>,
}

/// A post as returned by the REST API, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRecord {
    pub id: Option<i64>,
    pub title: Option<Rendered>,
    pub content: Option<Rendered>,
    /// Some sites expose a pre-resolved featured image. Kept untyped so a
    /// `false` or `null` placeholder does not fail the whole page.
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<Value>,
}

/// A post with an id, a title and a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body_html: String,
    pub thumbnail_url: Option<String>,
}

impl PostRecord {
    /// The validated article, or `None` if the id is missing or zero or the
    /// title or body is missing or empty
    pub fn usable(&self) -> Option<Article> {
        let id = self.id.filter(|id| *id != 0)?;
        let title = non_empty_rendered(self.title.as_ref())?;
        let body_html = non_empty_rendered(self.content.as_ref())?;

        let thumbnail_url = self
            .thumbnail_url
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from);

        Some(Article {
            id,
            title: title.to_string(),
            body_html: body_html.to_string(),
            thumbnail_url,
        })
    }
}

fn non_empty_rendered(field: Option<&Rendered>) -> Option<&str> {
    field
        .and_then(|f| f.rendered.as_deref())
        .filter(|s| !s.is_empty())
}
