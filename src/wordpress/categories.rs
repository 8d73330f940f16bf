// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CategoryError;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

use super::endpoints::Endpoints;
use super::fetch::fetch_text;
use super::model::CategoryRecord;

/// Parse a categories response body
pub fn parse_categories(json: &str) -> Result<Vec<CategoryRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Fetch the site's category list with a single request.
///
/// Records are returned as the API sent them; filtering out categories
/// without an id or a name is left to the caller.
pub async fn list_categories<C: HttpClient>(
    client: &C,
    endpoints: &Endpoints,
    reporter: &SharedProgressReporter,
) -> Result<Vec<CategoryRecord>, CategoryError> {
    let url = endpoints.categories_url().as_str();

    reporter.report(ProgressEvent::FetchingCategories {
        url: url.to_string(),
    });

    let body = fetch_text(client, url, reporter).await?;
    let categories = parse_categories(&body).map_err(|e| CategoryError::ParseFailed {
        url: url.to_string(),
        source: e,
    })?;

    reporter.report(ProgressEvent::CategoriesListed {
        total: categories.len(),
    });

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttpClient;
    use crate::progress::NoopReporter;

    const CATEGORIES_URL: &str = "https://example.com/wp-json/wp/v2/categories";

    fn endpoints() -> Endpoints {
        Endpoints::new("https://example.com/wp-json/wp/v2/").unwrap()
    }

    #[tokio::test]
    async fn lists_categories_verbatim() {
        let client = MockHttpClient::new().with_json(
            CATEGORIES_URL,
            r#"[{"id": 1, "name": "News"}, {"id": 2}, {"name": "Orphan"}]"#,
        );

        let categories = list_categories(&client, &endpoints(), &NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].name.as_deref(), Some("News"));
        assert_eq!(categories[1].name, None);
        assert_eq!(categories[2].id, None);
        assert_eq!(client.requests(), vec![CATEGORIES_URL]);
    }

    #[tokio::test]
    async fn fetch_failure_is_an_error() {
        let client = MockHttpClient::new().with_response(CATEGORIES_URL, 503, "down");

        let result = list_categories(&client, &endpoints(), &NoopReporter::shared()).await;

        assert!(matches!(result, Err(CategoryError::Fetch(_))));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let client = MockHttpClient::new().with_json(CATEGORIES_URL, "<html>not json</html>");

        let result = list_categories(&client, &endpoints(), &NoopReporter::shared()).await;

        match result {
            Err(CategoryError::ParseFailed { url, .. }) => assert_eq!(url, CATEGORIES_URL),
            other => panic!("Expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_categories("[]").unwrap().is_empty());
    }
}
