// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

use super::endpoints::Endpoints;
use super::fetch::fetch_text;
use super::model::PostRecord;

/// Number of posts requested per page
pub const PAGE_SIZE: usize = 10;

/// Whether a page holding `returned_count` posts is the last one.
///
/// The API sends no total count, so a short page is the only reliable end
/// marker.
pub fn is_last_page(returned_count: usize, page_size: usize) -> bool {
    returned_count < page_size
}

/// Parse one page of posts
pub fn parse_posts(json: &str) -> Result<Vec<PostRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Retrieve every post of a category, one page at a time.
///
/// Stops on a short page, an empty page, a failed request or an unparsable
/// page. Failures are reported and whatever was collected before them is
/// returned.
pub async fn list_posts<C: HttpClient>(
    client: &C,
    endpoints: &Endpoints,
    category_id: i64,
    reporter: &SharedProgressReporter,
) -> Vec<PostRecord> {
    let mut posts = Vec::new();
    let mut page: u32 = 1;

    loop {
        let url = endpoints.posts_url(category_id, page, PAGE_SIZE);

        reporter.report(ProgressEvent::FetchingPage { category_id, page });

        // fetch_text reports the failure itself
        let Ok(body) = fetch_text(client, url.as_str(), reporter).await else {
            break;
        };

        let batch = match parse_posts(&body) {
            Ok(batch) => batch,
            Err(e) => {
                reporter.report(ProgressEvent::PageParseFailed {
                    category_id,
                    page,
                    error: e.to_string(),
                });
                break;
            }
        };

        if batch.is_empty() {
            reporter.report(ProgressEvent::PageEmpty { category_id, page });
            break;
        }

        let returned = batch.len();
        posts.extend(batch);
        page += 1;

        if is_last_page(returned, PAGE_SIZE) {
            break;
        }
    }

    posts
}
