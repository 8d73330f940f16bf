// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Fetch a URL and return its body as text.
///
/// Any transport error or non-2xx final status is reported as a
/// `FetchFailed` event and returned to the caller, which decides whether
/// it is fatal.
pub async fn fetch_text<C: HttpClient>(
    client: &C,
    url: &str,
    reporter: &SharedProgressReporter,
) -> Result<String, FetchError> {
    let result = request_text(client, url).await;

    if let Err(e) = &result {
        reporter.report(ProgressEvent::FetchFailed {
            url: url.to_string(),
            error: e.to_string(),
        });
    }

    result
}

async fn request_text<C: HttpClient>(client: &C, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    Ok(String::from_utf8_lossy(&response.body).into_owned())
}
