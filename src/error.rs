// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching a single URL
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

/// Errors that can occur when listing the site's categories
#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("Failed to fetch categories: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse categories JSON from {url}: {source}")]
    ParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when writing the playlist file
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("Failed to write playlist {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors for a harvest run
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Category error: {0}")]
    Categories(#[from] CategoryError),

    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),
}
