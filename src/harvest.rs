// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::error::HarvestError;
use crate::extract::extract_entries;
use crate::http::HttpClient;
use crate::playlist::{ChannelEntry, write_playlist};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::wordpress::{Endpoints, list_categories, list_posts};

/// Result of a harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestResult {
    /// Channel entries in discovery order
    pub entries: Vec<ChannelEntry>,
    /// Categories whose posts were retrieved
    pub categories_processed: usize,
    /// Categories skipped for lacking an id or a name
    pub categories_skipped: usize,
    /// Posts scanned for streams
    pub posts_processed: usize,
    /// Posts skipped for lacking an id, a title or a body
    pub posts_skipped: usize,
}

/// Walk every category and post of the site and collect channel entries.
///
/// Requests are issued one at a time, categories in the order the API lists
/// them and posts in page order. Only a failure to obtain the category list
/// is fatal.
pub async fn harvest<C: HttpClient>(
    client: &C,
    endpoints: &Endpoints,
    reporter: &SharedProgressReporter,
) -> Result<HarvestResult, HarvestError> {
    let categories = list_categories(client, endpoints, reporter).await?;
    let mut result = HarvestResult::default();

    for record in categories {
        let Some(category) = record.usable() else {
            reporter.report(ProgressEvent::CategorySkipped {
                id: record.id,
                name: record.name,
            });
            result.categories_skipped += 1;
            continue;
        };

        reporter.report(ProgressEvent::FetchingCategory {
            category_id: category.id,
            name: category.name.clone(),
        });

        let posts = list_posts(client, endpoints, category.id, reporter).await;
        result.categories_processed += 1;

        if posts.is_empty() {
            reporter.report(ProgressEvent::CategoryEmpty {
                name: category.name,
            });
            continue;
        }

        for post in posts {
            let Some(article) = post.usable() else {
                reporter.report(ProgressEvent::PostSkipped {
                    category_name: category.name.clone(),
                    post_id: post.id,
                });
                result.posts_skipped += 1;
                continue;
            };

            let entries = extract_entries(&category.name, &article);

            reporter.report(ProgressEvent::PostHarvested {
                category_name: category.name.clone(),
                title: article.title,
                streams: entries.len(),
            });

            result.posts_processed += 1;
            result.entries.extend(entries);
        }
    }

    Ok(result)
}

/// Harvest the site at `base_url` and write the playlist to `output_path`
///
/// This is the main entry point for the library.
pub async fn generate_playlist<C: HttpClient>(
    client: &C,
    base_url: &str,
    output_path: &Path,
    reporter: SharedProgressReporter,
) -> Result<HarvestResult, HarvestError> {
    let endpoints = Endpoints::new(base_url)?;
    let result = harvest(client, &endpoints, &reporter).await?;

    write_playlist(&result.entries, output_path)?;

    reporter.report(ProgressEvent::PlaylistWritten {
        path: output_path.display().to_string(),
        entries: result.entries.len(),
    });

    Ok(result)
}
