use std::sync::Arc;

/// Events emitted during a harvest run for progress reporting and diagnostics
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Category list is being fetched
    FetchingCategories { url: String },

    /// Category list has been parsed
    CategoriesListed { total: usize },

    /// A category record lacked an id or a name
    CategorySkipped {
        id: Option<i64>,
        name: Option<String>,
    },

    /// Posts of a category are being retrieved
    FetchingCategory { category_id: i64, name: String },

    /// A single page of posts is being requested
    FetchingPage { category_id: i64, page: u32 },

    /// A request failed at the transport or HTTP level
    FetchFailed { url: String, error: String },

    /// A page of posts was not a valid JSON array of posts
    PageParseFailed {
        category_id: i64,
        page: u32,
        error: String,
    },

    /// A page came back empty, ending pagination
    PageEmpty { category_id: i64, page: u32 },

    /// A category yielded no posts at all
    CategoryEmpty { name: String },

    /// A post record lacked an id, a title or a body
    PostSkipped {
        category_name: String,
        post_id: Option<i64>,
    },

    /// A post was scanned for streams
    PostHarvested {
        category_name: String,
        title: String,
        /// Number of stream URLs found (each becomes one playlist entry)
        streams: usize,
    },

    /// Playlist file was written
    PlaylistWritten { path: String, entries: usize },
}

/// Trait for reporting progress events during a harvest.
///
/// Implementations can use this to display progress, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

/// Reporter that keeps every event, for asserting on diagnostics in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    events: std::sync::Mutex<Vec<ProgressEvent>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}
