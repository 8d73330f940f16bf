pub mod error;
pub mod extract;
pub mod harvest;
pub mod http;
pub mod playlist;
pub mod progress;
pub mod wordpress;

// Re-export main types for convenience
pub use error::{CategoryError, FetchError, HarvestError, PlaylistError};
pub use extract::{
    extract_entries, find_direct_streams, find_embed_urls, find_image_in_body, find_streams,
    resolve_image, rewrite_embed_url,
};
pub use harvest::{HarvestResult, generate_playlist, harvest};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use playlist::{ChannelEntry, DEFAULT_PLAYLIST_FILENAME, build_playlist, write_playlist};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use wordpress::{
    Article, Category, DEFAULT_BASE_URL, Endpoints, PAGE_SIZE, is_last_page, list_categories,
    list_posts,
};
