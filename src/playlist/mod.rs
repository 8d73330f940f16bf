mod entry;
mod m3u;

pub use entry::{ChannelEntry, LOGO_PLACEHOLDER};
pub use m3u::{DEFAULT_PLAYLIST_FILENAME, M3U_HEADER, build_playlist, write_playlist};
