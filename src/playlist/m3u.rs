// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::error::PlaylistError;

use super::entry::ChannelEntry;

/// First line of every extended M3U playlist
pub const M3U_HEADER: &str = "#EXTM3U";

/// Default name of the generated playlist file
pub const DEFAULT_PLAYLIST_FILENAME: &str = "iptv_playlist.m3u";

/// Serialize entries into an extended M3U document.
///
/// Each entry takes three lines: `#EXTINF`, the stream URL and a blank
/// separator. Entries are written in the order given, without filtering.
pub fn build_playlist(entries: &[ChannelEntry]) -> String {
    let mut document = String::from(M3U_HEADER);
    document.push('\n');

    for entry in entries {
        document.push_str(&entry.to_m3u());
        document.push_str("\n\n");
    }

    document
}

/// Write the playlist to `path`, replacing any existing file
pub fn write_playlist(entries: &[ChannelEntry], path: &Path) -> Result<(), PlaylistError> {
    std::fs::write(path, build_playlist(entries)).map_err(|e| PlaylistError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
