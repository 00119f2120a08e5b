mod api_types;
mod client;

pub use client::Client;

use crate::library::{Library, RawTrack};

/// Run some basic checks to validate a mobile client OAuth access token
pub fn validate_access_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_whitespace())
}

/// Normalizes already-fetched track feed items into a deduplicated library,
/// renaming the feed's columns into the canonical schema. Missing fields
/// become empty values, never an error.
pub fn transform(items: Vec<api_types::TrackItem>) -> Library {
    let mut library = Library::new();
    for item in items {
        library.insert(RawTrack {
            title: item.title.unwrap_or_default(),
            album: item.album.unwrap_or_default(),
            artist: item.artist.unwrap_or_default(),
            track_number: item.track_number.into(),
            album_artist: item.album_artist.into(),
            release_date: item.year.into(),
            creation_timestamp: item.creation_timestamp.into(),
            duration_ms: item.duration_millis.into(),
            comment: item.comment.into(),
            rating: item.rating.into(),
            last_played_timestamp: item.recent_timestamp.into(),
            genre: item.genre.into(),
            play_count: item.play_count.into(),
            ..RawTrack::default()
        });
    }
    library
}
