mod api_types;
mod client;

pub use client::Client;

use crate::library::{FieldValue, Library, RawTrack};

/// Run some basic checks to validate a Spotify Web API access token
pub fn validate_access_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_whitespace())
}

/// Normalizes already-fetched saved-track records into a deduplicated
/// library. Missing fields become empty values, never an error.
pub fn transform(saved_tracks: Vec<api_types::SavedTrack>) -> Library {
    let mut library = Library::new();
    for saved in saved_tracks {
        let track = saved.track;
        let album_artist = if track.album.artists.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(join_artist_names(&track.album.artists))
        };
        library.insert(RawTrack {
            title: track.name.unwrap_or_default(),
            album: track.album.name.unwrap_or_default(),
            artist: join_artist_names(&track.artists),
            track_number: track.track_number.into(),
            album_artist,
            release_date: track.album.release_date.into(),
            creation_timestamp: saved.added_at.into(),
            duration_ms: track.duration_ms.into(),
            explicit: track.explicit.into(),
            spotify_popularity: track.popularity.into(),
            ..RawTrack::default()
        });
    }
    library
}

fn join_artist_names(artists: &[api_types::Artist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Field;

    fn saved_track() -> api_types::SavedTrack {
        api_types::SavedTrack {
            added_at: Some("2020-06-01T12:00:00Z".to_owned()),
            track: api_types::Track {
                album: api_types::Album {
                    name: Some("Album".to_owned()),
                    artists: vec![api_types::Artist {
                        name: "Album Artist".to_owned(),
                    }],
                    release_date: Some("2020-01-01".to_owned()),
                },
                artists: vec![
                    api_types::Artist {
                        name: "Artist 1".to_owned(),
                    },
                    api_types::Artist {
                        name: "Artist 2".to_owned(),
                    },
                ],
                duration_ms: Some(194_000),
                explicit: Some(true),
                name: Some("Song".to_owned()),
                popularity: Some(63),
                track_number: Some(3),
            },
        }
    }

    #[test]
    fn test_transform_maps_fields() {
        let library = transform(vec![saved_track()]);
        assert_eq!(library.len(), 1);
        let track = &library.tracks()[0];
        assert_eq!(track.title, "Song");
        assert_eq!(track.album, "Album");
        assert_eq!(track.artist, "Artist 1 and Artist 2");
        assert_eq!(track.album_artist, FieldValue::Text("Album Artist".to_owned()));
        assert_eq!(track.release_date, FieldValue::Text("2020-01-01".to_owned()));
        assert_eq!(
            track.creation_timestamp,
            FieldValue::Text("2020-06-01T12:00:00Z".to_owned()),
        );
        assert_eq!(track.track_number, FieldValue::Integer(3));
        assert_eq!(track.duration_ms, FieldValue::Integer(194_000));
        assert_eq!(track.explicit, FieldValue::Boolean(true));
        assert_eq!(track.spotify_popularity, FieldValue::Integer(63));
        assert_eq!(track.genre, FieldValue::Empty);
        assert_eq!(track.play_count, FieldValue::Empty);
    }

    #[test]
    fn test_transform_missing_fields() {
        let saved = api_types::SavedTrack {
            added_at: None,
            track: api_types::Track {
                album: api_types::Album::default(),
                artists: Vec::new(),
                duration_ms: None,
                explicit: None,
                name: Some("Song".to_owned()),
                popularity: None,
                track_number: None,
            },
        };
        let library = transform(vec![saved]);
        assert_eq!(library.len(), 1);
        let track = &library.tracks()[0];
        assert_eq!(track.title, "Song");
        assert_eq!(track.album, "");
        assert_eq!(track.artist, "");
        assert_eq!(track.field(Field::AlbumArtist), "");
        assert_eq!(track.field(Field::DurationMs), "");
        assert_eq!(track.field(Field::Explicit), "");
    }

    #[test]
    fn test_transform_deduplicates() {
        let library = transform(vec![saved_track(), saved_track()]);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_validate_access_token() {
        assert!(validate_access_token(
            "BQDWv6ncy0iY8Jyo5zKKidVnXWYnk5jXMLWv5jBKkR0"
        ));
        assert!(!validate_access_token(""));
        assert!(!validate_access_token("token with spaces"));
        assert!(!validate_access_token("tok\u{e9}n"));
    }
}
