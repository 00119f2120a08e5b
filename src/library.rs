use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// A column of the canonical track schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Album,
    Artist,
    TrackNumber,
    AlbumArtist,
    ReleaseDate,
    CreationTimestamp,
    DurationMs,
    Explicit,
    SpotifyPopularity,
    Comment,
    Rating,
    LastPlayedTimestamp,
    Genre,
    PlayCount,
    Id,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Album => "album",
            Field::Artist => "artist",
            Field::TrackNumber => "track_number",
            Field::AlbumArtist => "album_artist",
            Field::ReleaseDate => "release_date",
            Field::CreationTimestamp => "creation_timestamp",
            Field::DurationMs => "duration_ms",
            Field::Explicit => "explicit",
            Field::SpotifyPopularity => "spotify_popularity",
            Field::Comment => "comment",
            Field::Rating => "rating",
            Field::LastPlayedTimestamp => "last_played_timestamp",
            Field::Genre => "genre",
            Field::PlayCount => "play_count",
            Field::Id => "id",
        }
    }
}

/// Every column in declared order, ending with the computed `id`.
pub const EXPORT_FIELDS: [Field; 16] = [
    Field::Title,
    Field::Album,
    Field::Artist,
    Field::TrackNumber,
    Field::AlbumArtist,
    Field::ReleaseDate,
    Field::CreationTimestamp,
    Field::DurationMs,
    Field::Explicit,
    Field::SpotifyPopularity,
    Field::Comment,
    Field::Rating,
    Field::LastPlayedTimestamp,
    Field::Genre,
    Field::PlayCount,
    Field::Id,
];

/// A descriptive metadata value. Sources omit fields freely; a missing
/// value is `Empty` and renders as the empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Integer(u64),
    Boolean(bool),
}

impl FieldValue {
    /// Total order across mixed types: numbers ascending, then booleans,
    /// then text lexicographic, missing values last.
    fn sort_rank(&self) -> (u8, u64, &str) {
        match self {
            FieldValue::Integer(n) => (0, *n, ""),
            FieldValue::Boolean(b) => (1, u64::from(*b), ""),
            FieldValue::Text(s) => (2, 0, s),
            FieldValue::Empty => (3, 0, ""),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Text)
    }
}

impl From<Option<u64>> for FieldValue {
    fn from(value: Option<u64>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Integer)
    }
}

impl From<Option<bool>> for FieldValue {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Empty, FieldValue::Boolean)
    }
}

/// A normalized track as produced by a source adapter, before it has an
/// identity. Identity fields are plain strings; adapters coerce at the
/// boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawTrack {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub track_number: FieldValue,
    pub album_artist: FieldValue,
    pub release_date: FieldValue,
    pub creation_timestamp: FieldValue,
    pub duration_ms: FieldValue,
    pub explicit: FieldValue,
    pub spotify_popularity: FieldValue,
    pub comment: FieldValue,
    pub rating: FieldValue,
    pub last_played_timestamp: FieldValue,
    pub genre: FieldValue,
    pub play_count: FieldValue,
}

/// A canonical track record with its content-derived id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub track_number: FieldValue,
    pub album_artist: FieldValue,
    pub release_date: FieldValue,
    pub creation_timestamp: FieldValue,
    pub duration_ms: FieldValue,
    pub explicit: FieldValue,
    pub spotify_popularity: FieldValue,
    pub comment: FieldValue,
    pub rating: FieldValue,
    pub last_played_timestamp: FieldValue,
    pub genre: FieldValue,
    pub play_count: FieldValue,
    /// Lowercase hex MD5 of (title, album, artist).
    pub id: String,
}

impl Track {
    fn from_raw(raw: RawTrack) -> Self {
        let id = fingerprint(&raw.title, &raw.album, &raw.artist);
        Track {
            title: raw.title,
            album: raw.album,
            artist: raw.artist,
            track_number: raw.track_number,
            album_artist: raw.album_artist,
            release_date: raw.release_date,
            creation_timestamp: raw.creation_timestamp,
            duration_ms: raw.duration_ms,
            explicit: raw.explicit,
            spotify_popularity: raw.spotify_popularity,
            comment: raw.comment,
            rating: raw.rating,
            last_played_timestamp: raw.last_played_timestamp,
            genre: raw.genre,
            play_count: raw.play_count,
            id,
        }
    }

    /// The track's value for a column, coerced to its string form.
    pub fn field(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Album => self.album.clone(),
            Field::Artist => self.artist.clone(),
            Field::TrackNumber => self.track_number.to_string(),
            Field::AlbumArtist => self.album_artist.to_string(),
            Field::ReleaseDate => self.release_date.to_string(),
            Field::CreationTimestamp => self.creation_timestamp.to_string(),
            Field::DurationMs => self.duration_ms.to_string(),
            Field::Explicit => self.explicit.to_string(),
            Field::SpotifyPopularity => self.spotify_popularity.to_string(),
            Field::Comment => self.comment.to_string(),
            Field::Rating => self.rating.to_string(),
            Field::LastPlayedTimestamp => self.last_played_timestamp.to_string(),
            Field::Genre => self.genre.to_string(),
            Field::PlayCount => self.play_count.to_string(),
            Field::Id => self.id.clone(),
        }
    }
}

/// Derives a track's identity from its identity fields. The digest stream
/// is fed title, album, artist in that fixed order, so swapped field values
/// that concatenate identically collide; that matches the identity policy,
/// identity = (title, album, artist) only.
pub fn fingerprint(title: &str, album: &str, artist: &str) -> String {
    let mut digest = md5::Context::new();
    digest.consume(title);
    digest.consume(album);
    digest.consume(artist);
    format!("{:x}", digest.compute())
}

/// An insertion-ordered, fingerprint-deduplicated collection of tracks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    tracks: Vec<Track>,
    ids: HashSet<String>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the canonical track and appends it unless a track with the
    /// same id was inserted before. Later duplicates are dropped, not
    /// merged; the first-inserted record's metadata wins.
    pub fn insert(&mut self, raw: RawTrack) {
        let track = Track::from_raw(raw);
        if self.ids.insert(track.id.clone()) {
            self.tracks.push(track);
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Every track of `self` whose id is absent from `other`, in original
    /// relative order, as a new independent container.
    pub fn diff(&self, other: &Library) -> Library {
        let mut unique = Library::new();
        for track in &self.tracks {
            if !other.ids.contains(&track.id) {
                unique.ids.insert(track.id.clone());
                unique.tracks.push(track.clone());
            }
        }
        unique
    }

    /// Writes a CSV with a header of the given columns and one row per
    /// track, sorted ascending by (artist, album, track_number). Missing
    /// track numbers sort after numbered tracks.
    pub fn write_csv<W: io::Write>(&self, sink: W, columns: &[Field]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(columns.iter().map(|field| field.name()))?;

        let mut sorted: Vec<&Track> = self.tracks.iter().collect();
        sorted.sort_by(|a, b| {
            a.artist
                .cmp(&b.artist)
                .then_with(|| a.album.cmp(&b.album))
                .then_with(|| a.track_number.sort_rank().cmp(&b.track_number.sort_rank()))
        });

        for track in sorted {
            writer.write_record(columns.iter().map(|&field| track.field(field)))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the CSV there.
    pub fn write_csv_file(&self, path: &Path, columns: &[Field]) -> Result<()> {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write_csv(file, columns)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}
