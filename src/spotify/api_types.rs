use serde::Deserialize;

#[derive(Deserialize)]
pub struct SavedTracksPage {
    pub(in crate::spotify) items: Vec<SavedTrack>,
}

#[derive(Deserialize)]
pub struct SavedTrack {
    /// ISO 8601 timestamp of when the track was saved
    pub(in crate::spotify) added_at: Option<String>,
    pub(in crate::spotify) track: Track,
}

#[derive(Deserialize)]
pub struct Track {
    #[serde(default)]
    pub(in crate::spotify) album: Album,
    #[serde(default)]
    pub(in crate::spotify) artists: Vec<Artist>,
    pub(in crate::spotify) duration_ms: Option<u64>,
    pub(in crate::spotify) explicit: Option<bool>,
    pub(in crate::spotify) name: Option<String>,
    pub(in crate::spotify) popularity: Option<u64>,
    pub(in crate::spotify) track_number: Option<u64>,
}

#[derive(Deserialize, Default)]
pub struct Album {
    pub(in crate::spotify) name: Option<String>,
    /// All of the album's artists
    #[serde(default)]
    pub(in crate::spotify) artists: Vec<Artist>,
    /// YYYY-MM-DD, YYYY-MM or YYYY depending on release date precision
    pub(in crate::spotify) release_date: Option<String>,
}

#[derive(Deserialize)]
pub struct Artist {
    pub(in crate::spotify) name: String,
}
