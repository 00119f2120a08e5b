use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct TrackFeedRequest<'a> {
    #[serde(rename = "max-results")]
    pub(in crate::play_music) max_results: usize,
    #[serde(rename = "start-token", skip_serializing_if = "Option::is_none")]
    pub(in crate::play_music) start_token: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackFeedPage {
    pub(in crate::play_music) next_page_token: Option<String>,
    #[serde(default)]
    pub(in crate::play_music) data: TrackFeedData,
}

#[derive(Deserialize, Default)]
pub struct TrackFeedData {
    #[serde(default)]
    pub(in crate::play_music) items: Vec<TrackItem>,
}

/// The track feed does not always include all of the columns.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackItem {
    pub(in crate::play_music) title: Option<String>,
    pub(in crate::play_music) album: Option<String>,
    pub(in crate::play_music) artist: Option<String>,
    pub(in crate::play_music) album_artist: Option<String>,
    pub(in crate::play_music) track_number: Option<u64>,
    pub(in crate::play_music) year: Option<u64>,
    /// Microseconds since the epoch, as a decimal string
    pub(in crate::play_music) creation_timestamp: Option<String>,
    /// Microseconds since the epoch, as a decimal string
    pub(in crate::play_music) recent_timestamp: Option<String>,
    /// Milliseconds, as a decimal string
    pub(in crate::play_music) duration_millis: Option<String>,
    pub(in crate::play_music) genre: Option<String>,
    pub(in crate::play_music) play_count: Option<u64>,
    pub(in crate::play_music) comment: Option<String>,
    /// `0` through `5`, as a string
    pub(in crate::play_music) rating: Option<String>,
}
