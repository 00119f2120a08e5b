use std::time::Duration;

use anyhow::Result;

use crate::spotify::api_types;

const PAGE_SIZE: usize = 50;
const PAGE_PAUSE: Duration = Duration::from_secs(1);

pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new(access_token: &str) -> Result<Self> {
        let headers = {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                "Authorization",
                format!("Bearer {access_token}").try_into()?,
            );
            headers
        };
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the user's saved tracks page by page until an empty page
    /// comes back, pausing between requests to stay under the rate limit.
    pub async fn get_saved_tracks(&self) -> Result<Vec<api_types::SavedTrack>> {
        let mut saved_tracks = Vec::new();
        let mut offset = 0;
        loop {
            println!(
                "Downloading tracks {} through {}",
                offset,
                offset + PAGE_SIZE - 1,
            );
            let page: api_types::SavedTracksPage = self
                .client
                .get(format!(
                    "https://api.spotify.com/v1/me/tracks?limit={PAGE_SIZE}&offset={offset}",
                ))
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            if page.items.is_empty() {
                break;
            }
            offset += page.items.len();
            saved_tracks.extend(page.items);
            tokio::time::sleep(PAGE_PAUSE).await;
        }
        Ok(saved_tracks)
    }
}
