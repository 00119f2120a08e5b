use std::time::Duration;

use anyhow::Result;

use crate::play_music::api_types;

const MAX_RESULTS: usize = 1000;
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

    /// Walks the mobile client track feed page by page via `nextPageToken`,
    /// pausing between requests to stay under the rate limit.
    pub async fn get_all_tracks(&self) -> Result<Vec<api_types::TrackItem>> {
        let mut tracks = Vec::new();
        let mut start_token: Option<String> = None;
        let mut page_number = 1;
        loop {
            println!("Downloading track feed page {page_number}");
            let page: api_types::TrackFeedPage = self
                .client
                .post("https://mobileclient.googleapis.com/sj/v2.5/trackfeed")
                .json(&api_types::TrackFeedRequest {
                    max_results: MAX_RESULTS,
                    start_token: start_token.as_deref(),
                })
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            tracks.extend(page.data.items);
            match page.next_page_token {
                Some(token) => {
                    start_token = Some(token);
                    page_number += 1;
                    tokio::time::sleep(PAGE_PAUSE).await;
                }
                None => break,
            }
        }
        Ok(tracks)
    }
}
