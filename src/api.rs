use std::time::Duration;

use anyhow::bail;
use log::info;
use reqwest::redirect;
use url::Url;

use crate::akleg::{Chamber, BASE_URL, USER_AGENT};

/// One GET per run; the roster pages need no cookies or login.
pub struct LegClient {
    client: reqwest::Client,
}

impl LegClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .redirect(redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the chamber roster page and returns its body text.
    /// Any network failure or non-success status aborts the run.
    pub async fn fetch_chamber_page(&self, chamber: Chamber) -> anyhow::Result<String> {
        let url = Url::parse(BASE_URL)?.join(chamber.page_path())?;
        info!("Fetching page: {url} ...");
        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            bail!("Unexpected status {} while fetching {url}", response.status());
        }
        Ok(response.text().await?)
    }
}
