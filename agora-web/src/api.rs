use agora_client::{api::FeedEntry, CardConfig};
use anyhow::Context;
use gloo_storage::{LocalStorage, Storage};

const KEY_FEED_URL: &str = "feed-url";
const KEY_CARD_CONFIG: &str = "card-config";
const DEFAULT_FEED_URL: &str = "feed.json";

pub fn feed_url() -> String {
    LocalStorage::get(KEY_FEED_URL).unwrap_or_else(|_| String::from(DEFAULT_FEED_URL))
}

pub fn card_config() -> CardConfig {
    match LocalStorage::get(KEY_CARD_CONFIG) {
        Ok(cfg) => cfg,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => CardConfig::default(),
        Err(e) => {
            tracing::warn!(?e, "ignoring unreadable card config in local storage");
            CardConfig::default()
        }
    }
}

/// reqwest needs absolute URLs, resolve `url` against the page location
fn absolute_url(url: &str) -> anyhow::Result<reqwest::Url> {
    let base = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .context("retrieving the page location")?;
    reqwest::Url::parse(&base)
        .context("parsing the page location")?
        .join(url)
        .with_context(|| format!("resolving feed url {url:?}"))
}

pub async fn fetch_feed(url: String) -> anyhow::Result<Vec<FeedEntry>> {
    let url = absolute_url(&url)?;
    tracing::debug!(%url, "fetching feed");
    Ok(crate::CLIENT
        .get(url)
        .send()
        .await
        .context("fetching the feed")?
        .error_for_status()
        .context("fetching the feed")?
        .json()
        .await
        .context("parsing the feed")?)
}
