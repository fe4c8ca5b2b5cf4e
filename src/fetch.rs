use tracing::info;

use crate::error::Result;

/// Fetch the markup body behind `url` and decode it to text.
///
/// Only network-level failures (resolution, connect, aborted body) are
/// errors. A non-success HTTP status still yields its body; whatever markup
/// the server returns is handed to the harvester as-is.
pub async fn fetch_markup(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    info!("Fetching markup source: {}", url);
    let body = client.get(url).send().await?.text().await?;
    info!("Fetched {} bytes", body.len());

    Ok(body)
}
