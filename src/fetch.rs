//! HTTP retrieval of the target page.

use tracing::debug;

/// Fetch the document at `url`, expecting a textual HTML body.
///
/// A single GET awaited to completion. Non-success statuses are failures;
/// there is no retry and no explicit timeout.
pub(crate) async fn fetch_html(url: &str) -> Result<String, reqwest::Error> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    debug!(bytes = body.len(), "fetched {url}");
    Ok(body)
}
