//! Top-level orchestration: fetch the page, parse it, run both extractions.

use scraper::Html;
use serde::Serialize;
use tracing::error;

use crate::button::{extract_primary_button, PrimaryButton};
use crate::error::ScrapeError;
use crate::fetch::fetch_html;
use crate::fonts::{extract_fonts, Font};

/// Combined result of one scrape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperResponse {
    /// Distinct font families declared by the page, in discovery order.
    pub fonts: Vec<Font>,
    /// Style of the first `<button>` element.
    pub primary_button: PrimaryButton,
}

/// Fetch `url` and extract its font and primary-button styling.
///
/// The fetch is the only suspension point; parsing and extraction run
/// synchronously on the fetched body. Both extractions read the same parsed
/// document independently. Any fetch failure is logged and wrapped into a
/// single [`ScrapeError`].
pub async fn scrape_url(url: &str) -> Result<ScraperResponse, ScrapeError> {
    let body = fetch_html(url).await.map_err(|err| {
        error!("scrape of {url} failed: {err}");
        ScrapeError::from_fetch(err)
    })?;

    let document = Html::parse_document(&body);
    let fonts = extract_fonts(&document);
    let primary_button = extract_primary_button(&document);

    Ok(ScraperResponse {
        fonts,
        primary_button,
    })
}
