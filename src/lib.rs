//! stylescan — one-shot page style extraction.
//!
//! Fetches a single web page and reports two pieces of styling metadata: the
//! set of font families it declares (inline styles, `<style>` blocks, or a
//! linked Google Fonts stylesheet) and the inline style of its first
//! `<button>` element. One call, one response, no state kept between
//! invocations.

pub mod button;
pub mod error;
mod fetch;
pub mod fonts;
pub mod scrape;

pub use button::PrimaryButton;
pub use error::ScrapeError;
pub use fonts::Font;
pub use scrape::{scrape_url, ScraperResponse};
