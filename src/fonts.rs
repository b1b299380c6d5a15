//! Font extraction from inline styles, `<style>` blocks, and Google Fonts
//! links.
//!
//! Scans every element's `style` attribute for `font-family` declarations,
//! then every `<style>` block for `@font-face` rules, keeping the first
//! occurrence per cleaned family name. A linked Google Fonts stylesheet, if
//! present, supplies the `url` for every font; otherwise one is synthesized
//! from the family name.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

static FONT_FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-family:\s*([^;]+)").unwrap());
static FONT_WEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-weight:\s*([^;]+)").unwrap());
static LETTER_SPACING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)letter-spacing:\s*([^;]+)").unwrap());
// No nested-brace support: a block ends at the first closing brace.
static FONT_FACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@font-face\s*\{[^}]+\}").unwrap());
// Quoted family name inside a @font-face rule. Two alternatives instead of a
// backreference, which the regex crate does not support.
static FACE_FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"font-family:\s*(?:'([^']+?)'|"([^"]+?)")"#).unwrap());
static FACE_WEIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"font-weight:\s*(\d+)").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A font family declared by the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    /// Cleaned family name (quotes stripped, first comma alternative only).
    pub family: String,
    /// The font-weight associated with the family.
    pub variants: String,
    /// The letter-spacing associated with the family.
    pub letter_spacings: String,
    /// Duplicate of the weight the entry was registered with.
    pub font_weight: String,
    /// The page's Google Fonts stylesheet link, or a synthesized one.
    pub url: String,
}

/// Strip quote characters, trim, and keep only the first comma-separated
/// alternative.
pub(crate) fn clean_font_family(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '\'' && *c != '"').collect();
    stripped
        .trim()
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Record a font under its cleaned family name. The first occurrence wins;
/// later duplicates are ignored along with their weight and spacing.
fn register_font(fonts: &mut Vec<Font>, family: &str, weight: &str, letter_spacing: &str) {
    let family = clean_font_family(family);
    if fonts.iter().any(|f| f.family == family) {
        return;
    }
    fonts.push(Font {
        family,
        variants: weight.to_string(),
        letter_spacings: letter_spacing.to_string(),
        font_weight: weight.to_string(),
        url: String::new(),
    });
}

/// The page's Google Fonts stylesheet link, if any.
fn google_fonts_link(document: &Html) -> Option<String> {
    let sel = Selector::parse(r#"link[href^="https://fonts.googleapis.com/css"]"#).ok()?;
    document
        .select(&sel)
        .find_map(|el| el.value().attr("href").map(str::to_string))
}

/// Extract every declared font family from the document.
///
/// Inline `style` attributes are scanned first in document order, then
/// `@font-face` rules inside `<style>` blocks. Fonts come back in insertion
/// order, each carrying the page's Google Fonts link or, when none exists, a
/// synthesized Google Fonts API v2 URL for its family.
pub fn extract_fonts(document: &Html) -> Vec<Font> {
    let mut fonts: Vec<Font> = Vec::new();

    // Inline style attributes.
    if let Ok(sel) = Selector::parse("*") {
        for el in document.select(&sel) {
            let Some(styles) = el.value().attr("style") else {
                continue;
            };
            let Some(family) = FONT_FAMILY_RE.captures(styles) else {
                continue;
            };
            let weight = FONT_WEIGHT_RE
                .captures(styles)
                .map_or_else(|| "400".to_string(), |c| c[1].trim().to_string());
            let spacing = LETTER_SPACING_RE
                .captures(styles)
                .map_or_else(|| "normal".to_string(), |c| c[1].trim().to_string());
            register_font(&mut fonts, &family[1], &weight, &spacing);
        }
    }

    // @font-face rules in <style> blocks.
    if let Ok(sel) = Selector::parse("style") {
        for el in document.select(&sel) {
            let css: String = el.text().collect();
            if css.is_empty() {
                continue;
            }
            for block in FONT_FACE_RE.find_iter(&css) {
                let Some(caps) = FACE_FAMILY_RE.captures(block.as_str()) else {
                    continue;
                };
                let family = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str());
                let weight = FACE_WEIGHT_RE
                    .captures(block.as_str())
                    .map_or_else(|| "400".to_string(), |c| c[1].to_string());
                register_font(&mut fonts, family, &weight, "normal");
            }
        }
    }

    let link = google_fonts_link(document);
    for font in &mut fonts {
        font.url = match &link {
            Some(href) => href.clone(),
            None => format!(
                "https://fonts.googleapis.com/css2?family={}&display=swap",
                WHITESPACE_RE.replace_all(&font.family, "+")
            ),
        };
    }

    fonts
}
