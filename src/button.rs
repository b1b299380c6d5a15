//! Primary button extraction.
//!
//! The first `<button>` in document order stands in for the page's dominant
//! call-to-action styling. Twelve CSS properties are read from its inline
//! `style` attribute; anything not declared falls back to a fixed default.

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

use crate::fonts::clean_font_family;

/// Visual style of the page's first `<button>` element.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryButton {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub text_transform: String,
    pub text_decoration: String,
    pub text_align: String,
    pub background_color: String,
    pub color: String,
    pub border_color: String,
    pub border_width: String,
    pub border_radius: String,
}

/// Look up one CSS property in an inline style string.
///
/// Case-insensitive match on `<property>:` up to the next semicolon, value
/// trimmed. Deliberately a plain substring pattern: `color` also matches
/// inside `background-color`, which matches how the extraction has always
/// behaved.
fn extract_style(styles: &str, property: &str) -> Option<String> {
    let re = Regex::new(&format!(r"(?i){property}:\s*([^;]+)")).ok()?;
    re.captures(styles).map(|c| c[1].trim().to_string())
}

/// Extract the primary button's style record from the document.
///
/// Never fails: a page without a `<button>` (or a button without an inline
/// `style`) yields the full default table, with `fontFamily` empty.
pub fn extract_primary_button(document: &Html) -> PrimaryButton {
    let styles = Selector::parse("button")
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .and_then(|button| button.value().attr("style").map(str::to_string))
        })
        .unwrap_or_default();

    PrimaryButton {
        font_family: extract_style(&styles, "font-family")
            .map(|family| clean_font_family(&family))
            .unwrap_or_default(),
        font_size: extract_style(&styles, "font-size").unwrap_or_else(|| "16px".into()),
        line_height: extract_style(&styles, "line-height").unwrap_or_else(|| "1.5".into()),
        letter_spacing: extract_style(&styles, "letter-spacing")
            .unwrap_or_else(|| "0.01em".into()),
        text_transform: extract_style(&styles, "text-transform")
            .unwrap_or_else(|| "uppercase".into()),
        text_decoration: extract_style(&styles, "text-decoration")
            .unwrap_or_else(|| "underline".into()),
        text_align: extract_style(&styles, "text-align").unwrap_or_else(|| "left".into()),
        background_color: extract_style(&styles, "background-color")
            .unwrap_or_else(|| "#000".into()),
        color: extract_style(&styles, "color").unwrap_or_else(|| "#fff".into()),
        border_color: extract_style(&styles, "border-color").unwrap_or_else(|| "#000".into()),
        border_width: extract_style(&styles, "border-width").unwrap_or_else(|| "1px".into()),
        border_radius: extract_style(&styles, "border-radius").unwrap_or_else(|| "4px".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PrimaryButton {
        PrimaryButton {
            font_family: String::new(),
            font_size: "16px".into(),
            line_height: "1.5".into(),
            letter_spacing: "0.01em".into(),
            text_transform: "uppercase".into(),
            text_decoration: "underline".into(),
            text_align: "left".into(),
            background_color: "#000".into(),
            color: "#fff".into(),
            border_color: "#000".into(),
            border_width: "1px".into(),
            border_radius: "4px".into(),
        }
    }

    #[test]
    fn test_no_button_yields_full_default_table() {
        let html = Html::parse_document("<div>no buttons here</div>");
        assert_eq!(extract_primary_button(&html), defaults());
    }

    #[test]
    fn test_button_without_style_yields_defaults() {
        let html = Html::parse_document("<button>Buy</button>");
        assert_eq!(extract_primary_button(&html), defaults());
    }

    #[test]
    fn test_declared_properties_override_defaults() {
        let html =
            Html::parse_document(r#"<button style="color: blue; border-radius: 10px">Go</button>"#);
        let button = extract_primary_button(&html);
        assert_eq!(button.color, "blue");
        assert_eq!(button.border_radius, "10px");
        let expected = PrimaryButton {
            color: "blue".into(),
            border_radius: "10px".into(),
            ..defaults()
        };
        assert_eq!(button, expected);
    }

    #[test]
    fn test_font_family_is_cleaned() {
        let html = Html::parse_document(
            r#"<button style="font-family: 'Helvetica Neue', Arial, sans-serif">Go</button>"#,
        );
        assert_eq!(extract_primary_button(&html).font_family, "Helvetica Neue");
    }

    #[test]
    fn test_first_button_in_document_order_wins() {
        let html = Html::parse_document(
            r#"<button style="color: red">First</button>
               <button style="color: green">Second</button>"#,
        );
        assert_eq!(extract_primary_button(&html).color, "red");
    }

    #[test]
    fn test_values_are_trimmed_and_case_insensitive() {
        let html = Html::parse_document(
            r#"<button style="FONT-SIZE:  18px ; text-align: center">Go</button>"#,
        );
        let button = extract_primary_button(&html);
        assert_eq!(button.font_size, "18px");
        assert_eq!(button.text_align, "center");
    }
}
