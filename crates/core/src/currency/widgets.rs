//! Markup builders for the currency pickers.
//!
//! Pure state-to-fragment helpers: each offers the supported currencies in
//! table order with the active one marked. The dashboard views inject the
//! fragments as-is and wire up their own event handlers.

use std::fmt::Write as _;

use super::currency::SUPPORTED_CURRENCIES;

/// Full-width `<select>` used on the settings page.
pub fn selector(active: &str) -> String {
    let mut html = String::from(r#"<select id="currency-select" class="currency-select">"#);
    for meta in &SUPPORTED_CURRENCIES {
        let selected = if meta.code == active { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{code}"{selected}>{code}</option>"#,
            code = meta.code,
            selected = selected
        );
    }
    html.push_str("</select>");
    html
}

/// Button group used in the dashboard header.
pub fn toggle(active: &str) -> String {
    let mut html = String::from(r#"<div class="currency-toggle">"#);
    for meta in &SUPPORTED_CURRENCIES {
        let class = if meta.code == active {
            "currency-toggle-btn active"
        } else {
            "currency-toggle-btn"
        };
        let _ = write!(
            html,
            r#"<button type="button" class="{class}" data-currency="{code}">{code}</button>"#,
            class = class,
            code = meta.code
        );
    }
    html.push_str("</div>");
    html
}

/// Compact `<select>` for amount-entry forms; labels carry the symbol.
pub fn input_selector(active: &str) -> String {
    let mut html = String::from(r#"<select class="currency-input-select">"#);
    for meta in &SUPPORTED_CURRENCIES {
        let selected = if meta.code == active { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{code}"{selected}>{code} ({symbol})</option>"#,
            code = meta.code,
            selected = selected,
            symbol = meta.symbol
        );
    }
    html.push_str("</select>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_positions(html: &str) -> Vec<usize> {
        ["RON", "EUR", "USD", "VND"]
            .iter()
            .map(|code| html.find(&format!(r#"value="{}""#, code)).unwrap())
            .collect()
    }

    #[test]
    fn test_selector_lists_all_currencies_in_stable_order() {
        let html = selector("RON");
        let positions = option_positions(&html);
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_selector_marks_only_the_active_currency() {
        let html = selector("USD");
        assert!(html.contains(r#"<option value="USD" selected>USD</option>"#));
        assert_eq!(html.matches(" selected").count(), 1);
    }

    #[test]
    fn test_toggle_marks_the_active_button() {
        let html = toggle("VND");
        assert!(html.contains(r#"class="currency-toggle-btn active" data-currency="VND""#));
        assert_eq!(html.matches("currency-toggle-btn active").count(), 1);
    }

    #[test]
    fn test_input_selector_labels_carry_the_symbol() {
        let html = input_selector("RON");
        assert!(html.contains("RON (lei)"));
        assert!(html.contains("VND (\u{20ab})"));
    }
}
