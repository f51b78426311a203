//! Constant signals.
//!
//! These features need a rendered page (anchors, forms, scripts) or a
//! third-party ranking service. Neither is available, so each one returns a
//! fixed value through the same [`UrlSignal`](super::UrlSignal) signature as
//! the lexical signals.

use crate::domain::NormalizedUrl;
use crate::signals::SignalValue;

/// Share of anchors pointing off-site.
pub fn url_of_anchor(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Share of `<meta>`, `<script>` and `<link>` targets pointing off-site.
pub fn links_in_tags(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Server form handler.
pub fn sfh(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Status-bar rewriting on mouseover.
pub fn on_mouseover(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Right-click blocking.
pub fn right_click(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Pop-up windows with text fields.
pub fn pop_up_window(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Invisible iframes.
pub fn iframe(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Page rank of the site.
pub fn page_rank(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::SUSPICIOUS
}

/// Presence in the search index.
pub fn google_index(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

/// Number of backlinks.
pub fn links_pointing_to_page(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::NEUTRAL
}

/// Presence in phishing statistics reports.
pub fn statistical_report(_url: &NormalizedUrl) -> SignalValue {
    SignalValue::BENIGN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_url;
    use crate::signals::UrlSignal;

    #[test]
    fn test_placeholder_values() {
        let url = normalize_url("http://example.com").unwrap();
        let benign: [UrlSignal; 9] = [
            url_of_anchor,
            links_in_tags,
            sfh,
            on_mouseover,
            right_click,
            pop_up_window,
            iframe,
            google_index,
            statistical_report,
        ];
        for signal in benign {
            assert_eq!(signal(&url), SignalValue::BENIGN);
        }
        assert_eq!(page_rank(&url), SignalValue::SUSPICIOUS);
        assert_eq!(links_pointing_to_page(&url), SignalValue::NEUTRAL);
    }
}
