//! Share actions: link construction and mailto composition.
//!
//! The third share method is the download path in [`crate::serialize`].

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Query-tagged link to the shared preview view.
pub fn share_link(base_url: &str) -> String {
    format!(
        "{}/xslt-code-generation-preview?shared=true",
        base_url.trim_end_matches('/')
    )
}

/// A `mailto:` URL with percent-encoded subject and body.
pub fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(subject, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_normalizes_trailing_slash() {
        assert_eq!(
            share_link("https://example.com/"),
            "https://example.com/xslt-code-generation-preview?shared=true"
        );
        assert_eq!(
            share_link("https://example.com"),
            "https://example.com/xslt-code-generation-preview?shared=true"
        );
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = mailto_url("XSLT Transformation Code", "line one\nline two");
        assert!(url.starts_with("mailto:?subject=XSLT%20Transformation%20Code&body="));
        assert!(url.contains("line%20one%0Aline%20two"));
        assert!(!url.contains(' '));
    }
}
