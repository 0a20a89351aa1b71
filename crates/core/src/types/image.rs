//! Opaque image handles and generated placeholder artwork.

use core::fmt;

use serde::{Deserialize, Serialize};

const PLACEHOLDER_WIDTH: u32 = 480;
const PLACEHOLDER_HEIGHT: u32 = 320;

/// An opaque display handle for a product image.
///
/// The core never inspects the contents; it only copies the handle into cart
/// lines so the view layer can render it later. Usually a URL or `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap an existing image location.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Generate a placeholder card showing `label`.
    ///
    /// The result is an SVG gradient card encoded as a `data:` URI, suitable
    /// for any renderer that understands image URLs.
    #[must_use]
    pub fn placeholder(label: &str) -> Self {
        let svg = placeholder_svg(label);
        Self(format!(
            "data:image/svg+xml;utf8,{}",
            urlencoding::encode(&svg)
        ))
    }

    /// The underlying location string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this handle is an inline `data:` URI.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the characters that would break out of SVG text content.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn placeholder_svg(label: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{PLACEHOLDER_WIDTH}' height='{PLACEHOLDER_HEIGHT}'>\
<defs><linearGradient id='g' x1='0' x2='1' y1='0' y2='1'>\
<stop offset='0%' stop-color='#a7f3d0'/><stop offset='100%' stop-color='#34d399'/>\
</linearGradient></defs>\
<rect width='100%' height='100%' fill='url(#g)'/>\
<g fill='#064e3b'><text x='50%' y='54%' text-anchor='middle' font-size='36' \
font-family='Inter, system-ui, sans-serif'>{}</text></g></svg>",
        escape_xml(label)
    )
}
