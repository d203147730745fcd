// src/core/page.rs
//! Read-only view of a fetched page, as the extraction strategies see it.
//!
//! Strategies never touch the DOM directly; they ask a [`PageSource`] for the handful
//! of things they scan (text, scripts, frames, attributes, meta tags). `HtmlPage` is the
//! production implementation; tests may substitute their own.

/// Attributes of one element, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs(pub Vec<(String, String)>);

impl Attrs {
    /// Case-insensitive attribute lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attrs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One `<script>` block: its `type` attribute (lowercased, if any) and its body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    pub kind: Option<String>,
    pub body: String,
}

impl Script {
    pub fn is_json_ld(&self) -> bool {
        self.kind.as_deref().is_some_and(|k| k.contains("ld+json"))
    }
}

pub trait PageSource {
    /// All rendered text, script and style bodies excluded.
    fn visible_text(&self) -> String;

    /// Text of each element that looks like a coordinate label (contains a degree sign),
    /// with its text nodes joined by single spaces. Document order.
    fn coordinate_labels(&self) -> Vec<String>;

    /// Every script block in document order.
    fn scripts(&self) -> Vec<Script>;

    /// Source URLs of embedded frames in document order.
    fn frame_sources(&self) -> Vec<String>;

    /// Every element carrying `attr`, in document order.
    fn elements_with_attr(&self, attr: &str) -> Vec<Attrs>;

    /// Every `<meta>` element.
    fn metas(&self) -> Vec<Attrs>;
}
