// src/core/html.rs
// scraper-backed page handle.

use scraper::{ElementRef, Html, Selector};

use super::page::{Attrs, PageSource, Script};
use super::sanitize::normalize_ws;

/// Elements whose text never renders.
const HIDDEN: [&str; 4] = ["script", "style", "noscript", "template"];

/// Labels longer than this are paragraphs, not coordinate captions.
const MAX_LABEL_CHARS: usize = 200;

pub struct HtmlPage {
    doc: Html,
    base_url: Option<String>,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html), base_url: None }
    }

    pub fn with_base_url(html: &str, base_url: &str) -> Self {
        Self { doc: Html::parse_document(html), base_url: Some(s!(base_url)) }
    }

    /// URL the page was fetched from, if the caller provided one.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Listing name: first `<h1>`, else `<title>`. Empty if neither has text.
    pub fn heading(&self) -> String {
        for sel in ["h1", "title"] {
            if let Some(el) = self.select(sel).into_iter().next() {
                let text = normalize_ws(&el.text().collect::<String>());
                if !text.is_empty() {
                    return text;
                }
            }
        }
        s!()
    }

    fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(_) => {
                logd!("Bad selector: {selector}");
                Vec::new()
            }
        }
    }
}

fn is_hidden(el: &ElementRef<'_>) -> bool {
    HIDDEN.contains(&el.value().name())
}

/// Text of the nodes under `el` that actually render, in document order.
fn shown_text<'a>(el: &ElementRef<'a>) -> Vec<&'a str> {
    el.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| is_hidden(&a));
            (!hidden).then_some(&**text)
        })
        .collect()
}

fn attrs_of(el: &ElementRef<'_>) -> Attrs {
    el.value().attrs().collect()
}

impl PageSource for HtmlPage {
    fn visible_text(&self) -> String {
        let mut out = s!();
        for node in self.doc.tree.root().descendants() {
            let Some(text) = node.value().as_text() else { continue };
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| is_hidden(&el));
            if !hidden {
                out.push_str(text);
            }
        }
        out
    }

    fn coordinate_labels(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for el in self.select("body *") {
            if is_hidden(&el) {
                continue;
            }
            let joined = shown_text(&el)
                .into_iter()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !joined.contains('°') || joined.chars().count() > MAX_LABEL_CHARS {
                continue;
            }
            // Wrappers repeat their only child's text.
            if out.last() != Some(&joined) {
                out.push(joined);
            }
        }
        out
    }

    fn scripts(&self) -> Vec<Script> {
        self.select("script")
            .into_iter()
            .map(|el| Script {
                kind: el.value().attr("type").map(|t| t.trim().to_ascii_lowercase()),
                body: el.text().collect(),
            })
            .collect()
    }

    fn frame_sources(&self) -> Vec<String> {
        let mut out = Vec::new();
        for el in self.select("iframe") {
            for attr in ["src", "data-src"] {
                if let Some(v) = el.value().attr(attr) {
                    let v = v.trim();
                    if !v.is_empty() {
                        out.push(s!(v));
                    }
                }
            }
        }
        out
    }

    fn elements_with_attr(&self, attr: &str) -> Vec<Attrs> {
        self.select(&join!("[", attr, "]"))
            .iter()
            .map(attrs_of)
            .collect()
    }

    fn metas(&self) -> Vec<Attrs> {
        self.select("meta").iter().map(attrs_of).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title>Hotel Delfino Blu | Corfu</title>
        <meta name="geo.position" content="39.71;19.69">
        <script type="application/ld+json">{"@type":"Hotel"}</script>
        <style>.x{}</style>
      </head><body>
        <h1> Delfino   Blu </h1>
        <p>Location: <span>39°40'22.7"N</span><span>19°42'59.5"E</span></p>
        <div data-lat="39.6" data-lng="19.7"></div>
        <iframe src="https://maps.google.com/?q=39.68,19.70"></iframe>
        <iframe data-src="https://example.com/lazy"></iframe>
        <script>var lat = 39.6;</script>
      </body></html>"#;

    #[test]
    fn visible_text_skips_scripts_and_styles() {
        let page = HtmlPage::parse(PAGE);
        let text = page.visible_text();
        assert!(text.contains("Delfino"));
        assert!(text.contains("39°40'22.7\"N19°42'59.5\"E"));
        assert!(!text.contains("var lat"));
        assert!(!text.contains(".x{}"));
        assert!(!text.contains("@type"));
    }

    #[test]
    fn labels_join_inline_children_with_spaces() {
        let page = HtmlPage::parse(PAGE);
        let labels = page.coordinate_labels();
        assert_eq!(labels[0], "Location: 39°40'22.7\"N 19°42'59.5\"E");
        assert!(labels.contains(&s!("39°40'22.7\"N")));
    }

    #[test]
    fn labels_leave_out_inline_scripts() {
        let html = r#"<body><p>GPS 39°40'22.7"N 19°42'59.5"E<script>var pin = "48°51'N";</script></p>
            <noscript><p>Map at 40°N</p></noscript></body>"#;
        let labels = HtmlPage::parse(html).coordinate_labels();
        assert_eq!(labels, vec![s!("GPS 39°40'22.7\"N 19°42'59.5\"E")]);
    }

    #[test]
    fn scripts_frames_attrs_and_metas() {
        let page = HtmlPage::parse(PAGE);

        let scripts = page.scripts();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].is_json_ld());
        assert_eq!(scripts[1].kind, None);

        assert_eq!(
            page.frame_sources(),
            vec![s!("https://maps.google.com/?q=39.68,19.70"), s!("https://example.com/lazy")]
        );

        let divs = page.elements_with_attr("data-lat");
        assert_eq!(divs.len(), 1);
        assert_eq!(divs[0].get("DATA-LNG"), Some("19.7"));

        let metas = page.metas();
        assert_eq!(metas[0].get("content"), Some("39.71;19.69"));
    }

    #[test]
    fn heading_prefers_h1() {
        assert_eq!(HtmlPage::parse(PAGE).heading(), "Delfino Blu");
        let page = HtmlPage::with_base_url("<title> Only title </title>", "https://x.test/h/");
        assert_eq!(page.heading(), "Only title");
        assert_eq!(page.base_url(), Some("https://x.test/h/"));
    }
}
