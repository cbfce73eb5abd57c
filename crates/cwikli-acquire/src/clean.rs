use cwikli_model::LookupError;
use scraper::{ElementRef, Html, Selector};

/// Quotation lists and usage-example blocks; never part of a definition.
const NOISE_SELECTOR: &str = "ul, dd";

/// A parsed page with its noise nodes detached.
#[derive(Debug)]
pub struct Page {
    html: Html,
}

impl Page {
    pub fn html(&self) -> &Html {
        &self.html
    }
}

/// Parse raw page content and strip the nodes that would pollute definitions.
pub fn clean(raw: &[u8]) -> Result<Page, LookupError> {
    let text = std::str::from_utf8(raw).map_err(|err| {
        tracing::debug!(error = %err, "Page is not valid UTF-8");
        LookupError::MalformedDocument
    })?;

    let mut html = Html::parse_document(text);
    let removed = strip_noise(&mut html);
    tracing::debug!(removed, "Stripped quotation and usage-example nodes");

    Ok(Page { html })
}

/// Detach every noise node from the tree, returning how many were removed.
///
/// Detached nodes stay in the arena but are unreachable from the root, so
/// selectors and text extraction no longer see them.
fn strip_noise(html: &mut Html) -> usize {
    let noise = Selector::parse(NOISE_SELECTOR).expect("valid selector");
    let ids: Vec<_> = html.select(&noise).map(|el| el.id()).collect();

    for id in &ids {
        if let Some(mut node) = html.tree.get_mut(*id) {
            node.detach();
        }
    }

    ids.len()
}

/// Flatten an element's text: each text node trimmed, empties dropped,
/// the rest joined by single spaces.
pub fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <ol>
            <li>A building.
                <ul><li>Quotation that must go.</li></ul>
                <dl><dd>Usage example that must go.</dd></dl>
            </li>
            <li>A household.</li>
        </ol>
        <ul><li>Top-level list<ul><li>nested</li></ul></li></ul>
        </body></html>"#;

    fn ol(page: &Page) -> ElementRef<'_> {
        let sel = Selector::parse("ol").unwrap();
        page.html().select(&sel).next().unwrap()
    }

    #[test]
    fn test_noise_removed() {
        let page = clean(PAGE.as_bytes()).unwrap();
        let text = flatten_text(ol(&page));
        assert_eq!(text, "A building. A household.");

        let sel = Selector::parse("ul, dd").unwrap();
        assert_eq!(page.html().select(&sel).count(), 0);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let mut page = clean(PAGE.as_bytes()).unwrap();
        let once = page.html().root_element().html();

        assert_eq!(strip_noise(&mut page.html), 0);
        assert_eq!(page.html().root_element().html(), once);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let err = clean(&[0x3c, 0x70, 0x3e, 0xff, 0xfe]).unwrap_err();
        assert_eq!(err, LookupError::MalformedDocument);
    }

    #[test]
    fn test_flatten_text_joins_with_single_spaces() {
        let html = Html::parse_fragment("<ol><li>  one two </li>\n<li><b>three</b>four</li><li> </li></ol>");
        let sel = Selector::parse("ol").unwrap();
        let list = html.select(&sel).next().unwrap();
        assert_eq!(flatten_text(list), "one two three four");
    }
}
