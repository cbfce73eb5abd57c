use crate::clean::{flatten_text, Page};
use crate::traverse::{is_element, nearest_after, nearest_before};
use cwikli_model::{Entry, LookupError};
use ego_tree::NodeRef;
use scraper::{ElementRef, Node, Selector};

/// Every headword, whatever its language. The `lang` attribute is the anchor
/// for "this is an entry in language X".
const HEADWORD_SELECTOR: &str = "strong[lang]";

/// Extract the entries for `language_code`, in document order.
///
/// Each tagged headword yields one [`Entry`]: the `id` of the nearest section
/// heading before it, and the text of the first ordered list after it. Both
/// searches start from the headword's parent. A page with no language-tagged
/// headwords at all is [`LookupError::LanguageNotFound`]; a page whose
/// headwords are all in other languages gives an empty result.
pub fn extract(page: &Page, language_code: &str) -> Result<Vec<Entry>, LookupError> {
    let selector = Selector::parse(HEADWORD_SELECTOR).expect("valid selector");
    let tagged: Vec<ElementRef> = page.html().select(&selector).collect();

    if tagged.is_empty() {
        tracing::debug!("Page has no language-tagged headwords");
        return Err(LookupError::LanguageNotFound);
    }

    let headwords: Vec<ElementRef> = tagged
        .into_iter()
        .filter(|el| el.value().attr("lang") == Some(language_code))
        .collect();
    tracing::debug!(lang = language_code, headwords = headwords.len(), "Found headwords");

    headwords.into_iter().map(entry_for).collect()
}

fn entry_for(headword: ElementRef<'_>) -> Result<Entry, LookupError> {
    let anchor = headword
        .parent()
        .ok_or_else(|| unexpected("headword has no parent"))?;

    let heading = nearest_before(anchor, is_section_heading)
        .ok_or_else(|| unexpected("no section heading before headword"))?;
    let part_of_speech = heading
        .value()
        .as_element()
        .and_then(|el| el.attr("id"))
        .filter(|id| !id.is_empty())
        .ok_or_else(|| unexpected("section heading has no id"))?
        .to_string();

    let list = nearest_after(anchor, |node| is_element(node, "ol"))
        .and_then(ElementRef::wrap)
        .ok_or_else(|| unexpected("no definition list after headword"))?;
    let definitions = flatten_text(list);
    if definitions.is_empty() {
        return Err(unexpected("definition list is empty"));
    }

    Ok(Entry {
        part_of_speech,
        definitions,
    })
}

/// A section heading marker: the legacy `<span class="mw-headline" id=…>`,
/// or a heading element directly inside `<div class="mw-heading">`.
fn is_section_heading(node: NodeRef<'_, Node>) -> bool {
    let Some(el) = node.value().as_element() else {
        return false;
    };

    match el.name() {
        "span" => el.classes().any(|c| c == "mw-headline"),
        "h2" | "h3" | "h4" | "h5" | "h6" => node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|p| p.classes().any(|c| c == "mw-heading")),
        _ => false,
    }
}

fn unexpected(reason: &str) -> LookupError {
    tracing::debug!(reason, "Page layout not as expected");
    LookupError::UnexpectedStructure
}
