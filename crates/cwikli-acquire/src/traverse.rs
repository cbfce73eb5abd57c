//! Nearest-match searches in document order (depth-first, left to right).
//!
//! "Before" includes the anchor's ancestors; "after" includes its descendants.

use ego_tree::NodeRef;
use scraper::Node;

/// The last node before `anchor` that satisfies `pred`.
pub fn nearest_before<'a, F>(anchor: NodeRef<'a, Node>, mut pred: F) -> Option<NodeRef<'a, Node>>
where
    F: FnMut(NodeRef<'a, Node>) -> bool,
{
    let mut found = None;
    for node in document_root(anchor).descendants() {
        if node.id() == anchor.id() {
            return found;
        }
        if pred(node) {
            found = Some(node);
        }
    }
    // Detached anchors are not in document order at all.
    None
}

/// The first node after `anchor` that satisfies `pred`.
pub fn nearest_after<'a, F>(anchor: NodeRef<'a, Node>, mut pred: F) -> Option<NodeRef<'a, Node>>
where
    F: FnMut(NodeRef<'a, Node>) -> bool,
{
    document_root(anchor)
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .find(|node| pred(*node))
}

/// True for element nodes with the given tag name.
pub fn is_element(node: NodeRef<'_, Node>, name: &str) -> bool {
    node.value().as_element().is_some_and(|el| el.name() == name)
}

fn document_root(node: NodeRef<'_, Node>) -> NodeRef<'_, Node> {
    node.ancestors().last().unwrap_or(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> NodeRef<'a, Node> {
        let sel = Selector::parse(css).unwrap();
        *doc.select(&sel).next().unwrap()
    }

    fn id_of(node: NodeRef<'_, Node>) -> &str {
        node.value().as_element().unwrap().attr("id").unwrap()
    }

    const DOC: &str = r#"
        <div id="a">
            <h3 id="h1"></h3>
            <section id="s">
                <h3 id="h2"></h3>
                <p id="anchor"><b id="inner"></b></p>
                <h3 id="h3"></h3>
            </section>
            <h3 id="h4"></h3>
        </div>"#;

    #[test]
    fn test_before_picks_closest() {
        let doc = Html::parse_fragment(DOC);
        let anchor = first(&doc, "#anchor");
        let found = nearest_before(anchor, |n| is_element(n, "h3")).unwrap();
        assert_eq!(id_of(found), "h2");
    }

    #[test]
    fn test_before_includes_ancestors() {
        let doc = Html::parse_fragment(DOC);
        let anchor = first(&doc, "#anchor");
        let found = nearest_before(anchor, |n| is_element(n, "section")).unwrap();
        assert_eq!(id_of(found), "s");
    }

    #[test]
    fn test_after_includes_descendants() {
        let doc = Html::parse_fragment(DOC);
        let anchor = first(&doc, "#anchor");
        let found = nearest_after(anchor, |n| is_element(n, "b")).unwrap();
        assert_eq!(id_of(found), "inner");
    }

    #[test]
    fn test_after_leaves_enclosing_section() {
        let doc = Html::parse_fragment(DOC);
        let anchor = first(&doc, "#h3");
        let found = nearest_after(anchor, |n| is_element(n, "h3")).unwrap();
        assert_eq!(id_of(found), "h4");
    }

    #[test]
    fn test_no_match() {
        let doc = Html::parse_fragment(DOC);
        let anchor = first(&doc, "#anchor");
        assert!(nearest_before(anchor, |n| is_element(n, "ol")).is_none());
        assert!(nearest_after(anchor, |n| is_element(n, "ol")).is_none());
    }
}
