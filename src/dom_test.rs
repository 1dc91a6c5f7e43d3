use super::*;

fn sample() -> Element {
    Element::new("div")
        .with_class("outer")
        .with_attr("id", "root")
        .with_child(Node::Element(
            Element::new("p")
                .with_attr("data-note", "abc")
                .with_text("hello"),
        ))
        .with_text("tail")
}

// =============================================================
// Classes
// =============================================================

#[test]
fn add_class_is_idempotent() {
    let mut el = Element::new("div");
    el.add_class("a");
    el.add_class("a");
    el.add_class("b");
    assert_eq!(el.classes, vec!["a", "b"]);
    assert!(el.has_class("a"));
    assert!(!el.has_class("c"));
}

#[test]
fn remove_class_tolerates_absence() {
    let mut el = Element::new("div").with_class("a").with_class("b");
    el.remove_class("a");
    el.remove_class("missing");
    assert_eq!(el.classes, vec!["b"]);
}

#[test]
fn class_attr_joins_in_insertion_order() {
    let el = Element::new("div").with_class("b").with_class("a");
    assert_eq!(el.class_attr(), "b a");
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn set_attr_overwrites() {
    let mut el = Element::new("span");
    el.set_attr("title", "first");
    el.set_attr("title", "second");
    assert_eq!(el.attr("title"), Some("second"));
    assert_eq!(el.attr("missing"), None);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_by_attr_matches_self() {
    let el = sample();
    let found = el.find_by_attr("id", "root").expect("self match");
    assert_eq!(found.tag, "div");
}

#[test]
fn find_by_attr_matches_descendant() {
    let el = sample();
    let found = el.find_by_attr("data-note", "abc").expect("child match");
    assert_eq!(found.tag, "p");
}

#[test]
fn find_by_attr_misses_cleanly() {
    let el = sample();
    assert!(el.find_by_attr("data-note", "other").is_none());
}

#[test]
fn find_by_attr_mut_allows_mutation() {
    let mut el = sample();
    let found = el
        .find_by_attr_mut("data-note", "abc")
        .expect("child match");
    found.add_class("patched");
    assert!(
        el.find_by_attr("data-note", "abc")
            .is_some_and(|e| e.has_class("patched"))
    );
}

#[test]
fn text_concatenates_descendants() {
    assert_eq!(sample().text(), "hellotail");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn to_html_renders_classes_attrs_and_children() {
    let html = sample().to_html();
    assert_eq!(
        html,
        "<div class=\"outer\" id=\"root\"><p data-note=\"abc\">hello</p>tail</div>"
    );
}

#[test]
fn children_html_omits_own_tag() {
    let html = sample().children_html();
    assert_eq!(html, "<p data-note=\"abc\">hello</p>tail");
}

#[test]
fn void_elements_have_no_closing_tag() {
    let img = Element::new("img").with_attr("src", "/a.png");
    assert_eq!(img.to_html(), "<img src=\"/a.png\">");
}

#[test]
fn text_is_escaped() {
    let el = Element::new("p").with_text("a < b & c > d");
    assert_eq!(el.to_html(), "<p>a &lt; b &amp; c &gt; d</p>");
}

#[test]
fn attr_values_are_escaped() {
    let el = Element::new("p").with_attr("title", "say \"hi\" & <go>");
    assert_eq!(
        el.to_html(),
        "<p title=\"say &quot;hi&quot; &amp; &lt;go&gt;\"></p>"
    );
}

#[test]
fn escape_helpers_pass_plain_text_through() {
    assert_eq!(escape_text("plain"), "plain");
    assert_eq!(escape_attr("plain"), "plain");
}

// =============================================================
// Document
// =============================================================

#[test]
fn document_default_is_empty_body() {
    let doc = Document::default();
    assert_eq!(doc.root.tag, "body");
    assert!(doc.root.children.is_empty());
    assert_eq!(doc.to_html(), "");
}

#[test]
fn document_serializes_content_only() {
    let doc = Document::from_root(Element::new("body").with_child(Node::Element(sample())));
    assert!(doc.to_html().starts_with("<div"));
    assert!(!doc.to_html().starts_with("<body"));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn node_serde_roundtrip() {
    let node = Node::Element(sample());
    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn text_node_serde_shape() {
    let json = serde_json::to_string(&Node::Text("hi".to_owned())).unwrap();
    assert_eq!(json, "{\"text\":\"hi\"}");
}
