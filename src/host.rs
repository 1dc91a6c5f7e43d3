//! Browser edge: DOM import, write-back, and listener wiring.
//!
//! This module is the only place that touches live `web_sys` elements. It
//! imports each outermost marker element into the mirror model, runs the
//! controller against the mirror, writes the resulting classes and content
//! back, and attaches exactly one click listener per note. The listener is
//! stable for the life of the page: every click is forwarded to
//! [`NoteWidgetController::handle_click`], which dispatches on the note's
//! current state, so there is no per-transition rebinding to get wrong.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document as WebDocument, Element as WebElement, Event, Node as WebNode};

use crate::consts::{HIDE_CLASS, MARKER_CLASS, NOTE_ID_ATTR};
use crate::controller::NoteWidgetController;
use crate::dom::{Document, Element, Node};
use crate::note::{ClickTarget, NoteId};

/// Shared widget state captured by every note's click closure.
struct App {
    controller: NoteWidgetController,
    mirror: Document,
}

/// Convert every marker element in the live document into a side-note
/// widget. Returns the number of notes initialized; zero matches is a
/// no-op that leaves the page untouched.
///
/// Intended to run once per page load, after the DOM is fully constructed.
pub fn enhance_document(web_doc: &WebDocument) -> usize {
    let marked = outermost_markers(web_doc);
    if marked.is_empty() {
        return 0;
    }

    let mut mirror = Document::new();
    for el in &marked {
        mirror.root.children.push(Node::Element(import_element(el)));
    }

    let mut controller = NoteWidgetController::new();
    let ids = controller.initialize(&mut mirror);
    debug_assert_eq!(ids.len(), marked.len());

    let app = Rc::new(RefCell::new(App { controller, mirror }));
    for (el, id) in marked.iter().zip(ids.iter().copied()) {
        sync_element(el, id, &app.borrow().mirror);
        attach_listener(el, id, &app);
    }

    let count = ids.len();
    log::debug!("claimed {count} side note(s)");
    count
}

/// Marker elements in document order, excluding markers nested inside
/// another marker. Nested ones travel with their outer note's content.
fn outermost_markers(web_doc: &WebDocument) -> Vec<WebElement> {
    let matches = web_doc.get_elements_by_class_name(MARKER_CLASS);
    let marker_selector = format!(".{MARKER_CLASS}");

    // HtmlCollection is live; snapshot it before mutating anything.
    let mut out = Vec::new();
    for i in 0..matches.length() {
        let Some(el) = matches.item(i) else { continue };
        let nested = el
            .parent_element()
            .and_then(|parent| parent.closest(&marker_selector).ok().flatten())
            .is_some();
        if !nested {
            out.push(el);
        }
    }
    out
}

/// Recursively read a live element into the mirror model. Element and text
/// children are kept; comments and other node types are not content.
#[must_use]
pub fn import_element(el: &WebElement) -> Element {
    let mut out = Element::new(&el.tag_name().to_lowercase());

    let attrs = el.attributes();
    for i in 0..attrs.length() {
        let Some(attr) = attrs.item(i) else { continue };
        let name = attr.name();
        if name == "class" {
            for class in attr.value().split_whitespace() {
                out.add_class(class);
            }
        } else {
            out.set_attr(&name, &attr.value());
        }
    }

    let child_nodes = el.child_nodes();
    for i in 0..child_nodes.length() {
        let Some(node) = child_nodes.item(i) else { continue };
        match node.node_type() {
            WebNode::ELEMENT_NODE => {
                if let Ok(child) = node.dyn_into::<WebElement>() {
                    out.children.push(Node::Element(import_element(&child)));
                }
            }
            WebNode::TEXT_NODE => {
                if let Some(text) = node.text_content() {
                    out.children.push(Node::Text(text));
                }
            }
            _ => {}
        }
    }

    out
}

/// Write a note's mirror state (classes, id stamp, content) back to its
/// live element.
fn sync_element(el: &WebElement, id: NoteId, mirror: &Document) {
    let Some(source) = mirror.root.find_by_attr(NOTE_ID_ATTR, &id.to_string()) else {
        log::warn!("mirror element missing for note {id}");
        return;
    };
    let _ = el.set_attribute("class", &source.class_attr());
    let _ = el.set_attribute(NOTE_ID_ATTR, &id.to_string());
    el.set_inner_html(&source.children_html());
}

/// Attach the single stable click listener for one note.
fn attach_listener(el: &WebElement, id: NoteId, app: &Rc<RefCell<App>>) {
    let app = Rc::clone(app);
    let live = el.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = click_target(&event);
        let mut app = app.borrow_mut();
        let App { controller, mirror } = &mut *app;
        match controller.handle_click(mirror, id, target) {
            Ok(_) => sync_element(&live, id, mirror),
            Err(err) => log::warn!("side note click ignored: {err}"),
        }
    });
    let _ = el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    // Widgets live until page unload; the closure is intentionally leaked.
    handler.forget();
}

/// Classify where inside the note a click landed.
fn click_target(event: &Event) -> ClickTarget {
    let hide_selector = format!(".{HIDE_CLASS}");
    event
        .target()
        .and_then(|t| t.dyn_into::<WebElement>().ok())
        .and_then(|el| el.closest(&hide_selector).ok().flatten())
        .map_or(ClickTarget::Body, |_| ClickTarget::HideControl)
}
