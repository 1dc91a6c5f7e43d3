//! Widget controller: scan, initialization, and click dispatch.
//!
//! DESIGN
//! ======
//! `NoteWidgetController` is the browser-free core of the widget, separated
//! from the `web-sys` edge so all interactive behavior can be tested
//! natively; the state machine never depends on a live DOM.
//!
//! Initialization claims marker elements in document order. A claimed
//! element's original children move into the note's snapshot, so markers
//! nested inside another marker are captured as inert content rather than
//! claimed as widgets of their own: the outermost marker wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use uuid::Uuid;

use crate::consts::{COLLAPSED_CLASS, EXPANDED_CLASS, MARKER_CLASS, NOTE_ID_ATTR, VISIBLE_CLASS};
use crate::dom::{Document, Element, Node};
use crate::note::{self, ClickTarget, Note, NoteId, NoteState, NoteStore};

/// Error returned by [`NoteWidgetController::handle_click`].
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The id does not belong to any initialized note, or its element has
    /// disappeared from the managed document.
    #[error("no note registered for id {0}")]
    UnknownNote(NoteId),
}

/// Scans a document for marker elements and owns the resulting notes.
#[derive(Debug, Clone, Default)]
pub struct NoteWidgetController {
    store: NoteStore,
}

impl NoteWidgetController {
    /// A controller with no notes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim every unclaimed marker element in the document, in document
    /// order, and collapse it to its initial state.
    ///
    /// For each claimed element this stamps the note id, applies the visible
    /// and collapsed presentation classes, captures the expanded snapshot
    /// (avatar + original children + hide control), and replaces the content
    /// with the `[note]` placeholder. Returns the claimed ids in document
    /// order. A document without markers is untouched and yields an empty
    /// list; already-claimed elements are skipped, so re-running is a no-op.
    pub fn initialize(&mut self, doc: &mut Document) -> Vec<NoteId> {
        let mut claimed = Vec::new();
        Self::claim_in(&mut doc.root, &mut self.store, &mut claimed);
        claimed
    }

    /// Dispatch a click on the note with the given id.
    ///
    /// The transition (if any) is decided by the pure reducer
    /// [`note::reduce`]; the element's children are then replayed whole from
    /// the snapshot or the collapsed marker and its presentation classes
    /// swapped. Returns the state after the click.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownNote`] if the id was never initialized
    /// or its element is no longer present in `doc`.
    pub fn handle_click(
        &mut self,
        doc: &mut Document,
        id: NoteId,
        target: ClickTarget,
    ) -> Result<NoteState, WidgetError> {
        let note = self.store.get_mut(&id).ok_or(WidgetError::UnknownNote(id))?;
        let Some(next) = note::reduce(note.state(), target) else {
            return Ok(note.state());
        };

        let element = doc
            .root
            .find_by_attr_mut(NOTE_ID_ATTR, &id.to_string())
            .ok_or(WidgetError::UnknownNote(id))?;
        element.children = note.render(next);
        match next {
            NoteState::Expanded => {
                element.remove_class(COLLAPSED_CLASS);
                element.add_class(EXPANDED_CLASS);
            }
            NoteState::Collapsed => {
                element.remove_class(EXPANDED_CLASS);
                element.add_class(COLLAPSED_CLASS);
            }
        }
        note.set_state(next);
        Ok(next)
    }

    /// Current state of a note, if it exists.
    #[must_use]
    pub fn state(&self, id: &NoteId) -> Option<NoteState> {
        self.store.get(id).map(Note::state)
    }

    /// The captured snapshot of a note, if it exists.
    #[must_use]
    pub fn snapshot(&self, id: &NoteId) -> Option<&[Node]> {
        self.store.get(id).map(Note::snapshot)
    }

    /// Ids of all live notes in document order.
    #[must_use]
    pub fn ids(&self) -> &[NoteId] {
        self.store.ids()
    }

    /// Number of live notes.
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.store.len()
    }

    fn claim_in(parent: &mut Element, store: &mut NoteStore, claimed: &mut Vec<NoteId>) {
        for child in &mut parent.children {
            let Node::Element(el) = child else { continue };
            if el.has_class(MARKER_CLASS) && el.attr(NOTE_ID_ATTR).is_none() {
                claimed.push(Self::claim_one(el, store));
                // The element's children just moved into the snapshot, so
                // nested markers are out of the live tree; nothing to recurse.
            } else {
                Self::claim_in(el, store, claimed);
            }
        }
    }

    fn claim_one(el: &mut Element, store: &mut NoteStore) -> NoteId {
        let id = Uuid::new_v4();
        el.add_class(VISIBLE_CLASS);
        el.set_attr(NOTE_ID_ATTR, &id.to_string());

        let mut snapshot = Vec::with_capacity(el.children.len() + 2);
        snapshot.push(note::avatar());
        snapshot.append(&mut el.children);
        snapshot.push(note::hide_control());

        let note = Note::new(id, snapshot);
        el.children = note.render(NoteState::Collapsed);
        el.add_class(COLLAPSED_CLASS);
        store.insert(note);
        id
    }
}
