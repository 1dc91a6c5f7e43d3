//! Per-note state machine, snapshot, and the pure render reducer.
//!
//! DESIGN
//! ======
//! Each note owns an immutable `snapshot` of its expanded content, captured
//! once at initialization. Transitions never patch content incrementally:
//! the rendered children are always replayed whole from either the snapshot
//! or the fixed collapsed marker, so rapid repeated clicks cannot corrupt
//! the structure. The transition itself is a pure function of the current
//! state and the click target ([`reduce`]), which keeps the widget's
//! interactive behavior testable without a browser.

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    AVATAR_CLASS, AVATAR_SRC, HIDE_CLASS, HIDE_LABEL, LABEL_CLASS, NOTE_LABEL,
};
use crate::dom::{Element, Node};

/// Unique identifier for a note, stamped onto its element at initialization.
pub type NoteId = Uuid;

/// Visual state of a note. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteState {
    /// Only the `[note]` placeholder is shown. Initial state after setup.
    #[default]
    Collapsed,
    /// The full snapshot (avatar, original content, `[hide]`) is shown.
    Expanded,
}

/// Where inside a note's subtree a click landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Anywhere in the note that is not the hide control.
    Body,
    /// The `[hide]` control (or one of its descendants).
    HideControl,
}

/// Pure transition function: `None` means the click causes no transition.
///
/// A collapsed note expands on any click; an expanded note collapses only
/// via its hide control, so readers can select and click through the note
/// body without it snapping shut.
#[must_use]
pub fn reduce(state: NoteState, target: ClickTarget) -> Option<NoteState> {
    match (state, target) {
        (NoteState::Collapsed, _) => Some(NoteState::Expanded),
        (NoteState::Expanded, ClickTarget::HideControl) => Some(NoteState::Collapsed),
        (NoteState::Expanded, ClickTarget::Body) => None,
    }
}

/// A single side note: id, immutable expanded snapshot, current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier shared with the `data-note` attribute on the element.
    pub id: NoteId,
    snapshot: Vec<Node>,
    state: NoteState,
}

impl Note {
    /// Create a note from its captured expanded content. Starts collapsed.
    #[must_use]
    pub fn new(id: NoteId, snapshot: Vec<Node>) -> Self {
        Self {
            id,
            snapshot,
            state: NoteState::Collapsed,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> NoteState {
        self.state
    }

    /// The captured expanded content. Never mutated after initialization.
    #[must_use]
    pub fn snapshot(&self) -> &[Node] {
        &self.snapshot
    }

    /// Render the children for the given state: a clone of the snapshot when
    /// expanded, the single `[note]` marker when collapsed.
    #[must_use]
    pub fn render(&self, state: NoteState) -> Vec<Node> {
        match state {
            NoteState::Expanded => self.snapshot.clone(),
            NoteState::Collapsed => vec![collapsed_marker()],
        }
    }

    pub(crate) fn set_state(&mut self, state: NoteState) {
        self.state = state;
    }
}

// ── Fixed furniture ─────────────────────────────────────────────

/// The avatar image injected at the head of expanded content.
#[must_use]
pub fn avatar() -> Node {
    Node::Element(
        Element::new("img")
            .with_class(AVATAR_CLASS)
            .with_attr("src", AVATAR_SRC)
            .with_attr("alt", ""),
    )
}

/// The trailing `[hide]` control appended to expanded content.
#[must_use]
pub fn hide_control() -> Node {
    Node::Element(Element::new("span").with_class(HIDE_CLASS).with_text(HIDE_LABEL))
}

/// The `[note]` placeholder shown while collapsed.
#[must_use]
pub fn collapsed_marker() -> Node {
    Node::Element(Element::new("span").with_class(LABEL_CLASS).with_text(NOTE_LABEL))
}

/// In-memory store of live notes, in document order.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: HashMap<NoteId, Note>,
    order: Vec<NoteId>,
}

impl NoteStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a note. Ids are freshly generated per note, so collisions
    /// do not occur in practice; a duplicate insert replaces the entry.
    pub fn insert(&mut self, note: Note) {
        if !self.notes.contains_key(&note.id) {
            self.order.push(note.id);
        }
        self.notes.insert(note.id, note);
    }

    /// Look up a note by id.
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.get_mut(id)
    }

    /// Note ids in document order.
    #[must_use]
    pub fn ids(&self) -> &[NoteId] {
        &self.order
    }

    /// Number of live notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
