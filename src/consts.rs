//! Shared class names, labels, and attribute keys for the widget.

// ── Marker / presentation classes ───────────────────────────────

/// Class that flags an element in rendered content for conversion into a
/// side-note widget. This is the sole contract with the upstream rendering
/// pipeline.
pub const MARKER_CLASS: &str = "sidenote";

/// Applied once a marker element has been claimed as an active widget.
pub const VISIBLE_CLASS: &str = "sidenote-visible";

/// Present while the note shows its full content.
pub const EXPANDED_CLASS: &str = "sidenote-expanded";

/// Present while the note shows only the `[note]` placeholder.
pub const COLLAPSED_CLASS: &str = "sidenote-collapsed";

/// Class on the trailing `[hide]` control inside an expanded note.
pub const HIDE_CLASS: &str = "sidenote-hide";

/// Class on the `[note]` placeholder inside a collapsed note.
pub const LABEL_CLASS: &str = "sidenote-label";

/// Class on the avatar image injected at the head of expanded content.
pub const AVATAR_CLASS: &str = "sidenote-avatar";

// ── Attributes / fixed content ──────────────────────────────────

/// Attribute stamped onto claimed marker elements, carrying the note id.
pub const NOTE_ID_ATTR: &str = "data-note";

/// Text of the collapsed placeholder control.
pub const NOTE_LABEL: &str = "[note]";

/// Text of the expanded hide control.
pub const HIDE_LABEL: &str = "[hide]";

/// Source path of the avatar image. A missing image degrades visually but
/// not functionally.
pub const AVATAR_SRC: &str = "/images/avatar.png";
