//! Collapsible side-note widget engine for the blog.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It scans a
//! rendered page for elements carrying the side-note marker class and turns
//! each into a toggleable widget: collapsed to a short `[note]` placeholder
//! by default, expanded to its full content (plus avatar and a `[hide]`
//! control) on click. The rendering pipeline that produces the marker
//! elements and the stylesheet that styles the presentation classes are the
//! host site's responsibility.
//!
//! All widget logic lives in a browser-free core so it can be unit tested
//! natively; only [`host`] and [`boot`] touch `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Class names, labels, and fixed furniture paths |
//! | [`dom`] | Structured content model: mirror elements and documents |
//! | [`note`] | Per-note state machine and pure render reducer |
//! | [`controller`] | Scan, initialization, and click dispatch |
//! | [`host`] | Browser edge: DOM import, write-back, listener wiring |
//! | [`boot`] | WASM entry point and logging setup |

pub mod boot;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod host;
pub mod note;
