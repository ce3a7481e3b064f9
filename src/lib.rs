//! Slidegrid is the layout and content core of a multi-area slide authoring
//! tool.
//!
//! A slide is a grid of rectangular areas described by a compact definition
//! string such as `2S|60:40/1R|100/2R|30:70`: two columns at 60/40, one full
//! row on the left, two rows at 30/70 on the right. Users drop media into
//! areas; when they switch to a differently shaped grid, their media must
//! follow the area it semantically belongs to, and must never be lost.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: definition string -> [`LayoutTree`] via [`parse_layout`]
//!    (total — malformed input degrades to the empty tree, never an error)
//! 2. **Address**: each [`AreaSlot`] resolves to an [`AreaAddress`] — its
//!    user-pinned `#<tag>` when present, else its positional index
//! 3. **Synchronize**: [`reconcile`] maps a slide's stored
//!    [`ContentAssignment`] onto the new tree, keeping entries without a
//!    matching area as orphans instead of deleting them
//! 4. **Notify**: changes fan out through a fire-and-forget
//!    [`ChangeNotifier`] so the external renderer invalidates its preview
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total parsing**: the grammar is user-typed mid-edit; every input shape
//!   produces some valid tree. `area_count == 0` signals a low-confidence
//!   parse to callers that want strict validation.
//! - **Pure core**: `parse_layout` and `reconcile` are pure functions of
//!   their inputs; callers own state, persistence and rendering.
//! - **No media loss**: reconciliation is superset-preserving — a layout
//!   switch can orphan an entry but can never destroy it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod notify;
mod slide;

pub use foundation::error::{SlidegridError, SlidegridResult};
pub use layout::catalog::{BUILTIN_PRESETS, LayoutPreset, default_preset, find_preset};
pub use layout::geometry::{AreaRect, area_rects, hit_test};
pub use layout::normalize::{SizeToken, classify, normalize};
pub use layout::parser::{AreaSlot, LayoutColumn, LayoutTree, parse_layout};
pub use notify::{ChangeNotifier, NullNotifier, RecordingNotifier};
pub use slide::address::AreaAddress;
pub use slide::model::{Slide, SlideLayout, slide_from_json, slide_to_json};
pub use slide::sync::{ContentAssignment, reconcile};
