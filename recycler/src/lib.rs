//! A headless visible-window tracking and slot-recycling engine for virtualized lists.
//!
//! For host-side utilities (slot diffing, end-reached detection, viewability tracking), see the
//! `recycler-adapter` crate.
//!
//! Given an ordered data slice, a scroll offset, a per-item size and a per-item kind, each lane
//! incrementally computes which items must currently be realized: everything overlapping the
//! viewport plus a look-ahead buffer in the direction of travel. Slots of items that left the
//! viewport (and are not in the look-ahead being walked toward) are reused in place for appearing
//! items, preferring a slot of the same kind, so the host can rebind an existing view instead of
//! mounting a new one.
//!
//! Per-tick work is proportional to the window, not to the data length.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size along the scroll axis
//! - scroll offset
//! - item sizes and kinds
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod key;
mod lane;
mod layout;
mod masonry;
mod options;
mod state;
mod types;


pub use error::{RecyclerError, Result};
pub use lane::LaneWindow;
pub use layout::{LaneLayout, Waterfall};
pub use masonry::Masonry;
pub use options::{ItemKindFn, ItemSize, RecyclerOptions};
pub use state::WindowState;
pub use types::{BothEnds, Boundary, ItemKind, RealizedItem, ScrollDirection, Span};

#[doc(hidden)]
pub use key::KindKey;
