//! Host-side utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only decides which items are realized in which slot.
//! This crate provides small, framework-neutral helpers a list component typically needs on top:
//!
//! - A host driver that turns layout/scroll/data events into per-slot mount/rebind/unmount changes
//! - Content metrics (content length, scroll-to-index offsets)
//! - End-reached detection for incremental loading
//! - Viewability tracking
//! - Debug overlay geometry
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod end_reached;
mod host;
pub mod metrics;
mod overlay;
mod viewability;

#[cfg(test)]
mod tests;

pub use diff::{SlotChange, SlotRecord, diff_lane, records};
pub use end_reached::{EndReached, EndReachedState};
pub use host::{HostFrame, ListHost};
pub use overlay::{Bar, OverlayFrame};
pub use viewability::{ViewToken, ViewabilityTracker, ViewableItemsChanged};
