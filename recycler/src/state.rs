use crate::geometry;
use crate::{ScrollDirection, Span};

/// A lightweight, serializable snapshot of the window a lane computes against.
///
/// Derived item predicates ([`crate::RealizedItem::is_viewable`],
/// [`crate::RealizedItem::is_outside_render_window`] and
/// [`crate::RealizedItem::is_disappearing`]) are evaluated against this snapshot.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub scroll_offset: u64,
    pub viewport_size: u32,
    pub look_ahead: u32,
}

impl WindowState {
    pub fn new(scroll_offset: u64, viewport_size: u32, look_ahead: u32) -> Self {
        Self {
            scroll_offset,
            viewport_size,
            look_ahead,
        }
    }

    pub fn viewable_span(&self) -> Span {
        geometry::viewable_span(self.scroll_offset, self.viewport_size)
    }

    pub fn render_span(&self) -> Span {
        geometry::render_span(self.scroll_offset, self.viewport_size, self.look_ahead)
    }

    pub fn ahead_span(&self, direction: ScrollDirection) -> Span {
        geometry::ahead_span(
            direction,
            self.scroll_offset,
            self.viewport_size,
            self.look_ahead,
        )
    }
}
