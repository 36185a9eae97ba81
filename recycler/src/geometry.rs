//! Pure one-dimensional geometry over the scroll axis.
//!
//! Spans are half-open. Item positions are never negative, so spans that would start before the
//! content origin are clamped to `0`.

use core::cmp;

use crate::{Boundary, ScrollDirection, Span};

/// Classifies the movement from `prev_offset` to `offset`.
///
/// When `velocity` is given it wins: its sign decides, and a zero velocity means no direction.
pub fn scroll_direction(
    prev_offset: u64,
    offset: u64,
    velocity: Option<f32>,
) -> Option<ScrollDirection> {
    if let Some(velocity) = velocity {
        return if velocity > 0.0 {
            Some(ScrollDirection::Forward)
        } else if velocity < 0.0 {
            Some(ScrollDirection::Backward)
        } else {
            None
        };
    }
    match offset.cmp(&prev_offset) {
        cmp::Ordering::Greater => Some(ScrollDirection::Forward),
        cmp::Ordering::Less => Some(ScrollDirection::Backward),
        cmp::Ordering::Equal => None,
    }
}

pub fn viewable_span(scroll_offset: u64, viewport_size: u32) -> Span {
    Span::new(
        scroll_offset,
        scroll_offset.saturating_add(viewport_size as u64),
    )
}

/// The viewable span grown by `look_ahead` on both sides.
pub fn render_span(scroll_offset: u64, viewport_size: u32, look_ahead: u32) -> Span {
    let ahead = look_ahead as u64;
    Span::new(
        scroll_offset.saturating_sub(ahead),
        scroll_offset
            .saturating_add(viewport_size as u64)
            .saturating_add(ahead),
    )
}

/// The look-ahead-only part of the render span on the side we are moving toward.
pub fn ahead_span(
    direction: ScrollDirection,
    scroll_offset: u64,
    viewport_size: u32,
    look_ahead: u32,
) -> Span {
    let ahead = look_ahead as u64;
    match direction {
        ScrollDirection::Forward => {
            let start = scroll_offset.saturating_add(viewport_size as u64);
            Span::new(start, start.saturating_add(ahead))
        }
        ScrollDirection::Backward => {
            Span::new(scroll_offset.saturating_sub(ahead), scroll_offset)
        }
    }
}

/// Whether `[position, position + size)` intersects `span`.
///
/// An item that starts exactly at `span.end` is outside. Empty spans overlap nothing.
pub fn overlaps(position: u64, size: u32, span: Span) -> bool {
    if span.is_empty() {
        return false;
    }
    !is_past_boundary(Boundary::Before, position, size, span)
        && !is_past_boundary(Boundary::After, position, size, span)
}

pub fn contains(position: u64, size: u32, span: Span) -> bool {
    position >= span.start && position.saturating_add(size as u64) <= span.end
}

/// Whether the item lies entirely before or entirely after `span`.
pub fn disjoint(position: u64, size: u32, span: Span) -> bool {
    is_past_boundary(Boundary::Before, position, size, span)
        || is_past_boundary(Boundary::After, position, size, span)
}

/// Tests a single edge of `span`.
///
/// `After`: the item starts at or after `span.end`. `Before`: the item ends at or before
/// `span.start` (a zero-sized item sitting exactly on `span.start` is not before it).
pub fn is_past_boundary(boundary: Boundary, position: u64, size: u32, span: Span) -> bool {
    match boundary {
        Boundary::Before => {
            position < span.start && position.saturating_add(size as u64) <= span.start
        }
        Boundary::After => position >= span.end,
    }
}
