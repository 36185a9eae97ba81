use crate::WindowState;

/// The default item kind type.
pub type ItemKind = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// One edge of a [`Span`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Before,
    After,
}

/// A half-open range on the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u64,
    pub end: u64, // exclusive
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// An item that is currently materialized in a lane.
///
/// Items are stored in slot order: the position of a `RealizedItem` inside the slice returned by
/// a lane operation is its slot, and slots are reused in place when items are recycled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealizedItem<T, K = ItemKind> {
    pub item: T,
    /// Index in the data sequence at the time of realization.
    pub index: usize,
    pub kind: K,
    /// Start offset in the scroll axis, relative to the lane's content origin.
    pub position: u64,
    /// Size in the scroll axis.
    pub size: u32,
}

impl<T, K> RealizedItem<T, K> {
    pub fn end(&self) -> u64 {
        self.position.saturating_add(self.size as u64)
    }

    pub fn span(&self) -> Span {
        Span::new(self.position, self.end())
    }

    /// Whether the item overlaps the viewport (no look-ahead) of `window`.
    pub fn is_viewable(&self, window: &WindowState) -> bool {
        crate::geometry::overlaps(self.position, self.size, window.viewable_span())
    }

    /// Whether the item lies wholly outside the render window (viewport plus look-ahead).
    pub fn is_outside_render_window(&self, window: &WindowState) -> bool {
        !crate::geometry::overlaps(self.position, self.size, window.render_span())
    }

    /// Whether the item is "disappearing" for a walk in `direction`: it is not viewable and does
    /// not touch the look-ahead on the side being walked toward.
    ///
    /// Its slot may be recycled for an appearing item. Items in the trailing look-ahead qualify.
    pub fn is_disappearing(&self, window: &WindowState, direction: ScrollDirection) -> bool {
        !self.is_viewable(window)
            && crate::geometry::disjoint(self.position, self.size, window.ahead_span(direction))
    }
}

/// The lowest- and highest-index items of a lane's tracked window.
///
/// The pair is always ordered by index; either side is `None` only when the lane is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BothEnds<T, K = ItemKind> {
    pub start: Option<RealizedItem<T, K>>,
    pub end: Option<RealizedItem<T, K>>,
}

impl<T, K> Default for BothEnds<T, K> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

impl<T, K> BothEnds<T, K> {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Index range covered by the tracked window (inclusive on both ends).
    pub fn indexes(&self) -> Option<(usize, usize)> {
        Some((self.start.as_ref()?.index, self.end.as_ref()?.index))
    }

    /// Scroll-axis extent covered by the tracked window.
    pub fn span(&self) -> Option<Span> {
        let start = self.start.as_ref()?;
        let end = self.end.as_ref()?;
        Some(Span::new(start.position, end.end()))
    }

    /// The endpoint a walk in `direction` continues from.
    pub(crate) fn leading(&self, direction: ScrollDirection) -> Option<&RealizedItem<T, K>> {
        match direction {
            ScrollDirection::Forward => self.end.as_ref(),
            ScrollDirection::Backward => self.start.as_ref(),
        }
    }

    /// The endpoint a walk in `direction` moves away from.
    pub(crate) fn trailing(&self, direction: ScrollDirection) -> Option<&RealizedItem<T, K>> {
        self.leading(direction.reverse())
    }

    pub(crate) fn set_leading(
        &mut self,
        direction: ScrollDirection,
        item: Option<RealizedItem<T, K>>,
    ) {
        match direction {
            ScrollDirection::Forward => self.end = item,
            ScrollDirection::Backward => self.start = item,
        }
    }

    pub(crate) fn set_trailing(
        &mut self,
        direction: ScrollDirection,
        item: Option<RealizedItem<T, K>>,
    ) {
        self.set_leading(direction.reverse(), item);
    }
}
