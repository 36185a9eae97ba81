use alloc::vec::Vec;

use crate::{ItemKind, LaneLayout, RealizedItem, RecyclerError, RecyclerOptions, Result};

/// Free-form packing layout. Not implemented: every operation returns
/// [`RecyclerError::NotImplemented`].
#[derive(Clone, Debug)]
pub struct Masonry<T, K = ItemKind> {
    options: RecyclerOptions<T, K>,
}

impl<T, K> Masonry<T, K> {
    pub fn new(options: RecyclerOptions<T, K>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RecyclerOptions<T, K> {
        &self.options
    }

    fn unsupported<R>(operation: &'static str) -> Result<R> {
        vwarn!(operation, "Masonry layout is not implemented");
        Err(RecyclerError::NotImplemented {
            layout: "masonry",
            operation,
        })
    }
}

impl<T, K> LaneLayout<T, K> for Masonry<T, K> {
    fn lane_count(&self) -> usize {
        self.options.lanes
    }

    fn render(&mut self, _data: &[T]) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Self::unsupported("render")
    }

    fn update(&mut self, _data: &[T], _scroll_offset: u64) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Self::unsupported("update")
    }

    fn resize(
        &mut self,
        _data: &[T],
        _viewport_size: u32,
        _scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Self::unsupported("resize")
    }

    fn force_update(
        &mut self,
        _data: &[T],
        _scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Self::unsupported("force_update")
    }
}
