use alloc::vec::Vec;

use crate::key::KindKey;
use crate::{ItemKind, LaneWindow, RealizedItem, RecyclerError, RecyclerOptions, Result};

/// A multi-lane layout driven by the host.
///
/// Every operation returns one realized-item list per lane, lane-major.
pub trait LaneLayout<T, K = ItemKind> {
    fn lane_count(&self) -> usize;

    fn render(&mut self, data: &[T]) -> Result<Vec<&[RealizedItem<T, K>]>>;

    fn update(&mut self, data: &[T], scroll_offset: u64) -> Result<Vec<&[RealizedItem<T, K>]>>;

    fn resize(
        &mut self,
        data: &[T],
        viewport_size: u32,
        scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>>;

    fn force_update(
        &mut self,
        data: &[T],
        scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>>;
}

/// Round-robin lanes: item `i` lives in lane `i % lanes`.
///
/// Each lane runs its own [`LaneWindow`] over its stride. With one lane this behaves exactly like
/// a bare `LaneWindow`.
#[derive(Clone, Debug)]
pub struct Waterfall<T, K = ItemKind> {
    options: RecyclerOptions<T, K>,
    lanes: Vec<LaneWindow<T, K>>,
}

impl<T, K> Waterfall<T, K> {
    pub fn options(&self) -> &RecyclerOptions<T, K> {
        &self.options
    }

    pub fn lane(&self, lane: usize) -> Option<&LaneWindow<T, K>> {
        self.lanes.get(lane)
    }

    pub fn lanes(&self) -> &[LaneWindow<T, K>] {
        &self.lanes
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

impl<T: Clone, K: KindKey> Waterfall<T, K> {
    /// Creates `options.lanes` lanes sharing clones of `options`.
    pub fn new(options: RecyclerOptions<T, K>) -> Result<Self> {
        let count = options.lanes;
        if count == 0 {
            vwarn!("Waterfall::new: zero lanes");
            return Err(RecyclerError::NoLanes);
        }
        vdebug!(lanes = count, look_ahead = options.look_ahead, "Waterfall::new");
        let lanes = (0..count)
            .map(|lane| LaneWindow::for_lane(options.clone(), lane, count))
            .collect();
        Ok(Self { options, lanes })
    }

    pub fn render(&mut self, data: &[T]) -> Vec<&[RealizedItem<T, K>]> {
        self.lanes.iter_mut().map(|lane| lane.render(data)).collect()
    }

    pub fn update(&mut self, data: &[T], scroll_offset: u64) -> Vec<&[RealizedItem<T, K>]> {
        self.lanes
            .iter_mut()
            .map(|lane| lane.update(data, scroll_offset))
            .collect()
    }

    pub fn resize(
        &mut self,
        data: &[T],
        viewport_size: u32,
        scroll_offset: u64,
    ) -> Vec<&[RealizedItem<T, K>]> {
        self.lanes
            .iter_mut()
            .map(|lane| lane.resize(data, viewport_size, scroll_offset))
            .collect()
    }

    pub fn force_update(&mut self, data: &[T], scroll_offset: u64) -> Vec<&[RealizedItem<T, K>]> {
        self.lanes
            .iter_mut()
            .map(|lane| lane.force_update(data, scroll_offset))
            .collect()
    }
}

impl<T: Clone, K: KindKey> LaneLayout<T, K> for Waterfall<T, K> {
    fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    fn render(&mut self, data: &[T]) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Ok(Waterfall::render(self, data))
    }

    fn update(&mut self, data: &[T], scroll_offset: u64) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Ok(Waterfall::update(self, data, scroll_offset))
    }

    fn resize(
        &mut self,
        data: &[T],
        viewport_size: u32,
        scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Ok(Waterfall::resize(self, data, viewport_size, scroll_offset))
    }

    fn force_update(
        &mut self,
        data: &[T],
        scroll_offset: u64,
    ) -> Result<Vec<&[RealizedItem<T, K>]>> {
        Ok(Waterfall::force_update(self, data, scroll_offset))
    }
}
