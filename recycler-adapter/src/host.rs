use alloc::vec;
use alloc::vec::Vec;

use recycler::{ItemKind, KindKey, LaneWindow, RecyclerOptions, Waterfall};

use crate::{EndReached, SlotChange, SlotRecord, diff_lane, metrics, records};

/// The result of feeding one host event through a [`ListHost`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostFrame {
    /// Slot changes since the previous frame, lane-major and in slot order within a lane.
    pub changes: Vec<SlotChange>,
    /// Whether the end-reached callback should run.
    pub end_reached: bool,
}

impl HostFrame {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && !self.end_reached
    }
}

/// A framework-neutral list host that wraps a [`recycler::Waterfall`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` when the container reports its viewport length
/// - `on_scroll` for every (coalesced, e.g. once per frame) scroll offset
/// - `on_data_changed` after the data slice changed
///
/// Each call returns the slot changes to apply to mounted views since the previous call.
#[derive(Clone, Debug)]
pub struct ListHost<T, K = ItemKind> {
    layout: Waterfall<T, K>,
    records: Vec<Vec<SlotRecord<K>>>,
    scroll_offset: u64,
    viewport_size: u32,
    content_size: u64,
    data_len: usize,
    end_reached: Option<EndReached>,
}

impl<T: Clone, K: KindKey> ListHost<T, K> {
    pub fn new(options: RecyclerOptions<T, K>) -> recycler::Result<Self> {
        let layout = Waterfall::new(options)?;
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(layout: Waterfall<T, K>) -> Self {
        let records = vec![Vec::new(); layout.lane_count()];
        Self {
            layout,
            records,
            scroll_offset: 0,
            viewport_size: 0,
            content_size: 0,
            data_len: 0,
            end_reached: None,
        }
    }

    /// Enables end-reached detection with the given threshold (in viewport lengths).
    pub fn with_end_reached(mut self, threshold: f32) -> Self {
        self.end_reached = Some(EndReached::new(threshold));
        self
    }

    pub fn layout(&self) -> &Waterfall<T, K> {
        &self.layout
    }

    pub fn lanes(&self) -> &[LaneWindow<T, K>] {
        self.layout.lanes()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    pub fn end_reached(&self) -> Option<&EndReached> {
        self.end_reached.as_ref()
    }

    pub fn end_reached_mut(&mut self) -> Option<&mut EndReached> {
        self.end_reached.as_mut()
    }

    /// Applies a container layout. Only a changed viewport length triggers recomputation.
    pub fn on_layout(&mut self, data: &[T], viewport_size: u32) -> HostFrame {
        self.refresh_content_size(data, false);
        if viewport_size == self.viewport_size {
            return HostFrame::default();
        }
        vdebug!(viewport_size, scroll_offset = self.scroll_offset, "ListHost::on_layout");
        self.viewport_size = viewport_size;
        self.layout.resize(data, viewport_size, self.scroll_offset);
        self.frame(false)
    }

    /// Applies a scroll offset reported by the container.
    pub fn on_scroll(&mut self, data: &[T], scroll_offset: u64) -> HostFrame {
        let prev = self.scroll_offset;
        self.scroll_offset = scroll_offset;
        if self.viewport_size == 0 {
            return HostFrame::default();
        }
        vtrace!(scroll_offset, "ListHost::on_scroll");
        self.layout.update(data, scroll_offset);
        let end_reached = match self.end_reached.as_mut() {
            Some(detector) => detector.check(
                prev,
                scroll_offset,
                self.viewport_size,
                self.content_size,
                data.len(),
            ),
            None => false,
        };
        self.frame(end_reached)
    }

    /// Re-synchronizes after the data slice changed (append, replace, shrink).
    pub fn on_data_changed(&mut self, data: &[T]) -> HostFrame {
        self.refresh_content_size(data, true);
        if let Some(detector) = self.end_reached.as_mut() {
            detector.on_update();
        }
        if self.viewport_size == 0 {
            return HostFrame::default();
        }
        vdebug!(len = data.len(), "ListHost::on_data_changed");
        self.layout.force_update(data, self.scroll_offset);
        self.frame(false)
    }

    /// Rebuilds every lane around its current anchor.
    pub fn force_update(&mut self, data: &[T]) -> HostFrame {
        if self.viewport_size == 0 {
            return HostFrame::default();
        }
        self.layout.force_update(data, self.scroll_offset);
        self.frame(false)
    }

    /// Offset that brings `index` to the start of the viewport, clamped to the scrollable range.
    pub fn scroll_to_index_offset(&self, data: &[T], index: usize) -> Option<u64> {
        let offset = metrics::offset_of_index(data, self.layout.options(), index)?;
        Some(metrics::clamp_scroll_offset(
            offset,
            self.content_size,
            self.viewport_size,
        ))
    }

    /// Like [`ListHost::scroll_to_index_offset`] for the first item matching `pred`.
    pub fn scroll_to_item_offset(&self, data: &[T], pred: impl FnMut(&T) -> bool) -> Option<u64> {
        let index = data.iter().position(pred)?;
        self.scroll_to_index_offset(data, index)
    }

    fn refresh_content_size(&mut self, data: &[T], force: bool) {
        if force || data.len() != self.data_len {
            self.data_len = data.len();
            self.content_size = metrics::content_size(data, self.layout.options());
        }
    }

    fn frame(&mut self, end_reached: bool) -> HostFrame {
        let mut changes = Vec::new();
        for (lane, window) in self.layout.lanes().iter().enumerate() {
            diff_lane(lane, &self.records[lane], window.items(), &mut changes);
            self.records[lane] = records(window.items());
        }
        HostFrame {
            changes,
            end_reached,
        }
    }
}
