use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::geometry;
use crate::key::{KindKey, KindMap, SlotMap};
use crate::{
    BothEnds, Boundary, ItemKind, RealizedItem, RecyclerOptions, ScrollDirection, WindowState,
};

/// Tracks the realized window of a single lane and recycles its slots.
///
/// A lane owns every `stride`-th data index starting at `lane`. Realized items live in a flat
/// arena; an item's position in [`LaneWindow::items`] is its slot, and slots are only ever reused
/// in place or appended, never reordered.
///
/// The host drives the lane:
/// - [`LaneWindow::resize`] when the viewport length changes (including the first layout)
/// - [`LaneWindow::update`] on every (coalesced) scroll tick
/// - [`LaneWindow::force_update`] when the window shape may be stale but an anchor is still valid
/// - [`LaneWindow::render`] for a rebuild from scratch
#[derive(Clone, Debug)]
pub struct LaneWindow<T, K = ItemKind> {
    options: RecyclerOptions<T, K>,
    lane: usize,
    stride: usize,
    viewport_size: u32,
    scroll_offset: u64,

    items: Vec<RealizedItem<T, K>>,
    ends: BothEnds<T, K>,
    kinds: KindMap<K, BTreeSet<usize>>,
    slots: SlotMap,
}

impl<T, K> LaneWindow<T, K> {
    pub fn both_ends(&self) -> &BothEnds<T, K> {
        &self.ends
    }

    /// Realized items in slot order.
    pub fn items(&self) -> &[RealizedItem<T, K>] {
        &self.items
    }

    pub fn options(&self) -> &RecyclerOptions<T, K> {
        &self.options
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn look_ahead(&self) -> u32 {
        self.options.look_ahead
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn window_state(&self) -> WindowState {
        WindowState::new(self.scroll_offset, self.viewport_size, self.options.look_ahead)
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the storage slot currently holding data index `index`.
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.slots.get(&index).copied()
    }

    /// Returns the realized item for data index `index`, if it is tracked.
    pub fn get(&self, index: usize) -> Option<&RealizedItem<T, K>> {
        self.slot_of(index).and_then(|slot| self.items.get(slot))
    }

    fn step(&self, index: usize, direction: ScrollDirection) -> Option<usize> {
        match direction {
            ScrollDirection::Forward => index.checked_add(self.stride),
            ScrollDirection::Backward => index.checked_sub(self.stride),
        }
    }
}

impl<T: Clone, K: KindKey> LaneWindow<T, K> {
    /// Creates a single lane covering every data index.
    pub fn new(options: RecyclerOptions<T, K>) -> Self {
        Self::for_lane(options, 0, 1)
    }

    /// Creates lane `lane` of `lanes`: it owns indexes `lane, lane + lanes, lane + 2 * lanes, ..`.
    pub fn for_lane(options: RecyclerOptions<T, K>, lane: usize, lanes: usize) -> Self {
        debug_assert!(lane < lanes.max(1), "lane {lane} out of range for {lanes} lanes");
        Self {
            options,
            lane,
            stride: lanes.max(1),
            viewport_size: 0,
            scroll_offset: 0,
            items: Vec::new(),
            ends: BothEnds::default(),
            kinds: KindMap::default(),
            slots: SlotMap::default(),
        }
    }

    /// Rebuilds the lane from scratch at the current scroll offset.
    pub fn render(&mut self, data: &[T]) -> &[RealizedItem<T, K>] {
        self.clear();
        self.walk(data, ScrollDirection::Forward);
        vdebug!(
            lane = self.lane,
            realized = self.items.len(),
            "LaneWindow::render"
        );
        &self.items
    }

    /// Advances the window after a scroll.
    ///
    /// Walks only in the direction of travel: items left behind stay realized until a later walk
    /// recycles them. This is a no-op (and the offset is not recorded) when the offset did not
    /// change or when every data item is already realized.
    pub fn update(&mut self, data: &[T], scroll_offset: u64) -> &[RealizedItem<T, K>] {
        if data.len() > self.items.len() && scroll_offset != self.scroll_offset {
            let direction = geometry::scroll_direction(self.scroll_offset, scroll_offset, None);
            self.scroll_offset = scroll_offset;
            if let Some(direction) = direction {
                self.walk(data, direction);
            }
            vdebug!(
                lane = self.lane,
                scroll_offset,
                realized = self.items.len(),
                "LaneWindow::update"
            );
        }
        &self.items
    }

    /// Rebuilds both sides of the window around the current start endpoint.
    ///
    /// The anchor keeps its slot and position but is re-read from `data`. If the anchor index no
    /// longer exists in `data`, this behaves like [`LaneWindow::render`].
    pub fn force_update(&mut self, data: &[T], scroll_offset: u64) -> &[RealizedItem<T, K>] {
        self.scroll_offset = scroll_offset;
        let anchor = self.ends.start.take().map(|start| {
            data.get(start.index).map(|item| RealizedItem {
                item: item.clone(),
                index: start.index,
                kind: self.options.kind_of(item, start.index),
                position: start.position,
                size: self.options.size_of(item, start.index),
            })
        });
        self.clear();
        match anchor {
            Some(Some(anchor)) => {
                self.append(anchor.clone());
                self.ends.start = Some(anchor.clone());
                self.ends.end = Some(anchor);
            }
            Some(None) => {
                vdebug!(lane = self.lane, "LaneWindow::force_update: anchor gone, rendering");
                return self.render(data);
            }
            None => {}
        }
        self.walk(data, ScrollDirection::Forward);
        self.walk(data, ScrollDirection::Backward);
        vdebug!(
            lane = self.lane,
            scroll_offset,
            realized = self.items.len(),
            "LaneWindow::force_update"
        );
        &self.items
    }

    /// Applies a new viewport length.
    ///
    /// A zero-length viewport clears the lane and returns an empty list.
    pub fn resize(
        &mut self,
        data: &[T],
        viewport_size: u32,
        scroll_offset: u64,
    ) -> &[RealizedItem<T, K>] {
        vdebug!(
            lane = self.lane,
            viewport_size,
            scroll_offset,
            "LaneWindow::resize"
        );
        self.scroll_offset = scroll_offset;
        self.viewport_size = viewport_size;
        if viewport_size == 0 {
            self.clear();
            return &self.items;
        }
        if self.items.is_empty() {
            self.render(data)
        } else {
            self.force_update(data, scroll_offset)
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.ends = BothEnds::default();
        self.kinds.clear();
        self.slots.clear();
    }

    /// Collects the items that should appear past the walk-side endpoint.
    ///
    /// Items between the endpoint and the render span (after a jump) are skipped, but their sizes
    /// still advance the running position.
    fn find_appearing(&self, data: &[T], direction: ScrollDirection) -> Vec<RealizedItem<T, K>> {
        let mut out = Vec::new();
        let endpoint = self.ends.leading(direction);

        let (mut index, mut prev_position, mut prev_size) = match (endpoint, direction) {
            (Some(endpoint), _) => {
                let Some(next) = self.step(endpoint.index, direction) else {
                    return out;
                };
                let size = data
                    .get(endpoint.index)
                    .map(|item| self.options.size_of(item, endpoint.index))
                    .unwrap_or(endpoint.size);
                (next, endpoint.position, size)
            }
            (None, ScrollDirection::Forward) => (self.lane, 0, 0),
            (None, ScrollDirection::Backward) => return out,
        };

        let span = self.window_state().render_span();
        let far = match direction {
            ScrollDirection::Forward => Boundary::After,
            ScrollDirection::Backward => Boundary::Before,
        };

        while let Some(item) = data.get(index) {
            let size = self.options.size_of(item, index);
            let position = match direction {
                ScrollDirection::Forward => prev_position.saturating_add(prev_size as u64),
                ScrollDirection::Backward => prev_position.saturating_sub(size as u64),
            };
            if geometry::is_past_boundary(far, position, size, span) {
                break;
            }
            if geometry::overlaps(position, size, span) {
                out.push(RealizedItem {
                    item: item.clone(),
                    index,
                    kind: self.options.kind_of(item, index),
                    position,
                    size,
                });
            }
            prev_position = position;
            prev_size = size;
            match self.step(index, direction) {
                Some(next) => index = next,
                None => break,
            }
        }
        out
    }

    /// Realizes the appearing items in `direction`, recycling disappearing slots where possible,
    /// then moves the endpoints.
    fn walk(&mut self, data: &[T], direction: ScrollDirection) {
        let candidates = self.find_appearing(data, direction);
        let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
            return;
        };
        let first_index = first.index;
        let last_index = last.index;

        let window = self.window_state();
        let prior = self
            .ends
            .trailing(direction)
            .map(|t| t.index)
            .zip(self.ends.leading(direction).map(|l| l.index));
        let contiguous = prior
            .and_then(|(_, leading)| self.step(leading, direction))
            .is_some_and(|next| next == first_index);
        // Index and kind of the running fallback victim.
        let mut fallback = self
            .ends
            .trailing(direction)
            .map(|t| (t.index, t.kind.clone()))
            .filter(|_| self.options.cross_kind_reuse);

        vtrace!(
            lane = self.lane,
            ?direction,
            first = first_index,
            last = last_index,
            contiguous,
            "LaneWindow::walk"
        );

        let order: Vec<usize> = candidates.iter().map(|c| c.index).collect();
        let mut evicted = Vec::new();
        for candidate in candidates {
            if self.slots.contains_key(&candidate.index) {
                continue;
            }
            let victim = self
                .find_victim(&candidate.kind, direction, &window)
                .or_else(|| {
                    fallback
                        .as_ref()
                        .map(|(_, kind)| kind)
                        .filter(|kind| **kind != candidate.kind)
                        .and_then(|kind| self.find_victim(kind, direction, &window))
                });
            let Some(victim) = victim else {
                self.append(candidate);
                continue;
            };
            let appearing = candidate.index;
            evicted.push(victim);
            self.replace(victim, candidate);
            if let Some(current) = fallback.take() {
                let prior_leading = prior.map(|(_, leading)| leading);
                fallback =
                    self.fallback_after(direction, victim, appearing, prior_leading, current);
            }
        }

        let trailing = match (prior, direction) {
            (Some((prior_trailing, prior_leading)), _) if contiguous => self.advance_trailing(
                direction,
                prior_trailing,
                prior_leading,
                &evicted,
                last_index,
            ),
            // A later candidate may have recycled an earlier one of the same walk.
            (_, ScrollDirection::Forward) => order
                .iter()
                .copied()
                .find(|index| self.slots.contains_key(index))
                .unwrap_or(last_index),
            (_, ScrollDirection::Backward) => last_index,
        };
        let leading = self.get(last_index).cloned();
        let trailing = self.get(trailing).or_else(|| self.get(last_index)).cloned();
        debug_assert!(leading.is_some(), "walk lost its leading endpoint");
        self.ends.set_leading(direction, leading);
        self.ends.set_trailing(direction, trailing);
    }

    /// The fallback victim after `victim` was recycled for `appearing`.
    ///
    /// A tracked neighbor of the victim that lies strictly between the current fallback and the
    /// appearing item takes over; if the victim was the prior leading endpoint and has no tracked
    /// neighbor, there is nothing left to fall back to.
    fn fallback_after(
        &self,
        direction: ScrollDirection,
        victim: usize,
        appearing: usize,
        prior_leading: Option<usize>,
        current: (usize, K),
    ) -> Option<(usize, K)> {
        let Some(next) = self.step(victim, direction) else {
            return Some(current);
        };
        match self.get(next) {
            Some(item) => {
                let between = match direction {
                    ScrollDirection::Forward => current.0 < next && next < appearing,
                    ScrollDirection::Backward => current.0 > next && next > appearing,
                };
                if between {
                    Some((next, item.kind.clone()))
                } else {
                    Some(current)
                }
            }
            None if Some(victim) == prior_leading => None,
            None => Some(current),
        }
    }

    /// Finds the new trailing endpoint after a contiguous walk evicted items of the prior window.
    fn advance_trailing(
        &self,
        direction: ScrollDirection,
        prior_trailing: usize,
        prior_leading: usize,
        evicted: &[usize],
        last_index: usize,
    ) -> usize {
        let (lo, hi) = if prior_trailing <= prior_leading {
            (prior_trailing, prior_leading)
        } else {
            (prior_leading, prior_trailing)
        };
        let floor = evicted
            .iter()
            .filter(|&&v| lo <= v && v <= hi)
            .filter_map(|&v| self.step(v, direction))
            .reduce(|a, b| match direction {
                ScrollDirection::Forward => a.max(b),
                ScrollDirection::Backward => a.min(b),
            });
        let Some(mut index) = floor else {
            return prior_trailing;
        };
        loop {
            if self.slots.contains_key(&index) {
                return index;
            }
            let past_leading = match direction {
                ScrollDirection::Forward => index >= last_index,
                ScrollDirection::Backward => index <= last_index,
            };
            if past_leading {
                return last_index;
            }
            match self.step(index, direction) {
                Some(next) => index = next,
                None => return last_index,
            }
        }
    }

    /// Picks a disappearing item of `kind`: the kind's lowest index first when walking forward,
    /// its highest first when walking backward, then the opposite extreme.
    fn find_victim(
        &self,
        kind: &K,
        direction: ScrollDirection,
        window: &WindowState,
    ) -> Option<usize> {
        let set = self.kinds.get(kind)?;
        let (first, last) = (*set.first()?, *set.last()?);
        let order = match direction {
            ScrollDirection::Forward => [first, last],
            ScrollDirection::Backward => [last, first],
        };
        order.into_iter().find(|&index| {
            self.get(index)
                .is_some_and(|item| item.is_disappearing(window, direction))
        })
    }

    fn replace(&mut self, victim: usize, item: RealizedItem<T, K>) {
        let slot = self.slots.remove(&victim);
        debug_assert!(slot.is_some(), "victim {victim} has no slot");
        let Some(slot) = slot else {
            vwarn!(lane = self.lane, victim, "LaneWindow: victim has no slot, appending");
            self.append(item);
            return;
        };
        let old_kind = self.items[slot].kind.clone();
        self.unindex_kind(&old_kind, victim);
        vtrace!(lane = self.lane, slot, from = victim, to = item.index, "LaneWindow::replace");
        self.slots.insert(item.index, slot);
        self.index_kind(item.kind.clone(), item.index);
        self.items[slot] = item;
    }

    fn append(&mut self, item: RealizedItem<T, K>) {
        self.slots.insert(item.index, self.items.len());
        self.index_kind(item.kind.clone(), item.index);
        self.items.push(item);
    }

    fn index_kind(&mut self, kind: K, index: usize) {
        self.kinds.entry(kind).or_default().insert(index);
    }

    fn unindex_kind(&mut self, kind: &K, index: usize) {
        if let Some(set) = self.kinds.get_mut(kind) {
            set.remove(&index);
            if set.is_empty() {
                self.kinds.remove(kind);
            }
        }
    }
}
