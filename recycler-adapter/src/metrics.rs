use alloc::vec;
use alloc::vec::Vec;

use recycler::RecyclerOptions;

/// Total extent of every lane: the sum of its items' sizes.
pub fn lane_extents<T, K>(data: &[T], options: &RecyclerOptions<T, K>) -> Vec<u64> {
    let lanes = options.lanes.max(1);
    let mut extents = vec![0u64; lanes];
    for (index, item) in data.iter().enumerate() {
        let size = options.size_of(item, index) as u64;
        let lane = &mut extents[index % lanes];
        *lane = lane.saturating_add(size);
    }
    extents
}

/// Scrollable content length: the longest lane.
pub fn content_size<T, K>(data: &[T], options: &RecyclerOptions<T, K>) -> u64 {
    lane_extents(data, options).into_iter().max().unwrap_or(0)
}

/// Start position of `index` inside its lane.
///
/// This is the offset to scroll to so the item sits at the top of the viewport (before clamping).
pub fn offset_of_index<T, K>(
    data: &[T],
    options: &RecyclerOptions<T, K>,
    index: usize,
) -> Option<u64> {
    if index >= data.len() {
        return None;
    }
    let lanes = options.lanes.max(1);
    let offset = (index % lanes..index)
        .step_by(lanes)
        .map(|i| options.size_of(&data[i], i) as u64)
        .fold(0u64, u64::saturating_add);
    Some(offset)
}

pub fn max_scroll_offset(content_size: u64, viewport_size: u32) -> u64 {
    content_size.saturating_sub(viewport_size as u64)
}

pub fn clamp_scroll_offset(offset: u64, content_size: u64, viewport_size: u32) -> u64 {
    offset.min(max_scroll_offset(content_size, viewport_size))
}
