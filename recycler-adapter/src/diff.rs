use alloc::vec::Vec;

use recycler::{ItemKind, RealizedItem};

/// What a lane slot held at the end of the previous frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRecord<K = ItemKind> {
    pub index: usize,
    pub kind: K,
}

/// A change the host has to apply to its mounted views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotChange {
    /// A new slot appeared; mount a view for `index`.
    Mount {
        lane: usize,
        slot: usize,
        index: usize,
    },
    /// An existing slot now shows a different item.
    ///
    /// When `same_kind` is true the mounted view can be rebound in place.
    Rebind {
        lane: usize,
        slot: usize,
        from: usize,
        to: usize,
        same_kind: bool,
    },
    /// The slot no longer exists.
    Unmount {
        lane: usize,
        slot: usize,
        index: usize,
    },
}

impl SlotChange {
    pub fn lane(&self) -> usize {
        match *self {
            Self::Mount { lane, .. } | Self::Rebind { lane, .. } | Self::Unmount { lane, .. } => {
                lane
            }
        }
    }

    pub fn slot(&self) -> usize {
        match *self {
            Self::Mount { slot, .. } | Self::Rebind { slot, .. } | Self::Unmount { slot, .. } => {
                slot
            }
        }
    }
}

/// Snapshots a lane's realized items, slot by slot.
pub fn records<T, K: Clone>(items: &[RealizedItem<T, K>]) -> Vec<SlotRecord<K>> {
    items
        .iter()
        .map(|it| SlotRecord {
            index: it.index,
            kind: it.kind.clone(),
        })
        .collect()
}

/// Compares the previous per-slot records of `lane` against its current realized items and
/// pushes the resulting changes to `out`, in slot order.
///
/// A slot whose index and kind are unchanged produces nothing.
pub fn diff_lane<T, K: PartialEq>(
    lane: usize,
    previous: &[SlotRecord<K>],
    current: &[RealizedItem<T, K>],
    out: &mut Vec<SlotChange>,
) {
    let len = previous.len().max(current.len());
    for slot in 0..len {
        match (previous.get(slot), current.get(slot)) {
            (Some(prev), Some(cur)) => {
                if prev.index != cur.index || prev.kind != cur.kind {
                    out.push(SlotChange::Rebind {
                        lane,
                        slot,
                        from: prev.index,
                        to: cur.index,
                        same_kind: prev.kind == cur.kind,
                    });
                }
            }
            (None, Some(cur)) => out.push(SlotChange::Mount {
                lane,
                slot,
                index: cur.index,
            }),
            (Some(prev), None) => out.push(SlotChange::Unmount {
                lane,
                slot,
                index: prev.index,
            }),
            (None, None) => {}
        }
    }
}
