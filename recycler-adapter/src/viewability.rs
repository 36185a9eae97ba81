use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use recycler::LaneWindow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewToken {
    pub lane: usize,
    pub index: usize,
    pub is_viewable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewableItemsChanged {
    /// Every currently viewable item, ordered by `(lane, index)`.
    pub viewable_items: Vec<ViewToken>,
    /// Items that became viewable or stopped being viewable since the last observation.
    pub changed: Vec<ViewToken>,
}

/// Tracks which realized items overlap the viewport (no look-ahead) across frames.
#[derive(Clone, Debug, Default)]
pub struct ViewabilityTracker {
    viewable: BTreeSet<(usize, usize)>,
}

impl ViewabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_viewable(&self, lane: usize, index: usize) -> bool {
        self.viewable.contains(&(lane, index))
    }

    pub fn viewable_count(&self) -> usize {
        self.viewable.len()
    }

    pub fn reset(&mut self) {
        self.viewable.clear();
    }

    /// Re-evaluates viewability for every lane. Returns `None` when nothing changed.
    pub fn observe<T, K>(&mut self, lanes: &[LaneWindow<T, K>]) -> Option<ViewableItemsChanged> {
        let mut now = BTreeSet::new();
        for window in lanes {
            let state = window.window_state();
            now.extend(
                window
                    .items()
                    .iter()
                    .filter(|it| it.is_viewable(&state))
                    .map(|it| (window.lane(), it.index)),
            );
        }

        let token = |&(lane, index): &(usize, usize), is_viewable: bool| ViewToken {
            lane,
            index,
            is_viewable,
        };
        let mut changed: Vec<ViewToken> = now
            .difference(&self.viewable)
            .map(|key| token(key, true))
            .chain(self.viewable.difference(&now).map(|key| token(key, false)))
            .collect();
        if changed.is_empty() {
            return None;
        }
        changed.sort_unstable();

        let viewable_items = now.iter().map(|key| token(key, true)).collect();
        self.viewable = now;
        Some(ViewableItemsChanged {
            viewable_items,
            changed,
        })
    }
}
