use alloc::sync::Arc;

use crate::ItemKind;

/// Maps a data item (and its index) to its render kind.
///
/// Items of the same kind can reuse each other's slots without remounting.
pub type ItemKindFn<T, K> = Arc<dyn Fn(&T, usize) -> K + Send + Sync>;

/// Size of an item along the scroll axis.
pub enum ItemSize<T> {
    /// Every item has the same size.
    Fixed(u32),
    /// Size computed per item. Must be pure for a given `(item, index)` within one recomputation.
    Dynamic(Arc<dyn Fn(&T, usize) -> u32 + Send + Sync>),
}

impl<T> ItemSize<T> {
    pub fn fixed(size: u32) -> Self {
        Self::Fixed(size)
    }

    pub fn dynamic(f: impl Fn(&T, usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Size of `item` at data index `index`.
    pub fn resolve(&self, item: &T, index: usize) -> u32 {
        match self {
            Self::Fixed(size) => *size,
            Self::Dynamic(f) => f(item, index),
        }
    }
}

impl<T> From<u32> for ItemSize<T> {
    fn from(size: u32) -> Self {
        Self::Fixed(size)
    }
}

impl<T> Clone for ItemSize<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(size) => Self::Fixed(*size),
            Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
        }
    }
}

impl<T> core::fmt::Debug for ItemSize<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Configuration shared by every lane of a layout.
///
/// Cheap to clone: closures live in `Arc`s, so each lane holds its own clone.
pub struct RecyclerOptions<T, K = ItemKind> {
    pub item_size: ItemSize<T>,
    pub item_kind: ItemKindFn<T, K>,
    /// Extra distance realized on both sides of the viewport.
    pub look_ahead: u32,
    /// Number of parallel lanes. Item `i` belongs to lane `i % lanes`.
    pub lanes: usize,
    /// When no disappearing item of the appearing item's kind exists, recycle a slot of the
    /// trailing endpoint's kind instead of growing storage.
    pub cross_kind_reuse: bool,
}

impl<T, K> Clone for RecyclerOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            item_size: self.item_size.clone(),
            item_kind: Arc::clone(&self.item_kind),
            look_ahead: self.look_ahead,
            lanes: self.lanes,
            cross_kind_reuse: self.cross_kind_reuse,
        }
    }
}

impl<T> RecyclerOptions<T, ItemKind> {
    /// Creates single-lane options where every item has kind `0`.
    ///
    /// Pass a `look_ahead` of `0` to realize only what the viewport overlaps.
    pub fn new(look_ahead: u32, item_size: impl Into<ItemSize<T>>) -> Self {
        Self::new_with_kind(look_ahead, item_size, |_, _| 0)
    }
}

impl<T, K> RecyclerOptions<T, K> {
    /// Creates single-lane options with a custom kind function.
    pub fn new_with_kind(
        look_ahead: u32,
        item_size: impl Into<ItemSize<T>>,
        item_kind: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_size: item_size.into(),
            item_kind: Arc::new(item_kind),
            look_ahead,
            lanes: 1,
            cross_kind_reuse: true,
        }
    }

    /// Replaces the kind function, possibly changing the kind type.
    pub fn with_item_kind<K2>(
        self,
        item_kind: impl Fn(&T, usize) -> K2 + Send + Sync + 'static,
    ) -> RecyclerOptions<T, K2> {
        RecyclerOptions {
            item_size: self.item_size,
            item_kind: Arc::new(item_kind),
            look_ahead: self.look_ahead,
            lanes: self.lanes,
            cross_kind_reuse: self.cross_kind_reuse,
        }
    }

    pub fn with_item_size(mut self, item_size: impl Into<ItemSize<T>>) -> Self {
        self.item_size = item_size.into();
        self
    }

    pub fn with_look_ahead(mut self, look_ahead: u32) -> Self {
        self.look_ahead = look_ahead;
        self
    }

    pub fn with_lanes(mut self, lanes: usize) -> Self {
        self.lanes = lanes;
        self
    }

    pub fn with_cross_kind_reuse(mut self, cross_kind_reuse: bool) -> Self {
        self.cross_kind_reuse = cross_kind_reuse;
        self
    }

    pub fn size_of(&self, item: &T, index: usize) -> u32 {
        self.item_size.resolve(item, index)
    }

    pub fn kind_of(&self, item: &T, index: usize) -> K {
        (self.item_kind)(item, index)
    }
}

impl<T, K> core::fmt::Debug for RecyclerOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("item_size", &self.item_size)
            .field("look_ahead", &self.look_ahead)
            .field("lanes", &self.lanes)
            .field("cross_kind_reuse", &self.cross_kind_reuse)
            .finish_non_exhaustive()
    }
}
