#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Data index → storage slot.
#[cfg(feature = "std")]
pub(crate) type SlotMap = HashMap<usize, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type SlotMap = BTreeMap<usize, usize>;

/// Item kind → some per-kind value.
#[cfg(feature = "std")]
pub(crate) type KindMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KindMap<K, V> = BTreeMap<K, V>;

/// Bound for item kinds: hashable with `std`, ordered without.
#[cfg(feature = "std")]
pub trait KindKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> KindKey for K {}

#[cfg(not(feature = "std"))]
pub trait KindKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> KindKey for K {}
