//! Shared carousel state.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Which image is showing and whether a fade is underway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the visible image. Stored verbatim; readers take it modulo
    /// the length of whatever image set they display.
    pub current_index: usize,
    /// True only between the start and the end of a fade.
    pub is_transitioning: bool,
}

impl CarouselState {
    /// Position to display for an image set of `len` images.
    pub fn display_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.current_index % len)
        }
    }
}

/// An index update: an absolute value or a function of the previous index.
///
/// The functional form reads the previous value under the store lock, so
/// queued advances never clobber each other.
pub enum IndexUpdate {
    /// Store this index.
    Set(usize),
    /// Store `f(previous)`.
    Update(Box<dyn FnOnce(usize) -> usize + Send>),
}

impl IndexUpdate {
    /// Build a functional update.
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(usize) -> usize + Send + 'static,
    {
        IndexUpdate::Update(Box::new(f))
    }

    /// Move one position forward, wrapping at `len`.
    pub fn advance(len: usize) -> Self {
        IndexUpdate::with(move |prev| if len == 0 { 0 } else { (prev + 1) % len })
    }

    fn apply(self, previous: usize) -> usize {
        match self {
            IndexUpdate::Set(index) => index,
            IndexUpdate::Update(f) => f(previous),
        }
    }
}

impl From<usize> for IndexUpdate {
    fn from(index: usize) -> Self {
        IndexUpdate::Set(index)
    }
}

impl fmt::Debug for IndexUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexUpdate::Set(index) => f.debug_tuple("Set").field(index).finish(),
            IndexUpdate::Update(_) => f.write_str("Update(..)"),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: CarouselState,
    version: u64,
}

/// Handle to one shared [`CarouselState`].
///
/// Clones share the same state. The lock is only held for the duration of a
/// read or a write, never across an await.
#[derive(Clone, Default)]
pub struct CarouselStore {
    inner: Arc<Mutex<Inner>>,
}

impl CarouselStore {
    /// Create a store at `{ current_index: 0, is_transitioning: false }`.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current snapshot.
    pub fn get_state(&self) -> CarouselState {
        self.lock().state
    }

    /// Store a new index, absolute or derived from the previous one.
    ///
    /// Returns the stored index.
    pub fn set_index(&self, update: impl Into<IndexUpdate>) -> usize {
        let mut inner = self.lock();
        let next = update.into().apply(inner.state.current_index);
        inner.state.current_index = next;
        inner.version += 1;
        next
    }

    /// Set or clear the transitioning flag.
    pub fn set_transitioning(&self, transitioning: bool) {
        let mut inner = self.lock();
        inner.state.is_transitioning = transitioning;
        inner.version += 1;
    }

    /// Counter bumped by every mutation; lets the UI skip redundant redraws.
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    /// True if both handles point at the same state.
    pub fn same_store(&self, other: &CarouselStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CarouselStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("CarouselStore")
            .field("state", &inner.state)
            .field("version", &inner.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = CarouselStore::new();
        assert_eq!(
            store.get_state(),
            CarouselState {
                current_index: 0,
                is_transitioning: false
            }
        );
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_set_index_absolute_is_verbatim() {
        let store = CarouselStore::new();
        assert_eq!(store.set_index(7), 7);
        assert_eq!(store.get_state().current_index, 7);
    }

    #[test]
    fn test_set_index_functional() {
        let store = CarouselStore::new();
        store.set_index(2);
        store.set_index(IndexUpdate::with(|prev| prev * 10));
        assert_eq!(store.get_state().current_index, 20);
    }

    #[test]
    fn test_queued_advances_compose() {
        let store = CarouselStore::new();
        store.set_index(IndexUpdate::advance(3));
        store.set_index(IndexUpdate::advance(3));
        store.set_index(IndexUpdate::advance(3));
        assert_eq!(store.get_state().current_index, 0);
    }

    #[test]
    fn test_clones_share_state() {
        let a = CarouselStore::new();
        let b = a.clone();
        b.set_transitioning(true);
        assert!(a.get_state().is_transitioning);
        assert!(a.same_store(&b));
        assert!(!a.same_store(&CarouselStore::new()));
    }

    #[test]
    fn test_version_bumps_on_every_mutation() {
        let store = CarouselStore::new();
        store.set_index(1);
        store.set_transitioning(true);
        store.set_transitioning(false);
        assert_eq!(store.version(), 3);
    }

    #[test]
    fn test_display_index_wraps() {
        let state = CarouselState {
            current_index: 5,
            is_transitioning: false,
        };
        assert_eq!(state.display_index(3), Some(2));
        assert_eq!(state.display_index(0), None);
    }
}
