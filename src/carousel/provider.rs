//! Provider scope for the carousel store.
//!
//! A [`CarouselProvider`] owns one store for a page-view. Entering it makes
//! that store visible to [`use_carousel`] on the current thread until the
//! returned guard drops. Scopes nest and the innermost one wins.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::state::CarouselStore;
use super::CarouselError;

thread_local! {
    static SCOPES: RefCell<Vec<CarouselStore>> = const { RefCell::new(Vec::new()) };
}

/// Root of one carousel scope.
#[derive(Debug, Clone, Default)]
pub struct CarouselProvider {
    store: CarouselStore,
}

impl CarouselProvider {
    /// Create a provider with a fresh store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store this provider hands out.
    pub fn store(&self) -> &CarouselStore {
        &self.store
    }

    /// Make the store visible to [`use_carousel`] until the guard drops.
    pub fn enter(&self) -> ProviderGuard {
        let depth = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(self.store.clone());
            scopes.len() - 1
        });
        tracing::trace!(depth, "entered carousel scope");
        ProviderGuard {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with the store in scope.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

/// Keeps a provider's store in scope. Not `Send`: scopes are per thread.
#[derive(Debug)]
pub struct ProviderGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| scopes.borrow_mut().truncate(self.depth));
    }
}

/// The store of the innermost active scope, or an error outside any scope.
pub fn try_use_carousel() -> Result<CarouselStore, CarouselError> {
    SCOPES
        .with(|scopes| scopes.borrow().last().cloned())
        .ok_or(CarouselError::OutsideProvider)
}

/// The store of the innermost active scope.
///
/// # Panics
///
/// Panics when no [`CarouselProvider`] scope is active. A consumer rendering
/// without the shared store would silently fall out of sync.
pub fn use_carousel() -> CarouselStore {
    match try_use_carousel() {
        Ok(store) => store,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "use_carousel must be called within a CarouselProvider scope")]
    fn test_use_outside_scope_panics() {
        let _ = use_carousel();
    }

    #[test]
    fn test_try_use_outside_scope_errors() {
        assert_eq!(try_use_carousel().unwrap_err(), CarouselError::OutsideProvider);
    }

    #[test]
    fn test_scope_shares_store() {
        let provider = CarouselProvider::new();
        provider.scope(|| {
            let a = use_carousel();
            let b = use_carousel();
            a.set_index(2);
            assert_eq!(b.get_state().current_index, 2);
            assert!(a.same_store(provider.store()));
        });
        assert!(try_use_carousel().is_err());
    }

    #[test]
    fn test_nested_scopes_innermost_wins() {
        let outer = CarouselProvider::new();
        let inner = CarouselProvider::new();

        let _outer_guard = outer.enter();
        {
            let _inner_guard = inner.enter();
            assert!(use_carousel().same_store(inner.store()));
        }
        assert!(use_carousel().same_store(outer.store()));
    }

    #[test]
    fn test_scope_is_thread_local() {
        let provider = CarouselProvider::new();
        let _guard = provider.enter();
        let other = std::thread::spawn(|| try_use_carousel().is_err())
            .join()
            .unwrap();
        assert!(other);
    }
}
