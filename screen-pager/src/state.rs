//! Shared handles to mutable component state.

use std::sync::Arc;

use parking_lot::RwLock;

/// Cloneable handle to a shared mutable value.
///
/// The pager holds one handle to its controller; callers may retain another
/// to read the current screen or issue commands from outside the compose
/// path. All access is serialized through the inner lock.
#[derive(Debug, Default)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> State<T> {
    /// Wraps `value` in a shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Runs `f` with shared access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T: Clone> State<T> {
    /// Returns a clone of the value.
    pub fn get(&self) -> T {
        self.inner.read().clone()
    }
}
