//! Type aliases for shared ownership of mutable state.
//!
//! The pattern editor is a single mutable resource per editing session. A
//! multi-threaded host wraps it in [`ThreadSafe`] so that every mutation
//! (transform plus history commit) runs under one lock acquisition.
//!
//! ```rust,ignore
//! use stitchgrid_core::types::*;
//!
//! let editor: ThreadSafe<PatternEditor> = thread_safe(PatternEditor::new(grid));
//! editor.lock().undo();
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`, which does not poison on panic.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wraps a value in [`ThreadSafe`].
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn thread_safe_serializes_mutation() {
        let counter = thread_safe(0usize);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..100 {
                        *counter.lock() += 1;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
        assert_eq!(*counter.lock(), 400);
    }
}
