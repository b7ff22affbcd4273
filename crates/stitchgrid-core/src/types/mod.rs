//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type alias for `Arc<Mutex<T>>`.

pub mod aliases;

pub use aliases::*;
