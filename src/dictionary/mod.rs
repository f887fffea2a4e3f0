//! The in-memory dictionary mapping string keys to sets of string members.
//!
//! This is the only stateful part of the application. It lives for the whole
//! session and is never persisted.

mod multi_strings;

pub use multi_strings::*;
