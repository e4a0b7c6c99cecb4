//! Range storage module
//!
//! Owns folders, ranges and action buttons, applies matrix mutations and
//! persists everything as a single JSON document.
//!
//! ## Error Handling
//!
//! All fallible operations return `StoreResult<T>` which uses the `StoreError` type.
//! Common errors include:
//! - `UnknownFolder`/`UnknownRange`: Stale ids from the UI
//! - `Action`: An edit would leave the action list invalid
//! - `Io`/`Json`: File system or parse errors

mod atomic;
mod error;
mod library;
mod migrate;

pub use atomic::write_json_atomic;
pub use error::*;
pub use library::*;
