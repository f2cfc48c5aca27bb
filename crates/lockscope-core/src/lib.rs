//! lockscope core: category keys, gauge cells, and the shared error surface.
//!
//! This crate defines the data model shared by the collector, its bundled
//! sinks, and host processes. It intentionally carries no runtime or database
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LockScopeError`/`Result` so hosting
//! processes do not crash on a misbehaving database.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod category;
pub mod error;
pub mod gauge;

pub use category::{CategoryKey, SampleRow};
/// Shared result type.
pub use error::{LockScopeError, Result};
pub use gauge::GaugeCell;
