//! Top-level facade crate for lockscope.
//!
//! Re-exports core types and the collector library so users can depend on a single crate.

pub mod core {
    pub use lockscope_core::*;
}

pub mod collector {
    pub use lockscope_collector::*;
}
