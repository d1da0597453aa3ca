//! Crate includes reusable utils for binaries built on top of `bip340-keys`.
//! Such as initializing the tracing framework and whatever else.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
