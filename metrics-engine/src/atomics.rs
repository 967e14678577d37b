//! Atomic types backing single-word metrics.
//!
//! Counters and gauges always need a 64-bit atomic integer, regardless of whether the standard
//! library exposes one for the target architecture. On 32-bit targets we fall back to
//! `portable-atomic`, which provides the same API.

#[cfg(target_pointer_width = "32")]
pub use portable_atomic::{AtomicI64, AtomicU64};
#[cfg(not(target_pointer_width = "32"))]
pub use std::sync::atomic::{AtomicI64, AtomicU64};
