//! Periodic snapshot reporting.
//!
//! A [`Reporter`] consumes registry snapshots. [`ReporterBuilder::start`] spawns a background
//! thread that takes a snapshot of a registry on a fixed interval and hands it to the reporter,
//! until the returned [`ReporterHandle`] is stopped or dropped.

mod builder;
pub use self::builder::ReporterBuilder;

mod handle;
pub use self::handle::ReporterHandle;

pub(crate) mod runner;

use crate::Snapshot;

/// A sink for registry snapshots.
///
/// `report` is called from the reporter thread, one call at a time. A slow call delays the next
/// tick rather than overlapping with it.
///
/// Implementations should not panic, but a panic is contained: it is logged and the reporter
/// keeps running.
///
/// Closures taking a `&Snapshot` are reporters too. The argument type has to be spelled out for
/// the closure to be general over the snapshot lifetime:
///
/// ```rust
/// # use metrics_engine::{Reporter, Snapshot};
/// fn assert_reporter<R: Reporter>(_: R) {}
///
/// assert_reporter(|snapshot: &Snapshot| println!("{} metrics", snapshot.len()));
/// ```
pub trait Reporter: Send + 'static {
    /// Reports a snapshot.
    fn report(&mut self, snapshot: &Snapshot);
}

impl<F> Reporter for F
where
    F: FnMut(&Snapshot) + Send + 'static,
{
    fn report(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
