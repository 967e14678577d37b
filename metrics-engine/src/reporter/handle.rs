use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::error;

/// Handle to a running reporter.
///
/// Stopping is idempotent. Dropping the handle stops the reporter as well.
#[derive(Debug)]
pub struct ReporterHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ReporterHandle {
    pub(crate) fn new(stop_tx: Sender<()>, thread: JoinHandle<()>) -> Self {
        Self { stop_tx: Some(stop_tx), thread: Some(thread) }
    }

    /// Stops the reporter.
    ///
    /// If a report is in progress, this waits for it to finish. Once `stop` returns, no further
    /// reports are made, even if a tick was already due.
    ///
    /// Calling `stop` from within the reporter itself signals the loop but does not wait, as that
    /// would never return.
    pub fn stop(&mut self) {
        // Disconnecting the stop channel is the stop signal.
        drop(self.stop_tx.take());

        let Some(thread) = self.thread.take() else {
            return;
        };

        if thread.thread().id() == thread::current().id() {
            return;
        }

        if thread.join().is_err() {
            error!("Reporter thread exited with a panic.");
        }
    }

    /// Whether or not the reporter is still running.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().map_or(false, |thread| !thread.is_finished())
    }
}

impl Drop for ReporterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
