use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    time::{Duration, Instant},
};

use crossbeam_channel::{select, tick, Receiver, TryRecvError};
use tracing::{debug, error, trace};

use super::Reporter;
use crate::Registry;

pub(crate) struct Runner<R> {
    pub(crate) registry: Arc<Registry>,
    pub(crate) reporter: R,
    pub(crate) interval: Duration,
    pub(crate) stop_rx: Receiver<()>,
}

impl<R: Reporter> Runner<R> {
    /// Runs the reporter loop until the stop channel fires or disconnects.
    pub(crate) fn run(self) {
        let Runner { registry, mut reporter, interval, stop_rx } = self;

        debug!(?interval, "Reporter started.");

        let ticker = tick(interval);
        let mut ticks = 0u64;
        loop {
            select! {
                recv(stop_rx) -> _ => break,
                recv(ticker) -> _ => {
                    // A tick and a stop signal can be ready at the same time, and `select!` picks
                    // between ready operations at random. Stopping always wins.
                    if !matches!(stop_rx.try_recv(), Err(TryRecvError::Empty)) {
                        break;
                    }

                    ticks += 1;
                    report_once(&registry, &mut reporter, ticks);
                }
            }
        }

        debug!(ticks, "Reporter stopped.");
    }
}

pub(crate) fn report_once<R: Reporter>(registry: &Registry, reporter: &mut R, seq: u64) {
    let snapshot = registry.metrics();
    let started = Instant::now();

    let result = panic::catch_unwind(AssertUnwindSafe(|| reporter.report(&snapshot)));
    match result {
        Ok(()) => trace!(
            seq,
            metrics = snapshot.len(),
            elapsed = ?started.elapsed(),
            "Reported snapshot."
        ),
        Err(payload) => error!(
            seq,
            error = panic_message(payload.as_ref()),
            "Reporter panicked while reporting snapshot; continuing."
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::{panic_message, report_once};
    use crate::{test_util::capture_logs, Counter, Registry, Snapshot};

    #[test]
    fn test_report_once_survives_panic() {
        let registry = Registry::new();
        registry.register(Counter::new("ticks"));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut reporter = {
            let seen = Arc::clone(&seen);
            move |snapshot: &Snapshot| {
                let mut seen = seen.lock();
                seen.push(snapshot.len());
                if seen.len() == 1 {
                    panic!("sink unavailable");
                }
            }
        };

        let ((), lines) = capture_logs(|| {
            report_once(&registry, &mut reporter, 1);
            report_once(&registry, &mut reporter, 2);
        });

        assert_eq!(*seen.lock(), vec![1, 1]);

        let errors: Vec<_> = lines.iter().filter(|line| line.contains("ERROR")).collect();
        assert_eq!(errors.len(), 1, "unexpected output: {lines:?}");
        assert!(errors[0].contains("Reporter panicked while reporting snapshot; continuing."));
        assert!(errors[0].contains("seq=1"));
        assert!(errors[0].contains("error=\"sink unavailable\""));

        let reported: Vec<_> = lines.iter().filter(|line| line.contains("TRACE")).collect();
        assert_eq!(reported.len(), 1, "unexpected output: {lines:?}");
        assert!(reported[0].contains("seq=2"));
        assert!(reported[0].contains("metrics=1"));
    }

    #[test]
    fn test_panic_message() {
        let payload = std::panic::catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload = std::panic::catch_unwind(|| panic!("formatted {}", 42)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 42");

        let payload = std::panic::catch_unwind(|| std::panic::panic_any(7u8)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
