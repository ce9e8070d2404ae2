//! Debounce gate - quiet-window input coalescing
//!
//! Holds the most recent value pushed into it and only releases it
//! downstream once no newer value has arrived for a full quiet
//! window. Each new value restarts the countdown, so a steady stream
//! of inputs faster than the window emits nothing until the stream
//! pauses. Emitted values are always a subsequence of the inputs.
//!
//! Closing the input side (dropping the gate) flushes the held value
//! after the window; `cancel` tears the gate down with no further
//! emission.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration, Instant};

/// Default quiet window for search-as-you-type input
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// A cancellable debounce gate in front of a value stream
#[derive(Debug)]
pub struct DebounceGate<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> DebounceGate<T> {
    /// Spawn a gate with the given quiet window.
    ///
    /// Returns the gate and the receiver of debounced values.
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
        let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let timer = sleep(window);
            tokio::pin!(timer);

            loop {
                tokio::select! {
                    msg = in_rx.recv() => match msg {
                        Some(value) => {
                            // Newer value supersedes the held one and
                            // restarts the countdown.
                            pending = Some(value);
                            timer.as_mut().reset(Instant::now() + window);
                        }
                        None => {
                            // Input closed: flush the held value once
                            // the window elapses, then stop.
                            if pending.is_some() {
                                timer.as_mut().await;
                                if let Some(value) = pending.take() {
                                    let _ = out_tx.send(value);
                                }
                            }
                            break;
                        }
                    },
                    () = &mut timer, if pending.is_some() => {
                        if let Some(value) = pending.take() {
                            let _ = out_tx.send(value);
                        }
                    }
                }
            }
        });

        (Self { tx: in_tx, task }, out_rx)
    }

    /// Push a new input value, superseding any held one.
    ///
    /// Returns false if the gate has been cancelled.
    pub fn input(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Tear the gate down. Any held value is discarded; nothing is
    /// emitted after this returns.
    pub fn cancel(&self) {
        self.task.abort();
    }
}
