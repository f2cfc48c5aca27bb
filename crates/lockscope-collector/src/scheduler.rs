//! Recurring sample loop with cooperative shutdown.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use std::time::Duration;

use crate::sampler::Sampler;

/// Handle to one bound instance's background loop.
///
/// Owned by the binder rather than detached: dropping the handle (or calling
/// [`SamplerTask::stop`]) terminates the loop.
pub struct SamplerTask {
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SamplerTask {
    /// Signal the loop to stop and wait for it to finish.
    ///
    /// The loop exits before its next wait, or promptly during an in-flight
    /// wait/query; no further samples occur afterwards.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

/// Drive the sampler according to the configured mode.
///
/// `None`: exactly one round runs inline, success or suppressed failure, and
/// no task is spawned. `Some(every)`: the recurring loop is spawned and its
/// handle returned.
pub async fn start(sampler: Sampler, every: Option<Duration>) -> Option<SamplerTask> {
    match every {
        None => {
            let _ = sampler.sample().await;
            None
        }
        Some(every) => Some(spawn(sampler, every)),
    }
}

/// Spawn the recurring loop: wait one interval, sample, repeat.
///
/// The first sample occurs only after the first interval has elapsed; there is
/// no immediate sample at start. Ticks are strictly sequential: one `sample()`
/// completes before the next wait begins, so no two rounds ever overlap.
fn spawn(sampler: Sampler, every: Duration) -> SamplerTask {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        let mut tick = time::interval_at(Instant::now() + every, every);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // `changed()` also resolves when the sender is dropped, which
            // covers a handle dropped without an explicit stop.
            tokio::select! {
                _ = stop_rx.changed() => break,
                _ = tick.tick() => {}
            }
            tokio::select! {
                _ = stop_rx.changed() => break,
                _ = sampler.sample() => {}
            }
        }
        tracing::info!(relname = sampler.relname(), "fast-path lock sampler stopped");
    });

    SamplerTask {
        stop: stop_tx,
        handle,
    }
}
