//! Periodic timer task feeding `Tick` events into the app actor

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::messages::UiEvent;

/// Handle to the running timer task. Dropping it stops the task.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Start emitting `UiEvent::Tick` every `period`, first one a full period from now
    pub fn spawn(period: Duration, sink: mpsc::UnboundedSender<UiEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;

            tracing::info!(period_ms = period.as_millis() as u64, "Ticker started");
            loop {
                interval.tick().await;
                if sink.send(UiEvent::Tick).is_err() {
                    break;
                }
            }
            tracing::info!("Ticker stopped");
        });

        Ticker { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
