//! Single-consumer worker: serializes fixes from any number of sources.

use crate::error::{LResult, LocationError};
use crate::fix::RawFix;
use crate::provider::LocationProvider;
use crossbeam::channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Work items accepted by the filter worker
#[derive(Debug, Clone)]
pub enum FilterCommand {
    Fix(RawFix),
    Stationary { fix: RawFix, radius: Option<f64> },
    Shutdown,
}

/// Owns a thread that drains commands in submission order
pub struct FilterWorker {
    tx: Sender<FilterCommand>,
    handle: Option<JoinHandle<()>>,
}

impl FilterWorker {
    pub fn spawn(provider: Arc<LocationProvider>) -> LResult<Self> {
        let (tx, rx) = unbounded();
        let handle = thread::Builder::new()
            .name("bgloc-filter".to_string())
            .spawn(move || run(provider, rx))
            .map_err(|e| LocationError::Internal(format!("Failed to spawn filter worker: {}", e)))?;

        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    /// Cloneable handle for location source callbacks
    pub fn sender(&self) -> Sender<FilterCommand> {
        self.tx.clone()
    }

    pub fn submit_fix(&self, fix: RawFix) -> LResult<()> {
        self.send(FilterCommand::Fix(fix))
    }

    pub fn submit_stationary(&self, fix: RawFix, radius: Option<f64>) -> LResult<()> {
        self.send(FilterCommand::Stationary { fix, radius })
    }

    /// Drain outstanding commands, then stop the thread
    pub fn shutdown(mut self) -> LResult<()> {
        self.stop()
    }

    fn send(&self, command: FilterCommand) -> LResult<()> {
        self.tx
            .send(command)
            .map_err(|_| LocationError::WorkerStopped)
    }

    fn stop(&mut self) -> LResult<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        // Worker may already be gone; join still reports how it ended
        let _ = self.tx.send(FilterCommand::Shutdown);
        handle
            .join()
            .map_err(|_| LocationError::Internal("Filter worker panicked".to_string()))
    }
}

impl Drop for FilterWorker {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::error!("Filter worker shutdown failed: {}", e);
        }
    }
}

fn run(provider: Arc<LocationProvider>, rx: Receiver<FilterCommand>) {
    log::info!("Filter worker started");
    let mut handled = 0u64;

    for command in rx.iter() {
        match command {
            FilterCommand::Fix(fix) => {
                provider.handle_location(fix);
            }
            FilterCommand::Stationary { fix, radius } => {
                provider.forward_stationary(fix, radius);
            }
            FilterCommand::Shutdown => break,
        }
        handled += 1;
    }

    log::info!("Filter worker stopped after {} commands", handled);
}
