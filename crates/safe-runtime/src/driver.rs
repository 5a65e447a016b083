//! Periodic driver - advances an owned simulator on a tokio interval
//!
//! One task per driver, so ticks never overlap. The simulator and an
//! `active` flag live behind one lock: once `stop` has taken that lock and
//! cleared the flag, no further tick can touch the state. Snapshots are
//! published while that lock is held, so observers see them in tick order.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use safe_amr::{AmrSimulator, Snapshot};
use safe_core::SeverityMode;

use crate::{DriverConfig, RuntimeError, RuntimeResult};

struct Shared {
    sim: AmrSimulator,
    active: bool,
}

/// Owns a simulator and ticks it periodically while started
pub struct Driver {
    shared: Arc<Mutex<Shared>>,
    config: DriverConfig,
    snapshots: watch::Sender<Snapshot>,
    task: Option<JoinHandle<()>>,
}

impl Driver {
    pub fn new(sim: AmrSimulator, config: DriverConfig) -> Self {
        let (snapshots, _) = watch::channel(sim.snapshot());
        Driver {
            shared: Arc::new(Mutex::new(Shared { sim, active: false })),
            config,
            snapshots,
            task: None,
        }
    }

    /// Begin ticking on the current tokio runtime
    pub fn start(&mut self) -> RuntimeResult<()> {
        if self.is_running() {
            return Err(RuntimeError::AlreadyRunning);
        }
        let handle = tokio::runtime::Handle::try_current().map_err(|_| RuntimeError::NoRuntime)?;

        self.shared.lock().active = true;
        let shared = Arc::clone(&self.shared);
        let snapshots = self.snapshots.clone();
        let period = self.config.period;
        self.task = Some(handle.spawn(run_loop(shared, snapshots, period)));

        info!(period = ?period, "amr driver started");
        Ok(())
    }

    /// Stop ticking. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.shared.lock().active = false;
        if let Some(task) = self.task.take() {
            task.abort();
            info!(tick = self.shared.lock().sim.tick_count(), "amr driver stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished()) && self.shared.lock().active
    }

    /// Change severity; observers see the new mode immediately, the interval
    /// moves on the next tick
    pub fn set_mode(&self, mode: SeverityMode) {
        let mut shared = self.shared.lock();
        shared.sim.set_mode(mode);
        self.snapshots.send_replace(shared.sim.snapshot());
    }

    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().sim.snapshot()
    }

    pub fn tick_count(&self) -> u64 {
        self.shared.lock().sim.tick_count()
    }

    /// Receive a fresh snapshot after every tick and mode change
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.subscribe()
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_loop(
    shared: Arc<Mutex<Shared>>,
    snapshots: watch::Sender<Snapshot>,
    period: std::time::Duration,
) {
    if period.is_zero() {
        while step(&shared, &snapshots) {
            tokio::task::yield_now().await;
        }
        return;
    }

    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        if !step(&shared, &snapshots) {
            break;
        }
    }
    debug!("amr driver loop exited");
}

/// Apply one tick unless the driver was stopped. Returns false once stopped.
fn step(shared: &Mutex<Shared>, snapshots: &watch::Sender<Snapshot>) -> bool {
    let mut shared = shared.lock();
    if !shared.active {
        return false;
    }
    shared.sim.tick();
    snapshots.send_replace(shared.sim.snapshot());
    true
}
