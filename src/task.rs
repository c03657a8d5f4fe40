use std::path::Path;

use nearspot_application::prelude::sweep_inactive_locations;
use nearspot_db_mem::MemStore;

use crate::{config, snapshot};

/// Run the inactivity sweep on a fixed cadence until interrupted.
///
/// The stand-in for an externally scheduled invocation: deployments
/// with a cron-style scheduler run `nearspot sweep` instead.
pub async fn run(store: &MemStore, snapshot_path: &Path, cfg: &config::Sweep) {
    let mut interval = tokio::time::interval(cfg.task_interval_time);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down sweep task");
                return;
            }
        }
        match sweep_inactive_locations(store, cfg.retention_period) {
            Ok(0) => (),
            Ok(_) => {
                if let Err(err) = snapshot::save(store, snapshot_path) {
                    log::warn!("Failed to save snapshot after sweep: {err}");
                }
            }
            Err(err) => {
                log::warn!("Inactivity sweep failed: {err}");
            }
        }
    }
}
