use time::Duration;

use crate::*;

/// Delete all locations without any activity for the given
/// retention period, in one batch.
///
/// Expected to run on a fixed external schedule, not on user
/// action. Returns the number of deleted locations.
pub fn sweep_inactive_locations<R: LocationRepo>(
    repo: &R,
    retention_period: Duration,
) -> Result<usize> {
    sweep_inactive_locations_before(repo, Timestamp::now() - retention_period)
}

pub fn sweep_inactive_locations_before<R: LocationRepo>(
    repo: &R,
    cutoff: Timestamp,
) -> Result<usize> {
    let locations = repo.all_locations()?;
    let inactive = usecases::find_inactive_locations(&locations, cutoff);
    if inactive.is_empty() {
        log::info!("No inactive locations to delete");
        return Ok(0);
    }
    let ids: Vec<_> = inactive.iter().map(Id::as_str).collect();
    let deleted = repo.delete_locations(&ids)?;
    log::info!("Deleted {deleted} inactive locations");
    Ok(deleted)
}
