use nearspot_core::usecases::ModerationPolicy;

use crate::*;

/// The result of the moderation decision for a single report event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// Below the threshold, the review stays visible.
    Kept { report_count: usize },
    /// The review has been purged and its reports cleaned up.
    Purged { deleted_reports: usize },
}

/// File a new report and run the moderation decision for it.
pub fn report_review<R>(
    repo: &R,
    new: usecases::NewReport,
    policy: ModerationPolicy,
) -> Result<ModerationOutcome>
where
    R: LocationRepo + ReportRepo,
{
    let report = usecases::prepare_new_report(repo, new)?;
    let location_id = report.location_id.clone();
    let review_id = report.review_id.clone();
    let anchor = report.created_at;
    repo.create_report(report)?;
    on_report_created(repo, &location_id, &review_id, anchor, policy)
}

/// The moderation decision, run once per created report.
///
/// Counts the reports against the review within the trailing window
/// anchored at the triggering report. Once the threshold is reached
/// the review is purged: removed from its location, the stored
/// rating recomputed, and *all* reports for the review deleted.
/// The decision is scoped to the window, the cleanup to the full
/// report history.
///
/// If the location has been deleted concurrently the decision
/// aborts with a log entry only.
///
/// The steps are not atomic. A partially applied purge is not
/// rolled back; the cleanup is ordered last to keep the
/// inconsistency window small. Re-running the decision after a
/// completed purge is a no-op.
pub fn on_report_created<R>(
    repo: &R,
    location_id: &Id,
    review_id: &Id,
    anchor: Timestamp,
    policy: ModerationPolicy,
) -> Result<ModerationOutcome>
where
    R: LocationRepo + ReportRepo,
{
    let reports = repo.reports_for_review(location_id.as_str(), review_id.as_str())?;
    let report_count = usecases::count_reports_in_window(&reports, anchor, policy.report_window);
    if report_count < policy.report_threshold {
        return Ok(ModerationOutcome::Kept { report_count });
    }

    let mut location = match repo.get_location(location_id.as_str()) {
        Ok(location) => location,
        Err(RepoError::NotFound) => {
            // Deleted concurrently, nothing left to moderate.
            log::info!(
                "Location {location_id} is gone, skipping purge of review {review_id}"
            );
            return Ok(ModerationOutcome::Kept { report_count });
        }
        Err(err) => return Err(err.into()),
    };
    if usecases::purge_review(&mut location, review_id) {
        repo.update_location(&location)?;
        log::info!("Removed reported review {review_id} from location {location_id}");
    }

    let deleted_reports =
        repo.delete_reports_for_review(location_id.as_str(), review_id.as_str())?;
    Ok(ModerationOutcome::Purged { deleted_reports })
}
