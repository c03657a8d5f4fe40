use super::prelude::*;

pub const DEFAULT_REPORT_THRESHOLD: usize = 3;
pub const DEFAULT_REPORT_WINDOW: Duration = Duration::hours(24);

/// When and how a reported review is purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationPolicy {
    /// Number of reports within the window that triggers the purge.
    pub report_threshold: usize,

    /// Trailing window preceding the triggering report in which
    /// reports count towards the threshold.
    pub report_window: Duration,
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            report_threshold: DEFAULT_REPORT_THRESHOLD,
            report_window: DEFAULT_REPORT_WINDOW,
        }
    }
}

/// Count the reports that fall into the trailing window anchored
/// at the triggering report.
///
/// A report counts if it was filed after `anchor - window`
/// (exclusive) and not after `anchor` itself.
pub fn count_reports_in_window(reports: &[Report], anchor: Timestamp, window: Duration) -> usize {
    let earliest = anchor - window;
    reports
        .iter()
        .filter(|r| r.created_at > earliest && r.created_at <= anchor)
        .count()
}

/// Remove the review with the given id from the location and
/// recompute the stored rating from the remaining reviews.
///
/// Removing an absent review is a no-op, so a purge that has
/// already happened can safely be triggered again. Returns
/// whether the review has actually been removed.
pub fn purge_review(location: &mut Location, review_id: &Id) -> bool {
    let count_before = location.reviews.len();
    location.reviews.retain(|r| r.id != *review_id);
    if location.reviews.len() == count_before {
        return false;
    }
    // Keeps the previous rating when the last review is gone.
    update_stored_rating(location);
    true
}
