use super::prelude::*;

pub const DEFAULT_RETENTION_PERIOD: Duration = Duration::days(90);

/// Select the locations that have seen no activity since the cutoff.
///
/// Activity is judged by the newest review or, for locations
/// without reviews, by the creation date.
pub fn find_inactive_locations(locations: &[Location], cutoff: Timestamp) -> Vec<Id> {
    locations
        .iter()
        .filter(|location| location.latest_activity() < cutoff)
        .map(|location| location.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearspot_entities::builders::*;

    const CUTOFF: Timestamp = Timestamp::from_secs(1_000_000);

    #[test]
    fn selects_stale_locations_without_reviews_by_creation_date() {
        let locations = vec![
            Location::build()
                .id("stale")
                .created_at(Timestamp::from_secs(999_999))
                .finish(),
            Location::build().id("fresh").created_at(CUTOFF).finish(),
        ];
        assert_eq!(vec![Id::from("stale")], find_inactive_locations(&locations, CUTOFF));
    }

    #[test]
    fn judges_activity_by_the_newest_review() {
        let old = Timestamp::from_secs(1);
        let recent = Timestamp::from_secs(1_500_000);
        let locations = vec![
            // Created long ago but recently reviewed: kept.
            Location::build()
                .id("active")
                .created_at(old)
                .review(Review::build().created_at(old).finish())
                .review(Review::build().created_at(recent).finish())
                .finish(),
            // Only stale reviews: swept.
            Location::build()
                .id("stale")
                .created_at(old)
                .review(Review::build().created_at(old).finish())
                .finish(),
        ];
        assert_eq!(vec![Id::from("stale")], find_inactive_locations(&locations, CUTOFF));
    }

    #[test]
    fn nothing_to_sweep() {
        let locations = vec![Location::build().created_at(CUTOFF).finish()];
        assert!(find_inactive_locations(&locations, CUTOFF).is_empty());
    }
}
