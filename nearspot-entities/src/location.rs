use crate::{geo::MapPoint, id::Id, rating::AvgRatingValue, review::Review, time::Timestamp};

/// A point of interest with the reviews submitted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub pos: MapPoint,

    /// Reviews in submission order.
    pub reviews: Vec<Review>,

    /// The stored average rating.
    ///
    /// Derived from `reviews` while at least one review exists.
    /// When the last review disappears the previously stored
    /// value is retained.
    pub rating: AvgRatingValue,

    pub created_at: Timestamp,
}

impl Location {
    /// The timestamp of the most recent activity, i.e. the newest
    /// review or the creation of the location itself.
    pub fn latest_activity(&self) -> Timestamp {
        self.reviews
            .iter()
            .map(|r| r.created_at)
            .max()
            .unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn latest_activity_without_reviews_is_creation() {
        let location = Location::build().created_at(Timestamp::from_secs(100)).finish();
        assert_eq!(Timestamp::from_secs(100), location.latest_activity());
    }

    #[test]
    fn latest_activity_is_newest_review() {
        let location = Location::build()
            .created_at(Timestamp::from_secs(100))
            .review(Review::build().created_at(Timestamp::from_secs(500)).finish())
            .review(Review::build().created_at(Timestamp::from_secs(900)).finish())
            .review(Review::build().created_at(Timestamp::from_secs(700)).finish())
            .finish();
        assert_eq!(Timestamp::from_secs(900), location.latest_activity());
    }
}
