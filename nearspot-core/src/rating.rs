use crate::entities::*;

pub trait Rated {
    /// The average rating over all current reviews or `None`
    /// if there are no reviews.
    fn avg_rating(&self) -> Option<AvgRatingValue>;
}

impl Rated for Location {
    fn avg_rating(&self) -> Option<AvgRatingValue> {
        self.reviews
            .iter()
            .fold(AvgRatingValueBuilder::default(), |mut acc, r| {
                acc += r.rating;
                acc
            })
            .build()
    }
}

/// Synchronize the stored rating with the current review list.
///
/// When the review list is empty the previously stored rating is
/// retained instead of being reset.
pub fn update_stored_rating(location: &mut Location) {
    if let Some(avg) = location.avg_rating() {
        location.rating = avg;
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use nearspot_entities::builders::*;

    fn new_review(rating: i8) -> Review {
        Review::build().rating(rating).finish()
    }

    #[test]
    fn avg_rating_of_reviews() {
        let location = Location::build()
            .review(new_review(1))
            .review(new_review(4))
            .review(new_review(4))
            .finish();
        assert_eq!(Some(AvgRatingValue::from(3.0)), location.avg_rating());
    }

    #[test]
    fn avg_rating_without_reviews() {
        let location = Location::build().finish();
        assert_eq!(None, location.avg_rating());
    }

    #[test]
    fn update_stored_rating_keeps_previous_value_without_reviews() {
        let mut location = Location::build().rating(4.5).finish();
        update_stored_rating(&mut location);
        assert_eq!(AvgRatingValue::from(4.5), location.rating);

        location.reviews.push(new_review(2));
        update_stored_rating(&mut location);
        assert_eq!(AvgRatingValue::from(2.0), location.rating);
    }
}
