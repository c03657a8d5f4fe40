use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i8,
    pub comment: String,
}

/// Append a new review to the location and store the recomputed
/// average rating along with it.
pub fn add_review<R: LocationRepo>(repo: &R, location_id: &Id, new: NewReview) -> Result<Review> {
    let NewReview { rating, comment } = new;
    let rating = RatingValue::from(rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    if comment.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    let mut location = repo.get_location(location_id.as_str())?;
    let review = Review {
        id: Id::new(),
        rating,
        comment,
        created_at: Timestamp::now(),
    };
    location.reviews.push(review.clone());
    update_stored_rating(&mut location);
    repo.update_location(&location)?;
    Ok(review)
}
