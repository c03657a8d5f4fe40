use crate::{id::Id, rating::RatingValue, time::Timestamp};

/// A review of a location.
///
/// Reviews are immutable once created. Moderation removes a
/// review as a whole, it never edits one. Every review carries
/// its own id so that reports can reference it unambiguously,
/// even if two reviews of the same location share a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Id,
    pub rating: RatingValue,
    pub comment: String,
    pub created_at: Timestamp,
}
