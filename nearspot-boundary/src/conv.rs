use std::str::FromStr;

use thiserror::Error;

use nearspot_entities as e;

use super::*;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid position: {0},{1}")]
    Position(f64, f64),
    #[error("Rating value out of range: {0}")]
    Rating(i8),
    #[error("Average rating out of range: {0}")]
    AvgRating(f64),
    #[error("Invalid report reason: {0}")]
    Reason(String),
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            rating,
            comment,
            created_at,
        } = from;
        Self {
            id: id.into(),
            rating: rating.into(),
            comment,
            created_at: created_at.as_secs(),
        }
    }
}

impl TryFrom<Review> for e::review::Review {
    type Error = ImportError;
    fn try_from(from: Review) -> Result<Self, Self::Error> {
        let Review {
            id,
            rating,
            comment,
            created_at,
        } = from;
        let rating = e::rating::RatingValue::from(rating);
        if !rating.is_valid() {
            return Err(ImportError::Rating(rating.into()));
        }
        Ok(Self {
            id: id.into(),
            rating,
            comment,
            created_at: e::time::Timestamp::from_secs(created_at),
        })
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            pos,
            reviews,
            rating,
            created_at,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            name,
            lat,
            lng,
            reviews: reviews.into_iter().map(Into::into).collect(),
            rating: rating.into(),
            created_at: created_at.as_secs(),
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = ImportError;
    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
            name,
            lat,
            lng,
            reviews,
            rating,
            created_at,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ImportError::Position(lat, lng))?;
        let rating = e::rating::AvgRatingValue::from(rating);
        if !rating.is_valid() {
            return Err(ImportError::AvgRating(rating.into()));
        }
        let reviews = reviews
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: id.into(),
            name,
            pos,
            reviews,
            rating,
            created_at: e::time::Timestamp::from_secs(created_at),
        })
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            location_id,
            review_id,
            reason,
            created_at,
        } = from;
        let reason: &'static str = reason.into();
        Self {
            id: id.into(),
            location_id: location_id.into(),
            review_id: review_id.into(),
            reason: reason.to_owned(),
            created_at: created_at.as_secs(),
        }
    }
}

impl TryFrom<Report> for e::report::Report {
    type Error = ImportError;
    fn try_from(from: Report) -> Result<Self, Self::Error> {
        let Report {
            id,
            location_id,
            review_id,
            reason,
            created_at,
        } = from;
        let reason = e::report::ReportReason::from_str(&reason)
            .map_err(|_| ImportError::Reason(reason))?;
        Ok(Self {
            id: id.into(),
            location_id: location_id.into(),
            review_id: review_id.into(),
            reason,
            created_at: e::time::Timestamp::from_secs(created_at),
        })
    }
}
