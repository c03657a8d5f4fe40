pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{location_builder::*, report_builder::*, review_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{geo::*, id::*, location::*, review::*, time::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = pos;
            self
        }
        pub fn review(mut self, review: Review) -> Self {
            self.location.reviews.push(review);
            self
        }
        pub fn rating<V: Into<crate::rating::AvgRatingValue>>(mut self, rating: V) -> Self {
            self.location.rating = rating.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.location.created_at = created_at;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    reviews: vec![],
                    rating: Default::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn rating<V: Into<RatingValue>>(mut self, rating: V) -> Self {
            self.review.rating = rating.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    rating: RatingValue::new(3),
                    comment: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: Report,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn location_id(mut self, id: &str) -> Self {
            self.report.location_id = id.into();
            self
        }
        pub fn review_id(mut self, id: &str) -> Self {
            self.report.review_id = id.into();
            self
        }
        pub fn reason(mut self, reason: ReportReason) -> Self {
            self.report.reason = reason;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.report.created_at = created_at;
            self
        }
        pub fn finish(self) -> Report {
            self.report
        }
    }

    impl Builder for Report {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            ReportBuild {
                report: Report {
                    id: Id::new(),
                    location_id: Id::new(),
                    review_id: Id::new(),
                    reason: ReportReason::Other,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
