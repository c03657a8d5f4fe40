use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{id::Id, time::Timestamp};

/// The reason given when reporting a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ReportReason {
    Spam,
    Abusive,
    Inappropriate,
    Other,
}

/// An abuse report filed by a user against a single review.
///
/// Reports are never updated. Once the moderation threshold is
/// reached they are consumed: read to decide, then deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: Id,
    pub location_id: Id,
    pub review_id: Id,
    pub reason: ReportReason,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_report_reason() {
        assert_eq!(ReportReason::Spam, ReportReason::from_str("spam").unwrap());
        assert_eq!(
            ReportReason::Inappropriate,
            ReportReason::from_str("Inappropriate").unwrap()
        );
        assert!(ReportReason::from_str("bogus").is_err());
    }
}
