use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReport {
    pub location_id: Id,
    pub review_id: Id,
    pub reason: ReportReason,
}

/// Validate a new report against the current state of the store
/// and turn it into a storable entity.
///
/// The target review must still exist when the report is filed.
pub fn prepare_new_report<R: LocationRepo>(repo: &R, new: NewReport) -> Result<Report> {
    let NewReport {
        location_id,
        review_id,
        reason,
    } = new;
    let location = repo.get_location(location_id.as_str())?;
    if !location.reviews.iter().any(|r| r.id == review_id) {
        return Err(RepoError::NotFound.into());
    }
    Ok(Report {
        id: Id::new(),
        location_id,
        review_id,
        reason,
        created_at: Timestamp::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::MockDb;
    use nearspot_entities::builders::*;

    #[test]
    fn prepare_report_for_existing_review() {
        let db = MockDb::default();
        db.create_location(
            Location::build()
                .id("l1")
                .review(Review::build().id("r1").finish())
                .finish(),
        )
        .unwrap();

        let report = prepare_new_report(
            &db,
            NewReport {
                location_id: "l1".into(),
                review_id: "r1".into(),
                reason: ReportReason::Spam,
            },
        )
        .unwrap();
        assert!(report.id.is_valid());
        assert_eq!(Id::from("l1"), report.location_id);
        assert_eq!(Id::from("r1"), report.review_id);
    }

    #[test]
    fn reject_report_for_unknown_review() {
        let db = MockDb::default();
        db.create_location(Location::build().id("l1").finish()).unwrap();

        let new = NewReport {
            location_id: "l1".into(),
            review_id: "r1".into(),
            reason: ReportReason::Other,
        };
        assert!(matches!(
            prepare_new_report(&db, new),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
