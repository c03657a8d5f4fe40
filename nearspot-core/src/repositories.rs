// Low-level document store access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: Location) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;

    /// Replace the stored location, including its review list
    /// and rating.
    fn update_location(&self, location: &Location) -> Result<()>;

    /// Delete the given locations in one batch.
    ///
    /// Unknown ids are skipped. Returns the number of locations
    /// that have actually been deleted.
    fn delete_locations(&self, ids: &[&str]) -> Result<usize>;
}

pub trait ReportRepo {
    fn create_report(&self, report: Report) -> Result<()>;

    /// All reports filed against the given review, unfiltered.
    fn reports_for_review(&self, location_id: &str, review_id: &str) -> Result<Vec<Report>>;

    /// Delete all reports filed against the given review, not
    /// just recent ones. Returns the number of deleted reports.
    fn delete_reports_for_review(&self, location_id: &str, review_id: &str) -> Result<usize>;

    fn count_reports(&self) -> Result<usize>;
}
