mod add_review;
mod create_location;
mod error;
mod moderate_review;
mod rank_locations;
mod report_review;
mod sweep_inactive;


pub use self::{
    add_review::*, create_location::*, error::Error, moderate_review::*, rank_locations::*,
    report_review::*, sweep_inactive::*,
};

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) mod prelude {
    pub(crate) use time::Duration;

    pub(crate) use crate::{
        entities::*,
        rating::{update_stored_rating, Rated as _},
        repositories::{Error as RepoError, LocationRepo, ReportRepo},
        usecases::{Error, Result},
    };
}
