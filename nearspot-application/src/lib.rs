//! # nearspot-application
//!
//! Flows that sequence multiple store interactions, invoked by the
//! external event runtime: report handling with the moderation
//! decision, the inactivity sweep and the nearby query.
//!
//! None of the flows takes a lock on the store. Each one is written
//! to be safely repeatable under at-least-once delivery of its
//! triggering event.

mod find_nearby;
mod report_review;
mod sweep_inactive;

pub mod error;

pub mod prelude {
    pub use super::{find_nearby::*, report_review::*, sweep_inactive::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use nearspot_core::{
    entities::*,
    repositories::{Error as RepoError, LocationRepo, ReportRepo},
    usecases,
};
