//! # nearspot-core
//!
//! The business core: repository and gateway abstractions for the
//! external collaborators plus the use cases that implement the
//! ranking, review and moderation logic.

pub mod entities {
    pub use nearspot_entities::{
        geo::*, id::*, location::*, rating::*, report::*, review::*, time::*,
    };
}

pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
