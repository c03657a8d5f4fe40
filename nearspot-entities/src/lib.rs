#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # nearspot-entities
//!
//! Reusable, agnostic domain entities for nearspot.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod id;
pub mod location;
pub mod rating;
pub mod report;
pub mod review;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
