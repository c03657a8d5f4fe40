//! # nearspot-boundary
//!
//! Serializable, anemic data structures for exchanging nearspot
//! data in a type-safe manner. The entities themselves stay free
//! of any serialization concerns.

use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::ImportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub rating: i8,
    pub comment: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub reviews: Vec<Review>,
    pub rating: f64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub location_id: String,
    pub review_id: String,
    pub reason: String,
    pub created_at: i64,
}

/// A full dump of the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<Report>,
}
