use std::cmp::Ordering;

use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedLocation {
    pub location: Location,
    pub distance: Distance,
}

/// Order the candidate locations by their great-circle distance
/// to the reference position, nearest first.
///
/// Candidates with an invalid position are skipped. Ties keep the
/// relative order of the input (stable sort).
pub fn rank_locations_by_distance(
    reference: MapPoint,
    candidates: Vec<Location>,
) -> Result<Vec<RankedLocation>> {
    if !reference.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let mut ranked: Vec<_> = candidates
        .into_iter()
        .filter_map(
            |location| match MapPoint::distance(reference, location.pos) {
                Some(distance) => Some(RankedLocation { location, distance }),
                None => {
                    log::warn!(
                        "Skipping location {} with invalid position",
                        location.id
                    );
                    None
                }
            },
        )
        .collect();
    // All remaining distances are finite, the fallback is unreachable.
    ranked.sort_by(|lhs, rhs| {
        lhs.distance
            .partial_cmp(&rhs.distance)
            .unwrap_or(Ordering::Equal)
    });
    Ok(ranked)
}
