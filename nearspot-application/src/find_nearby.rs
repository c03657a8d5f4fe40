use nearspot_core::usecases::RankedLocation;

use crate::*;

/// All stored locations ordered by distance to the reference
/// position, nearest first.
///
/// The store offers no geospatial query, so this loads the full
/// candidate set and ranks it in memory.
pub fn find_nearby_locations<R: LocationRepo>(
    repo: &R,
    reference: MapPoint,
) -> Result<Vec<RankedLocation>> {
    let candidates = repo.all_locations()?;
    Ok(usecases::rank_locations_by_distance(reference, candidates)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearspot_db_mem::MemStore;
    use nearspot_entities::builders::*;

    #[test]
    fn ranked_by_distance_to_the_reference() {
        let store = MemStore::new();
        store
            .create_location(
                Location::build()
                    .id("boston")
                    .pos(MapPoint::from_lat_lng_deg(42.3601, -71.0589))
                    .finish(),
            )
            .unwrap();
        store
            .create_location(
                Location::build()
                    .id("brooklyn")
                    .pos(MapPoint::from_lat_lng_deg(40.6782, -73.9442))
                    .finish(),
            )
            .unwrap();

        let reference = MapPoint::from_lat_lng_deg(40.7128, -74.0060);
        let ranked = find_nearby_locations(&store, reference).unwrap();
        let ids: Vec<_> = ranked.iter().map(|r| r.location.id.as_str()).collect();
        assert_eq!(vec!["brooklyn", "boston"], ids);
    }

    #[test]
    fn invalid_reference_fails_fast() {
        let store = MemStore::new();
        assert!(find_nearby_locations(&store, MapPoint::default()).is_err());
    }
}
