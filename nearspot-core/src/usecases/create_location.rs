use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

pub fn create_new_location<R: LocationRepo>(repo: &R, new: NewLocation) -> Result<Location> {
    let NewLocation { name, lat, lng } = new;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let location = Location {
        id: Id::new(),
        name,
        pos,
        reviews: vec![],
        rating: Default::default(),
        created_at: Timestamp::now(),
    };
    repo.create_location(location.clone())?;
    log::info!("Created location {} at {}", location.id, location.pos);
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::MockDb;

    #[test]
    fn create_valid_location() {
        let db = MockDb::default();
        let new = NewLocation {
            name: "Fountain".into(),
            lat: 40.7128,
            lng: -74.0060,
        };
        let location = create_new_location(&db, new).unwrap();
        assert!(location.id.is_valid());
        assert!(location.reviews.is_empty());
        assert_eq!(AvgRatingValue::default(), location.rating);
        assert_eq!(1, db.count_locations().unwrap());
    }

    #[test]
    fn reject_empty_name() {
        let db = MockDb::default();
        let new = NewLocation {
            name: "  ".into(),
            lat: 0.0,
            lng: 0.0,
        };
        assert!(matches!(create_new_location(&db, new), Err(Error::Name)));
        assert_eq!(0, db.count_locations().unwrap());
    }

    #[test]
    fn reject_out_of_range_position() {
        let db = MockDb::default();
        let new = NewLocation {
            name: "Nowhere".into(),
            lat: 91.0,
            lng: 0.0,
        };
        assert!(matches!(
            create_new_location(&db, new),
            Err(Error::InvalidPosition)
        ));
    }
}
