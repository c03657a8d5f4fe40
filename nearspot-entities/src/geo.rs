use itertools::Itertools;
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

/// A geographical coordinate on the map, in degrees.
///
/// The default value is the invalid coordinate, i.e. a freshly
/// initialized value must not be mistaken for a real position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat_deg: f64,
    lng_deg: f64,
}

impl Default for MapPoint {
    fn default() -> Self {
        let res = Self {
            lat_deg: f64::NAN,
            lng_deg: f64::NAN,
        };
        debug_assert!(!res.is_valid());
        res
    }
}

impl MapPoint {
    pub fn is_valid(self) -> bool {
        is_valid_lat_deg(self.lat_deg) && is_valid_lng_deg(self.lng_deg)
    }

    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        debug_assert!(is_valid_lat_deg(lat_deg));
        debug_assert!(is_valid_lng_deg(lng_deg));
        Self { lat_deg, lng_deg }
    }

    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        if is_valid_lat_deg(lat_deg) && is_valid_lng_deg(lng_deg) {
            Some(Self { lat_deg, lng_deg })
        } else {
            None
        }
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat_deg, self.lng_deg)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat_deg.to_radians(), self.lng_deg.to_radians())
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat_deg, self.lng_deg)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Failed to parse map point: {0}")]
    Format(String),
    #[error("Invalid latitude: {0}")]
    Latitude(String),
    #[error("Invalid longitude: {0}")]
    Longitude(String),
}

impl std::str::FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError::Format(s.into()));
        };
        let lat_deg = lat_str
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|deg| is_valid_lat_deg(*deg))
            .ok_or_else(|| MapPointParseError::Latitude(lat_str.into()))?;
        let lng_deg = lng_str
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|deg| is_valid_lng_deg(*deg))
            .ok_or_else(|| MapPointParseError::Longitude(lng_str.into()))?;
        Ok(Self { lat_deg, lng_deg })
    }
}

/// A geodesic distance in miles.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_miles(miles: f64) -> Self {
        Self(miles)
    }

    pub const fn to_miles(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{} mi", self.0)
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_miles(3959.0);

impl MapPoint {
    /// Calculate the great-circle distance between two points on the
    /// surface of the earth using the haversine formula.
    ///
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_miles(MEAN_EARTH_RADIUS.to_miles() * c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn default_map_point_is_invalid() {
        assert!(!MapPoint::default().is_valid());
    }

    #[test]
    fn try_from_lat_lng_deg_checks_ranges() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(-90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn parse_map_point() {
        let pt = "40.7128, -74.0060".parse::<MapPoint>().unwrap();
        assert_eq!(pt.to_lat_lng_deg(), (40.7128, -74.0060));
        assert!("40.7128".parse::<MapPoint>().is_err());
        assert!("91.0,0.0".parse::<MapPoint>().is_err());
        assert!("0.0,181.0".parse::<MapPoint>().is_err());
        assert!("foo,bar".parse::<MapPoint>().is_err());
    }

    #[test]
    fn distance_of_invalid_points_is_undefined() {
        let valid = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(None, MapPoint::distance(valid, MapPoint::default()));
        assert_eq!(None, MapPoint::distance(MapPoint::default(), valid));
    }

    #[test]
    fn distance_of_equal_points_is_zero() {
        let pt = MapPoint::from_lat_lng_deg(40.7128, -74.0060);
        let dist = MapPoint::distance(pt, pt).unwrap();
        assert!(dist.to_miles().abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let p1 = MapPoint::from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            );
            let p2 = MapPoint::from_lat_lng_deg(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            );
            let d12 = MapPoint::distance(p1, p2).unwrap();
            let d21 = MapPoint::distance(p2, p1).unwrap();
            assert!((d12.to_miles() - d21.to_miles()).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_of_one_degree_longitude_at_the_equator() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let p2 = MapPoint::from_lat_lng_deg(0.0, 1.0);
        let dist = MapPoint::distance(p1, p2).unwrap();
        assert!((dist.to_miles() - 69.17).abs() < 0.5);
    }
}
