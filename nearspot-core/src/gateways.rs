use crate::entities::MapPoint;

/// Supplies the current position of the user on demand.
///
/// Acquisition, caching and retry are concerns of the implementation,
/// e.g. a browser geolocation API or a fixed, configured position.
pub trait GeolocationGateway {
    fn current_position(&self) -> Option<MapPoint>;
}
