use nearspot_core::{entities::MapPoint, gateways::GeolocationGateway};

use crate::config;

/// Geolocation pinned to a configured position.
///
/// The command line tool has no device location to ask for, so the
/// gateway hands out the configured default position, if any.
pub struct FixedPosition {
    position: Option<MapPoint>,
}

impl GeolocationGateway for FixedPosition {
    fn current_position(&self) -> Option<MapPoint> {
        self.position
    }
}

pub fn geolocation_gateway(cfg: &config::Geolocation) -> FixedPosition {
    FixedPosition {
        position: cfg.default_position,
    }
}
