use async_trait::async_trait;

use crate::config::RouteConfig;
use crate::errors::RouteError;
use crate::models::Coordinates;

/// Which route of the workflow a destination is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLeg {
    Direct,
    Optimized,
}

/// Turns a typed dropoff address into a coordinate
#[async_trait(?Send)]
pub trait GeocodingService {
    async fn geocode(
        &self,
        origin: Coordinates,
        address: &str,
        leg: RouteLeg,
    ) -> Result<Coordinates, RouteError>;
}

/// Stand-in geocoder: every address resolves to a fixed offset from the
/// depot. Swap for a real lookup without touching the route workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOffsetGeocoder {
    pub direct_offset: f64,
    pub optimized_offset: f64,
}

impl FixedOffsetGeocoder {
    pub fn from_config(config: &RouteConfig) -> Self {
        Self {
            direct_offset: config.direct_offset,
            optimized_offset: config.optimized_offset,
        }
    }
}

impl Default for FixedOffsetGeocoder {
    fn default() -> Self {
        Self::from_config(&RouteConfig::default())
    }
}

#[async_trait(?Send)]
impl GeocodingService for FixedOffsetGeocoder {
    async fn geocode(
        &self,
        origin: Coordinates,
        address: &str,
        leg: RouteLeg,
    ) -> Result<Coordinates, RouteError> {
        if address.trim().is_empty() {
            return Err(RouteError::EmptyAddress);
        }
        let offset = match leg {
            RouteLeg::Direct => self.direct_offset,
            RouteLeg::Optimized => self.optimized_offset,
        };
        Ok(origin.offset(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn legs_use_their_own_offset() {
        let geocoder = FixedOffsetGeocoder::default();
        let depot = Coordinates::new(-0.1022, 34.7617);
        let direct = block_on(geocoder.geocode(depot, "Kondele Market", RouteLeg::Direct)).unwrap();
        let optimized =
            block_on(geocoder.geocode(depot, "Kondele Market", RouteLeg::Optimized)).unwrap();
        assert_eq!(direct, depot.offset(0.01));
        assert_eq!(optimized, depot.offset(0.008));
    }

    #[test]
    fn blank_address_is_rejected() {
        let geocoder = FixedOffsetGeocoder::default();
        let depot = Coordinates::new(-0.1022, 34.7617);
        assert_eq!(
            block_on(geocoder.geocode(depot, "   ", RouteLeg::Direct)),
            Err(RouteError::EmptyAddress)
        );
    }
}
