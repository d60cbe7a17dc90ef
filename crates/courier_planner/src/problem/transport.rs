use std::path::Path;

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::{
    error::RouteError,
    report::transport_report,
    routing::{route_planner::RoutePlanner, route_result::RouteResult},
};

/// Attributes every kind of transport carries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransportDetails {
    id: String,
    /// Kilograms
    max_capacity: u32,
    current_location: String,
}

impl TransportDetails {
    pub fn new(
        id: impl Into<String>,
        max_capacity: u32,
        current_location: impl Into<String>,
    ) -> Self {
        TransportDetails {
            id: id.into(),
            max_capacity,
            current_location: current_location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn set_current_location(&mut self, current_location: String) {
        self.current_location = current_location;
    }
}

pub trait Transport {
    fn details(&self) -> &TransportDetails;

    fn details_mut(&mut self) -> &mut TransportDetails;

    /// Hours needed to cover `total_distance` kilometres.
    fn estimate_delivery_time(&self, total_distance: f64) -> f64;

    fn id(&self) -> &str {
        self.details().id()
    }

    fn max_capacity(&self) -> u32 {
        self.details().max_capacity()
    }

    fn current_location(&self) -> &str {
        self.details().current_location()
    }

    fn set_current_location(&mut self, current_location: String) {
        self.details_mut().set_current_location(current_location);
    }

    /// Same as [`Transport::estimate_delivery_time`], `None` when the estimate
    /// is not a representable duration.
    fn estimate_delivery_duration(&self, total_distance: f64) -> Option<SignedDuration> {
        let hours = self.estimate_delivery_time(total_distance);
        SignedDuration::try_from_secs_f64(hours * 3600.0).ok()
    }

    /// Plans a route starting at the current location of this transport.
    fn calculate_route(
        &self,
        planner: &RoutePlanner,
        destinations: &[&str],
    ) -> Result<RouteResult, RouteError> {
        planner.calculate_route(self.current_location(), destinations)
    }

    /// Writes the report of `route` using the attributes this transport has
    /// right now.
    fn generate_report(&self, route: &RouteResult, path: &Path) -> std::io::Result<()> {
        transport_report::generate_report(self.details(), route, path)
    }
}
