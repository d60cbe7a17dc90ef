use serde::{Deserialize, Serialize};

use crate::problem::{
    kmh::Kmh,
    transport::{Transport, TransportDetails},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plane {
    #[serde(flatten)]
    details: TransportDetails,
    average_speed: Kmh,
    rest_hours: u32,
}

impl Plane {
    /// `average_speed` must satisfy [`Kmh::is_valid`], otherwise the delivery
    /// estimate is not a finite number of hours. Input read from JSON is
    /// checked by [`crate::json::types::JsonTransport::build_transport`].
    pub fn new(
        id: impl Into<String>,
        max_capacity: u32,
        current_location: impl Into<String>,
        average_speed: Kmh,
        rest_hours: u32,
    ) -> Self {
        Plane {
            details: TransportDetails::new(id, max_capacity, current_location),
            average_speed,
            rest_hours,
        }
    }

    pub fn average_speed(&self) -> Kmh {
        self.average_speed
    }

    /// Crew rest between flights. Not part of the delivery estimate.
    pub fn rest_hours(&self) -> u32 {
        self.rest_hours
    }
}

impl Transport for Plane {
    fn details(&self) -> &TransportDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TransportDetails {
        &mut self.details
    }

    fn estimate_delivery_time(&self, total_distance: f64) -> f64 {
        total_distance / self.average_speed.value()
    }
}
