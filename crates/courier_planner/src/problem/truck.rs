use serde::{Deserialize, Serialize};

use crate::problem::{
    kmh::Kmh,
    transport::{Transport, TransportDetails},
};

/// Time lost at every toll booth on a trip.
pub const TOLL_STOP_MINUTES: f64 = 10.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Truck {
    #[serde(flatten)]
    details: TransportDetails,
    average_speed: Kmh,
    toll_count: u32,
}

impl Truck {
    /// `average_speed` must satisfy [`Kmh::is_valid`], otherwise the delivery
    /// estimate is not a finite number of hours. Input read from JSON is
    /// checked by [`crate::json::types::JsonTransport::build_transport`].
    pub fn new(
        id: impl Into<String>,
        max_capacity: u32,
        current_location: impl Into<String>,
        average_speed: Kmh,
        toll_count: u32,
    ) -> Self {
        Truck {
            details: TransportDetails::new(id, max_capacity, current_location),
            average_speed,
            toll_count,
        }
    }

    pub fn average_speed(&self) -> Kmh {
        self.average_speed
    }

    pub fn toll_count(&self) -> u32 {
        self.toll_count
    }
}

impl Transport for Truck {
    fn details(&self) -> &TransportDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut TransportDetails {
        &mut self.details
    }

    fn estimate_delivery_time(&self, total_distance: f64) -> f64 {
        let driving = total_distance / self.average_speed.value();
        let tolls = f64::from(self.toll_count) * TOLL_STOP_MINUTES / 60.0;

        driving + tolls
    }
}
