pub mod kmh;
pub mod plane;
pub mod transport;
pub mod truck;
