use courier_matrix::provider::DistanceTableProvider;

use crate::{
    problem::{kmh::Kmh, plane::Plane, truck::Truck},
    routing::route_planner::RoutePlanner,
};

pub fn create_test_planner() -> RoutePlanner {
    RoutePlanner::from_provider(&DistanceTableProvider::BuiltIn).unwrap()
}

pub fn create_test_truck() -> Truck {
    Truck::new("id", 100, "Bogotá", Kmh::new(50.0), 3)
}

pub fn create_test_plane() -> Plane {
    Plane::new("id", 100, "Bogotá", Kmh::new(300.0), 10)
}
