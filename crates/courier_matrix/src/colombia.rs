use crate::{distance_table::DistanceTable, error::DistanceTableError};

/// Direct road hops between Colombian cities, in kilometres.
///
/// Not every pair is connected: Villavicencio is only reachable from Bogotá and
/// there is no direct hop between Cali and the Caribbean coast.
pub const ROAD_DISTANCES: &[(&str, &str, u32)] = &[
    ("Bogotá", "Cali", 460),
    ("Bogotá", "Medellín", 415),
    ("Bogotá", "Bucaramanga", 400),
    ("Bogotá", "Villavicencio", 120),
    ("Bogotá", "Manizales", 290),
    ("Bogotá", "Cartagena", 1050),
    ("Cali", "Medellín", 420),
    ("Cali", "Manizales", 270),
    ("Cali", "Barranquilla", 1130),
    ("Medellín", "Cartagena", 625),
    ("Medellín", "Santa Marta", 670),
    ("Medellín", "Manizales", 195),
    ("Medellín", "Bucaramanga", 390),
    ("Medellín", "Barranquilla", 700),
    ("Barranquilla", "Bucaramanga", 500),
    ("Barranquilla", "Cartagena", 120),
    ("Barranquilla", "Santa Marta", 95),
    ("Cartagena", "Santa Marta", 230),
    ("Bucaramanga", "Santa Marta", 560),
];

pub fn road_distances() -> Result<DistanceTable, DistanceTableError> {
    DistanceTable::from_entries(ROAD_DISTANCES.iter().copied())
}
