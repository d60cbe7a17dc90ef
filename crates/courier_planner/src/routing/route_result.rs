use courier_matrix::kilometers::Kilometers;
use serde::{Deserialize, Serialize};

/// Locations visited in order, starting at the origin, and the sum of the
/// hop distances between them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    route: Vec<String>,
    total_distance: Kilometers,
}

impl RouteResult {
    pub fn new(route: Vec<String>, total_distance: Kilometers) -> Self {
        RouteResult {
            route,
            total_distance,
        }
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }

    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    pub fn origin(&self) -> Option<&str> {
        self.route.first().map(String::as_str)
    }

    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.route
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
