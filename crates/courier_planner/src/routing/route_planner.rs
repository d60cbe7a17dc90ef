use std::sync::Arc;

use courier_matrix::{
    distance_table::DistanceTable, error::DistanceTableError, kilometers::Kilometers,
    provider::DistanceTableProvider,
};
use tracing::{Level, debug, instrument, warn};

use crate::{error::RouteError, routing::route_result::RouteResult};

/// Resolves routes over a fixed distance table.
///
/// Destinations are visited in the order they are requested, the planner never
/// reorders them. The table is only read, so one planner can be shared by any
/// number of transports.
#[derive(Clone)]
pub struct RoutePlanner {
    table: Arc<DistanceTable>,
}

impl RoutePlanner {
    pub fn new(table: Arc<DistanceTable>) -> Self {
        RoutePlanner { table }
    }

    pub fn from_provider(provider: &DistanceTableProvider) -> Result<Self, DistanceTableError> {
        Ok(RoutePlanner::new(Arc::new(provider.load()?)))
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Builds the route `[current_location, destinations...]` and sums the
    /// distance of each hop.
    ///
    /// A destination equal to the stop right before it is not repeated in the
    /// route. Fails on an origin unknown to the table or on the first hop
    /// missing from it, without returning any part of the route.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn calculate_route<S: AsRef<str>>(
        &self,
        current_location: &str,
        destinations: &[S],
    ) -> Result<RouteResult, RouteError> {
        if !self.table.contains_location(current_location) {
            warn!("Unknown origin {}", current_location);
            return Err(RouteError::DestinationUnreachable {
                destination: current_location.to_owned(),
            });
        }

        let mut route = Vec::with_capacity(destinations.len() + 1);
        route.push(current_location.to_owned());

        let mut total_distance = Kilometers::ZERO;
        let mut previous = current_location;

        for destination in destinations {
            let destination = destination.as_ref();

            let Some(distance) = self.table.distance(previous, destination) else {
                warn!("No hop between {} and {}", previous, destination);
                return Err(RouteError::DestinationUnreachable {
                    destination: destination.to_owned(),
                });
            };

            if destination != previous {
                route.push(destination.to_owned());
            }

            let Some(total) = total_distance.checked_add(distance) else {
                warn!("Total distance overflows at {}", destination);
                return Err(RouteError::DistanceOverflow {
                    destination: destination.to_owned(),
                });
            };

            total_distance = total;
            previous = destination;
        }

        debug!(
            "Route from {} with {} stops: {} km",
            current_location,
            route.len() - 1,
            total_distance
        );

        Ok(RouteResult::new(route, total_distance))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_planner;

    use super::*;

    #[test]
    fn test_route_keeps_requested_order() {
        let planner = create_test_planner();
        let result = planner
            .calculate_route("Bogotá", &["Cali", "Medellín", "Cartagena"])
            .unwrap();

        assert_eq!(result.origin(), Some("Bogotá"));
        assert_eq!(
            result.route(),
            &["Bogotá", "Cali", "Medellín", "Cartagena"]
        );
        assert_eq!(result.total_distance(), Kilometers::new(1505));
    }

    #[test]
    fn test_total_distance_is_sum_of_hops() {
        let planner = create_test_planner();
        let result = planner
            .calculate_route("Bogotá", &["Cali", "Barranquilla", "Bucaramanga"])
            .unwrap();

        let expected: Kilometers = result
            .hops()
            .map(|(from, to)| planner.table().distance(from, to).unwrap())
            .sum();

        assert_eq!(result.total_distance(), expected);
        assert_eq!(result.total_distance(), Kilometers::new(2090));
    }

    #[test]
    fn test_destination_equal_to_origin_is_collapsed() {
        let planner = create_test_planner();
        let result = planner
            .calculate_route("Bogotá", &["Bogotá", "Medellín", "Santa Marta"])
            .unwrap();

        assert_eq!(result.route(), &["Bogotá", "Medellín", "Santa Marta"]);
        assert_eq!(result.total_distance(), Kilometers::new(1085));
    }

    #[test]
    fn test_no_destinations() {
        let planner = create_test_planner();
        let result = planner.calculate_route::<&str>("Cali", &[]).unwrap();

        assert_eq!(result.route(), &["Cali"]);
        assert_eq!(result.origin(), Some("Cali"));
        assert_eq!(result.total_distance(), Kilometers::ZERO);
    }

    #[test]
    fn test_unknown_origin_without_destinations() {
        let planner = create_test_planner();
        let result = planner.calculate_route::<&str>("Atlantis", &[]);

        assert_eq!(
            result,
            Err(RouteError::DestinationUnreachable {
                destination: "Atlantis".to_owned()
            })
        );
    }

    #[test]
    fn test_total_distance_overflow() {
        let table = DistanceTable::from_entries([("A", "B", u32::MAX - 1)]).unwrap();
        let planner = RoutePlanner::new(Arc::new(table));

        assert_eq!(
            planner.calculate_route("A", &["B"]).map(|r| r.total_distance()),
            Ok(Kilometers::new(u32::MAX - 1))
        );
        assert_eq!(
            planner.calculate_route("A", &["B", "A"]),
            Err(RouteError::DistanceOverflow {
                destination: "A".to_owned()
            })
        );
    }

    #[test]
    fn test_unreachable_hop() {
        let planner = create_test_planner();
        let result = planner.calculate_route("Medellín", &["Santa Marta", "Villavicencio", "Bogotá"]);

        assert_eq!(
            result,
            Err(RouteError::DestinationUnreachable {
                destination: "Villavicencio".to_owned()
            })
        );
    }

    #[test]
    fn test_unreachable_first_hop() {
        let planner = create_test_planner();
        let error = planner
            .calculate_route("Medellín", &["Villavicencio", "Santa Marta"])
            .unwrap_err();

        assert_eq!(error.destination(), "Villavicencio");
        assert_eq!(
            error.to_string(),
            "El destino Villavicencio no se encuentra disponible"
        );
    }

    #[test]
    fn test_unknown_location_is_unreachable() {
        let planner = create_test_planner();

        assert!(planner.calculate_route("Bogotá", &["Pasto"]).is_err());
        assert!(planner.calculate_route("Pasto", &["Pasto"]).is_err());
    }

    #[test]
    fn test_accepts_owned_destinations() {
        let planner = create_test_planner();
        let destinations = vec!["Villavicencio".to_owned()];
        let result = planner.calculate_route("Bogotá", &destinations).unwrap();

        assert_eq!(result.total_distance(), Kilometers::new(120));
    }
}
