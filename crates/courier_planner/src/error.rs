use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("El destino {destination} no se encuentra disponible")]
    DestinationUnreachable { destination: String },

    #[error("La distancia total hasta {destination} supera el máximo representable")]
    DistanceOverflow { destination: String },
}

impl RouteError {
    /// The location at which planning stopped.
    pub fn destination(&self) -> &str {
        match self {
            RouteError::DestinationUnreachable { destination }
            | RouteError::DistanceOverflow { destination } => destination,
        }
    }
}
