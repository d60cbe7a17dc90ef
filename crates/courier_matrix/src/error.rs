use thiserror::Error;

use crate::kilometers::Kilometers;

#[derive(Debug, Error)]
pub enum DistanceTableError {
    #[error("Could not read distance table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Conflicting distances between {from} and {to}: {first} km and {second} km")]
    ConflictingDistance {
        from: String,
        to: String,
        first: Kilometers,
        second: Kilometers,
    },

    #[error("Distance from {0} to itself must be 0 km, got {1} km")]
    SelfDistance(String, Kilometers),

    #[error("Location name must not be empty")]
    EmptyLocation,

    #[error("Environment variable {name} is not valid unicode")]
    InvalidEnvVar { name: &'static str },
}
