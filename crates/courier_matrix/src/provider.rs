use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{colombia, distance_table::DistanceTable, error::DistanceTableError, json};

pub const DISTANCE_TABLE_ENV_VAR: &str = "COURIER_DISTANCE_TABLE";

/// Where the distance table of a planner comes from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistanceTableProvider {
    /// The Colombian road distances bundled with this crate.
    #[default]
    BuiltIn,

    /// A JSON file following the schema of [`json::JsonDistanceTable`].
    File { path: PathBuf },
}

impl DistanceTableProvider {
    /// Reads `COURIER_DISTANCE_TABLE`; an unset or empty variable selects the
    /// built-in table.
    pub fn from_env() -> Result<Self, DistanceTableError> {
        match std::env::var(DISTANCE_TABLE_ENV_VAR) {
            Ok(path) if path.is_empty() => Ok(DistanceTableProvider::BuiltIn),
            Ok(path) => Ok(DistanceTableProvider::File { path: path.into() }),
            Err(std::env::VarError::NotPresent) => Ok(DistanceTableProvider::BuiltIn),
            Err(std::env::VarError::NotUnicode(_)) => Err(DistanceTableError::InvalidEnvVar {
                name: DISTANCE_TABLE_ENV_VAR,
            }),
        }
    }

    pub fn load(&self) -> Result<DistanceTable, DistanceTableError> {
        match self {
            DistanceTableProvider::BuiltIn => {
                debug!("Using built-in road distances");
                colombia::road_distances()
            }
            DistanceTableProvider::File { path } => json::read_distance_table(path),
        }
    }
}
