use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, bail, ensure};
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::problem::{kmh::Kmh, plane::Plane, transport::Transport, truck::Truck};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename = "Fleet")]
pub struct JsonFleet {
    pub transports: Vec<JsonTransport>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonTransport {
    Truck {
        id: String,
        max_capacity: u32,
        current_location: String,
        average_speed: Kmh,
        toll_count: u32,
    },
    Plane {
        id: String,
        max_capacity: u32,
        current_location: String,
        average_speed: Kmh,
        rest_hours: u32,
    },
}

impl JsonTransport {
    pub fn id(&self) -> &str {
        match self {
            JsonTransport::Truck { id, .. } | JsonTransport::Plane { id, .. } => id,
        }
    }

    pub fn build_transport(self) -> Result<Box<dyn Transport>, anyhow::Error> {
        ensure!(!self.id().is_empty(), "Transport id must not be empty");

        match self {
            JsonTransport::Truck {
                id,
                max_capacity,
                current_location,
                average_speed,
                toll_count,
            } => {
                if !average_speed.is_valid() {
                    bail!("Truck {id} has an invalid average speed: {average_speed}");
                }
                Ok(Box::new(Truck::new(
                    id,
                    max_capacity,
                    current_location,
                    average_speed,
                    toll_count,
                )))
            }
            JsonTransport::Plane {
                id,
                max_capacity,
                current_location,
                average_speed,
                rest_hours,
            } => {
                if !average_speed.is_valid() {
                    bail!("Plane {id} has an invalid average speed: {average_speed}");
                }
                Ok(Box::new(Plane::new(
                    id,
                    max_capacity,
                    current_location,
                    average_speed,
                    rest_hours,
                )))
            }
        }
    }
}

impl JsonFleet {
    #[instrument(skip_all, level = "debug")]
    pub fn build_fleet(self) -> Result<Vec<Box<dyn Transport>>, anyhow::Error> {
        {
            let mut ids = FxHashSet::default();
            for transport in &self.transports {
                if !ids.insert(transport.id()) {
                    bail!("Duplicate transport id {}", transport.id());
                }
            }
        }

        let fleet = self
            .transports
            .into_iter()
            .map(JsonTransport::build_transport)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Built fleet of {} transports", fleet.len());

        Ok(fleet)
    }
}

pub fn read_fleet<P: AsRef<Path>>(path: P) -> Result<Vec<Box<dyn Transport>>, anyhow::Error> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let fleet: JsonFleet = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid fleet in {}", path.display()))?;

    fleet.build_fleet()
}
