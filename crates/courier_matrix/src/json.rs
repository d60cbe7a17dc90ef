use std::{fs::File, io::BufReader, path::Path};

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{distance_table::DistanceTable, error::DistanceTableError, kilometers::Kilometers};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename = "DistanceTable")]
pub struct JsonDistanceTable {
    pub distances: Vec<JsonDistance>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename = "Distance")]
pub struct JsonDistance {
    pub from: String,
    pub to: String,
    pub km: Kilometers,
}

impl JsonDistanceTable {
    pub fn build_table(self) -> Result<DistanceTable, DistanceTableError> {
        let mut table = DistanceTable::new();
        for distance in self.distances {
            table.insert(distance.from, distance.to, distance.km)?;
        }
        Ok(table)
    }
}

impl From<&DistanceTable> for JsonDistanceTable {
    fn from(table: &DistanceTable) -> Self {
        JsonDistanceTable {
            distances: table
                .entries()
                .into_iter()
                .map(|(from, to, km)| JsonDistance {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    km,
                })
                .collect(),
        }
    }
}

#[instrument(skip_all, level = "debug")]
pub fn read_distance_table<P: AsRef<Path>>(path: P) -> Result<DistanceTable, DistanceTableError> {
    let file = File::open(path.as_ref())?;
    let json: JsonDistanceTable = serde_json::from_reader(BufReader::new(file))?;
    let table = json.build_table()?;

    debug!(
        "Loaded {} distances between {} locations from {}",
        table.len(),
        table.num_locations(),
        path.as_ref().display()
    );

    Ok(table)
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(JsonDistanceTable))
}
