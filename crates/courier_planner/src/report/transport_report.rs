use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{problem::transport::TransportDetails, routing::route_result::RouteResult};

/// Plain-text report of a route driven by a transport.
///
/// Lines are separated by `\n` and the last line has no line break.
pub struct TransportReport<'a> {
    details: &'a TransportDetails,
    route: &'a RouteResult,
}

impl<'a> TransportReport<'a> {
    pub fn new(details: &'a TransportDetails, route: &'a RouteResult) -> Self {
        TransportReport { details, route }
    }
}

impl Display for TransportReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reporte de Transporte")?;
        writeln!(f, "----------------------")?;
        writeln!(f, "ID del Transporte: {}", self.details.id())?;
        writeln!(f, "Capacidad Máxima: {} kg", self.details.max_capacity())?;
        writeln!(f, "Ubicación Actual: {}", self.details.current_location())?;
        writeln!(f, "Ruta Calculada: {}", self.route.route().join(" -> "))?;
        write!(f, "Distancia Total: {} km", self.route.total_distance())
    }
}

/// Writes the report to `path`, replacing any existing file.
pub fn generate_report(
    details: &TransportDetails,
    route: &RouteResult,
    path: &Path,
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", TransportReport::new(details, route))?;
    writer.flush()?;

    info!("Report for {} written to {}", details.id(), path.display());

    Ok(())
}
