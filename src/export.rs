use crate::engine::EstimationResult;
use crate::error::{IotError, IotResult};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::info;

pub const CSV_FILE_NAME: &str = "resultados_protocolos.csv";
pub const CSV_MIME: &str = "text/csv";

/// Written in place of `f64::INFINITY`. `f64::from_str` reads it back.
pub const INFINITY_TOKEN: &str = "inf";

pub const HEADER: [&str; 6] = [
    "protocol",
    "consumo_mAh_dia",
    "latencia_ms",
    "cobertura_m",
    "dias_bateria",
    "notas",
];

/// Formats a metric with the shortest representation that parses back to
/// the same value.
pub fn format_metric(value: f64) -> String {
    if value == f64::INFINITY {
        INFINITY_TOKEN.to_string()
    } else {
        value.to_string()
    }
}

fn write_rows<W: Write>(writer: W, results: &[EstimationResult]) -> IotResult<W> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for r in results {
        wtr.write_record([
            r.protocol.clone(),
            format_metric(r.consumo_mah_dia),
            format_metric(r.latencia_ms),
            format_metric(r.cobertura_m),
            format_metric(r.dias_bateria),
            r.notas.clone(),
        ])?;
    }
    wtr.into_inner().map_err(|e| IotError::Io(e.into_error()))
}

/// Renders results as CSV, one row per result in the order given.
pub fn to_csv(results: &[EstimationResult]) -> IotResult<String> {
    let bytes = write_rows(Vec::new(), results)?;
    String::from_utf8(bytes)
        .map_err(|e| IotError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn write_csv<P: AsRef<Path>>(path: P, results: &[EstimationResult]) -> IotResult<()> {
    let file = File::create(path.as_ref())?;
    let mut file = write_rows(file, results)?;
    file.flush()?;
    info!(
        "📤 Exported {} row(s) to {}",
        results.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Parses a table produced by [`to_csv`].
pub fn from_csv<R: Read>(reader: R) -> IotResult<Vec<EstimationResult>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().map(str::trim).ne(HEADER.iter().copied()) {
        return Err(IotError::MalformedCsv(format!(
            "unexpected header row: {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut results = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let rec = record?;
        let row = idx + 1;
        let metric = |col: usize| -> IotResult<f64> {
            rec[col].trim().parse().map_err(|_| {
                IotError::MalformedCsv(format!(
                    "row {}: column '{}' is not a number: '{}'",
                    row, HEADER[col], &rec[col]
                ))
            })
        };

        results.push(EstimationResult {
            protocol: rec[0].to_string(),
            consumo_mah_dia: metric(1)?,
            latencia_ms: metric(2)?,
            cobertura_m: metric(3)?,
            dias_bateria: metric(4)?,
            notas: rec[5].to_string(),
        });
    }
    Ok(results)
}
