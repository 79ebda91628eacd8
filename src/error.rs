use thiserror::Error;

#[derive(Error, Debug)]
pub enum IotError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Scenario: {field} = {value} is outside [{min}, {max}]")]
    InvalidScenario {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid Settings: {field} = {value} is outside [{min}, {max}]")]
    InvalidSettings {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Protocol '{protocol}' has non-positive bitrate ({bitrate_bps} bps)")]
    DivisionByZeroConfig { protocol: String, bitrate_bps: f64 },

    #[error("Catalog Error: {0}")]
    InvalidCatalog(String),

    #[error("Malformed Results CSV: {0}")]
    MalformedCsv(String),
}

pub type IotResult<T> = Result<T, IotError>;
