use crate::error::{IotError, IotResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

/// Radio parameters of one protocol. Built-in records live in a static
/// table; external records are deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolParams {
    pub name: Cow<'static, str>,
    pub bitrate_bps: f64,
    #[serde(rename = "tx_current_mA")]
    pub tx_current_ma: f64,
    #[serde(rename = "rx_current_mA")]
    pub rx_current_ma: f64,
    #[serde(rename = "idle_current_mA")]
    pub idle_current_ma: f64,
    pub range_m: f64,
    pub overhead_bytes: u32,
    pub base_latency_ms: f64,
    pub duty_cycle_limit: f64,
    #[serde(default)]
    pub notes: Cow<'static, str>,
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum KnownProtocol {
    #[strum(to_string = "WiFi", serialize = "wi-fi")]
    WiFi,
    #[strum(to_string = "Zigbee")]
    Zigbee,
    #[strum(to_string = "LoRaWAN", serialize = "lora")]
    LoRaWan,
    #[strum(to_string = "NB-IoT", serialize = "nbiot")]
    NbIot,
}

impl KnownProtocol {
    pub fn params(&self) -> &'static ProtocolParams {
        &BUILTIN[*self as usize]
    }
}

// Order matches `KnownProtocol` discriminants.
static BUILTIN: [ProtocolParams; 4] = [
    ProtocolParams {
        name: Cow::Borrowed("WiFi"),
        bitrate_bps: 10e6,
        tx_current_ma: 180.0,
        rx_current_ma: 50.0,
        idle_current_ma: 5.0,
        range_m: 30.0,
        overhead_bytes: 80,
        base_latency_ms: 50.0,
        duty_cycle_limit: 1.0,
        notes: Cow::Borrowed("alto throughput"),
    },
    ProtocolParams {
        name: Cow::Borrowed("Zigbee"),
        bitrate_bps: 250e3,
        tx_current_ma: 35.0,
        rx_current_ma: 19.0,
        idle_current_ma: 0.3,
        range_m: 100.0,
        overhead_bytes: 25,
        base_latency_ms: 100.0,
        duty_cycle_limit: 1.0,
        notes: Cow::Borrowed("malla, bajo consumo"),
    },
    ProtocolParams {
        name: Cow::Borrowed("LoRaWAN"),
        bitrate_bps: 5e3,
        tx_current_ma: 45.0,
        rx_current_ma: 12.0,
        idle_current_ma: 0.01,
        range_m: 15000.0,
        overhead_bytes: 20,
        base_latency_ms: 800.0,
        duty_cycle_limit: 0.01,
        notes: Cow::Borrowed("largo alcance, bajo bitrate"),
    },
    ProtocolParams {
        name: Cow::Borrowed("NB-IoT"),
        bitrate_bps: 26e3,
        tx_current_ma: 220.0,
        rx_current_ma: 30.0,
        idle_current_ma: 0.05,
        range_m: 10000.0,
        overhead_bytes: 30,
        base_latency_ms: 200.0,
        duty_cycle_limit: 1.0,
        notes: Cow::Borrowed("cobertura celular"),
    },
];

/// The built-in protocols, in catalog order.
pub fn list() -> &'static [ProtocolParams] {
    &BUILTIN
}

impl ProtocolParams {
    /// Checks the record invariants. A non-positive bitrate is reported as
    /// `DivisionByZeroConfig` since the engine divides by it.
    pub fn validate(&self) -> IotResult<()> {
        if self.name.trim().is_empty() {
            return Err(IotError::InvalidCatalog(
                "protocol name must not be empty".to_string(),
            ));
        }
        if self.name.trim() != self.name {
            return Err(IotError::InvalidCatalog(format!(
                "protocol name '{}' has leading or trailing whitespace",
                self.name
            )));
        }
        if !(self.bitrate_bps.is_finite() && self.bitrate_bps > 0.0) {
            return Err(IotError::DivisionByZeroConfig {
                protocol: self.name.to_string(),
                bitrate_bps: self.bitrate_bps,
            });
        }

        let currents = [
            ("tx_current_mA", self.tx_current_ma),
            ("rx_current_mA", self.rx_current_ma),
            ("idle_current_mA", self.idle_current_ma),
            ("base_latency_ms", self.base_latency_ms),
        ];
        for (field, value) in currents {
            if !(value.is_finite() && value >= 0.0) {
                return Err(IotError::InvalidCatalog(format!(
                    "'{}': {} must be a non-negative number, got {}",
                    self.name, field, value
                )));
            }
        }

        if !(self.range_m.is_finite() && self.range_m > 0.0) {
            return Err(IotError::InvalidCatalog(format!(
                "'{}': range_m must be positive, got {}",
                self.name, self.range_m
            )));
        }
        if !(self.duty_cycle_limit > 0.0 && self.duty_cycle_limit <= 1.0) {
            return Err(IotError::InvalidCatalog(format!(
                "'{}': duty_cycle_limit must be in (0, 1], got {}",
                self.name, self.duty_cycle_limit
            )));
        }
        Ok(())
    }
}

/// Ordered, append-only protocol list. Starts from the built-in table.
#[derive(Debug, Clone)]
pub struct Catalog {
    protocols: Vec<ProtocolParams>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            protocols: list().to_vec(),
        }
    }
}

impl Catalog {
    /// Appends validated records after the existing ones. Names must stay
    /// unique (compared case-insensitively).
    pub fn with_extra<I>(mut self, extra: I) -> IotResult<Self>
    where
        I: IntoIterator<Item = ProtocolParams>,
    {
        for proto in extra {
            proto.validate()?;
            if self.find(&proto.name).is_some() {
                return Err(IotError::InvalidCatalog(format!(
                    "duplicate protocol name '{}'",
                    proto.name
                )));
            }
            self.protocols.push(proto);
        }
        Ok(self)
    }

    /// Reads a JSON array of protocol records.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IotResult<Vec<ProtocolParams>> {
        let content = fs::read_to_string(path.as_ref())?;
        let records: Vec<ProtocolParams> = serde_json::from_str(&content)?;
        info!(
            "📂 Loaded {} protocol record(s) from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records)
    }

    pub fn extend_from_file<P: AsRef<Path>>(self, path: P) -> IotResult<Self> {
        let records = Self::load_from_file(path)?;
        self.with_extra(records)
    }

    pub fn protocols(&self) -> &[ProtocolParams] {
        &self.protocols
    }

    /// Looks a protocol up by name, case-insensitively. Built-in aliases
    /// such as `nbiot` or `lora` resolve to their protocol.
    pub fn find(&self, name: &str) -> Option<&ProtocolParams> {
        let name = name.trim();
        let wanted = match name.parse::<KnownProtocol>() {
            Ok(known) => Cow::Owned(known.to_string()),
            Err(_) => Cow::Borrowed(name),
        };
        self.protocols
            .iter()
            .find(|p| p.name.trim().eq_ignore_ascii_case(&wanted))
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
