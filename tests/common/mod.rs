#![allow(dead_code)]

use iotcompare::catalog::{KnownProtocol, ProtocolParams};
use iotcompare::scenario::Scenario;
use std::borrow::Cow;

pub const BATTERY_MAH: f64 = 2400.0;
pub const HEADER_FACTOR: f64 = 1.0;

/// 100 sensors, 24 msg/day, 50 B payload, 10% downlink.
pub fn default_scenario() -> Scenario {
    Scenario::build(100, 24, 50, 0.1).unwrap()
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    let tol = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

/// Builder for synthetic protocol records, starting from a copy of a
/// built-in one.
pub struct ProtoBuilder {
    params: ProtocolParams,
}

impl ProtoBuilder {
    pub fn from(known: KnownProtocol) -> Self {
        Self {
            params: known.params().clone(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.params.name = Cow::Owned(name.to_string());
        self
    }

    pub fn bitrate(mut self, bps: f64) -> Self {
        self.params.bitrate_bps = bps;
        self
    }

    pub fn currents(mut self, tx: f64, rx: f64, idle: f64) -> Self {
        self.params.tx_current_ma = tx;
        self.params.rx_current_ma = rx;
        self.params.idle_current_ma = idle;
        self
    }

    pub fn duty_cycle(mut self, limit: f64) -> Self {
        self.params.duty_cycle_limit = limit;
        self
    }

    pub fn range(mut self, m: f64) -> Self {
        self.params.range_m = m;
        self
    }

    pub fn build(self) -> ProtocolParams {
        self.params
    }
}
