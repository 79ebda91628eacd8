mod common;

use common::{default_scenario, ProtoBuilder, BATTERY_MAH, HEADER_FACTOR};
use iotcompare::api;
use iotcompare::catalog::{self, Catalog, KnownProtocol};
use iotcompare::engine::EstimationResult;
use iotcompare::ranker::{evaluate_all, summarize};
use iotcompare::scenario::Settings;

fn names(results: &[EstimationResult]) -> Vec<&str> {
    results.iter().map(|r| r.protocol.as_str()).collect()
}

#[test]
fn test_default_ranking_order() {
    let results =
        evaluate_all(catalog::list(), &default_scenario(), BATTERY_MAH, HEADER_FACTOR).unwrap();

    assert_eq!(names(&results), ["NB-IoT", "LoRaWAN", "Zigbee", "WiFi"]);
    for pair in results.windows(2) {
        assert!(pair[0].consumo_mah_dia <= pair[1].consumo_mah_dia);
    }
}

#[test]
fn test_one_result_per_protocol() {
    let results =
        evaluate_all(catalog::list(), &default_scenario(), BATTERY_MAH, HEADER_FACTOR).unwrap();
    assert_eq!(results.len(), catalog::list().len());
}

#[test]
fn test_equal_consumption_keeps_catalog_order() {
    let protos = vec![
        ProtoBuilder::from(KnownProtocol::WiFi).name("Wifi-B").build(),
        ProtoBuilder::from(KnownProtocol::NbIot).build(),
        ProtoBuilder::from(KnownProtocol::WiFi).name("Wifi-A").build(),
    ];
    let results = evaluate_all(&protos, &default_scenario(), BATTERY_MAH, HEADER_FACTOR).unwrap();
    assert_eq!(names(&results), ["NB-IoT", "Wifi-B", "Wifi-A"]);
}

#[test]
fn test_default_summary() {
    let results =
        evaluate_all(catalog::list(), &default_scenario(), BATTERY_MAH, HEADER_FACTOR).unwrap();
    let s = summarize(&results).unwrap();

    assert_eq!(s.best_energy, "NB-IoT");
    assert_eq!(s.best_coverage, "LoRaWAN");
    assert_eq!(s.best_latency, "WiFi");
}

#[test]
fn test_summary_hand_fixture() {
    let row = |name: &str, consumo: f64, latencia: f64, cobertura: f64| EstimationResult {
        protocol: name.to_string(),
        consumo_mah_dia: consumo,
        latencia_ms: latencia,
        cobertura_m: cobertura,
        dias_bateria: 1000.0 / consumo,
        notas: String::new(),
    };
    let results = vec![
        row("alpha", 0.5, 900.0, 2_000.0),
        row("beta", 0.7, 15.0, 9_000.0),
        row("gamma", 0.9, 15.0, 9_000.0),
        row("delta", 4.0, 60.0, 50.0),
    ];
    let s = summarize(&results).unwrap();

    assert_eq!(s.best_energy, "alpha");
    // beta and gamma tie on both; the first row wins
    assert_eq!(s.best_coverage, "beta");
    assert_eq!(s.best_latency, "beta");
    assert_eq!(
        s.line(),
        "Summary · Lowest consumption: alpha · Best coverage: beta · Lowest latency: beta"
    );
}

#[test]
fn test_compare_service_bundles_results_and_summary() {
    let settings = Settings::new(BATTERY_MAH, HEADER_FACTOR).unwrap();
    let cmp = api::compare(&Catalog::default(), default_scenario(), settings).unwrap();

    assert_eq!(cmp.results.len(), 4);
    assert_eq!(cmp.results[0].protocol, "NB-IoT");
    assert_eq!(cmp.summary.best_coverage, "LoRaWAN");
}

#[test]
fn test_compare_includes_appended_protocols() {
    let extra = ProtoBuilder::from(KnownProtocol::Zigbee)
        .name("Sigfox")
        .bitrate(100.0)
        .currents(40.0, 10.0, 0.001)
        .range(40_000.0)
        .build();
    let catalog = Catalog::default().with_extra([extra]).unwrap();
    let settings = Settings::new(BATTERY_MAH, HEADER_FACTOR).unwrap();
    let cmp = api::compare(&catalog, default_scenario(), settings).unwrap();

    assert_eq!(cmp.results.len(), 5);
    assert_eq!(cmp.summary.best_coverage, "Sigfox");
}
