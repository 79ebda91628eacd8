use iotcompare::export::{from_csv, CSV_FILE_NAME};
use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::process::{Command, Output};

fn iotcompare(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iotcompare"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Protocol names in the order their rows appear in the results table.
fn table_order(stdout: &str) -> Vec<String> {
    let known = ["WiFi", "Zigbee", "LoRaWAN", "NB-IoT", "Sigfox"];
    stdout
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            if parts.len() > 2 {
                let name = parts[1].trim();
                known.contains(&name).then(|| name.to_string())
            } else {
                None
            }
        })
        .collect()
}

#[test]
fn test_cli_compare_defaults() {
    let out = iotcompare(&["compare", "--no-charts"]);
    assert!(out.status.success());
    let text = stdout(&out);

    assert_eq!(table_order(&text), ["NB-IoT", "LoRaWAN", "Zigbee", "WiFi"]);

    let re = Regex::new(
        r"Lowest consumption: (\S+) · Best coverage: (\S+) · Lowest latency: (\S+)",
    )
    .unwrap();
    let caps = re.captures(&text).expect("summary line missing");
    assert_eq!(&caps[1], "NB-IoT");
    assert_eq!(&caps[2], "LoRaWAN");
    assert_eq!(&caps[3], "WiFi");
}

#[test]
fn test_cli_compare_prints_four_charts() {
    let out = iotcompare(&["compare"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for title in ["mAh/day", "ms, lower", "m, higher", "days, higher"] {
        assert!(text.contains(title), "chart '{}' missing", title);
    }
}

#[test]
fn test_cli_export_writes_csv() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(CSV_FILE_NAME);

    let out = iotcompare(&[
        "compare",
        "--no-charts",
        "--msgs-per-day",
        "96",
        "--export",
        path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let results = from_csv(File::open(&path).unwrap()).unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].protocol, "NB-IoT");
}

#[test]
fn test_cli_rejects_invalid_scenario() {
    let out = iotcompare(&["compare", "--rx-ratio", "1.5"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Invalid Scenario"), "stderr: {}", err);
}

#[test]
fn test_cli_explain_wifi() {
    let out = iotcompare(&["explain", "--protocol", "wifi"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("bits_total"));
    assert!(text.contains("1040"));
}

#[test]
fn test_cli_explain_unknown_protocol_fails() {
    let out = iotcompare(&["explain", "--protocol", "bluetooth"]);
    assert!(!out.status.success());
}

#[test]
fn test_cli_json_output() {
    let out = iotcompare(&["compare", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["results"][0]["protocol"], "NB-IoT");
    assert_eq!(v["summary"]["best_latency"], "WiFi");
    assert!(v["results"][0]["consumo_mAh_dia"].is_number());
}

#[test]
fn test_cli_external_catalog() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("extra.json");
    let mut file = File::create(&path).unwrap();
    writeln!(
        file,
        r#"[{{"name": "Sigfox", "bitrate_bps": 100, "tx_current_mA": 40,
            "rx_current_mA": 10, "idle_current_mA": 0.001, "range_m": 40000,
            "overhead_bytes": 14, "base_latency_ms": 2000, "duty_cycle_limit": 1.0,
            "notes": "ultra narrow band"}}]"#
    )
    .unwrap();
    drop(file);

    let out = iotcompare(&["compare", "--no-charts", "--catalog", path.to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(table_order(&text).contains(&"Sigfox".to_string()));
    assert!(text.contains("Best coverage: Sigfox"));

    let out = iotcompare(&["catalog", "--catalog", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("ultra narrow band"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_explain_accepts_alias() {
    let out = iotcompare(&["explain", "--protocol", "nbiot"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("ESTIMATE BREAKDOWN: NB-IoT"));
}

#[test]
fn test_cli_catalog_lists_builtins() {
    let out = iotcompare(&["catalog"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for name in ["WiFi", "Zigbee", "LoRaWAN", "NB-IoT"] {
        assert!(text.contains(name), "{} missing from catalog", name);
    }
}
