// tests/integration/file_loading.rs

use std::io::Write;

use consul_sentinel::config::{parse_config_file, WatchMode};
use consul_sentinel::fs::RealFileSystem;
use consul_sentinel::fs::mock::MockFileSystem;
use consul_sentinel::handlers::{Alert, AlertHandler, CheckStatus, Delivery};
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"
consul_address = "10.1.2.3:8500"
service_watch  = "global"

service "api" {
  ignored_tags = ["canary"]
}

handlers {
  stdout { log_level = "warning" }
  pagerduty {
    service_key = "pd-key"
    max_retries = 4
  }
}
"#;

#[test]
fn real_and_mock_file_systems_agree() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let mock = MockFileSystem::new();
    mock.add_file("sentinel.hcl", SAMPLE);

    let from_disk = parse_config_file(&RealFileSystem, file.path()).unwrap();
    let from_mock = parse_config_file(&mock, "sentinel.hcl").unwrap();

    assert_eq!(from_disk, from_mock);
    assert_eq!(from_disk.config.consul_address, "10.1.2.3:8500");
    assert_eq!(from_disk.config.service_watch, WatchMode::Global);
    assert_eq!(from_disk.config.change_threshold_for("api"), 60);
}

#[test]
fn handlers_from_file_produce_deliveries() {
    let mock = MockFileSystem::new();
    mock.add_file("sentinel.hcl", SAMPLE);
    let loaded = parse_config_file(&mock, "sentinel.hcl").unwrap();

    let alert = Alert {
        node: "node-7".to_string(),
        service: Some("api".to_string()),
        check: "service:api".to_string(),
        status: CheckStatus::Critical,
        output: "connection refused".to_string(),
    };

    let deliveries: Vec<Delivery> = loaded
        .handlers
        .iter()
        .filter_map(|h| h.delivery(&alert))
        .collect();
    assert_eq!(deliveries.len(), 2);

    match &deliveries[1] {
        Delivery::PagerDuty { service_key, incident_key, max_retries, .. } => {
            assert_eq!(service_key.as_deref(), Some("pd-key"));
            assert_eq!(incident_key, "node-7/api/service:api");
            assert_eq!(*max_retries, 4);
        }
        other => panic!("unexpected delivery: {other:?}"),
    }

    assert!(matches!(loaded.handlers[0], AlertHandler::Stdout(_)));
}
