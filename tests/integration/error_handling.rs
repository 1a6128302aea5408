// tests/integration/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use consul_sentinel::config::parse_config_file;
use consul_sentinel::errors::ConfigError;
use consul_sentinel::fs::RealFileSystem;

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.hcl");

    let result = parse_config_file(&RealFileSystem, &path);

    match result {
        Err(ConfigError::Io { path: got, source }) => {
            assert_eq!(got, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected Io error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_syntax_error_returns_decode_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
consul_address = "localhost:8500"
service "api" {{
  change_threshold = 
"#
    )
    .unwrap();

    let err = parse_config_file(&RealFileSystem, file.path()).unwrap_err();
    assert!(err.is_decode(), "expected decode error, got: {err:?}");
}

#[test]
fn test_bad_service_watch_returns_validation_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
service_watch = "GLOBAL"
"#
    )
    .unwrap();

    let result = parse_config_file(&RealFileSystem, file.path());

    match result {
        Err(ConfigError::Validation { field, value, .. }) => {
            assert_eq!(field, "service_watch");
            assert_eq!(value, "GLOBAL");
        }
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
