//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold ENV_MUTEX to avoid
//! interference between tests.

use regionsnap::adapters::build_export_dependencies;
use regionsnap::adapters::cluster::NodeDirectory;
use regionsnap::adapters::security::SecurityService;
use regionsnap::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("REGIONSNAP_APPLICATION_LOG_LEVEL");
    std::env::remove_var("REGIONSNAP_CLUSTER_CONNECT_TIMEOUT_SECONDS");
    std::env::remove_var("REGIONSNAP_CLUSTER_AUTH_TOKEN");
    std::env::remove_var("REGIONSNAP_SECURITY_ENABLED");
    std::env::remove_var("REGIONSNAP_SECURITY_PRINCIPAL");
    std::env::remove_var("REGIONSNAP_SECURITY_READABLE_REGIONS");
    std::env::remove_var("REGIONSNAP_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("REGIONSNAP_LOGGING_LOCAL_PATH");
    std::env::remove_var("TEST_CLUSTER_TOKEN");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const COMPLETE_CONFIG: &str = r#"
[application]
log_level = "debug"

[cluster]
connect_timeout_seconds = 30

[[cluster.members]]
id = "m-1"
name = "server1"
endpoint = "http://10.0.0.1:7070"

[[cluster.members]]
id = "m-2"
name = "server2"
endpoint = "https://10.0.0.2:7443/"

[security]
enabled = true
principal = "exporter"
readable_regions = ["/orders", "customers"]

[logging]
local_enabled = false
local_path = "/tmp/regionsnap"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.cluster.connect_timeout_seconds, 30);
    assert!(config.cluster.auth_token.is_none());
    assert_eq!(config.cluster.members.len(), 2);
    assert_eq!(config.cluster.members[1].endpoint, "https://10.0.0.2:7443/");
    assert!(config.security.enabled);
    assert_eq!(config.security.principal, "exporter");
    assert_eq!(config.security.readable_regions, vec!["/orders", "customers"]);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.cluster.connect_timeout_seconds, 10);
    assert!(config.cluster.members.is_empty());
    assert!(!config.security.enabled);
    assert_eq!(config.security.principal, "anonymous");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_for_token() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_CLUSTER_TOKEN", "s3cr3t");

    let file = write_config(
        r#"
[cluster]
auth_token = "${TEST_CLUSTER_TOKEN}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    let token = config.cluster.auth_token.expect("token should be set");
    let token: &str = token.expose_secret().as_ref();
    assert_eq!(token, "s3cr3t");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[cluster]
auth_token = "${TEST_CLUSTER_TOKEN}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_CLUSTER_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("REGIONSNAP_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("REGIONSNAP_CLUSTER_CONNECT_TIMEOUT_SECONDS", "5");
    std::env::set_var("REGIONSNAP_SECURITY_PRINCIPAL", "override");
    std::env::set_var("REGIONSNAP_SECURITY_READABLE_REGIONS", "a, b,,c");

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.cluster.connect_timeout_seconds, 5);
    assert_eq!(config.security.principal, "override");
    assert_eq!(config.security.readable_regions, vec!["a", "b", "c"]);

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("REGIONSNAP_CLUSTER_CONNECT_TIMEOUT_SECONDS", "0");

    let file = write_config(COMPLETE_CONFIG);
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("connect_timeout_seconds"));

    cleanup_env_vars();
}

#[test]
fn test_duplicate_member_ids_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[[cluster.members]]
id = "m-1"
endpoint = "http://10.0.0.1:7070"

[[cluster.members]]
id = "m-1"
endpoint = "http://10.0.0.2:7070"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate cluster member id"));
}

#[test]
fn test_non_http_endpoint_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[[cluster.members]]
id = "m-1"
endpoint = "ftp://10.0.0.1"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/regionsnap.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[tokio::test]
async fn test_dependencies_built_from_config() {
    let config = {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_env_vars();
        let file = write_config(COMPLETE_CONFIG);
        load_config(file.path()).unwrap()
    };

    let deps = build_export_dependencies(&config).unwrap();

    let member = deps.directory.find_by_name_or_id("server2").await.unwrap();
    assert_eq!(member.id, "m-2");
    assert!(deps.directory.find_by_name_or_id("m-1").await.is_some());
    assert!(deps.directory.find_by_name_or_id("server3").await.is_none());

    let orders = regionsnap::domain::RegionName::new("orders").unwrap();
    let payments = regionsnap::domain::RegionName::new("/payments").unwrap();
    assert!(deps.security.authorize_region_read(&orders).await.is_ok());
    assert!(deps.security.authorize_region_read(&payments).await.is_err());
}
