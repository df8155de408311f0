// Unit tests for ClientConfig
// Defaults, lookup parsing, validation, .env loading

use crate::config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_ALLOW_INVALID_CERTS, ENV_API_KEY,
    ENV_BASE_URL, ENV_COMPANY, ENV_PASSWORD, ENV_TIMEOUT_SECS, ENV_USERNAME,
};
use crate::error::ConfigError;

use std::collections::HashMap;
use std::env;
use std::io::Write;
use std::time::Duration;

use serial_test::serial;
use tempfile::NamedTempFile;

fn lookup_from(
    vars: &[(&str, &str)],
) -> impl Fn(&str) -> Result<Option<String>, ConfigError> + use<> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| Ok(vars.get(name).cloned())
}

const ALL_VARS: [&str; 7] = [
    ENV_BASE_URL,
    ENV_API_KEY,
    ENV_USERNAME,
    ENV_PASSWORD,
    ENV_COMPANY,
    ENV_ALLOW_INVALID_CERTS,
    ENV_TIMEOUT_SECS,
];

fn clear_env() {
    for name in ALL_VARS {
        // SAFETY: every test touching the environment is #[serial].
        unsafe { env::remove_var(name) };
    }
}

#[test]
fn given_default_config_when_inspected_then_public_endpoint_and_thirty_seconds() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(!config.allow_invalid_certificates);
    assert!(config.api_key.is_none());
    assert!(config.validate().is_ok());
}

/// **VALUE**: Verifies every variable is read and parsed.
///
/// **WHY THIS MATTERS**: Deployments configure the client entirely through
/// the environment. A silently ignored variable means the wrong tenant.
///
/// **BUG THIS CATCHES**: Would catch a variable name typo or a parse that
/// drops the value.
#[test]
fn given_all_variables_when_loaded_then_every_field_set() {
    let config = ClientConfig::from_lookup(lookup_from(&[
        (ENV_BASE_URL, "https://sandbox.example.com/ta/rest"),
        (ENV_API_KEY, "key-1"),
        (ENV_USERNAME, "jdoe"),
        (ENV_PASSWORD, "s3cret"),
        (ENV_COMPANY, "ACME"),
        (ENV_ALLOW_INVALID_CERTS, "yes"),
        (ENV_TIMEOUT_SECS, "5"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "https://sandbox.example.com/ta/rest");
    assert_eq!(config.api_key.as_deref(), Some("key-1"));
    assert_eq!(config.username, "jdoe");
    assert_eq!(config.password, "s3cret");
    assert_eq!(config.company, "ACME");
    assert!(config.allow_invalid_certificates);
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
fn given_malformed_boolean_when_loaded_then_env_var_error_names_variable() {
    let result = ClientConfig::from_lookup(lookup_from(&[(ENV_ALLOW_INVALID_CERTS, "maybe")]));

    match result {
        Err(ConfigError::EnvVarError { variable, .. }) => {
            assert_eq!(variable, ENV_ALLOW_INVALID_CERTS)
        }
        other => panic!("expected EnvVarError, got {other:?}"),
    }
}

#[test]
fn given_zero_timeout_when_loaded_then_validation_error() {
    let result = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")]));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_non_http_scheme_when_validated_then_rejected() {
    let config = ClientConfig::default().with_base_url("ftp://files.example.com/");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_config_when_debug_formatted_then_secrets_redacted() {
    let config = ClientConfig::default()
        .with_api_key("key-1")
        .with_credentials("jdoe", "s3cret", "ACME");

    let rendered = format!("{config:?}");

    assert!(rendered.contains("jdoe"));
    assert!(!rendered.contains("key-1"));
    assert!(!rendered.contains("s3cret"));
}

#[test]
#[serial]
fn given_process_environment_when_loaded_then_values_applied() {
    clear_env();
    // SAFETY: serialized with the other environment tests.
    unsafe {
        env::set_var(ENV_COMPANY, "ACME");
        env::set_var(ENV_TIMEOUT_SECS, "12");
    }

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.company, "ACME");
    assert_eq!(config.timeout, Duration::from_secs(12));
    clear_env();
}

/// **VALUE**: Verifies an explicit `.env` file feeds the config.
///
/// **WHY THIS MATTERS**: Local development keeps credentials in a file that
/// never reaches version control.
///
/// **BUG THIS CATCHES**: Would catch the file being loaded after the lookup,
/// or a missing file being ignored silently.
#[test]
#[serial]
fn given_env_file_when_loaded_then_values_applied() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{ENV_USERNAME}=file-user").unwrap();
    writeln!(file, "{ENV_API_KEY}=file-key").unwrap();

    let config = ClientConfig::from_env_file(file.path()).unwrap();

    assert_eq!(config.username, "file-user");
    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    clear_env();
}

#[test]
#[serial]
fn given_missing_env_file_when_loaded_then_env_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.env");

    let result = ClientConfig::from_env_file(&missing);

    assert!(matches!(result, Err(ConfigError::EnvFileError { .. })));
}
