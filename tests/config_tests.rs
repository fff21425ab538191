use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use gradewatch::config::{
    Config, Credentials, DEFAULT_ENDPOINT, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR,
    TELEGRAM_TOKEN_VAR,
};
use gradewatch::error::{ConfigError, Error};

/// Mutex to serialize tests that modify environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("gradewatch-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn clear_credential_vars() {
    std::env::remove_var(PRACTICUM_TOKEN_VAR);
    std::env::remove_var(TELEGRAM_TOKEN_VAR);
    std::env::remove_var(TELEGRAM_CHAT_ID_VAR);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load("does-not-exist.toml").unwrap();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.poll_period_secs, 600);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn config_file_overrides_defaults() {
    let toml = r#"
endpoint = "https://example.test/api/statuses/"
poll_period_secs = 30

[http]
timeout_ms = 2000
connect_timeout_ms = 1000

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.endpoint, "https://example.test/api/statuses/");
    assert_eq!(config.poll_period_secs, 30);
    assert_eq!(config.http.timeout_ms, 2000);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_empty_endpoint() {
    let path = write_temp_config("endpoint = \"\"\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "endpoint",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_poll_period() {
    let path = write_temp_config("poll_period_secs = 0\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "poll_period_secs",
            ..
        }))
    ));
}

#[test]
fn credentials_report_all_missing_variables() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_credential_vars();

    match Credentials::from_env() {
        Err(Error::Config(ConfigError::MissingEnv { names })) => {
            assert_eq!(
                names,
                vec![PRACTICUM_TOKEN_VAR, TELEGRAM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR]
            );
        }
        other => panic!("expected MissingEnv, got {other:?}"),
    }
}

#[test]
fn credentials_report_a_single_missing_variable() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_credential_vars();
    std::env::set_var(PRACTICUM_TOKEN_VAR, "practicum-token");
    std::env::set_var(TELEGRAM_CHAT_ID_VAR, "12345");

    match Credentials::from_env() {
        Err(Error::Config(ConfigError::MissingEnv { names })) => {
            assert_eq!(names, vec![TELEGRAM_TOKEN_VAR]);
        }
        other => panic!("expected MissingEnv, got {other:?}"),
    }

    clear_credential_vars();
}

#[test]
fn empty_variable_counts_as_missing() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_credential_vars();
    std::env::set_var(PRACTICUM_TOKEN_VAR, "");
    std::env::set_var(TELEGRAM_TOKEN_VAR, "telegram-token");
    std::env::set_var(TELEGRAM_CHAT_ID_VAR, "12345");

    match Credentials::from_env() {
        Err(Error::Config(ConfigError::MissingEnv { names })) => {
            assert_eq!(names, vec![PRACTICUM_TOKEN_VAR]);
        }
        other => panic!("expected MissingEnv, got {other:?}"),
    }

    clear_credential_vars();
}

#[test]
fn non_numeric_chat_id_is_fatal() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_credential_vars();
    std::env::set_var(PRACTICUM_TOKEN_VAR, "practicum-token");
    std::env::set_var(TELEGRAM_TOKEN_VAR, "telegram-token");
    std::env::set_var(TELEGRAM_CHAT_ID_VAR, "not-a-number");

    assert!(matches!(
        Credentials::from_env(),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "TELEGRAM_CHAT_ID",
            ..
        }))
    ));

    clear_credential_vars();
}

#[test]
fn valid_credentials_parse() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_credential_vars();
    std::env::set_var(PRACTICUM_TOKEN_VAR, "practicum-token");
    std::env::set_var(TELEGRAM_TOKEN_VAR, "telegram-token");
    std::env::set_var(TELEGRAM_CHAT_ID_VAR, "-100123456");

    let credentials = Credentials::from_env().unwrap();
    assert_eq!(credentials.practicum_token, "practicum-token");
    assert_eq!(credentials.telegram_token, "telegram-token");
    assert_eq!(credentials.chat_id, -100_123_456);

    clear_credential_vars();
}
