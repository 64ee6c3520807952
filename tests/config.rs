use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use whisper_bench::config::{DEFAULT_BINARY, MODEL_DIR_VARS};
use whisper_bench::{EngineConfig, EngineError};

// Env mutation is process-global, so every env test takes this lock
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_model_vars() {
    for var in MODEL_DIR_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_first_set_variable_wins() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_model_vars();

    env::set_var("MODEL_DIR", "/from/model-dir");
    env::set_var("MODELPATH", "/from/modelpath");
    let config = EngineConfig::from_env().expect("resolve config");
    assert_eq!(config.model_dir, PathBuf::from("/from/modelpath"));

    env::set_var("MODEL_PATH", "/from/model-path");
    let config = EngineConfig::from_env().expect("resolve config");
    assert_eq!(config.model_dir, PathBuf::from("/from/model-path"));

    clear_model_vars();
}

#[test]
fn test_empty_values_are_skipped() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_model_vars();

    env::set_var("MODEL_PATH", "");
    env::set_var("MODELDIR", "/fallback");
    let config = EngineConfig::from_env().expect("resolve config");
    assert_eq!(config.model_dir, PathBuf::from("/fallback"));

    clear_model_vars();
}

#[test]
fn test_unset_environment_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_model_vars();

    let err = EngineConfig::from_env().unwrap_err();
    assert!(matches!(err, EngineError::ModelDirNotSet));

    let message = err.to_string();
    for var in MODEL_DIR_VARS {
        assert!(message.contains(var), "error should name {}", var);
    }
}

#[test]
fn test_default_binary_and_override() {
    let config = EngineConfig::new("/models");
    assert_eq!(config.model_dir, PathBuf::from("/models"));
    assert_eq!(config.binary, PathBuf::from(DEFAULT_BINARY));

    let config = EngineConfig::new("/models").with_binary("/opt/whisper/whisper-cli");
    assert_eq!(config.binary, PathBuf::from("/opt/whisper/whisper-cli"));
}
