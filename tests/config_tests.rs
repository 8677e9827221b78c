use gym_log_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("MONGO_URI", "mongodb://mongo.example:27017");
    env::set_var("MONGO_DB_NAME", "gym_test");
    env::set_var("PROGRAM_PATH", "custom_program.yaml");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.mongo_uri, "mongodb://mongo.example:27017");
    assert_eq!(config.mongo_db_name, "gym_test");
    assert_eq!(config.program_path, "custom_program.yaml");
    assert_eq!(config.http_port, 8080);

    // Clean up
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("MONGO_URI");
    env::remove_var("MONGO_DB_NAME");
    env::remove_var("PROGRAM_PATH");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::remove_var("MONGO_URI");
    env::remove_var("MONGO_DB_NAME");
    env::remove_var("PROGRAM_PATH");
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    assert_eq!(config.mongo_db_name, "workout_tracker");
    assert_eq!(config.program_path, "program.yaml");
    assert_eq!(config.http_port, 3000);

    // Clean up
    env::remove_var("TELEGRAM_BOT_TOKEN");
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("TELEGRAM_BOT_TOKEN");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_empty_token_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
}

#[test]
fn test_config_empty_optional_vars_fall_back_to_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("MONGO_URI", "");
    env::set_var("MONGO_DB_NAME", "");
    env::set_var("PROGRAM_PATH", "");
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    assert_eq!(config.mongo_db_name, "workout_tracker");
    assert_eq!(config.program_path, "program.yaml");

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("MONGO_URI");
    env::remove_var("MONGO_DB_NAME");
    env::remove_var("PROGRAM_PATH");
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TELEGRAM_BOT_TOKEN", "token");
    env::set_var("HTTP_PORT", "not_a_port");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("HTTP_PORT");
}
