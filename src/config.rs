use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub mongo_uri: String,
    pub mongo_db_name: String,
    pub program_path: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let mongo_uri = env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let mongo_uri = if mongo_uri.trim().is_empty() {
            "mongodb://localhost:27017".to_string()
        } else {
            mongo_uri
        };

        let mongo_db_name = env::var("MONGO_DB_NAME")
            .unwrap_or_else(|_| "workout_tracker".to_string());
        let mongo_db_name = if mongo_db_name.trim().is_empty() {
            "workout_tracker".to_string()
        } else {
            mongo_db_name
        };

        let program_path = env::var("PROGRAM_PATH")
            .unwrap_or_else(|_| "program.yaml".to_string());
        let program_path = if program_path.trim().is_empty() {
            "program.yaml".to_string()
        } else {
            program_path
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            mongo_uri,
            mongo_db_name,
            program_path,
            http_port,
        })
    }
}
