use anyhow::{Context, Result, ensure};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hrms.db?mode=rwc".to_string()),
            db_max_connections: parse_pool_size(env::var("DB_MAX_CONNECTIONS").ok())?,

            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "app.log".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_pool_size(raw: Option<String>) -> Result<u32> {
    let size: u32 = raw
        .as_deref()
        .unwrap_or("10")
        .parse()
        .context("DB_MAX_CONNECTIONS must be a positive integer")?;
    ensure!(size > 0, "DB_MAX_CONNECTIONS must be a positive integer");
    Ok(size)
}
