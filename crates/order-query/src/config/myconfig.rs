use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = parse_run_migrations(
            &std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".to_string()),
        )?;

        let db_max_conn: u32 = std::env::var("DB_MAX_CONNECTION")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = std::env::var("DB_MIN_CONNECTION")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty());

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = std::env::var("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_max_conn,
            db_min_conn,
            otel_endpoint,
            is_dev,
            enable_file_log,
        })
    }
}

fn parse_run_migrations(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!(
            "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
            other
        )),
    }
}
