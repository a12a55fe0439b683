use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://ars_db.sqlite";
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => DEFAULT_DB_MAX_CONN,
        };

        Ok(Self {
            port,
            database_url,
            db_max_conn,
        })
    }
}
