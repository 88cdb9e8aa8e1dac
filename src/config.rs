use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub session_max_age_hours: i64,
    pub static_dir: String,
}

impl Config {
    pub fn init() -> Config {
        dotenv::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db".to_string());
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        // 60 days
        let session_max_age_hours = env::var("SESSION_MAX_AGE_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24 * 60);
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Config {
            database_url,
            database_max_connections,
            port,
            session_max_age_hours,
            static_dir,
        }
    }
}
