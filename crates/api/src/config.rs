use innsight_db::seed::DEFAULT_BOOKING_TARGET;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Database URL (default: `sqlite://innsight.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether to seed demo data on startup (default: `true`).
    pub seed_demo_data: bool,
    /// Number of demo bookings the seeder aims for (default: `500`).
    pub seed_booking_target: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                  |
    /// |-----------------------|--------------------------|
    /// | `HOST`                | `0.0.0.0`                |
    /// | `PORT`                | `8000`                   |
    /// | `DATABASE_URL`        | `sqlite://innsight.db`   |
    /// | `CORS_ORIGINS`        | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`| `30`                     |
    /// | `SEED_DEMO_DATA`      | `true`                   |
    /// | `SEED_BOOKING_TARGET` | `500`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://innsight.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_demo_data: bool = std::env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_DEMO_DATA must be true or false");

        let seed_booking_target: i64 = std::env::var("SEED_BOOKING_TARGET")
            .unwrap_or_else(|_| DEFAULT_BOOKING_TARGET.to_string())
            .parse()
            .expect("SEED_BOOKING_TARGET must be a valid i64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            seed_demo_data,
            seed_booking_target,
        }
    }
}
