use std::env;

use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// All day-bucketing happens in this single zone (IANA name).
    pub reference_timezone: Tz,

    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub suggestion_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            reference_timezone: env::var("REFERENCE_TIMEZONE")
                .unwrap_or_else(|_| "UTC".into())
                .parse()
                .expect("REFERENCE_TIMEZONE must be a valid IANA timezone"),

            // A missing key surfaces as ProviderError::Unauthenticated at
            // call time, not as a startup failure.
            openrouter_api_key: env::var("OPENROUTER_API_KEY").unwrap_or_else(|_| String::new()),
            openrouter_model: env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| "meta-llama/llama-4-maverick:free".into()),
            suggestion_timeout_secs: env::var("SUGGESTION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "12".into())
                .parse()
                .unwrap_or(12),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
