use std::env;

/// Runtime settings, read once at startup from the environment
/// (populated from .env by dotenv in main).
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "consultations".to_string()),
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
