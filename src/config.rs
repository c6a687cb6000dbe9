use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub dataset_path: String,
    pub log_level: String,
    pub jwt_secret: String,
    pub admin_email: Option<String>,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("dataset_path", &self.dataset_path)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(5000),
            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/career_skill_dataset.csv".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()), // Use a secure secret in production
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
