use crate::error::AppError;
use std::env;

pub const DEFAULT_TIME_CLASS: &str = "bullet";
pub const DEFAULT_OVERUSE_THRESHOLD: u32 = 6;
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";
pub const USER_AGENT: &str = "chess_dash/0.1.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub time_class: String,
    pub overuse_threshold: u32,
    pub user_agent: String,
    pub output_path: String,
}

impl Config {
    /// Defaults, optionally overridden by a `.env` file or the environment.
    /// The username is lowercased here once so every later comparison and
    /// the archive URL agree on the normalized form.
    pub fn from_env(username: &str) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let time_class =
            env::var("CHESS_TIME_CLASS").unwrap_or_else(|_| DEFAULT_TIME_CLASS.to_string());

        let overuse_threshold = match env::var("CHESS_OVERUSE_THRESHOLD") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "CHESS_OVERUSE_THRESHOLD must be a whole number, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_OVERUSE_THRESHOLD,
        };

        let output_path =
            env::var("CHESS_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        Ok(Config {
            username: username.to_lowercase(),
            time_class,
            overuse_threshold,
            user_agent: USER_AGENT.to_string(),
            output_path,
        })
    }
}
