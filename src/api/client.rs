use crate::config::Config;
use crate::display::output::display_warning;
use crate::error::AppError;

use super::models::{Game, MonthlyArchive};

pub struct ChessComClient {
    config: Config,
}

impl ChessComClient {
    pub fn new(config: Config) -> Self {
        ChessComClient { config }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        // chess.com rejects requests without an identifying User-Agent
        let response = ureq::get(url)
            .set("User-Agent", &self.config.user_agent)
            .call()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))
    }

    /// Fetch one calendar month of the player's games, filtered to the
    /// configured time-control class. One request per call, no retries.
    pub fn fetch_month(&self, year: i32, month: u32) -> Result<Vec<Game>, AppError> {
        let url = format!(
            "https://api.chess.com/pub/player/{}/games/{}/{:02}",
            self.config.username, year, month
        );

        let body = self.execute_request(&url)?;
        parse_month_body(&body, &self.config.time_class)
    }

    /// Best-effort variant: a failed month is logged with its year/month and
    /// yields no games, so one unavailable archive never aborts the run.
    pub fn fetch_month_or_empty(&self, year: i32, month: u32) -> Vec<Game> {
        recover_month(self.fetch_month(year, month), year, month)
    }
}

pub fn parse_month_body(body: &str, time_class: &str) -> Result<Vec<Game>, AppError> {
    let archive: MonthlyArchive =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;

    Ok(archive
        .games
        .into_iter()
        .filter(|g| g.time_class == time_class)
        .collect())
}

fn recover_month(result: Result<Vec<Game>, AppError>, year: i32, month: u32) -> Vec<Game> {
    match result {
        Ok(games) => games,
        Err(e) => {
            display_warning(&format!("Failed to load {}-{:02}: {}", year, month, e));
            Vec::new()
        }
    }
}
