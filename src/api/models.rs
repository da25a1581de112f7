use serde::Deserialize;

// Monthly archive response:
// https://api.chess.com/pub/player/{username}/games/{year}/{month}
#[derive(Debug, Deserialize)]
pub struct MonthlyArchive {
    #[serde(default)]
    pub games: Vec<Game>,
}

// Fields the upstream sometimes omits are Options so one odd game record
// never fails the whole archive; the aggregator skips incomplete games.
#[derive(Debug, Deserialize, Clone)]
pub struct Game {
    pub end_time: Option<i64>,
    #[serde(default)]
    pub time_class: String,
    pub white: Option<PlayerSide>,
    pub black: Option<PlayerSide>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerSide {
    #[serde(default)]
    pub username: String,
    pub result: Option<String>,
}

impl Game {
    /// Which side the perspective player occupies, matched case-insensitively.
    pub fn side_of(&self, username: &str) -> Option<&PlayerSide> {
        let matches = |side: &Option<PlayerSide>| -> bool {
            side.as_ref()
                .map(|s| s.username.eq_ignore_ascii_case(username))
                .unwrap_or(false)
        };

        if matches(&self.white) {
            self.white.as_ref()
        } else if matches(&self.black) {
            self.black.as_ref()
        } else {
            None
        }
    }
}
