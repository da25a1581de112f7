use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};

use crate::api::models::Game;

/// The only result code that counts as a win; "checkmated", "agreed",
/// "timeout", "resigned" and the rest all count the game but not the win.
pub const WIN_RESULT: &str = "win";

#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub games: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub overuse: bool,
}

/// Reduce games into one row per UTC calendar day, ascending by date.
///
/// Games where the perspective player occupies neither side, or where the
/// end timestamp or result is missing, are skipped rather than failing the
/// whole aggregation. Rows only exist for days with at least one game, so
/// the win rate is always well-defined.
pub fn aggregate(games: &[Game], username: &str, threshold: u32) -> Vec<DailyStats> {
    let mut daily: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();

    for game in games {
        let Some(side) = game.side_of(username) else {
            continue;
        };
        let Some(result) = side.result.as_deref() else {
            continue;
        };
        let Some(end_time) = game.end_time else {
            continue;
        };
        // Group by the UTC date the game ended, not when it started
        let Some(ended) = DateTime::from_timestamp(end_time, 0) else {
            continue;
        };

        let entry = daily.entry(ended.date_naive()).or_insert((0, 0));
        entry.0 += 1;
        if result == WIN_RESULT {
            entry.1 += 1;
        }
    }

    daily
        .into_iter()
        .map(|(date, (games, wins))| DailyStats {
            date,
            games,
            wins,
            win_rate: round_one_decimal(wins as f64 / games as f64 * 100.0),
            overuse: games > threshold,
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::PlayerSide;

    const DAY: i64 = 86_400;
    // 2024-01-01 00:00:00 UTC
    const JAN_1: i64 = 1_704_067_200;

    fn game(end_time: i64, white: (&str, &str), black: (&str, &str)) -> Game {
        let side = |(username, result): (&str, &str)| {
            Some(PlayerSide {
                username: username.to_string(),
                result: Some(result.to_string()),
            })
        };
        Game {
            end_time: Some(end_time),
            time_class: "bullet".to_string(),
            white: side(white),
            black: side(black),
        }
    }

    fn day_of_games(day_offset: i64, wins: u32, losses: u32) -> Vec<Game> {
        let mut games = Vec::new();
        for i in 0..wins {
            games.push(game(
                JAN_1 + day_offset * DAY + i as i64 * 60,
                ("cand5d", "win"),
                ("rival", "checkmated"),
            ));
        }
        for i in 0..losses {
            games.push(game(
                JAN_1 + day_offset * DAY + 30_000 + i as i64 * 60,
                ("rival", "win"),
                ("cand5d", "checkmated"),
            ));
        }
        games
    }

    #[test]
    fn empty_input_yields_empty_rows() {
        assert!(aggregate(&[], "cand5d", 6).is_empty());
    }

    #[test]
    fn wins_never_exceed_games() {
        let mut games = day_of_games(0, 3, 4);
        games.extend(day_of_games(1, 6, 0));
        games.extend(day_of_games(2, 0, 2));

        for row in aggregate(&games, "cand5d", 6) {
            assert!(row.wins <= row.games);
            assert!(row.games >= 1);
        }
    }

    #[test]
    fn win_rate_rounds_to_one_decimal() {
        // 3/7 = 42.857... -> 42.9
        let games = day_of_games(0, 3, 4);
        let rows = aggregate(&games, "cand5d", 6);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].games, 7);
        assert_eq!(rows[0].wins, 3);
        assert_eq!(rows[0].win_rate, 42.9);
    }

    #[test]
    fn overuse_flag_is_strictly_greater_than_threshold() {
        let mut games = day_of_games(0, 6, 0);
        games.extend(day_of_games(1, 3, 4));

        let rows = aggregate(&games, "cand5d", 6);
        assert_eq!(rows[0].games, 6);
        assert!(!rows[0].overuse);
        assert_eq!(rows[1].games, 7);
        assert!(rows[1].overuse);
    }

    #[test]
    fn rows_are_sorted_ascending_by_date() {
        let mut games = day_of_games(2, 1, 0);
        games.extend(day_of_games(0, 1, 0));
        games.extend(day_of_games(1, 1, 0));

        let rows = aggregate(&games, "cand5d", 6);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn username_matching_is_case_insensitive() {
        let games = vec![game(JAN_1, ("Cand5D", "win"), ("rival", "checkmated"))];
        let rows = aggregate(&games, "cand5d", 6);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].wins, 1);
    }

    #[test]
    fn only_exact_win_result_counts_as_win() {
        let games = vec![
            game(JAN_1, ("cand5d", "win"), ("rival", "checkmated")),
            game(JAN_1 + 60, ("cand5d", "checkmated"), ("rival", "win")),
            game(JAN_1 + 120, ("cand5d", "agreed"), ("rival", "agreed")),
            game(JAN_1 + 180, ("cand5d", "timeout"), ("rival", "win")),
        ];

        let rows = aggregate(&games, "cand5d", 6);
        assert_eq!(rows[0].games, 4);
        assert_eq!(rows[0].wins, 1);
    }

    #[test]
    fn malformed_games_are_skipped_silently() {
        let mut games = vec![game(JAN_1, ("cand5d", "win"), ("rival", "checkmated"))];

        // Player on neither side
        games.push(game(JAN_1 + 60, ("someone", "win"), ("else", "checkmated")));

        // Missing end timestamp
        let mut no_end = game(JAN_1 + 120, ("cand5d", "win"), ("rival", "checkmated"));
        no_end.end_time = None;
        games.push(no_end);

        // Missing result code
        let mut no_result = game(JAN_1 + 180, ("cand5d", "win"), ("rival", "checkmated"));
        if let Some(ref mut white) = no_result.white {
            white.result = None;
        }
        games.push(no_result);

        let rows = aggregate(&games, "cand5d", 6);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].games, 1);
        assert_eq!(rows[0].wins, 1);
    }
}
