use colored::*;
use tabled::{settings::Style, Table, Tabled};

use crate::analysis::daily_stats::DailyStats;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Games")]
    games: String,
    #[tabled(rename = "Wins")]
    wins: String,
    #[tabled(rename = "Win Rate")]
    win_rate: String,
    #[tabled(rename = "Flag")]
    flag: String,
}

pub fn display_daily_summary(rows: &[DailyStats], time_class: &str) {
    println!(
        "\n{}",
        format!("📊 DAILY {} SUMMARY", time_class.to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if rows.is_empty() {
        println!(
            "{}",
            format!("No {} games found in the last two months", time_class).yellow()
        );
        return;
    }

    let total_games: u32 = rows.iter().map(|r| r.games).sum();
    let total_wins: u32 = rows.iter().map(|r| r.wins).sum();
    let win_rate = (total_wins as f64 / total_games as f64) * 100.0;
    let overuse_days = rows.iter().filter(|r| r.overuse).count();

    println!(
        "{} {} games, {} wins ({:.1}% WR), {} overuse days\n",
        "📈 Overall:".bold(),
        total_games,
        total_wins.to_string().green(),
        win_rate,
        overuse_days.to_string().red()
    );

    // Most recent day first, same order as the report table
    let mut table_rows = vec![];
    for row in rows.iter().rev() {
        let flag = if row.overuse {
            "⚠️ Overuse".red().to_string()
        } else {
            "✅ OK".green().to_string()
        };

        table_rows.push(DailyRow {
            date: row.date.to_string(),
            games: row.games.to_string(),
            wins: row.wins.to_string(),
            win_rate: format!("{:.1}%", row.win_rate),
            flag,
        });
    }

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
