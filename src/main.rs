mod analysis;
mod api;
mod config;
mod display;
mod error;
mod report;

use std::path::Path;

use analysis::daily_stats;
use analysis::months::month_window;
use api::client::ChessComClient;
use chrono::Utc;
use clap::Parser;
use config::Config;
use display::output::{display_daily_summary, display_error, display_info, display_success};
use error::AppError;
use indicatif::ProgressBar;

#[derive(Parser, Debug)]
#[command(name = "Chess Dash")]
#[command(about = "Build a daily games/win-rate dashboard from chess.com archives", long_about = None)]
struct Args {
    /// chess.com username (case-insensitive)
    username: String,

    /// Time-control class to include (bullet, blitz, rapid, daily)
    #[arg(short, long)]
    time_class: Option<String>,

    /// Daily game count above which a day is flagged as overuse
    #[arg(long)]
    threshold: Option<u32>,

    /// Output file for the HTML report
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration
    let mut config = Config::from_env(&args.username)?;
    if let Some(time_class) = args.time_class {
        config.time_class = time_class;
    }
    if let Some(threshold) = args.threshold {
        config.overuse_threshold = threshold;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }

    let window = month_window(Utc::now().date_naive());
    display_info(&format!(
        "Fetching {} games for {} ({}-{:02} and {}-{:02})",
        config.time_class,
        config.username,
        window.previous.0,
        window.previous.1,
        window.current.0,
        window.current.1
    ));

    let client = ChessComClient::new(config.clone());

    // Previous month first so the combined list reads oldest to newest.
    // A failed month logs a warning and contributes no games.
    let pb = ProgressBar::new(2);
    pb.set_message("Fetching monthly archives");
    let mut games = client.fetch_month_or_empty(window.previous.0, window.previous.1);
    pb.inc(1);
    games.extend(client.fetch_month_or_empty(window.current.0, window.current.1));
    pb.inc(1);
    pb.finish_with_message("✓ Archives fetched");

    display_success(&format!(
        "Fetched {} {} games",
        games.len(),
        config.time_class
    ));

    let rows = daily_stats::aggregate(&games, &config.username, config.overuse_threshold);

    display_daily_summary(&rows, &config.time_class);

    let figure = report::chart::build_figure(&rows, &config.time_class);
    let html = report::html::render_document(&rows, &figure, &config.time_class);
    report::html::write_report(Path::new(&config.output_path), &html)?;

    display_success(&format!("Generated {}", config.output_path));

    Ok(())
}
