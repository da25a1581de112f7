use serde_json::{json, Value};

use crate::analysis::daily_stats::DailyStats;

const OVERUSE_BAR_COLOR: &str = "red";
const NORMAL_BAR_COLOR: &str = "green";

/// Plotly figure spec for the combined games-per-day / win-rate chart.
///
/// Days are plotted ascending by date regardless of input order. The bar
/// series carries the game count on each bar and switches to the warning
/// color on overuse days; the win-rate line rides a second y-axis on the
/// right so the two scales stay independent.
pub fn build_figure(rows: &[DailyStats], time_class: &str) -> Value {
    if rows.is_empty() {
        return json!({
            "data": [],
            "layout": {
                "title": format!("No {} Games Found", title_case(time_class)),
                "height": 500,
            }
        });
    }

    let mut ordered: Vec<&DailyStats> = rows.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let dates: Vec<String> = ordered.iter().map(|r| r.date.to_string()).collect();
    let games: Vec<u32> = ordered.iter().map(|r| r.games).collect();
    let win_rates: Vec<f64> = ordered.iter().map(|r| r.win_rate).collect();
    let labels: Vec<String> = games.iter().map(|g| g.to_string()).collect();
    let colors: Vec<&str> = ordered
        .iter()
        .map(|r| {
            if r.overuse {
                OVERUSE_BAR_COLOR
            } else {
                NORMAL_BAR_COLOR
            }
        })
        .collect();

    json!({
        "data": [
            {
                "type": "bar",
                "x": dates,
                "y": games,
                "name": "Games per Day",
                "marker": { "color": colors },
                "text": labels,
                "textposition": "auto",
                "yaxis": "y",
            },
            {
                "type": "scatter",
                "x": dates,
                "y": win_rates,
                "name": "Win Rate (%)",
                "mode": "lines+markers",
                "line": { "color": "blue" },
                "marker": { "size": 10 },
                "yaxis": "y2",
            }
        ],
        "layout": {
            "title": format!("{} Games and Win Rate per Day", title_case(time_class)),
            "height": 500,
            "xaxis": { "title": "Date" },
            "yaxis": { "title": "Games", "side": "left" },
            "yaxis2": { "title": "Win Rate (%)", "side": "right", "overlaying": "y" },
            "legend": { "x": 0.1, "y": 1.1, "orientation": "h" },
        }
    })
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
