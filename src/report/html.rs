use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::analysis::daily_stats::DailyStats;
use crate::error::AppError;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// The full static report: Plotly chart on top, daily table below, one
/// self-contained document. Pure function of the rows so it can be tested
/// without touching a browser or the network.
pub fn render_document(rows: &[DailyStats], figure: &Value, time_class: &str) -> String {
    let table_html = render_table(rows);
    let heading = heading(time_class);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{heading}</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 1200px; margin: auto; text-align: center; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: center; }}
        th {{ background-color: #f2f2f2; }}
        tr:nth-child(even) {{ background-color: #f9f9f9; }}
        tr:hover {{ background-color: #f5f5f5; }}
    </style>
</head>
<body>
    <h1>{heading} &ndash; Last 2 Months</h1>
    <div id="chart"></div>
    <script src="{PLOTLY_CDN}"></script>
    <script>
        var figure = {figure};
        Plotly.newPlot("chart", figure.data, figure.layout);
    </script>
    <h3>Daily Summary Table</h3>
    {table_html}
</body>
</html>
"#
    )
}

/// Daily rows as an HTML table, most recent day first. Empty rows render a
/// placeholder paragraph instead of an empty table.
pub fn render_table(rows: &[DailyStats]) -> String {
    if rows.is_empty() {
        return "<p>No data available.</p>".to_string();
    }

    let mut ordered: Vec<&DailyStats> = rows.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut html = String::from(
        "<table>\n<tr><th>Date</th><th>Games</th><th>Wins</th>\
         <th>Win Rate (%)</th><th>Flag</th></tr>\n",
    );
    for row in ordered {
        let flag = if row.overuse {
            "\u{26a0}\u{fe0f} Overuse"
        } else {
            "\u{2705} OK"
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>\n",
            row.date, row.games, row.wins, row.win_rate, flag
        ));
    }
    html.push_str("</table>");
    html
}

/// Overwrites any previous report unconditionally; a write failure is the
/// one unrecoverable error in the pipeline.
pub fn write_report(path: &Path, html: &str) -> Result<(), AppError> {
    fs::write(path, html).map_err(|e| AppError::OutputWrite {
        path: path.display().to_string(),
        source: e,
    })
}

fn heading(time_class: &str) -> String {
    let mut chars = time_class.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{} Chess Dashboard", capitalized)
}
