pub mod daily_stats;
pub mod months;
