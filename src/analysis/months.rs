use chrono::{Datelike, NaiveDate};

/// The two-month reporting window: the month containing `today` and the
/// month immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub current: (i32, u32),
    pub previous: (i32, u32),
}

pub fn month_window(today: NaiveDate) -> MonthWindow {
    let current = (today.year(), today.month());

    // January rolls back to December of the previous year
    let previous = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };

    MonthWindow { current, previous }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_year_window() {
        let window = month_window(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(window.current, (2024, 7));
        assert_eq!(window.previous, (2024, 6));
    }

    #[test]
    fn january_rolls_back_to_previous_december() {
        let window = month_window(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(window.current, (2025, 1));
        assert_eq!(window.previous, (2024, 12));
    }
}
