use chrono::{Days, NaiveDate};

/// `git log` since/until bounds for one local calendar day.
pub fn day_bounds(date: NaiveDate) -> (String, String) {
    let day = date.format("%Y-%m-%d");
    (format!("{day} 00:00"), format!("{day} 23:59"))
}

/// `today`, `today - 1`, ... back `days - 1` days, newest first.
pub fn window_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .collect()
}
