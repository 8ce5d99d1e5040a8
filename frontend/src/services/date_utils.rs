use daymark_core::{CalendarDate, ViewMonth};

/// Get today's date from the browser clock
pub fn current_date() -> CalendarDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    CalendarDate::new(year as i32, month as u32, day as u32)
}

/// The month to show when the widget first mounts
pub fn current_view_month() -> ViewMonth {
    let today = current_date();
    ViewMonth::new(today.year, today.month)
}

/// Get month name from number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Format a date for display (e.g., "March 10, 2024")
pub fn format_full_date(date: &CalendarDate) -> String {
    format!("{} {}, {}", month_name(date.month), date.day, date.year)
}
