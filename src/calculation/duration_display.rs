//! Conversion of minutes worked into a display string.

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Shown for a day with no time logged.
pub const NO_HOURS_REPORTED: &str = "No hours reported.";

/// Formats a minute count as `"H hrs M min"`.
///
/// Returns [`NO_HOURS_REPORTED`] when there are no minutes to report.
///
/// # Examples
///
/// ```
/// use employee_portal::calculation::minutes_to_display;
///
/// assert_eq!(minutes_to_display(125), "2 hrs 5 min");
/// assert_eq!(minutes_to_display(60), "1 hrs 0 min");
/// assert_eq!(minutes_to_display(0), "No hours reported.");
/// ```
pub fn minutes_to_display(minutes: u32) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let remainder = minutes % MINUTES_PER_HOUR;

    if hours == 0 && remainder == 0 {
        NO_HOURS_REPORTED.to_string()
    } else {
        format!("{} hrs {} min", hours, remainder)
    }
}
