//! Taskbar clock text

/// Format the taskbar clock as `("h:MM AM", "M/D/YYYY")`
///
/// `hour` is 0-23. Midnight and noon show as 12.
pub fn format_clock(hour: u32, minute: u32, month: u32, day: u32, year: i32) -> (String, String) {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    (
        format!("{}:{:02} {}", hour12, minute, suffix),
        format!("{}/{}/{}", month, day, year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning() {
        let (time, date) = format_clock(9, 5, 3, 7, 2024);
        assert_eq!(time, "9:05 AM");
        assert_eq!(date, "3/7/2024");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_clock(0, 0, 1, 1, 2025).0, "12:00 AM");
        assert_eq!(format_clock(12, 30, 1, 1, 2025).0, "12:30 PM");
        assert_eq!(format_clock(23, 59, 12, 31, 2025).0, "11:59 PM");
    }
}
