//! Clock-time parsing and formatting.
//!
//! Times are represented as fractional hours of day (`16.5` is 4:30 PM).
//! Timeline hours may run past 24 to address the early morning of the next
//! day; see [`crate::timeline`].

/// Parse a free-text clock time into a fractional hour of day.
///
/// Accepts the first `H[:MM] am|pm` match anywhere in the input,
/// case-insensitive, with optional whitespace before the meridiem:
/// `"4:00 PM"`, `"7am"`, `"meet at 9:15 AM"`. Returns `None` when no
/// such match exists. Callers treat `None` as "no time known" and skip
/// the event; it is never an error.
pub fn parse_time(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        // Greedy hour width first, one digit as fallback.
        for hour_len in [2usize, 1] {
            if let Some(hour) = match_at(bytes, start, hour_len) {
                return Some(hour);
            }
        }
    }
    None
}

/// Try to match `H[:MM] am|pm` at a fixed position with a fixed hour width.
fn match_at(bytes: &[u8], start: usize, hour_len: usize) -> Option<f64> {
    let hour_end = start + hour_len;
    if hour_end > bytes.len() || !bytes[start..hour_end].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let hour: u32 = std::str::from_utf8(&bytes[start..hour_end]).ok()?.parse().ok()?;

    let mut i = hour_end;
    let mut minute = 0u32;
    if i + 2 < bytes.len()
        && bytes[i] == b':'
        && bytes[i + 1].is_ascii_digit()
        && bytes[i + 2].is_ascii_digit()
    {
        minute = (bytes[i + 1] - b'0') as u32 * 10 + (bytes[i + 2] - b'0') as u32;
        i += 3;
    }

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    if i + 1 >= bytes.len() {
        return None;
    }
    let meridiem = (bytes[i].to_ascii_lowercase(), bytes[i + 1].to_ascii_lowercase());
    let hour24 = match meridiem {
        (b'a', b'm') if hour == 12 => 0,
        (b'a', b'm') => hour,
        (b'p', b'm') if hour == 12 => 12,
        (b'p', b'm') => hour + 12,
        _ => return None,
    };

    Some(hour24 as f64 + minute as f64 / 60.0)
}

/// Format a fractional hour on a 12-hour clock: `16.0` is `"4 PM"`,
/// `16.5` is `"4:30 PM"`. Hours at or past 24 wrap to the next morning.
pub fn format_hour(hour: f64) -> String {
    let whole = (hour.floor() as i64).rem_euclid(24);
    let minutes = ((hour - hour.floor()) * 60.0).round() as i64;
    let meridiem = if whole >= 12 { "PM" } else { "AM" };
    let clock_hour = if whole % 12 == 0 { 12 } else { whole % 12 };
    if minutes > 0 {
        format!("{clock_hour}:{minutes:02} {meridiem}")
    } else {
        format!("{clock_hour} {meridiem}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_times() {
        assert_eq!(parse_time("4:00 PM"), Some(16.0));
        assert_eq!(parse_time("4:30 pm"), Some(16.5));
        assert_eq!(parse_time("7 am"), Some(7.0));
        assert_eq!(parse_time("7am"), Some(7.0));
        assert_eq!(parse_time("9:15AM"), Some(9.25));
    }

    #[test]
    fn handles_noon_and_midnight() {
        assert_eq!(parse_time("12 pm"), Some(12.0));
        assert_eq!(parse_time("12 am"), Some(0.0));
        assert_eq!(parse_time("12:30 am"), Some(0.5));
    }

    #[test]
    fn finds_time_inside_longer_text() {
        assert_eq!(parse_time("meet at 9:15 am sharp"), Some(9.25));
        assert_eq!(parse_time("dentist 2pm"), Some(14.0));
    }

    #[test]
    fn rejects_non_times() {
        assert_eq!(parse_time("garbled"), None);
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("14:00"), None); // no meridiem
        assert_eq!(parse_time("4:5pm"), Some(17.0)); // MM must be two digits; "5pm" matches
    }

    #[test]
    fn formats_hours() {
        assert_eq!(format_hour(16.0), "4 PM");
        assert_eq!(format_hour(16.5), "4:30 PM");
        assert_eq!(format_hour(0.0), "12 AM");
        assert_eq!(format_hour(12.0), "12 PM");
        assert_eq!(format_hour(7.25), "7:15 AM");
        // Past-midnight hours wrap to the next morning.
        assert_eq!(format_hour(29.0), "5 AM");
        assert_eq!(format_hour(32.0), "8 AM");
    }
}
