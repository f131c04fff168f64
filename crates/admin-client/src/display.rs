//! Vietnamese display formats for table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `2025-03-01T10:00:00` → `1/3/2025`. Unparseable input is shown as is.
pub fn format_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `150000.0` → `150.000 ₫`
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        assert_eq!(format_date("2025-03-01T10:00:00"), "1/3/2025");
        assert_eq!(format_date("2025-12-24T10:00:00.1234567"), "24/12/2025");
        assert_eq!(format_date("2025-11-05T01:00:00+07:00"), "5/11/2025");
        assert_eq!(format_date("2025-11-05"), "5/11/2025");
        assert_eq!(format_date("hôm qua"), "hôm qua");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(950.0), "950 ₫");
        assert_eq!(format_vnd(150000.0), "150.000 ₫");
        assert_eq!(format_vnd(1234567.4), "1.234.567 ₫");
        assert_eq!(format_vnd(-5000.0), "-5.000 ₫");
    }
}
