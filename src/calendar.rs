use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// advance a date by whole months, clamping the day to the target month's
/// length (Jan 31 + 1 month = Feb 28/29)
pub fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => DateTime::from_naive_utc_and_offset(d.and_time(date.time()), Utc),
        None => date,
    }
}

/// project installment due dates for a schedule: month N falls N months
/// after disbursal
pub fn due_dates(disbursal_date: DateTime<Utc>, tenure_months: u32) -> Vec<DateTime<Utc>> {
    (1..=tenure_months)
        .map(|month| add_months(disbursal_date, month))
        .collect()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_months_plain() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            add_months(start, 1),
            Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(
            add_months(start, 12),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        // 2024 is a leap year
        assert_eq!(
            add_months(jan31, 1),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
        assert_eq!(
            add_months(jan31, 13),
            Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap()
        );
        assert_eq!(
            add_months(jan31, 2),
            Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_months_crosses_year() {
        let nov = Utc.with_ymd_and_hms(2024, 11, 15, 0, 0, 0).unwrap();
        assert_eq!(
            add_months(nov, 3),
            Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_due_dates_one_per_installment() {
        let disbursal = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let dates = due_dates(disbursal, 24);

        assert_eq!(dates.len(), 24);
        assert_eq!(
            dates[0],
            Utc.with_ymd_and_hms(2024, 7, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            dates[23],
            Utc.with_ymd_and_hms(2026, 6, 10, 0, 0, 0).unwrap()
        );
    }
}
