#[inline(always)]
pub fn tokio_now() -> tokio::time::Instant {
    tokio::time::Instant::now()
}

/// Long-form publish date, e.g. "April 03, 2024". Stored as a string on the
/// post row exactly as it is displayed.
pub fn long_form_date(date: chrono::NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_date_is_month_name_zero_padded_day_year() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
        assert_eq!(long_form_date(date), "April 03, 2024");

        let date = chrono::NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(long_form_date(date), "December 25, 2023");
    }
}
