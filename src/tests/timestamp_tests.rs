#[cfg(test)]
mod timestamp_tests {
    use crate::errors::ParseError;
    use crate::timestamp::{reconstruct_series, RolloverClock};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_rollover_shares_one_date() {
        let reference = date(2024, 3, 1);
        let stamps =
            reconstruct_series(&["08:00:00", "09:15:00", "23:59:59"], reference).unwrap();

        // First row always advances the date by one.
        let expected_date = date(2024, 3, 2);
        assert!(stamps.iter().all(|ts| ts.date() == expected_date));
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_midnight_rollover_advances_date() {
        let reference = date(2024, 3, 1);
        let stamps = reconstruct_series(&["23:59:59", "00:00:01"], reference).unwrap();

        // First-row increment lands on D+1, the genuine rollover on D+2.
        assert_eq!(
            stamps[0],
            date(2024, 3, 2).and_hms_opt(23, 59, 59).unwrap()
        );
        assert_eq!(stamps[1], date(2024, 3, 3).and_hms_opt(0, 0, 1).unwrap());
    }

    #[test]
    fn test_equal_times_do_not_roll_over() {
        let reference = date(2024, 3, 1);
        let stamps =
            reconstruct_series(&["12:00:00", "12:00:00", "12:00:00"], reference).unwrap();

        assert_eq!(stamps[0], stamps[1]);
        assert_eq!(stamps[1], stamps[2]);
        assert_eq!(stamps[0].date(), date(2024, 3, 2));
    }

    #[test]
    fn test_multiple_rollovers_accumulate() {
        let reference = date(2024, 2, 28);
        let stamps = reconstruct_series(
            &["22:00:00", "02:00:00", "23:00:00", "01:00:00"],
            reference,
        )
        .unwrap();

        assert_eq!(stamps[0].date(), date(2024, 2, 29));
        assert_eq!(stamps[1].date(), date(2024, 3, 1));
        assert_eq!(stamps[2].date(), date(2024, 3, 1));
        assert_eq!(stamps[3].date(), date(2024, 3, 2));
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let reference = date(2024, 3, 1);
        let stamps = reconstruct_series(&["  08:30:00  "], reference).unwrap();
        assert_eq!(
            stamps[0],
            date(2024, 3, 2).and_hms_opt(8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_malformed_time_reports_row_index() {
        let reference = date(2024, 3, 1);
        let err = reconstruct_series(&["08:00:00", "8h30", "09:00:00"], reference).unwrap_err();
        match err {
            ParseError::TimeOfDayError { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "8h30");
            }
            other => panic!("Expected TimeOfDayError, got {:?}", other),
        }
    }

    #[test]
    fn test_one_output_per_input_row() {
        let reference = date(2024, 3, 1);
        let times = ["10:00:00", "10:00:05", "09:59:59", "10:00:00"];
        let stamps = reconstruct_series(&times, reference).unwrap();
        assert_eq!(stamps.len(), times.len());
    }

    #[test]
    fn test_clock_first_step_always_increments() {
        let mut clock = RolloverClock::new(date(2024, 3, 1));
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let stamp = clock.step(noon);
        assert_eq!(stamp.date(), date(2024, 3, 2));
    }
}
