#[cfg(test)]
mod durations_tests {
    use crate::durations::{step_differences, to_seconds};
    use crate::errors::ParseError;

    #[test]
    fn test_minute_second_stamp_to_seconds() {
        assert_eq!(to_seconds("01-30").unwrap(), 90);
        assert_eq!(to_seconds("00-00").unwrap(), 0);
        assert_eq!(to_seconds("10-05").unwrap(), 605);
        assert_eq!(to_seconds(" 02-15 ").unwrap(), 135);
    }

    #[test]
    fn test_malformed_stamp_is_a_typed_error() {
        for bad in ["0130", "xx-30", "01-yy", ""] {
            match to_seconds(bad) {
                Err(ParseError::DurationError { value, .. }) => assert_eq!(value, bad),
                other => panic!("Expected DurationError for '{}', got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_consecutive_differences() {
        let stamps = [Some("01-00"), Some("01-30"), Some("02-45")];
        let diffs = step_differences(&stamps).unwrap();
        assert_eq!(diffs, vec![Some(30), Some(75)]);
    }

    #[test]
    fn test_seconds_counter_wraparound_adds_a_minute() {
        let stamps = [Some("00-58"), Some("00-02")];
        let diffs = step_differences(&stamps).unwrap();
        assert_eq!(diffs, vec![Some(4)]);
    }

    #[test]
    fn test_missing_stamps_yield_missing_differences() {
        let stamps = [Some("01-00"), None, Some("02-00")];
        let diffs = step_differences(&stamps).unwrap();
        assert_eq!(diffs, vec![None, None]);
    }

    #[test]
    fn test_difference_count_is_one_less_than_input() {
        let stamps = [Some("00-01"), Some("00-02"), Some("00-03"), Some("00-04")];
        assert_eq!(step_differences(&stamps).unwrap().len(), 3);
        assert!(step_differences(&[Some("00-01")]).unwrap().is_empty());
    }
}
