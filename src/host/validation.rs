use chrono::{DateTime, Utc};

use crate::error::{TimelineError, TimelineResult};

pub(super) fn validate_input_lengths(values: &[String], names: &[String]) -> TimelineResult<()> {
    if values.len() != names.len() {
        return Err(TimelineError::MismatchedInputs {
            values: values.len(),
            names: names.len(),
        });
    }
    Ok(())
}

pub(super) fn validate_ascending(dates: &[DateTime<Utc>]) -> TimelineResult<()> {
    for (index, pair) in dates.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(TimelineError::UnsortedDates { index: index + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_ascending, validate_input_lengths};
    use crate::core::primitives::parse_event_date;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let values = vec!["2020-01-01".to_owned()];
        let names = vec!["a".to_owned(), "b".to_owned()];

        let err = validate_input_lengths(&values, &names).expect_err("mismatch must fail");
        assert!(format!("{err}").contains("equal lengths"));
    }

    #[test]
    fn descending_dates_are_rejected_with_index() {
        let dates = vec![
            parse_event_date("2020-01-05").expect("valid date"),
            parse_event_date("2020-01-01").expect("valid date"),
        ];

        let err = validate_ascending(&dates).expect_err("descending must fail");
        assert!(format!("{err}").contains("index 1"));
    }

    #[test]
    fn equal_adjacent_dates_are_allowed() {
        let dates = vec![
            parse_event_date("2020-01-01").expect("valid date"),
            parse_event_date("2020-01-01").expect("valid date"),
        ];

        validate_ascending(&dates).expect("equal dates are in order");
    }
}
