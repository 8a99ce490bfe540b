use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid date value {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("event date sequence is empty")]
    EmptyDates,

    #[error("invalid spacing constraints: {0}")]
    InvalidConstraints(String),

    #[error("values and names must have equal lengths: values={values}, names={names}")]
    MismatchedInputs { values: usize, names: usize },

    #[error("event dates must be sorted ascending: out of order at index {index}")]
    UnsortedDates { index: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
