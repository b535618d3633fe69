use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field {field} has {actual} entries but {expected} vehicles were submitted")]
    RowLengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}
