use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("not a decimal number: '{input}'")]
    InvalidNumber { input: String },
}
