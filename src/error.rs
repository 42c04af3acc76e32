use std::{error::Error, fmt::Display};

/// Error returned when a closed-set value cannot be constructed from its
/// string label, e.g. an empty or unrecognized metric statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValueError {
    pub msg: String,
}

impl Display for InvalidValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl Error for InvalidValueError {}
