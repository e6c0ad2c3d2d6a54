use thiserror::Error;

/// A segment of an `Accept` header that cannot be split into its parts.
///
/// `index` is the zero-based position of the comma-separated segment and
/// `segment` its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // Missing '/' or more than one.
    #[error("segment {index} ({segment:?}): expected a single '/' between type and subtype")]
    InvalidMediaRange { index: usize, segment: String },

    // Missing '=' or more than one.
    #[error("segment {index} ({segment:?}): parameter {token:?} is not a single name=value pair")]
    InvalidParameter {
        index: usize,
        segment: String,
        token: String,
    },
}

impl ParseError {
    pub fn index(&self) -> usize {
        match self {
            ParseError::InvalidMediaRange { index, .. } => *index,
            ParseError::InvalidParameter { index, .. } => *index,
        }
    }

    pub fn segment(&self) -> &str {
        match self {
            ParseError::InvalidMediaRange { segment, .. } => segment,
            ParseError::InvalidParameter { segment, .. } => segment,
        }
    }
}
