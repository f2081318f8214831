use crate::{Field, Method};
use std::io;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source could not be opened or read.
    #[error("could not read from {source_name}")]
    SourceUnavailable {
        /// A human-readable description of the source, e.g. its path.
        source_name: String,

        /// The underlying io error.
        #[source]
        error: io::Error,
    },

    /// The source's bytes are not valid UTF-8.
    #[error("source is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    /// A field could not be parsed as a number.
    ///
    /// Only returned when the reader is configured with
    /// [InvalidNumber::Fail](crate::reader::InvalidNumber::Fail).
    #[error("line {line}: {field} value '{text}' is not a number")]
    InvalidNumber {
        /// The one-based line number in the source text.
        line: u64,

        /// The field that failed to parse.
        field: Field,

        /// The offending text.
        text: String,
    },

    /// A field has no spread, so it cannot be rescaled.
    ///
    /// Only returned when the normalizer is configured with
    /// [Degenerate::Reject](crate::normalize::Degenerate::Reject).
    #[error("{field} is degenerate under {method} normalization")]
    Degenerate {
        /// The field with zero span (or zero max-abs value).
        field: Field,

        /// The normalization method that was running.
        method: Method,
    },

    /// [csv::Error]
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] io::Error),
}
