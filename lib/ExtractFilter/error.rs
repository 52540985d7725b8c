use std::num::ParseIntError;

use thiserror::Error;

/// Message used when a country-based filter is called without a source or a country.
pub const SOURCE_OR_COUNTRY_MISSING: &str = "Either the source or the country is missing";

/// Message used when the average-based filter is called without a source.
pub const SOURCE_MISSING: &str = "The source is missing";

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a single line could not be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("invalid response time {value:?}: {source}")]
    InvalidResponseTime {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
