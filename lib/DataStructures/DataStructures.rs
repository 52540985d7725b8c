use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a log extract: when the request arrived, where it came from
/// and how long the response took.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    request_timestamp: DateTime<Utc>,
    country_code: String,
    response_time: i64,
}

impl LogRecord {
    pub fn new(
        request_timestamp: DateTime<Utc>,
        country_code: impl Into<String>,
        response_time: i64,
    ) -> Self {
        LogRecord {
            request_timestamp,
            country_code: country_code.into(),
            response_time,
        }
    }

    pub fn request_timestamp(&self) -> DateTime<Utc> {
        self.request_timestamp
    }

    /// Country code exactly as it appeared in the extract, whitespace included.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Response time in milliseconds.
    pub fn response_time(&self) -> i64 {
        self.response_time
    }
}
