use chrono::{TimeZone, Utc};
use DataStructures::LogRecord;

use crate::error::RecordError;

const DELIMITER: char = ',';

/// Parses one data line of the form `epoch_seconds,country_code,response_time_ms`.
/// Fields past the third are ignored.
pub(crate) fn parse_line(line: &str) -> Result<LogRecord, RecordError> {
    let mut fields = line.split(DELIMITER);
    let timestamp = fields.next().ok_or(RecordError::MissingField("timestamp"))?;
    let country_code = fields
        .next()
        .ok_or(RecordError::MissingField("country code"))?;
    let response_time = fields
        .next()
        .ok_or(RecordError::MissingField("response time"))?;

    let seconds = timestamp
        .parse::<i64>()
        .map_err(|source| RecordError::InvalidTimestamp {
            value: timestamp.to_string(),
            source,
        })?;
    let request_timestamp = Utc
        .timestamp_opt(seconds, 0)
        .single()
        .ok_or(RecordError::TimestampOutOfRange(seconds))?;
    let response_time =
        response_time
            .parse::<i64>()
            .map_err(|source| RecordError::InvalidResponseTime {
                value: response_time.to_string(),
                source,
            })?;

    Ok(LogRecord::new(request_timestamp, country_code, response_time))
}
