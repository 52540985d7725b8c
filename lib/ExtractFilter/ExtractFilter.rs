//! Filters comma-delimited log extracts by country and response time.
//!
//! An extract is plain text: a header line followed by one
//! `epoch_seconds,country_code,response_time_ms` record per line. Every
//! operation reads its source to the end, so a source serves exactly one call.
//! Use [`DataFilterer::load`] to parse once and query the result repeatedly.

mod error;
mod extract;
mod loader;
mod parser;
mod sink;

use std::borrow::Borrow;
use std::io::Read;

use DataStructures::LogRecord;

pub use error::{FilterError, RecordError, SOURCE_MISSING, SOURCE_OR_COUNTRY_MISSING};
pub use extract::LogExtract;
pub use sink::{EventSink, LogSink};

use extract::{country_matches, mean_response_time};
use loader::load_records;

/// Entry point for filtering log extracts. Events go to the injected sink.
#[derive(Debug, Default, Clone)]
pub struct DataFilterer<S = LogSink> {
    sink: S,
}

impl DataFilterer {
    pub fn new() -> Self {
        DataFilterer { sink: LogSink }
    }
}

impl<S: EventSink> DataFilterer<S> {
    pub fn with_sink(sink: S) -> Self {
        DataFilterer { sink }
    }

    /// Records whose country code equals `country`, ignoring case and
    /// surrounding whitespace on both sides.
    pub fn filter_by_country<R: Read>(
        &self,
        source: Option<R>,
        country: Option<&str>,
    ) -> Result<Vec<LogRecord>, FilterError> {
        self.sink.info(&format!(
            "filter_by_country called with source {}, country {}",
            presence(&source),
            describe_country(country)
        ));
        let (source, country) = require_source_and_country(source, country)?;

        let mut records = load_records(source, &self.sink)?;
        records.retain(|record| country_matches(record, country));
        Ok(records)
    }

    /// Records from `country` whose response time is strictly greater than `limit`.
    /// Any limit is accepted; a negative one simply lets more records through.
    pub fn filter_by_country_with_response_time_above_limit<R: Read>(
        &self,
        source: Option<R>,
        country: Option<&str>,
        limit: i64,
    ) -> Result<Vec<LogRecord>, FilterError> {
        self.sink.info(&format!(
            "filter_by_country_with_response_time_above_limit called with \
             source {}, country {}, limit {}",
            presence(&source),
            describe_country(country),
            limit
        ));
        let (source, country) = require_source_and_country(source, country)?;

        let mut records = load_records(source, &self.sink)?;
        records.retain(|record| {
            country_matches(record, country) && record.response_time() > limit
        });
        Ok(records)
    }

    /// Records whose response time is strictly greater than the mean response
    /// time of every record in the source. An extract without records yields
    /// an empty result.
    pub fn filter_by_response_time_above_average<R: Read>(
        &self,
        source: Option<R>,
    ) -> Result<Vec<LogRecord>, FilterError> {
        self.sink.info(&format!(
            "filter_by_response_time_above_average called with source {}",
            presence(&source)
        ));
        let source = source.ok_or(FilterError::InvalidArgument(SOURCE_MISSING))?;

        let mut records = load_records(source, &self.sink)?;
        match mean_response_time(&records) {
            Some(mean) => records.retain(|record| (record.response_time() as f64) > mean),
            None => records.clear(),
        }
        Ok(records)
    }

    /// Parses `source` once so it can be queried repeatedly. Read failures are
    /// handled as in the one-shot operations and produce an empty extract.
    pub fn load<R: Read>(&self, source: R) -> Result<LogExtract, FilterError> {
        load_records(source, &self.sink).map(LogExtract::new)
    }
}

/// Renders records as a JSON array.
pub fn to_json<T: Borrow<LogRecord>>(records: &[T]) -> Result<String, FilterError> {
    let records: Vec<&LogRecord> = records.iter().map(Borrow::<LogRecord>::borrow).collect();
    Ok(serde_json::to_string(&records)?)
}

fn require_source_and_country<R>(
    source: Option<R>,
    country: Option<&str>,
) -> Result<(R, &str), FilterError> {
    match (source, country) {
        (Some(source), Some(country)) => Ok((source, country)),
        _ => Err(FilterError::InvalidArgument(SOURCE_OR_COUNTRY_MISSING)),
    }
}

fn presence<R>(source: &Option<R>) -> &'static str {
    if source.is_some() {
        "present"
    } else {
        "absent"
    }
}

fn describe_country(country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{:?}", country),
        None => "absent".to_string(),
    }
}
