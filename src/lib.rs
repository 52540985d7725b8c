//! Country and response-time filters over comma-delimited log extracts.
//!
//! ```
//! use extract_filter::DataFilterer;
//!
//! let extract = "REQUEST_TIMESTAMP,COUNTRY_CODE,RESPONSE_TIME\n\
//!                1433190845,US,539\n\
//!                1432917066,GB,37\n";
//! let filterer = DataFilterer::new();
//! let us = filterer
//!     .filter_by_country(Some(extract.as_bytes()), Some("us"))
//!     .unwrap();
//! assert_eq!(us.len(), 1);
//! ```

pub use DataStructures::LogRecord;
pub use ExtractFilter::{
    to_json, DataFilterer, EventSink, FilterError, LogExtract, LogSink, RecordError,
    SOURCE_MISSING, SOURCE_OR_COUNTRY_MISSING,
};
