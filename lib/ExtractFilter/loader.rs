use std::io::{BufRead, BufReader, Read};

use DataStructures::LogRecord;

use crate::error::FilterError;
use crate::parser::parse_line;
use crate::sink::EventSink;

/// Reads every line of `source`, drops the header and parses the rest in order.
///
/// A malformed line aborts the load. A failed read does not: it is reported
/// to `sink` and the load yields no records at all. Bytes that are not UTF-8
/// are decoded as U+FFFD rather than failing the read. `source` is dropped
/// before this returns, whichever way it ends.
pub(crate) fn load_records<R: Read>(
    source: R,
    sink: &impl EventSink,
) -> Result<Vec<LogRecord>, FilterError> {
    let mut reader = BufReader::new(source);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(err) => {
                sink.error(&format!(
                    "failed to read source at line {}: {}",
                    line_number + 1,
                    err
                ));
                return Ok(Vec::new());
            }
        }
        if line_number == 1 {
            continue;
        }
        let line = String::from_utf8_lossy(strip_terminator(&buf));
        let record = parse_line(&line).map_err(|source| FilterError::MalformedRecord {
            line: line_number,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
