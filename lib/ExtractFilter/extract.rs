use DataStructures::LogRecord;

/// Country codes match when they are equal after trimming, ignoring case.
pub(crate) fn country_matches(record: &LogRecord, country: &str) -> bool {
    let actual = record.country_code().trim().chars().flat_map(char::to_lowercase);
    let wanted = country.trim().chars().flat_map(char::to_lowercase);
    actual.eq(wanted)
}

/// Mean response time over all records, or `None` when there are none.
pub(crate) fn mean_response_time(records: &[LogRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: i128 = records
        .iter()
        .map(|record| i128::from(record.response_time()))
        .sum();
    Some(total as f64 / records.len() as f64)
}

/// A parsed log extract that can be queried any number of times.
///
/// Obtained from [`DataFilterer::load`](crate::DataFilterer::load). Each query
/// returns the same records, in the same order, as the matching one-shot
/// operation on the filterer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogExtract {
    records: Vec<LogRecord>,
}

impl LogExtract {
    pub(crate) fn new(records: Vec<LogRecord>) -> Self {
        LogExtract { records }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }

    pub fn by_country(&self, country: &str) -> Vec<&LogRecord> {
        self.records
            .iter()
            .filter(|record| country_matches(record, country))
            .collect()
    }

    /// Records from `country` whose response time is strictly greater than `limit`.
    pub fn by_country_above_limit(&self, country: &str, limit: i64) -> Vec<&LogRecord> {
        self.records
            .iter()
            .filter(|record| country_matches(record, country))
            .filter(|record| record.response_time() > limit)
            .collect()
    }

    pub fn average_response_time(&self) -> Option<f64> {
        mean_response_time(&self.records)
    }

    /// Records whose response time is strictly greater than the mean over the
    /// whole extract.
    pub fn above_average(&self) -> Vec<&LogRecord> {
        match self.average_response_time() {
            Some(mean) => self
                .records
                .iter()
                .filter(|record| (record.response_time() as f64) > mean)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn record(country: &str, response_time: i64) -> LogRecord {
        LogRecord::new(Utc.timestamp_opt(0, 0).unwrap(), country, response_time)
    }

    fn extract() -> LogExtract {
        LogExtract::new(vec![
            record("US", 539),
            record("GB", 37),
            record("US", 789),
            record("US", 850),
            record("DE", 101),
        ])
    }

    fn times(records: &[&LogRecord]) -> Vec<i64> {
        records.iter().map(|r| r.response_time()).collect()
    }

    #[test]
    fn country_comparison_trims_and_ignores_case() {
        assert!(country_matches(&record(" us ", 1), "US"));
        assert!(country_matches(&record("US", 1), "\tus"));
        assert!(country_matches(&record("  ", 1), ""));
        assert!(!country_matches(&record("USA", 1), "US"));
        assert!(!country_matches(&record("US", 1), ""));
    }

    #[test]
    fn country_comparison_folds_non_ascii_case() {
        assert!(country_matches(&record("ÅL", 1), "ål"));
    }

    #[test]
    fn filters_by_country() {
        let extract = extract();

        assert_eq!(times(&extract.by_country("us")), vec![539, 789, 850]);
        assert_eq!(times(&extract.by_country("GB")), vec![37]);
        assert!(extract.by_country("FR").is_empty());
    }

    #[test]
    fn limit_is_exclusive() {
        let extract = extract();

        assert_eq!(times(&extract.by_country_above_limit("US", 789)), vec![850]);
        assert_eq!(times(&extract.by_country_above_limit("US", 700)), vec![789, 850]);
        assert_eq!(
            times(&extract.by_country_above_limit("US", -1)),
            vec![539, 789, 850]
        );
    }

    #[test]
    fn above_average_uses_the_whole_extract() {
        let extract = extract();

        assert_eq!(extract.average_response_time(), Some(463.2));
        assert_eq!(times(&extract.above_average()), vec![539, 789, 850]);
    }

    #[test]
    fn equal_response_times_are_never_above_average() {
        let extract = LogExtract::new(vec![record("US", 5), record("GB", 5)]);
        assert!(extract.above_average().is_empty());
    }

    #[test]
    fn empty_extract_has_no_average() {
        let extract = LogExtract::default();

        assert!(extract.is_empty());
        assert_eq!(extract.average_response_time(), None);
        assert!(extract.above_average().is_empty());
    }

    #[test]
    fn mean_does_not_overflow() {
        let records = vec![record("US", i64::MAX), record("US", i64::MAX)];
        assert_eq!(mean_response_time(&records), Some(i64::MAX as f64));
    }
}
