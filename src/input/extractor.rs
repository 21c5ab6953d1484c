use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::model::{Metric, MetricValue, Record, RecordCount};

lazy_static! {
    static ref METRIC_PATTERNS: Vec<(Metric, Regex)> = Metric::ALL
        .iter()
        .map(|metric| {
            let pattern = format!(r"{}([0-9]+\.?[0-9]*)", regex::escape(metric.label()));
            (*metric, Regex::new(&pattern).unwrap())
        })
        .collect();
    static ref RECORD_COUNT_PATTERN: Regex = Regex::new(r"results-([0-9]+)-").unwrap();
}

/// Reads a benchmark result file and extracts its metrics.
///
/// Only I/O and UTF-8 decoding failures are errors. Missing labels produce
/// `None` metrics and a file name without `results-<N>-` gets record count 0.
pub fn extract(path: &Path) -> Result<Record> {
    let buf =
        fs::read(path).map_err(|e| (format!("couldn't read '{}'", path.display()), e))?;

    let content = String::from_utf8(buf).map_err(|e| {
        (
            format!("couldn't decode UTF-8 file content of '{}'", path.display()),
            e,
        )
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    extract_from(&file_name, &content)
}

pub fn extract_from(file_name: &str, content: &str) -> Result<Record> {
    Ok(Record::new(
        parse_record_count(file_name),
        parse_metric(content, Metric::PhasesActual)?,
        parse_metric(content, Metric::PhasesTheory)?,
        parse_metric(content, Metric::DiskAccessesPractice)?,
        parse_metric(content, Metric::DiskAccessesTheory)?,
    ))
}

/// Returns the value following the first occurrence of the metric's label.
///
/// Values are unsigned decimals written with ASCII digits (`12`, `12.`, `12.5`),
/// the way the sort benchmark prints them. Anything else after the label,
/// including a sign or non-ASCII digits, leaves the metric as `None`.
pub fn parse_metric(content: &str, metric: Metric) -> Result<Option<MetricValue>> {
    let re = METRIC_PATTERNS
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, re)| re)
        .ok_or_else(|| format!("no pattern registered for metric {}", metric))?;

    let caps = match re.captures(content) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let value = caps[1]
        .parse::<MetricValue>()
        .map_err(|e| (format!("couldn't parse {} value into f64", metric), e))?;

    Ok(Some(value))
}

/// Record count encoded in a result file name, e.g. `results-1000-run2.txt`.
///
/// The count is a run of ASCII digits. Counts beyond `u64::MAX` saturate at
/// `u64::MAX`; names without the `results-<N>-` part get 0.
pub fn parse_record_count(file_name: &str) -> RecordCount {
    RECORD_COUNT_PATTERN
        .captures(file_name)
        .map(|caps| caps[1].parse::<RecordCount>().unwrap_or(RecordCount::MAX))
        .unwrap_or(0)
}
