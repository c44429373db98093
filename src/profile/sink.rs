use std::fmt;
use std::io::Write;

use log::warn;
use serde::Serialize;

use super::runner::Statistics;

/// One profiled operation, as handed to a [`ReportSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub name: String,
    pub stats: Statistics,
    pub iterations: usize,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>, stats: Statistics, iterations: usize) -> Self {
        Self {
            name: name.into(),
            stats,
            iterations,
        }
    }
}

/// `<name>: <mean> ± <std> seconds (mean ± std over <n> runs)`.
///
/// The width flag, if any, pads the name: `format!("{:25}", record)`.
impl fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(
            f,
            "{:<width$}: {:.6} ± {:.6} seconds (mean ± std over {} runs)",
            self.name,
            self.stats.mean,
            self.stats.std_dev,
            self.iterations,
            width = width
        )
    }
}

/// Destination for profiling results.
pub trait ReportSink {
    fn report(&mut self, record: &ProfileRecord);
}

impl ReportSink for Vec<ProfileRecord> {
    fn report(&mut self, record: &ProfileRecord) {
        self.push(record.clone());
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, record: &ProfileRecord) {
        (**self).report(record);
    }
}

/// Writes one formatted line per record to any `Write`.
///
/// Write failures are logged and otherwise ignored.
pub struct WriterSink<W: Write> {
    out: W,
    name_width: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W, name_width: usize) -> Self {
        Self { out, name_width }
    }

    /// Write a free-form line (headers, separators).
    pub fn line(&mut self, text: impl fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("report output failed: {}", e);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn report(&mut self, record: &ProfileRecord) {
        let width = self.name_width;
        if let Err(e) = writeln!(self.out, "{:width$}", record, width = width) {
            warn!("report output failed: {}", e);
        }
    }
}
