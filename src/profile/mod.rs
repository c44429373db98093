//! Repeated timed execution and reduction to mean ± std.
//!
//! - `timer`: monotonic wall-clock stopwatch
//! - `runner`: the [`Profiler`] loop, [`Statistics`] and [`NamedOperation`]
//! - `sink`: where results go ([`ReportSink`], [`WriterSink`])

pub mod runner;
pub mod sink;
pub mod timer;

pub use runner::{NamedOperation, Profiler, Statistics};
pub use sink::{ProfileRecord, ReportSink, WriterSink};
pub use timer::Timer;
