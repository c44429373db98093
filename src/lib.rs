//! Micro-benchmarks for dense matrix primitives.
//!
//! Measures how long row/column aggregation, transpose, reshape and
//! text serialization take on a tall `rows × cols` matrix versus its wide
//! `cols × rows` counterpart. Storage is row-major, so row reductions on
//! the tall matrix stream through memory while column reductions on the
//! wide one stride across it.
//!
//! ## Usage
//!
//! ```
//! use matprof::Matrix;
//!
//! let m = Matrix::random(4, 6, 0, 100, 42).unwrap();
//! let total: i64 = m.row_sum().iter().sum();
//! assert_eq!(total, m.col_sum().iter().sum::<i64>());
//!
//! let r = m.reshape(3, 8).unwrap();
//! assert_eq!(r.as_slice(), m.as_slice());
//! ```
//!
//! Timing a closure:
//!
//! ```
//! use matprof::{Matrix, ProfileRecord, Profiler};
//!
//! let m = Matrix::random(64, 64, 0, 100, 42).unwrap();
//! let mut profiler = Profiler::new(Vec::<ProfileRecord>::new());
//! let stats = profiler.profile_infallible("row-major std", || m.row_std(), 10);
//! assert!(stats.mean >= 0.0);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: the flat-buffer [`Matrix`], seeded random fill, aggregations,
//!   transpose, reshape, tab-delimited text IO
//! - `profile`: timer, repeated-execution [`Profiler`], report sinks
//! - `suite`: shape configuration, the operation list, temp files, exports

pub mod error;
pub mod matrix;
pub mod profile;
pub mod stats;
pub mod suite;

pub use error::{ConfigError, Error, Result};
pub use matrix::Matrix;
pub use profile::{NamedOperation, ProfileRecord, Profiler, ReportSink, Statistics, Timer};
pub use suite::{BenchmarkSuite, ShapeConfig, SuiteConfig};
