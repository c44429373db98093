//! Benchmark suite: builds matrices per shape, profiles every operation,
//! cleans up its temp files and collects the results.
//!
//! For each configured shape two matrices are generated from the same
//! seed: a tall `rows × cols` one for the row-major operations and a wide
//! `cols × rows` one for the col-major operations.

pub mod config;
pub mod ops;
pub mod report;

use std::io::Write;

use log::{debug, info};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::profile::{ProfileRecord, Profiler, WriterSink};

pub use config::{ShapeConfig, SuiteConfig};
pub use ops::{OpKind, Orientation, TempFiles};
pub use report::{OperationResult, ShapeReport};

pub struct BenchmarkSuite<W: Write> {
    config: SuiteConfig,
    sink: WriterSink<W>,
}

impl<W: Write> BenchmarkSuite<W> {
    pub fn new(config: SuiteConfig, out: W) -> Self {
        let sink = WriterSink::new(out, config.name_width);
        Self { config, sink }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    /// Profile every configured shape in order. Stops at the first error.
    pub fn run(&mut self) -> Result<Vec<ShapeReport>> {
        let shapes = self.config.shapes.clone();
        let mut reports = Vec::with_capacity(shapes.len());
        for shape in &shapes {
            reports.push(self.run_shape(shape)?);
        }
        Ok(reports)
    }

    pub fn run_shape(&mut self, shape: &ShapeConfig) -> Result<ShapeReport> {
        let Self { config, sink } = self;
        info!(
            "profiling {} ({} x {}, {} iterations)",
            shape.label, shape.rows, shape.cols, shape.iterations
        );

        let tall = Matrix::random(
            shape.rows,
            shape.cols,
            config.min_value,
            config.max_value,
            config.seed,
        )?;
        let wide = Matrix::random(
            shape.cols,
            shape.rows,
            config.min_value,
            config.max_value,
            config.seed,
        )?;
        debug!("generated {:?} and {:?} matrices", tall.shape(), wide.shape());

        sink.line(format_args!(
            "--- {} Test ({} x {}) ---",
            shape.label, shape.rows, shape.cols
        ));
        sink.line("Matrix shapes:");
        sink.line(format_args!("- row-major: {:?}", tall.shape()));
        sink.line(format_args!("- col-major: {:?}", wide.shape()));
        sink.line("");
        sink.line("=== Multiple Operations Profiling ===");

        let files = TempFiles::new(&config.temp_dir, &config.file_prefix, &shape.label);
        debug!(
            "temp files: {} / {}",
            files.path(Orientation::RowMajor).display(),
            files.path(Orientation::ColMajor).display()
        );

        let planned = ops::plan_operations(
            &tall,
            &wide,
            &files,
            shape.iterations,
            shape.io_iterations(config.io_iteration_divisor),
            config.reshape_cols,
        );

        let mut profiler = Profiler::new(&mut *sink);
        let mut results = Vec::with_capacity(planned.len());
        for mut p in planned {
            let stats = profiler.run_operation(&mut p.operation)?;
            results.push(OperationResult {
                orientation: p.orientation,
                op: p.op,
                record: ProfileRecord::new(p.operation.name, stats, p.operation.iterations),
            });
        }

        sink.line("");
        sink.line("");
        info!("finished {}", shape.label);

        Ok(ShapeReport {
            label: shape.label.clone(),
            rows: shape.rows,
            cols: shape.cols,
            iterations: shape.iterations,
            results,
        })
    }
}
