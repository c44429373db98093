use std::hint::black_box;

use serde::Serialize;

use super::sink::{ProfileRecord, ReportSink};
use super::timer::Timer;
use crate::error::Result;
use crate::stats::Moments;

/// Mean and population standard deviation of a set of timings, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl Statistics {
    /// `mean = Σt/n`, `std = sqrt(Σt²/n − mean²)`.
    pub fn from_samples(samples: &[f64]) -> Self {
        let m: Moments = samples.iter().copied().collect();
        Self {
            mean: m.mean(),
            std_dev: m.population_std(),
        }
    }
}

/// A labelled zero-argument operation with its own iteration count.
pub struct NamedOperation<'a> {
    pub name: String,
    pub iterations: usize,
    operation: Box<dyn FnMut() -> Result<()> + 'a>,
}

impl<'a> NamedOperation<'a> {
    pub fn new<F>(name: impl Into<String>, iterations: usize, operation: F) -> Self
    where
        F: FnMut() -> Result<()> + 'a,
    {
        Self {
            name: name.into(),
            iterations,
            operation: Box::new(operation),
        }
    }

    pub fn invoke(&mut self) -> Result<()> {
        (self.operation)()
    }
}

impl std::fmt::Debug for NamedOperation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedOperation")
            .field("name", &self.name)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

/// Runs operations repeatedly, timing each call, and reports the result.
pub struct Profiler<S> {
    sink: S,
}

impl<S: ReportSink> Profiler<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Call `operation` exactly `iterations` times, one after another.
    ///
    /// Every call is bracketed by its own timer start/stop. The first error
    /// is returned as-is: the remaining iterations are skipped and nothing
    /// is reported.
    pub fn profile<F, E>(
        &mut self,
        name: &str,
        mut operation: F,
        iterations: usize,
    ) -> std::result::Result<Statistics, E>
    where
        F: FnMut() -> std::result::Result<(), E>,
    {
        let mut times = Vec::with_capacity(iterations);
        let mut timer = Timer::new();
        for _ in 0..iterations {
            timer.start();
            operation()?;
            times.push(timer.elapsed());
        }

        let stats = Statistics::from_samples(&times);
        self.sink.report(&ProfileRecord::new(name, stats, iterations));
        Ok(stats)
    }

    /// [`profile`](Self::profile) for operations that cannot fail. The
    /// returned value is passed through `black_box` so the work is kept.
    pub fn profile_infallible<F, T>(
        &mut self,
        name: &str,
        mut f: F,
        iterations: usize,
    ) -> Statistics
    where
        F: FnMut() -> T,
    {
        let result: std::result::Result<Statistics, std::convert::Infallible> = self.profile(
            name,
            || {
                black_box(f());
                Ok(())
            },
            iterations,
        );
        match result {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }

    pub fn run_operation(&mut self, op: &mut NamedOperation<'_>) -> Result<Statistics> {
        let name = op.name.clone();
        let iterations = op.iterations;
        self.profile(&name, || op.invoke(), iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_invokes_exactly_n_times() {
        let mut calls = 0;
        let mut profiler = Profiler::new(Vec::<ProfileRecord>::new());
        let stats = profiler.profile_infallible("count", || calls += 1, 37);
        assert_eq!(calls, 37);
        assert!(stats.mean >= 0.0);

        let records = profiler.into_sink();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "count");
        assert_eq!(records[0].iterations, 37);
        assert_eq!(records[0].stats, stats);
    }

    #[test]
    fn test_error_propagates_without_report() {
        let mut calls = 0;
        let mut profiler = Profiler::new(Vec::<ProfileRecord>::new());
        let result = profiler.profile(
            "fails on third",
            || {
                calls += 1;
                if calls == 3 {
                    Err(Error::InvalidArgument("boom".into()))
                } else {
                    Ok(())
                }
            },
            10,
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(calls, 3);
        assert!(profiler.into_sink().is_empty());
    }

    #[test]
    fn test_statistics_from_known_samples() {
        let stats = Statistics::from_samples(&[1.0, 2.0, 3.0]);
        assert!((stats.mean - 2.0).abs() < 1e-12);
        assert!((stats.std_dev - 0.816_496_580_927_726).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_gives_nan_mean() {
        let mut profiler = Profiler::new(Vec::<ProfileRecord>::new());
        let stats = profiler.profile_infallible("never", || (), 0);
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn test_named_operation_runs_through_profiler() {
        let mut counter = 0u32;
        {
            let mut op = NamedOperation::new("bump", 5, || {
                counter += 1;
                Ok(())
            });
            let mut profiler = Profiler::new(Vec::<ProfileRecord>::new());
            profiler.run_operation(&mut op).unwrap();
            assert_eq!(profiler.into_sink()[0].name, "bump");
        }
        assert_eq!(counter, 5);
    }
}
