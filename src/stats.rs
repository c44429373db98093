/// Running count, sum and sum of squares.
///
/// Both the matrix aggregations and the profiler reduce a sequence to its
/// mean and population standard deviation with this one-pass formula:
/// `sqrt(Σx²/n − (Σx/n)²)`. It is not cancellation-safe for large
/// magnitudes or long sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    pub fn count(&self) -> usize {
        self.n
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// `Σx / n`. NaN when empty.
    pub fn mean(&self) -> f64 {
        self.sum / self.n as f64
    }

    /// Population standard deviation, `sqrt(E[x²] − E[x]²)`.
    ///
    /// NaN when empty, and may also be NaN when rounding drives the
    /// variance slightly negative.
    pub fn population_std(&self) -> f64 {
        let n = self.n as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n) - (mean * mean);
        variance.sqrt()
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut m = Moments::new();
        for x in iter {
            m.push(x);
        }
        m
    }
}
