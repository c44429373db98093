use super::store::Matrix;
use crate::stats::Moments;

/// Per-row and per-column reductions.
///
/// Row reductions walk the buffer sequentially. Column reductions walk
/// each column top to bottom, touching memory with stride `cols`.
impl Matrix {
    /// Integer sum of each row. Accumulates in `i64`.
    pub fn row_sum(&self) -> Vec<i64> {
        let (rows, cols) = self.shape();
        let mut result = vec![0i64; rows];
        for i in 0..rows {
            let mut sum = 0i64;
            for j in 0..cols {
                sum += self.data[i * cols + j] as i64;
            }
            result[i] = sum;
        }
        result
    }

    /// Integer sum of each column. Accumulates in `i64`.
    pub fn col_sum(&self) -> Vec<i64> {
        let (rows, cols) = self.shape();
        let mut result = vec![0i64; cols];
        for j in 0..cols {
            let mut sum = 0i64;
            for i in 0..rows {
                sum += self.data[i * cols + j] as i64;
            }
            result[j] = sum;
        }
        result
    }

    pub fn row_mean(&self) -> Vec<f64> {
        self.row_moments().iter().map(Moments::mean).collect()
    }

    pub fn col_mean(&self) -> Vec<f64> {
        self.col_moments().iter().map(Moments::mean).collect()
    }

    /// Population standard deviation of each row, one pass over `Σx` and `Σx²`.
    pub fn row_std(&self) -> Vec<f64> {
        self.row_moments()
            .iter()
            .map(Moments::population_std)
            .collect()
    }

    /// Population standard deviation of each column, one pass over `Σx` and `Σx²`.
    pub fn col_std(&self) -> Vec<f64> {
        self.col_moments()
            .iter()
            .map(Moments::population_std)
            .collect()
    }

    fn row_moments(&self) -> Vec<Moments> {
        let (rows, cols) = self.shape();
        let mut result = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut m = Moments::new();
            for j in 0..cols {
                m.push(self.data[i * cols + j] as f64);
            }
            result.push(m);
        }
        result
    }

    fn col_moments(&self) -> Vec<Moments> {
        let (rows, cols) = self.shape();
        let mut result = Vec::with_capacity(cols);
        for j in 0..cols {
            let mut m = Moments::new();
            for i in 0..rows {
                m.push(self.data[i * cols + j] as f64);
            }
            result.push(m);
        }
        result
    }
}
