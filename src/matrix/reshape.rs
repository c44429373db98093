use super::store::Matrix;
use crate::error::{Error, Result};

impl Matrix {
    /// Reinterpret the flattened row-major sequence as `new_rows × new_cols`.
    ///
    /// Target cell `(i', j')` has flat index `idx = i' * new_cols + j'` and
    /// takes its value from source cell `(idx / cols, idx % cols)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the element counts differ.
    pub fn reshape(&self, new_rows: usize, new_cols: usize) -> Result<Matrix> {
        let target = new_rows.checked_mul(new_cols);
        if target != Some(self.len()) {
            return Err(Error::invalid(format!(
                "cannot reshape {}x{} into {}x{}",
                self.rows, self.cols, new_rows, new_cols
            )));
        }

        let mut result = Matrix {
            data: vec![0; self.len()],
            rows: new_rows,
            cols: new_cols,
        };
        let mut idx = 0;
        for i in 0..new_rows {
            for j in 0..new_cols {
                let old_i = idx / self.cols;
                let old_j = idx % self.cols;
                result.data[i * new_cols + j] = self.data[old_i * self.cols + old_j];
                idx += 1;
            }
        }
        Ok(result)
    }

    /// Reshape to `new_cols` columns, inferring the row count.
    pub fn reshape_to_cols(&self, new_cols: usize) -> Result<Matrix> {
        let len = self.len();
        if new_cols == 0 || len % new_cols != 0 {
            return Err(Error::invalid(format!(
                "cannot reshape {} elements into rows of {}",
                len, new_cols
            )));
        }
        self.reshape(len / new_cols, new_cols)
    }
}
