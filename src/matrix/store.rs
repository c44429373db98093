use crate::error::{Error, Result};

/// Dense row-major `i32` matrix.
///
/// Elements live in one contiguous buffer; cell `(i, j)` sits at
/// `i * cols + j`. The shape is fixed for the lifetime of the value:
/// transpose and reshape hand back a new `Matrix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) data: Vec<i32>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// A `rows × cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `rows * cols` does not fit in `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            data: vec![0; len],
            rows,
            cols,
        })
    }

    /// Wrap a row-major buffer.
    ///
    /// ```
    /// use matprof::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3,
    ///                                     4, 5, 6]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 4);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(Error::invalid(format!(
                "expected {}x{}={} elements, got {}",
                rows,
                cols,
                len,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::invalid(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flattened row-major sequence.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows || j >= self.cols {
            return Err(Error::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(i * self.cols + j)
    }

    pub fn get(&self, i: usize, j: usize) -> Result<i32> {
        let idx = self.offset(i, j)?;
        Ok(self.data[idx])
    }

    pub fn set(&mut self, i: usize, j: usize, value: i32) -> Result<()> {
        let idx = self.offset(i, j)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Row `i` as a contiguous slice.
    pub fn row(&self, i: usize) -> Result<&[i32]> {
        if i >= self.rows {
            return Err(Error::IndexOutOfRange {
                row: i,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }
}

/// `rows * cols`, or `InvalidArgument` on overflow.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| Error::invalid(format!("{}x{} elements overflow usize", rows, cols)))
}
