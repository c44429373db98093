use std::fmt;
use std::fs;
use std::hint::black_box;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::matrix::Matrix;
use crate::matrix::io::{read_from_file, write_to_file};
use crate::profile::NamedOperation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Tall matrix, reduced along rows.
    RowMajor,
    /// Wide matrix, reduced along columns.
    ColMajor,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::RowMajor, Orientation::ColMajor];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::RowMajor => f.write_str("row-major"),
            Orientation::ColMajor => f.write_str("col-major"),
        }
    }
}

/// The seven profiled primitives. Each one runs in both orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OpKind {
    #[serde(rename = "sum")]
    Sum,
    #[serde(rename = "mean")]
    Mean,
    #[serde(rename = "std")]
    Std,
    #[serde(rename = "transpose")]
    Transpose,
    #[serde(rename = "reshape")]
    Reshape,
    #[serde(rename = "write to txt")]
    WriteTxt,
    #[serde(rename = "read from txt")]
    ReadTxt,
}

impl OpKind {
    pub const ALL: [OpKind; 7] = [
        OpKind::Sum,
        OpKind::Mean,
        OpKind::Std,
        OpKind::Transpose,
        OpKind::Reshape,
        OpKind::WriteTxt,
        OpKind::ReadTxt,
    ];

    pub fn is_io(self) -> bool {
        matches!(self, OpKind::WriteTxt | OpKind::ReadTxt)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpKind::Sum => "sum",
            OpKind::Mean => "mean",
            OpKind::Std => "std",
            OpKind::Transpose => "transpose",
            OpKind::Reshape => "reshape",
            OpKind::WriteTxt => "write to txt",
            OpKind::ReadTxt => "read from txt",
        };
        f.write_str(s)
    }
}

/// The pair of text files one shape configuration writes and reads back.
///
/// Both files are removed on drop, whether profiling finished or bailed
/// out with an error.
#[derive(Debug)]
pub struct TempFiles {
    row: PathBuf,
    col: PathBuf,
}

impl TempFiles {
    pub fn new(dir: &Path, prefix: &str, label: &str) -> Self {
        let label: String = label
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        let stem = format!("{}_{}_matrix", prefix, label);
        Self {
            row: dir.join(format!("{}_row.txt", stem)),
            col: dir.join(format!("{}_col.txt", stem)),
        }
    }

    pub fn path(&self, orientation: Orientation) -> &Path {
        match orientation {
            Orientation::RowMajor => &self.row,
            Orientation::ColMajor => &self.col,
        }
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in [&self.row, &self.col] {
            match fs::remove_file(path) {
                Ok(()) => debug!("removed {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("failed to remove {}: {}", path.display(), e),
            }
        }
    }
}

/// One entry of the operation list, tagged for reporting.
#[derive(Debug)]
pub struct PlannedOperation<'a> {
    pub orientation: Orientation,
    pub op: OpKind,
    pub operation: NamedOperation<'a>,
}

/// Bind every (op, orientation) pair to its matrix and temp file.
///
/// Ordered op-major, row-major first, so each write precedes the read of
/// the same file.
pub fn plan_operations<'a>(
    tall: &'a Matrix,
    wide: &'a Matrix,
    files: &'a TempFiles,
    iterations: usize,
    io_iterations: usize,
    reshape_cols: usize,
) -> Vec<PlannedOperation<'a>> {
    let mut planned = Vec::with_capacity(OpKind::ALL.len() * Orientation::ALL.len());
    for op in OpKind::ALL {
        for orientation in Orientation::ALL {
            let m = match orientation {
                Orientation::RowMajor => tall,
                Orientation::ColMajor => wide,
            };
            let n = if op.is_io() { io_iterations } else { iterations };
            let name = format!("{} {}", orientation, op);
            let operation = bind(op, orientation, m, files.path(orientation), reshape_cols, name, n);
            planned.push(PlannedOperation {
                orientation,
                op,
                operation,
            });
        }
    }
    planned
}

fn bind<'a>(
    op: OpKind,
    orientation: Orientation,
    m: &'a Matrix,
    path: &'a Path,
    reshape_cols: usize,
    name: String,
    n: usize,
) -> NamedOperation<'a> {
    use Orientation::{ColMajor, RowMajor};

    match (op, orientation) {
        (OpKind::Sum, RowMajor) => NamedOperation::new(name, n, move || {
            black_box(m.row_sum());
            Ok(())
        }),
        (OpKind::Sum, ColMajor) => NamedOperation::new(name, n, move || {
            black_box(m.col_sum());
            Ok(())
        }),
        (OpKind::Mean, RowMajor) => NamedOperation::new(name, n, move || {
            black_box(m.row_mean());
            Ok(())
        }),
        (OpKind::Mean, ColMajor) => NamedOperation::new(name, n, move || {
            black_box(m.col_mean());
            Ok(())
        }),
        (OpKind::Std, RowMajor) => NamedOperation::new(name, n, move || {
            black_box(m.row_std());
            Ok(())
        }),
        (OpKind::Std, ColMajor) => NamedOperation::new(name, n, move || {
            black_box(m.col_std());
            Ok(())
        }),
        (OpKind::Transpose, _) => NamedOperation::new(name, n, move || {
            black_box(m.transpose());
            Ok(())
        }),
        (OpKind::Reshape, _) => NamedOperation::new(name, n, move || {
            black_box(m.reshape_to_cols(reshape_cols)?);
            Ok(())
        }),
        (OpKind::WriteTxt, _) => NamedOperation::new(name, n, move || write_to_file(m, path)),
        (OpKind::ReadTxt, _) => NamedOperation::new(name, n, move || {
            black_box(read_from_file(path, m.rows(), m.cols())?);
            Ok(())
        }),
    }
}
