use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::ops::{OpKind, Orientation};
use crate::error::{Error, Result};
use crate::profile::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub orientation: Orientation,
    pub op: OpKind,
    #[serde(flatten)]
    pub record: ProfileRecord,
}

/// Everything measured for one shape configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub label: String,
    pub rows: usize,
    pub cols: usize,
    pub iterations: usize,
    pub results: Vec<OperationResult>,
}

impl ShapeReport {
    pub fn find(&self, op: OpKind, orientation: Orientation) -> Option<&OperationResult> {
        self.results
            .iter()
            .find(|r| r.op == op && r.orientation == orientation)
    }
}

pub fn write_json(reports: &[ShapeReport], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, reports).map_err(|e| Error::io(path, e.into()))?;
    out.write_all(b"\n")
        .and_then(|_| out.flush())
        .map_err(|e| Error::io(path, e))
}

/// One table per shape: operations down, orientations across.
///
/// ```text
/// ## Tiny (100 x 100)
///
/// | Operation | row-major | col-major |
/// | --- | --- | --- |
/// | sum | 0.000012 ± 0.000001s | 0.000031 ± 0.000002s |
/// ```
pub fn markdown_summary(reports: &[ShapeReport]) -> String {
    let mut md = String::new();
    for report in reports {
        let _ = writeln!(md, "## {} ({} x {})", report.label, report.rows, report.cols);
        md.push('\n');
        md.push_str("| Operation |");
        for orientation in Orientation::ALL {
            let _ = write!(md, " {} |", orientation);
        }
        md.push('\n');
        md.push_str("| --- |");
        for _ in Orientation::ALL {
            md.push_str(" --- |");
        }
        md.push('\n');

        for op in OpKind::ALL {
            if Orientation::ALL.iter().all(|&o| report.find(op, o).is_none()) {
                continue;
            }
            let _ = write!(md, "| {} |", op);
            for orientation in Orientation::ALL {
                match report.find(op, orientation) {
                    Some(r) => {
                        let _ = write!(
                            md,
                            " {:.6} ± {:.6}s |",
                            r.record.stats.mean, r.record.stats.std_dev
                        );
                    }
                    None => md.push_str("  |"),
                }
            }
            md.push('\n');
        }
        md.push('\n');
    }
    md
}

pub fn write_markdown(reports: &[ShapeReport], path: &Path) -> Result<()> {
    std::fs::write(path, markdown_summary(reports)).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Statistics;

    fn report() -> ShapeReport {
        let stats = Statistics {
            mean: 0.5,
            std_dev: 0.25,
        };
        ShapeReport {
            label: "Tiny".into(),
            rows: 2,
            cols: 3,
            iterations: 4,
            results: vec![
                OperationResult {
                    orientation: Orientation::RowMajor,
                    op: OpKind::Sum,
                    record: ProfileRecord::new("row-major sum", stats, 4),
                },
                OperationResult {
                    orientation: Orientation::ColMajor,
                    op: OpKind::Sum,
                    record: ProfileRecord::new("col-major sum", stats, 4),
                },
                OperationResult {
                    orientation: Orientation::RowMajor,
                    op: OpKind::WriteTxt,
                    record: ProfileRecord::new("row-major write to txt", stats, 1),
                },
            ],
        }
    }

    #[test]
    fn test_markdown_layout() {
        let md = markdown_summary(&[report()]);
        let expected = "## Tiny (2 x 3)\n\n\
            | Operation | row-major | col-major |\n\
            | --- | --- | --- |\n\
            | sum | 0.500000 ± 0.250000s | 0.500000 ± 0.250000s |\n\
            | write to txt | 0.500000 ± 0.250000s |  |\n\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&[report()], &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let first = &value[0]["results"][0];
        assert_eq!(value[0]["label"], "Tiny");
        assert_eq!(first["orientation"], "row-major");
        assert_eq!(first["op"], "sum");
        assert_eq!(first["name"], "row-major sum");
        assert_eq!(first["stats"]["mean"], 0.5);
        assert_eq!(value[0]["results"][2]["op"], "write to txt");
    }
}
