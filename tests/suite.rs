use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use matprof::suite::report::{markdown_summary, write_json};
use matprof::suite::{OpKind, Orientation, ShapeReport};
use matprof::{BenchmarkSuite, Matrix, ShapeConfig, SuiteConfig};

fn tiny_config(dir: &std::path::Path) -> SuiteConfig {
    SuiteConfig {
        temp_dir: dir.to_path_buf(),
        file_prefix: "it".to_string(),
        reshape_cols: 5,
        shapes: vec![
            ShapeConfig::new("Mini", 10, 5, 20),
            ShapeConfig::new("Flat", 2, 25, 3),
        ],
        ..SuiteConfig::default()
    }
}

/// Console writer that deletes `victim` once `marker` has been printed,
/// noting whether `sibling` was on disk at that moment.
struct RemoveAfterLine {
    text: Vec<u8>,
    marker: &'static str,
    victim: PathBuf,
    sibling: PathBuf,
    both_existed: Option<bool>,
}

impl Write for RemoveAfterLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.text.extend_from_slice(buf);
        if self.both_existed.is_none() && String::from_utf8_lossy(&self.text).contains(self.marker)
        {
            self.both_existed = Some(self.victim.exists() && self.sibling.exists());
            fs::remove_file(&self.victim)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn iterations(report: &ShapeReport, op: OpKind, orientation: Orientation) -> usize {
    report.find(op, orientation).unwrap().record.iterations
}

// ============================================================
// End-to-end runs
// ============================================================

#[test]
fn test_runs_every_operation_for_every_shape() {
    let dir = tempfile::tempdir().unwrap();
    let config = tiny_config(dir.path());
    config.validate().unwrap();

    let mut suite = BenchmarkSuite::new(config, Vec::new());
    let reports = suite.run().unwrap();

    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report.results.len(), 14);
        for op in OpKind::ALL {
            for orientation in Orientation::ALL {
                let r = report.find(op, orientation).unwrap();
                assert_eq!(r.record.name, format!("{} {}", orientation, op));
                assert!(r.record.stats.mean >= 0.0);
            }
        }
    }

    let mini = &reports[0];
    assert_eq!(mini.label, "Mini");
    assert_eq!(iterations(mini, OpKind::Sum, Orientation::RowMajor), 20);
    assert_eq!(iterations(mini, OpKind::ReadTxt, Orientation::ColMajor), 2);

    // io iterations never drop to zero
    let flat = &reports[1];
    assert_eq!(iterations(flat, OpKind::WriteTxt, Orientation::RowMajor), 1);
}

#[test]
fn test_console_output_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = tiny_config(dir.path());
    config.shapes.truncate(1);
    config.name_width = 25;

    let mut suite = BenchmarkSuite::new(config, Vec::new());
    suite.run().unwrap();
    let text = String::from_utf8(suite.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "--- Mini Test (10 x 5) ---");
    assert_eq!(lines[1], "Matrix shapes:");
    assert_eq!(lines[2], "- row-major: (10, 5)");
    assert_eq!(lines[3], "- col-major: (5, 10)");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "=== Multiple Operations Profiling ===");
    assert!(lines[6].starts_with("row-major sum            : "));
    assert!(lines[6].ends_with(" seconds (mean ± std over 20 runs)"));
    assert!(lines[19].starts_with("col-major read from txt  : "));
    assert!(lines[19].ends_with("(mean ± std over 2 runs)"));
}

#[test]
fn test_temp_files_cleaned_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut suite = BenchmarkSuite::new(tiny_config(dir.path()), Vec::new());
    suite.run().unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "left behind: {:?}", leftovers);
}

#[test]
fn test_error_aborts_run_and_still_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = tiny_config(dir.path());
    // 50 elements cannot be laid out in rows of 7; skip validation on purpose
    config.reshape_cols = 7;

    let mut suite = BenchmarkSuite::new(config, Vec::new());
    assert!(matches!(suite.run(), Err(matprof::Error::InvalidArgument(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failure_after_writes_still_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = tiny_config(dir.path());
    config.shapes.truncate(1);
    let row_file = dir.path().join("it_mini_matrix_row.txt");
    let col_file = dir.path().join("it_mini_matrix_col.txt");

    // both files are written, then the row-major read finds its file gone
    let out = RemoveAfterLine {
        text: Vec::new(),
        marker: "col-major write to txt",
        victim: row_file.clone(),
        sibling: col_file,
        both_existed: None,
    };
    let mut suite = BenchmarkSuite::new(config, out);
    match suite.run() {
        Err(matprof::Error::Io { path, .. }) => assert_eq!(path, row_file),
        other => panic!("expected io error, got {:?}", other),
    }

    let out = suite.into_inner();
    assert_eq!(out.both_existed, Some(true));
    assert!(!String::from_utf8_lossy(&out.text).contains("row-major read from txt"));
    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "left behind: {:?}", leftovers);
}

#[test]
fn test_same_seed_same_matrices_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = tiny_config(dir.path());
    let shape = &config.shapes[0];
    let generate = || {
        Matrix::random(
            shape.rows,
            shape.cols,
            config.min_value,
            config.max_value,
            config.seed,
        )
        .unwrap()
    };

    assert_eq!(generate(), generate());
}

// ============================================================
// Exports
// ============================================================

#[test]
fn test_exports_from_real_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let mut suite = BenchmarkSuite::new(tiny_config(dir.path()), Vec::new());
    let reports = suite.run().unwrap();

    let md = markdown_summary(&reports);
    assert!(md.contains("## Mini (10 x 5)"));
    assert!(md.contains("## Flat (2 x 25)"));
    assert_eq!(md.matches("| read from txt |").count(), 2);

    let json_path = out.path().join("results.json");
    write_json(&reports, &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["results"].as_array().unwrap().len(), 14);
}
