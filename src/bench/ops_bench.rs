use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matprof::Matrix;
use matprof::matrix::io::{read_from_file, write_to_file};

const SHAPES: [(usize, usize); 2] = [(100, 100), (1000, 100)];

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for (rows, cols) in SHAPES {
        let tall = Matrix::random(rows, cols, 0, 100, 42).unwrap();
        let wide = Matrix::random(cols, rows, 0, 100, 42).unwrap();
        let id = format!("{}x{}", rows, cols);

        group.bench_with_input(BenchmarkId::new("row_sum", &id), &tall, |b, m| {
            b.iter(|| black_box(m.row_sum()))
        });
        group.bench_with_input(BenchmarkId::new("col_sum", &id), &wide, |b, m| {
            b.iter(|| black_box(m.col_sum()))
        });
        group.bench_with_input(BenchmarkId::new("row_std", &id), &tall, |b, m| {
            b.iter(|| black_box(m.row_std()))
        });
        group.bench_with_input(BenchmarkId::new("col_std", &id), &wide, |b, m| {
            b.iter(|| black_box(m.col_std()))
        });
    }
    group.finish();
}

fn bench_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");
    for (rows, cols) in SHAPES {
        let m = Matrix::random(rows, cols, 0, 100, 42).unwrap();
        let id = format!("{}x{}", rows, cols);

        group.bench_with_input(BenchmarkId::new("transpose", &id), &m, |b, m| {
            b.iter(|| black_box(m.transpose()))
        });
        group.bench_with_input(BenchmarkId::new("reshape", &id), &m, |b, m| {
            b.iter(|| black_box(m.reshape_to_cols(50).unwrap()))
        });
    }
    group.finish();
}

fn bench_io(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let mut group = c.benchmark_group("io");
    group.sample_size(20);
    for (rows, cols) in SHAPES {
        let m = Matrix::random(rows, cols, 0, 100, 42).unwrap();
        let path = dir.path().join(format!("bench_{}x{}.txt", rows, cols));
        let id = format!("{}x{}", rows, cols);

        group.bench_function(BenchmarkId::new("write", &id), |b| {
            b.iter(|| write_to_file(&m, &path).unwrap())
        });
        group.bench_function(BenchmarkId::new("read", &id), |b| {
            b.iter(|| black_box(read_from_file(&path, rows, cols).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_shape, bench_io);
criterion_main!(benches);
