use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use super::store::Matrix;
use crate::error::{Error, Result};

/// Write `m` as tab-delimited text.
///
/// One line per row, values separated by a single `\t`, no trailing tab,
/// every line terminated by `\n`. The output carries no shape: readers are
/// told `(rows, cols)` out of band and trust it.
pub fn write_to<W: Write>(m: &Matrix, mut out: W) -> io::Result<()> {
    let (rows, cols) = m.shape();
    for i in 0..rows {
        let row = &m.data[i * cols..(i + 1) * cols];
        if let Some((first, rest)) = row.split_first() {
            write!(out, "{}", first)?;
            for x in rest {
                write!(out, "\t{}", x)?;
            }
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Stream whitespace-separated integers from `input` into `m`, returning how
/// many cells were filled.
///
/// Filling proceeds in row-major order and stops early at end of input or
/// at the first token that is not an integer (including tokens that are not
/// valid UTF-8). Cells past the returned count are left as they were.
/// Reading stops once `m` is full.
pub fn read_into<R: BufRead>(mut input: R, m: &mut Matrix) -> io::Result<usize> {
    let capacity = m.data.len();
    let mut filled = 0;
    let mut token = Vec::new();
    let mut bad_token = false;

    while !bad_token && filled < capacity {
        let (used, eof) = {
            let buf = input.fill_buf()?;
            let mut used = 0;
            for &b in buf {
                used += 1;
                if !b.is_ascii_whitespace() {
                    token.push(b);
                    continue;
                }
                if token.is_empty() {
                    continue;
                }
                match parse_token(&token) {
                    Some(v) => {
                        m.data[filled] = v;
                        filled += 1;
                        token.clear();
                    }
                    None => {
                        bad_token = true;
                        break;
                    }
                }
                if filled == capacity {
                    break;
                }
            }
            (used, buf.is_empty())
        };
        input.consume(used);

        if eof {
            if let Some(v) = parse_token(&token) {
                m.data[filled] = v;
                filled += 1;
            }
            break;
        }
    }

    if filled < capacity {
        debug!(
            "short read: filled {} of {} cells for {}x{}",
            filled,
            capacity,
            m.rows,
            m.cols
        );
    }
    Ok(filled)
}

fn parse_token(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Write `m` to `path`, truncating any existing file.
pub fn write_to_file(m: &Matrix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_to(m, BufWriter::new(file)).map_err(|e| Error::io(path, e))
}

/// Load a `rows × cols` matrix from `path`. Cells the file does not reach
/// stay 0; see [`read_into`] for how mismatched content is handled.
///
/// # Errors
///
/// `InvalidArgument` if `rows * cols` overflows, checked before the file is
/// opened. `Io` if the file cannot be opened or read.
pub fn read_from_file(path: impl AsRef<Path>, rows: usize, cols: usize) -> Result<Matrix> {
    let path = path.as_ref();
    let mut m = Matrix::zeros(rows, cols)?;
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    read_into(BufReader::new(file), &mut m).map_err(|e| Error::io(path, e))?;
    Ok(m)
}
