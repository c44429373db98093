use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use super::store::{Matrix, element_count};
use crate::error::{Error, Result};

/// Fill `buffer` (a row-major `rows × cols` block) with integers drawn
/// uniformly from `[min, max]`.
///
/// The generator is seeded from `seed` alone, so the same arguments always
/// produce the same values.
///
/// # Errors
///
/// `InvalidArgument` if `min > max` or if `buffer` is not `rows * cols` long.
pub fn fill(
    buffer: &mut [i32],
    rows: usize,
    cols: usize,
    min: i32,
    max: i32,
    seed: u64,
) -> Result<()> {
    if min > max {
        return Err(Error::invalid(format!(
            "random bounds: min {} is greater than max {}",
            min, max
        )));
    }
    let len = element_count(rows, cols)?;
    if buffer.len() != len {
        return Err(Error::invalid(format!(
            "buffer holds {} elements, expected {}x{}={}",
            buffer.len(),
            rows,
            cols,
            len
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(min, max);
    for x in buffer.iter_mut() {
        *x = dist.sample(&mut rng);
    }
    Ok(())
}

impl Matrix {
    /// A `rows × cols` matrix filled by [`fill`].
    pub fn random(rows: usize, cols: usize, min: i32, max: i32, seed: u64) -> Result<Self> {
        let mut m = Matrix::zeros(rows, cols)?;
        fill(&mut m.data, rows, cols, min, max, seed)?;
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_values() {
        let a = Matrix::random(17, 9, 0, 100, 42).unwrap();
        let b = Matrix::random(17, 9, 0, 100, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_42_prefix_is_stable() {
        let expected = [13, 53, 25, 54, 87, 64, 99, 40];

        let m = Matrix::random(1, 8, 0, 100, 42).unwrap();
        assert_eq!(m.as_slice(), &expected);

        // a longer request extends the same stream
        let mut buf = vec![0; 24];
        fill(&mut buf, 4, 6, 0, 100, 42).unwrap();
        assert_eq!(&buf[..8], &expected);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = Matrix::random(32, 32, 0, 100, 1).unwrap();
        let b = Matrix::random(32, 32, 0, 100, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_within_closed_bounds() {
        let m = Matrix::random(50, 40, -3, 3, 7).unwrap();
        assert!(m.as_slice().iter().all(|&x| (-3..=3).contains(&x)));
        // both endpoints show up in 2000 draws over 7 values
        assert!(m.as_slice().contains(&-3));
        assert!(m.as_slice().contains(&3));
    }

    #[test]
    fn test_degenerate_range() {
        let m = Matrix::random(4, 4, 5, 5, 0).unwrap();
        assert!(m.as_slice().iter().all(|&x| x == 5));
    }

    #[test]
    fn test_min_greater_than_max_fails() {
        assert!(matches!(
            Matrix::random(2, 2, 10, 1, 42),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_buffer_length_checked() {
        let mut buf = vec![0; 5];
        assert!(fill(&mut buf, 2, 3, 0, 10, 42).is_err());
        assert!(matches!(
            fill(&mut buf, 1 << 32, 1 << 32, 0, 10, 42),
            Err(Error::InvalidArgument(_))
        ));
    }
}
