/// Mapping between points of {0,1,2}^n and their index in [0, 3^n)
///
/// A point is read as a base-3 number, most significant symbol first:
///     index = point[0].3^(n-1) + point[1].3^(n-2) + ... + point[n-1].3^0
/// so that enumerating the points in lexicographic order enumerates the
/// indexes 0, 1, 2, ... in order.

use crate::config::candidate_count;
use crate::errors::SidonError;

/// Coefficient standing for -1 in a combination modulo 3.
pub const MINUS: u8 = 2;
/// Coefficient standing for +1 in a combination modulo 3.
pub const PLUS: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexer {
    n: usize,
    size: usize,
    powers: Vec<usize>, // powers[k] = 3^(n-1-k)
}

impl Indexer {
    pub fn new(n: usize) -> Result<Self, SidonError> {
        if n == 0 {
            return Err(SidonError::InvalidDimension { n });
        }
        let size = candidate_count(n)?;
        let mut powers = vec![1usize; n];
        for k in (0..n - 1).rev() {
            powers[k] = powers[k + 1] * 3;
        }
        Ok(Self { n, size, powers })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of points in the grid (3^n).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn powers(&self) -> &[usize] {
        &self.powers
    }

    /// Index of a point, after checking its length and symbols.
    pub fn encode(&self, point: &[u8]) -> Result<usize, SidonError> {
        self.check_point(point)?;
        Ok(self.encode_unchecked(point))
    }

    /// Point at a given index.
    pub fn decode(&self, index: usize) -> Result<Vec<u8>, SidonError> {
        if index >= self.size {
            return Err(SidonError::IndexOutOfRange { index, n: self.n, size: self.size });
        }
        let mut point = vec![0u8; self.n];
        self.decode_into(index, &mut point);
        Ok(point)
    }

    pub fn check_point(&self, point: &[u8]) -> Result<(), SidonError> {
        if point.len() != self.n {
            return Err(SidonError::WrongPointLength { expected: self.n, actual: point.len() });
        }
        if let Some((position, &symbol)) = point.iter().enumerate().find(|&(_, &s)| s > 2) {
            return Err(SidonError::SymbolOutOfRange { position, symbol });
        }
        Ok(())
    }

    /// Encode a point known to be well formed.
    #[inline]
    pub fn encode_unchecked(&self, point: &[u8]) -> usize {
        point
            .iter()
            .zip(&self.powers)
            .map(|(&s, &p)| s as usize * p)
            .sum()
    }

    /// Decode `index` (known to be < 3^n) into `out`, which holds n symbols.
    #[inline]
    pub fn decode_into(&self, index: usize, out: &mut [u8]) {
        let mut rem = index;
        for k in (0..self.n).rev() {
            out[k] = (rem % 3) as u8;
            rem /= 3;
        }
    }

    /// Index of the point (a.x + b.y) mod 3, coordinatewise.
    /// Coefficients are residues modulo 3: use MINUS for -1.
    #[inline]
    pub fn encode_combination2(&self, a: u8, x: &[u8], b: u8, y: &[u8]) -> usize {
        let mut index = 0;
        for k in 0..self.n {
            let s = (a * x[k] + b * y[k]) % 3;
            index += s as usize * self.powers[k];
        }
        index
    }

    /// Index of the point (a.x + b.y + c.z) mod 3, coordinatewise.
    #[inline]
    pub fn encode_combination3(&self, a: u8, x: &[u8], b: u8, y: &[u8], c: u8, z: &[u8]) -> usize {
        let mut index = 0;
        for k in 0..self.n {
            let s = (a * x[k] + b * y[k] + c * z[k]) % 3;
            index += s as usize * self.powers[k];
        }
        index
    }
}

/// Index of `point` in the grid of dimension `n`.
pub fn encode(point: &[u8], n: usize) -> Result<usize, SidonError> {
    Indexer::new(n)?.encode(point)
}

/// Point of the grid of dimension `n` at `index`.
pub fn decode(index: usize, n: usize) -> Result<Vec<u8>, SidonError> {
    Indexer::new(n)?.decode(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn powers_are_decreasing() {
        let indexer = Indexer::new(4).unwrap();
        assert_eq!(indexer.powers(), &[27, 9, 3, 1]);
        assert_eq!(indexer.size(), 81);
    }

    #[test]
    fn encode_known_points() {
        assert_eq!(encode(&[0, 0, 0], 3), Ok(0));
        assert_eq!(encode(&[0, 0, 1], 3), Ok(1));
        assert_eq!(encode(&[0, 1, 0], 3), Ok(3));
        assert_eq!(encode(&[1, 1, 1], 3), Ok(13));
        assert_eq!(encode(&[2, 2, 2], 3), Ok(26));
    }

    #[test]
    fn decode_then_encode_is_identity() {
        for n in 1..=6 {
            let indexer = Indexer::new(n).unwrap();
            for i in 0..indexer.size() {
                let p = indexer.decode(i).unwrap();
                assert_eq!(indexer.encode(&p), Ok(i), "n={} i={}", n, i);
            }
        }
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let indexer = Indexer::new(3).unwrap();
        for a in 0..3u8 {
            for b in 0..3u8 {
                for c in 0..3u8 {
                    let p = vec![a, b, c];
                    let i = indexer.encode(&p).unwrap();
                    assert_eq!(indexer.decode(i).unwrap(), p);
                }
            }
        }
    }

    #[test]
    fn malformed_input_is_invalid_argument() {
        let indexer = Indexer::new(3).unwrap();
        assert_eq!(
            indexer.encode(&[0, 1]),
            Err(SidonError::WrongPointLength { expected: 3, actual: 2 })
        );
        assert_eq!(
            indexer.encode(&[0, 3, 1]),
            Err(SidonError::SymbolOutOfRange { position: 1, symbol: 3 })
        );
        let err = indexer.decode(27).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Indexer::new(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn combinations_reduce_modulo_three() {
        let indexer = Indexer::new(3).unwrap();
        let x = [0, 1, 2];
        let y = [1, 1, 2];
        // -x - y = (-1, -2, -4) = (2, 1, 2) mod 3
        assert_eq!(indexer.encode_combination2(MINUS, &x, MINUS, &y), encode(&[2, 1, 2], 3).unwrap());
        // -x + y + z with z = (2, 0, 1): (3, 0, 1) = (0, 0, 1)
        let z = [2, 0, 1];
        assert_eq!(
            indexer.encode_combination3(MINUS, &x, PLUS, &y, PLUS, &z),
            encode(&[0, 0, 1], 3).unwrap()
        );
        // x + y - z: (-1, 2, 3) = (2, 2, 0)
        assert_eq!(
            indexer.encode_combination3(PLUS, &x, PLUS, &y, MINUS, &z),
            encode(&[2, 2, 0], 3).unwrap()
        );
    }
}
