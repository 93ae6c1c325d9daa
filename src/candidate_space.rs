/// The materialized grid {0,1,2}^n
///
/// All 3^n points are stored in one flat buffer of symbols, point after
/// point, in index order: the point at position i encodes to i. Every later
/// step addresses candidates by their index only, so this ordering is what
/// makes the index arithmetic of the blocking step valid.
///
/// This buffer (3^n . n bytes) is the dominant memory cost of a run and the
/// reason why the dimension is bounded (see config.rs).

use crate::config::SolverConfig;
use crate::errors::SidonError;
use crate::indexer::Indexer;

pub struct CandidateSpace {
    indexer: Indexer,
    symbols: Vec<u8>,
}

impl CandidateSpace {
    /// Enumerate all points of dimension `n`, after checking the run is feasible.
    pub fn enumerate(n: usize, config: &SolverConfig) -> Result<Self, SidonError> {
        config.check_feasible(n)?;
        let indexer = Indexer::new(n)?;
        let size = indexer.size();
        let mut symbols = vec![0u8; size * n];
        // odometer: each point is the previous one plus 1 in base 3
        for i in 1..size {
            let (prev, cur) = symbols.split_at_mut(i * n);
            let cur = &mut cur[..n];
            cur.copy_from_slice(&prev[(i - 1) * n..]);
            for k in (0..n).rev() {
                if cur[k] == 2 {
                    cur[k] = 0;
                } else {
                    cur[k] += 1;
                    break;
                }
            }
        }
        Ok(Self { indexer, symbols })
    }

    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    pub fn dimension(&self) -> usize {
        self.indexer.dimension()
    }

    pub fn len(&self) -> usize {
        self.indexer.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbols of the point at `index` (index < 3^n).
    #[inline]
    pub fn point(&self, index: usize) -> &[u8] {
        let n = self.dimension();
        &self.symbols[index * n..(index + 1) * n]
    }

    /// All points in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.symbols.chunks_exact(self.dimension())
    }
}
