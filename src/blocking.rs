/// Candidates to discard when a point is accepted
///
/// Let c be the new point and S the points accepted before it. Adding c must
/// not create:
///     - a 'line' with two points of S ∪ {c}: three distinct points x, y, z
///       with x + y + z = 0 (mod 3). For each s in S the third point of the
///       line through s and c is -s - c, which gets blocked. This forbids
///       2x = y + z, the pair sums sharing a repeated point.
///     - an affine coincidence with three points of S ∪ {c}: four distinct
///       points with x + y = z + w (mod 3). For each pair (i, j) of S, the
///       fourth point completing {i, j, c} is one of
///           -i + j + c     (d + i = j + c)
///            i - j + c     (d + j = i + c)
///            i + j - c     (d + c = i + j)
///       and all three get blocked.
/// Any four points of the final set contain a last-added one, and that point
/// was blocked when the third of the four was accepted: the set is free of
/// both patterns modulo 3, hence also over the integers.
///
/// The computation is a pure function of (S, c): the caller applies the
/// result to the priority table.

use crate::candidate_space::CandidateSpace;
use crate::indexer::{MINUS, PLUS};

/// Indexes blocked by one rule, for statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocking {
    pub own: usize,
    pub lines: Vec<usize>,
    pub affine: Vec<usize>,
}

impl Blocking {
    /// Every index to block, the accepted point itself included.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.own)
            .chain(self.lines.iter().copied())
            .chain(self.affine.iter().copied())
    }

    /// Number of indexes to block, duplicates included.
    pub fn count(&self) -> usize {
        1 + self.lines.len() + self.affine.len()
    }
}

/// Blocking set for accepting `candidate` after the points `accepted`
/// (all given as indexes into `space`). `accepted` must not contain
/// `candidate`.
pub fn compute_blocking(space: &CandidateSpace, accepted: &[usize], candidate: usize) -> Blocking {
    let indexer = space.indexer();
    let c = space.point(candidate);

    let lines: Vec<usize> = accepted
        .iter()
        .map(|&s| indexer.encode_combination2(MINUS, space.point(s), MINUS, c))
        .collect();

    let k = accepted.len();
    let mut affine = Vec::with_capacity(3 * k * k.saturating_sub(1) / 2);
    for (a, &i) in accepted.iter().enumerate() {
        let pi = space.point(i);
        for &j in &accepted[a + 1..] {
            let pj = space.point(j);
            affine.push(indexer.encode_combination3(MINUS, pi, PLUS, pj, PLUS, c));
            affine.push(indexer.encode_combination3(PLUS, pi, MINUS, pj, PLUS, c));
            affine.push(indexer.encode_combination3(PLUS, pi, PLUS, pj, MINUS, c));
        }
    }

    Blocking { own: candidate, lines, affine }
}

/// Same as 'compute_blocking', starting from points instead of indexes.
/// The points must be well formed for the dimension of `space`.
pub fn blocked_indexes(space: &CandidateSpace, accepted: &[&[u8]], candidate: &[u8]) -> Vec<usize> {
    let indexer = space.indexer();
    let accepted: Vec<usize> = accepted.iter().map(|p| indexer.encode_unchecked(p)).collect();
    compute_blocking(space, &accepted, indexer.encode_unchecked(candidate))
        .indexes()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::indexer::encode;

    fn space(n: usize) -> CandidateSpace {
        CandidateSpace::enumerate(n, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn empty_set_blocks_only_the_point_itself() {
        let space = space(3);
        let b = compute_blocking(&space, &[], 5);
        assert_eq!(b.indexes().collect::<Vec<_>>(), vec![5]);
        assert_eq!(b.count(), 1);
    }

    #[test]
    fn dimension_one_second_pick_blocks_the_last_symbol() {
        // accepted (0,), new point (1,): -0 - 1 = 2 mod 3
        let space = space(1);
        let b = compute_blocking(&space, &[0], 1);
        assert_eq!(b.lines, vec![2]);
        assert!(b.affine.is_empty());
    }

    #[test]
    fn one_prior_point_has_no_pairs() {
        let space = space(2);
        let b = compute_blocking(&space, &[0], 4);
        assert_eq!(b.lines.len(), 1);
        assert!(b.affine.is_empty());
    }

    #[test]
    fn pair_rules_follow_the_modular_combinations() {
        let space = space(2);
        let i = encode(&[0, 1], 2).unwrap();
        let j = encode(&[2, 2], 2).unwrap();
        let c = encode(&[1, 0], 2).unwrap();
        let b = compute_blocking(&space, &[i, j], c);
        // -i - c = (-1, -1) = (2, 2) ; -j - c = (-3, -2) = (0, 1)
        assert_eq!(b.lines, vec![encode(&[2, 2], 2).unwrap(), encode(&[0, 1], 2).unwrap()]);
        assert_eq!(
            b.affine,
            vec![
                encode(&[0, 1], 2).unwrap(), // -i + j + c = (3, 1)
                encode(&[2, 2], 2).unwrap(), // i - j + c = (-1, -1)
                encode(&[1, 0], 2).unwrap(), // i + j - c = (1, 3)
            ]
        );
    }

    #[test]
    fn pair_count_is_quadratic() {
        let space = space(4);
        let accepted = [0, 1, 3, 9, 13];
        let b = compute_blocking(&space, &accepted, 27);
        assert_eq!(b.lines.len(), 5);
        assert_eq!(b.affine.len(), 3 * 10);
    }

    #[test]
    fn blocked_points_complete_a_forbidden_pattern() {
        let space = space(3);
        let accepted = [0usize, 1, 3];
        let c = 9usize;
        let b = compute_blocking(&space, &accepted, c);
        let sum = |xs: &[usize]| -> Vec<u8> {
            let mut acc = vec![0u8; 3];
            for &x in xs {
                for (a, &s) in acc.iter_mut().zip(space.point(x)) {
                    *a = (*a + s) % 3;
                }
            }
            acc
        };
        for (&s, &d) in accepted.iter().zip(&b.lines) {
            assert_eq!(sum(&[s, c, d]), vec![0, 0, 0]);
        }
        for d in b.affine.iter().copied() {
            let completes = accepted.iter().enumerate().any(|(a, &i)| {
                accepted[a + 1..].iter().any(|&j| {
                    sum(&[d, i]) == sum(&[j, c])
                        || sum(&[d, j]) == sum(&[i, c])
                        || sum(&[d, c]) == sum(&[i, j])
                })
            });
            assert!(completes, "index {} blocked for no reason", d);
        }
    }

    #[test]
    fn point_and_index_entry_points_agree() {
        let space = space(2);
        let accepted: Vec<&[u8]> = vec![space.point(0), space.point(1)];
        let from_points = blocked_indexes(&space, &accepted, space.point(3));
        let from_indexes: Vec<usize> = compute_blocking(&space, &[0, 1], 3).indexes().collect();
        assert_eq!(from_points, from_indexes);
    }
}
