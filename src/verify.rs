/// Independent checks of a constructed set
///
/// These functions do not reuse the blocking logic: they look at the final
/// points only, the way one would check a set found by any other method.
///     - 'check_distinct_sums': p + q != r + s over the integers for any two
///       different pairs of distinct points
///     - 'find_line': no three distinct points with x + y + z = 0 (mod 3)
///     - 'find_affine_coincidence': no four distinct points with
///       x + y = z + w (mod 3)
///     - 'check_maximal': every point of the grid outside the set would
///       create one of the two patterns above
/// Points are positions in the set (0 = first accepted).

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::indexer::{Indexer, MINUS, PLUS};
use crate::selector::Solution;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("points {0} + {1} and {2} + {3} have the same sum")]
    EqualSums(usize, usize, usize, usize),

    #[error("points {0}, {1}, {2} lie on a line (sum = 0 mod 3)")]
    Line(usize, usize, usize),

    #[error("points {0} + {1} = {2} + {3} (mod 3)")]
    AffineCoincidence(usize, usize, usize, usize),

    #[error("grid point {0} can be added without breaking any rule")]
    NotMaximal(usize),

    #[error("set contains the grid point {0} twice")]
    Duplicate(usize),

    #[error("no grid of dimension {0}")]
    InvalidDimension(usize),
}

/// Coordinatewise integer sums of all pairs of distinct points are distinct.
pub fn check_distinct_sums(points: &[Vec<u8>]) -> Result<(), Violation> {
    let mut seen: HashMap<Vec<u8>, (usize, usize)> = HashMap::new();
    for (a, p) in points.iter().enumerate() {
        for (b, q) in points.iter().enumerate().skip(a + 1) {
            let sum: Vec<u8> = p.iter().zip(q).map(|(x, y)| x + y).collect();
            if let Some(&(r, s)) = seen.get(&sum) {
                return Err(Violation::EqualSums(r, s, a, b));
            }
            seen.insert(sum, (a, b));
        }
    }
    Ok(())
}

/// First triple of distinct points summing to 0 modulo 3, if any.
pub fn find_line(indexer: &Indexer, points: &[Vec<u8>]) -> Option<(usize, usize, usize)> {
    let position: HashMap<usize, usize> = points
        .iter()
        .enumerate()
        .map(|(a, p)| (indexer.encode_unchecked(p), a))
        .collect();
    for (a, p) in points.iter().enumerate() {
        for (b, q) in points.iter().enumerate().skip(a + 1) {
            let third = indexer.encode_combination2(MINUS, p, MINUS, q);
            if let Some(&c) = position.get(&third) {
                if c != a && c != b {
                    return Some((a, b, c));
                }
            }
        }
    }
    None
}

/// First two disjoint pairs with the same sum modulo 3, if any.
pub fn find_affine_coincidence(indexer: &Indexer, points: &[Vec<u8>])
    -> Option<(usize, usize, usize, usize)> {
    let zero = vec![0u8; indexer.dimension()];
    let mut seen: HashMap<usize, (usize, usize)> = HashMap::new();
    for (a, p) in points.iter().enumerate() {
        for (b, q) in points.iter().enumerate().skip(a + 1) {
            let sum = indexer.encode_combination3(PLUS, p, PLUS, q, PLUS, &zero);
            if let Some(&(c, d)) = seen.get(&sum) {
                // pairs sharing a point cannot collide between distinct points
                if c != a && c != b && d != a && d != b {
                    return Some((c, d, a, b));
                }
            } else {
                seen.insert(sum, (a, b));
            }
        }
    }
    None
}

/// Every grid point outside the set completes a line or an affine
/// coincidence with points of the set.
pub fn check_maximal(indexer: &Indexer, points: &[Vec<u8>]) -> Result<(), Violation> {
    let zero = vec![0u8; indexer.dimension()];
    let members: Vec<usize> = points.iter().map(|p| indexer.encode_unchecked(p)).collect();
    let mut pair_sums = HashSet::new();
    for (a, p) in points.iter().enumerate() {
        for q in &points[a + 1..] {
            pair_sums.insert(indexer.encode_combination3(PLUS, p, PLUS, q, PLUS, &zero));
        }
    }
    let mut d = vec![0u8; indexer.dimension()];
    for index in 0..indexer.size() {
        if members.contains(&index) {
            continue;
        }
        indexer.decode_into(index, &mut d);
        let blocked = points.iter().any(|s| {
            // d completes a line through s, or d + s is already a pair sum
            members.contains(&indexer.encode_combination2(MINUS, &d, MINUS, s))
                || pair_sums.contains(&indexer.encode_combination3(PLUS, &d, PLUS, s, PLUS, &zero))
        });
        if !blocked {
            return Err(Violation::NotMaximal(index));
        }
    }
    Ok(())
}

/// Run every check on a solution.
pub fn verify_solution(solution: &Solution) -> Result<(), Violation> {
    let indexer = Indexer::new(solution.n).map_err(|_| Violation::InvalidDimension(solution.n))?;
    let mut sorted = solution.indexes.clone();
    sorted.sort_unstable();
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(Violation::Duplicate(w[0]));
    }
    check_distinct_sums(&solution.points)?;
    if let Some((a, b, c)) = find_line(&indexer, &solution.points) {
        return Err(Violation::Line(a, b, c));
    }
    if let Some((a, b, c, d)) = find_affine_coincidence(&indexer, &solution.points) {
        return Err(Violation::AffineCoincidence(a, b, c, d));
    }
    check_maximal(&indexer, &solution.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::scorer::ConstantScorer;
    use crate::selector::solve_with;

    #[test]
    fn equal_integer_sums_are_found() {
        // (0,0) + (2,2) = (0,2) + (2,0)
        let points = vec![vec![0, 0], vec![0, 2], vec![2, 2], vec![2, 0]];
        assert_eq!(check_distinct_sums(&points), Err(Violation::EqualSums(0, 2, 1, 3)));
        assert_eq!(check_distinct_sums(&points[..3]), Ok(()));
    }

    #[test]
    fn lines_are_found() {
        let indexer = Indexer::new(2).unwrap();
        // (0,0), (1,1), (2,2) sum to (3,3) = 0
        let points = vec![vec![0, 0], vec![1, 0], vec![1, 1], vec![2, 2]];
        assert_eq!(find_line(&indexer, &points), Some((0, 2, 3)));
        assert_eq!(find_line(&indexer, &points[..3]), None);
    }

    #[test]
    fn affine_coincidences_are_found() {
        let indexer = Indexer::new(2).unwrap();
        // (0,1) + (2,0) = (2,1) = (1,1) + (1,0)
        let points = vec![vec![0, 1], vec![2, 0], vec![1, 1], vec![1, 0]];
        assert_eq!(find_affine_coincidence(&indexer, &points), Some((0, 1, 2, 3)));
    }

    #[test]
    fn small_sets_are_not_maximal() {
        let indexer = Indexer::new(2).unwrap();
        assert_eq!(check_maximal(&indexer, &[vec![0, 0]]), Err(Violation::NotMaximal(1)));
    }

    #[test]
    fn greedy_results_pass_every_check() {
        for n in 1..=5 {
            let solution = solve_with(n, &ConstantScorer::default(), &SolverConfig::default())
                .unwrap();
            assert_eq!(verify_solution(&solution), Ok(()), "dimension {}", n);
        }
    }

    #[test]
    fn greedy_results_with_a_real_scorer_pass_every_check() {
        let scorer = |p: &[u8], _n: usize| {
            p.iter().enumerate().map(|(k, &s)| ((k + 1) * s as usize % 5) as f64).sum::<f64>()
        };
        for n in 2..=5 {
            let solution = solve_with(n, &scorer, &SolverConfig::default()).unwrap();
            assert_eq!(verify_solution(&solution), Ok(()), "dimension {}", n);
        }
    }
}
