/// Scores of all candidates, and the set of candidates that can no longer
/// be selected
///
/// Invariants:
///     - a blocked index stays blocked: there is no 'unblock'
///     - 'remaining' is the number of indexes not blocked
///     - the best candidate is the unblocked index of highest score, and on
///       equal scores the lowest index (see 'rank_cmp')
///
/// Scores never change once computed, so the table sorts the indexes by rank
/// once, and the search for the best candidate walks this order with a
/// cursor that only moves forward: over a whole run, finding the best
/// candidate costs one pass over the table instead of one pass per pick.

use std::cmp::Ordering;

use crate::candidate_space::CandidateSpace;
use crate::scorer::Scorer;

/// Ranking of two candidates (index, score): Less means `a` is picked first.
/// Higher score first, then lower index first. Scores must be finite.
pub fn rank_cmp(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then(a.0.cmp(&b.0))
}

/// True if candidate `a` is picked before candidate `b`.
pub fn outranks(a: (usize, f64), b: (usize, f64)) -> bool {
    rank_cmp(a, b) == Ordering::Less
}

pub struct PriorityTable {
    scores: Vec<f64>,
    blocked: Vec<bool>,
    order: Vec<usize>,  // finite-score indexes, best first
    cursor: usize,      // order[..cursor] is entirely blocked
    remaining: usize,
    non_finite: usize,
}

impl PriorityTable {
    /// Score every candidate of the space with `scorer`.
    pub fn from_scorer<S: Scorer + ?Sized>(space: &CandidateSpace, scorer: &S) -> Self {
        let n = space.dimension();
        let scores: Vec<f64> = space.iter().map(|p| scorer.priority(p, n)).collect();
        Self::from_scores(scores)
    }

    /// Build a table from precomputed scores (score of index i at position i).
    /// NaN and infinite scores are blocked right away: they are never selected.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let blocked: Vec<bool> = scores.iter().map(|s| !s.is_finite()).collect();
        let non_finite = blocked.iter().filter(|&&b| b).count();
        let mut order: Vec<usize> = (0..scores.len()).filter(|&i| !blocked[i]).collect();
        order.sort_by(|&a, &b| rank_cmp((a, scores[a]), (b, scores[b])));
        Self {
            remaining: scores.len() - non_finite,
            scores,
            blocked,
            order,
            cursor: 0,
            non_finite,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score(&self, index: usize) -> f64 {
        self.scores[index]
    }

    pub fn is_blocked(&self, index: usize) -> bool {
        self.blocked[index]
    }

    /// Number of candidates that can still be selected.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Number of candidates blocked at construction for a NaN or infinite score.
    pub fn non_finite_count(&self) -> usize {
        self.non_finite
    }

    /// Block one index. Returns true if it was not blocked before.
    pub fn block(&mut self, index: usize) -> bool {
        if self.blocked[index] {
            return false;
        }
        self.blocked[index] = true;
        self.remaining -= 1;
        true
    }

    /// Block every index of `indexes`. Returns how many were newly blocked.
    pub fn block_all<I: IntoIterator<Item = usize>>(&mut self, indexes: I) -> usize {
        indexes.into_iter().filter(|&i| self.block(i)).count()
    }

    /// Best unblocked candidate, or None when every candidate is blocked.
    pub fn best(&mut self) -> Option<usize> {
        while self.cursor < self.order.len() && self.blocked[self.order[self.cursor]] {
            self.cursor += 1;
        }
        self.order.get(self.cursor).copied()
    }
}
