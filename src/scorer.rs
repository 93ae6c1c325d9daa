/// Priority functions for the greedy construction
///
/// A scorer ranks every candidate once, before the first selection: the
/// greedy loop always takes the unblocked candidate with the highest score.
/// A scorer must therefore be a pure function of (point, n): it may not
/// depend on what has been accepted so far, nor on the order of the calls.
///
/// The baseline scorer is constant, which leaves the choice entirely to the
/// tie-break (lowest index first). Better heuristics are plugged in from the
/// outside, either as a type implementing Scorer or as a plain closure.

pub trait Scorer {
    /// Priority of `point` (n symbols in {0,1,2}). Higher is picked first.
    fn priority(&self, point: &[u8], n: usize) -> f64;

    /// Name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Scores every point with the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScorer {
    pub value: f64,
}

impl Default for ConstantScorer {
    fn default() -> Self {
        Self { value: 0.0 }
    }
}

impl Scorer for ConstantScorer {
    fn priority(&self, _point: &[u8], _n: usize) -> f64 {
        self.value
    }

    fn name(&self) -> &str {
        "constant"
    }
}

impl<F> Scorer for F
where
    F: Fn(&[u8], usize) -> f64,
{
    fn priority(&self, point: &[u8], n: usize) -> f64 {
        self(point, n)
    }
}

/// A closure with a name attached, for reporting.
pub struct NamedScorer<F> {
    name: String,
    f: F,
}

impl<F> NamedScorer<F>
where
    F: Fn(&[u8], usize) -> f64,
{
    pub fn new(name: &str, f: F) -> Self {
        Self { name: name.to_string(), f }
    }
}

impl<F> Scorer for NamedScorer<F>
where
    F: Fn(&[u8], usize) -> f64,
{
    fn priority(&self, point: &[u8], n: usize) -> f64 {
        (self.f)(point, n)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
