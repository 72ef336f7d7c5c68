use crate::binding::BindingStrategy;
use crate::facts::FactStore;
use crate::{Fact, Literal, Rule};

/// How many positive and negative examples a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    pub positives: usize,
    pub negatives: usize,
}

impl Coverage {
    pub fn new(positives: usize, negatives: usize) -> Self {
        Self { positives, negatives }
    }
    fn total(self) -> usize {
        self.positives + self.negatives
    }
    /// Bits needed to signal that a covered example is positive.
    fn information(self) -> f64 {
        -(self.positives as f64 / self.total() as f64).log2()
    }
}

/// FOIL gain of going from `before` to `after` coverage:
/// `p1 * (log2(p1 / (p1 + n1)) - log2(p0 / (p0 + n0)))`.
///
/// Zero whenever either side covers no positives.
pub fn information_gain(before: Coverage, after: Coverage) -> f64 {
    if before.positives == 0 || after.positives == 0 {
        return 0.0;
    }
    after.positives as f64 * (before.information() - after.information())
}

/// Gain of appending `candidate` to `rule`, where `pos` and `neg` are the
/// examples `rule` currently covers.
pub fn foil_gain(
    store: &FactStore,
    strategy: BindingStrategy,
    rule: &Rule,
    candidate: &Literal,
    pos: &[Fact],
    neg: &[Fact],
) -> f64 {
    let before = Coverage::new(pos.len(), neg.len());
    if before.positives == 0 {
        return 0.0;
    }
    let extended = rule.extended(candidate.clone());
    let covered = |examples: &[Fact]| {
        examples.iter().filter(|ex| strategy.covers(store, &extended, ex)).count()
    };
    let positives = covered(pos);
    if positives == 0 {
        return 0.0;
    }
    information_gain(before, Coverage::new(positives, covered(neg)))
}
