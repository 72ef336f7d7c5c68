//! Positive and negative examples of the target relation under the
//! closed-world assumption: whatever is not stated is false.

use crate::facts::FactStore;
use crate::util::Tuples;
use crate::{Constant, Fact, Predicate};
use std::collections::HashSet;

/// Arity assumed for a target predicate with no stored facts at all.
pub const FALLBACK_ARITY: usize = 2;

/// Every stored fact of `target`, in insertion order, duplicates included.
pub fn positive_examples(store: &FactStore, target: Predicate) -> Vec<Fact> {
    store.lookup(target).iter().map(|args| Fact::new(target, args.clone())).collect()
}

/// Arity of the target relation, or [`FALLBACK_ARITY`] when it is unseen.
pub fn target_arity(store: &FactStore, target: Predicate) -> usize {
    store.arity(target).unwrap_or(FALLBACK_ARITY)
}

/// Every ground instance of `target` over the constant universe that is not a
/// positive example, lazily, in lexicographic order over the sorted universe.
pub fn negative_examples(store: &FactStore, target: Predicate) -> NegativeExamples {
    let positives = store.lookup(target).iter().cloned().collect();
    NegativeExamples {
        target,
        positives,
        tuples: Tuples::new(store.constants(), target_arity(store, target)),
    }
}

/// Lazy closed-world enumeration, see [`negative_examples`].
pub struct NegativeExamples {
    target: Predicate,
    positives: HashSet<Vec<Constant>>,
    tuples: Tuples<Constant>,
}

impl Iterator for NegativeExamples {
    type Item = Fact;
    fn next(&mut self) -> Option<Fact> {
        let positives = &self.positives;
        let args = self.tuples.find(|args| !positives.contains(args))?;
        Some(Fact::new(self.target, args))
    }
}
