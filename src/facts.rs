use crate::error::FactStoreError;
use crate::util::VecSet;
use crate::{Constant, Fact, Predicate};
use std::collections::HashMap;

/// Largest accepted arity. Rule variables are `u16`, and a rule needs room
/// for body variables beyond the head's.
pub const MAX_ARITY: usize = u16::MAX as usize / 2;

/// All tuples of one predicate, in insertion order. Duplicates are kept.
#[derive(Debug, Clone)]
pub struct Relation {
    pub predicate: Predicate,
    pub arity: usize,
    pub tuples: Vec<Vec<Constant>>,
}

/// The background knowledge: ground facts indexed by predicate, plus the
/// universe of constants seen in any argument position.
///
/// Filled once, then only read; the search takes it by shared reference.
#[derive(Debug, Default, Clone)]
pub struct FactStore {
    relations_iterable: Vec<Relation>,
    relations_findable: HashMap<Predicate, usize>,
    constants: VecSet<Constant>,
    len: usize,
}

impl FactStore {
    pub fn from_facts<'a>(
        facts: impl IntoIterator<Item = &'a Fact>,
    ) -> Result<Self, FactStoreError> {
        let mut store = Self::default();
        for fact in facts {
            store.add_fact(fact.predicate, fact.args.clone())?;
        }
        Ok(store)
    }

    /// Appends a fact. The first fact of a predicate fixes its arity; facts
    /// of another arity, or wider than [`MAX_ARITY`], are rejected and leave
    /// the store unchanged.
    pub fn add_fact(
        &mut self,
        predicate: Predicate,
        args: Vec<Constant>,
    ) -> Result<(), FactStoreError> {
        if args.len() > MAX_ARITY {
            return Err(FactStoreError::ArityTooLarge {
                predicate,
                arity: args.len(),
                max: MAX_ARITY,
            });
        }
        let idx = match self.relations_findable.get(&predicate) {
            Some(&idx) => {
                let expected = self.relations_iterable[idx].arity;
                if expected != args.len() {
                    return Err(FactStoreError::ArityMismatch {
                        predicate,
                        expected,
                        found: args.len(),
                    });
                }
                idx
            }
            None => {
                let idx = self.relations_iterable.len();
                self.relations_iterable.push(Relation {
                    predicate,
                    arity: args.len(),
                    tuples: Vec::new(),
                });
                self.relations_findable.insert(predicate, idx);
                idx
            }
        };
        self.constants.extend(args.iter().copied());
        self.relations_iterable[idx].tuples.push(args);
        self.len += 1;
        Ok(())
    }

    /// Argument tuples of `predicate`; empty if it was never seen.
    pub fn lookup(&self, predicate: Predicate) -> &[Vec<Constant>] {
        match self.relation(predicate) {
            Some(relation) => &relation.tuples,
            None => &[],
        }
    }

    pub fn relation(&self, predicate: Predicate) -> Option<&Relation> {
        self.relations_findable.get(&predicate).map(|&idx| &self.relations_iterable[idx])
    }

    pub fn arity(&self, predicate: Predicate) -> Option<usize> {
        self.relation(predicate).map(|relation| relation.arity)
    }

    /// Relations in the order their predicate was first seen.
    pub fn predicates(&self) -> &[Relation] {
        &self.relations_iterable
    }

    /// The constant universe, sorted by name.
    pub fn constants(&self) -> Vec<Constant> {
        let mut constants = self.constants.as_slice().to_vec();
        constants.sort_by_key(|c| c.as_str());
        constants
    }

    /// Number of stored facts, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
