//! Deciding whether a rule covers a ground example of its head relation.

use crate::facts::FactStore;
use crate::{Constant, Fact, Literal, Rule, Term, Variable};
use std::collections::HashMap;

/// How body literals are matched against the fact store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingStrategy {
    /// Each body literal commits to its first consistent tuple, left to
    /// right, and is never revisited. Fast, but incomplete: an early choice
    /// can block a later literal that another choice would have satisfied.
    #[default]
    Greedy,
    /// Depth-first search over tuple choices. Covers iff some consistent
    /// grounding of the whole body exists.
    Backtracking,
}

/// Variable assignments with an undo trail.
#[derive(Debug, Default, Clone)]
pub struct Binding {
    assignments: HashMap<Variable, Constant>,
    trail: Vec<Variable>,
}

impl Binding {
    pub fn get(&self, var: Variable) -> Option<Constant> {
        self.assignments.get(&var).copied()
    }
    /// Binds `var` if unbound; otherwise checks it is already bound to `value`.
    fn assign(&mut self, var: Variable, value: Constant) -> bool {
        if let Some(existing) = self.get(var) {
            existing == value
        } else {
            self.assignments.insert(var, value);
            self.trail.push(var);
            true
        }
    }
    fn mark(&self) -> usize {
        self.trail.len()
    }
    fn undo_to(&mut self, mark: usize) {
        for var in self.trail.drain(mark..) {
            self.assignments.remove(&var);
        }
    }
}

impl Term {
    fn consistently_assign(&self, concrete: Constant, binding: &mut Binding) -> bool {
        match self {
            Term::Variable(v) => binding.assign(*v, concrete),
            Term::Constant(c) => *c == concrete,
        }
    }
}

impl Literal {
    /// Unifies this literal with one stored tuple. On failure `binding` is
    /// left as it was.
    fn consistently_assign(&self, tuple: &[Constant], binding: &mut Binding) -> bool {
        if self.args.len() != tuple.len() {
            return false;
        }
        let mark = binding.mark();
        let consistent =
            self.args.iter().zip(tuple).all(|(arg, &c)| arg.consistently_assign(c, binding));
        if !consistent {
            binding.undo_to(mark);
        }
        consistent
    }
}

impl Rule {
    /// Seeds a binding from the head, positionally. Constant head arguments
    /// are ignored. `None` if a repeated head variable would take two values.
    fn seed_binding(&self, example: &Fact) -> Option<Binding> {
        let mut binding = Binding::default();
        for (arg, &value) in self.head().args.iter().zip(&example.args) {
            if let Term::Variable(v) = arg {
                if !binding.assign(*v, value) {
                    return None;
                }
            }
        }
        Some(binding)
    }
}

impl BindingStrategy {
    /// Does `rule`, with its head bound to `example`, derive `example` from
    /// the facts in `store`?
    pub fn covers(self, store: &FactStore, rule: &Rule, example: &Fact) -> bool {
        self.witness(store, rule, example).is_some()
    }

    /// The binding that satisfied the body, if any.
    pub fn witness(self, store: &FactStore, rule: &Rule, example: &Fact) -> Option<Binding> {
        let mut binding = rule.seed_binding(example)?;
        let satisfied = match self {
            Self::Greedy => greedy(store, rule.body(), &mut binding),
            Self::Backtracking => backtrack(store, rule.body(), &mut binding),
        };
        satisfied.then_some(binding)
    }
}

fn greedy(store: &FactStore, body: &[Literal], binding: &mut Binding) -> bool {
    body.iter().all(|literal| {
        store.lookup(literal.predicate).iter().any(|tuple| literal.consistently_assign(tuple, binding))
    })
}

fn backtrack(store: &FactStore, body: &[Literal], binding: &mut Binding) -> bool {
    let Some((literal, rest)) = body.split_first() else {
        return true;
    };
    for tuple in store.lookup(literal.predicate) {
        let mark = binding.mark();
        if literal.consistently_assign(tuple, binding) {
            if backtrack(store, rest, binding) {
                return true;
            }
            binding.undo_to(mark);
        }
    }
    false
}
