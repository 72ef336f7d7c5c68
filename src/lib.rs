pub mod binding;
pub mod closed_world;
pub mod config;
pub mod debug;
pub mod error;
pub mod facts;
pub mod gain;
pub mod parse;
pub mod pretty;
pub mod search;
pub mod text;
pub mod util;

#[cfg(test)]
pub mod test;

pub use config::Config;
pub use error::Error;
pub use facts::FactStore;
pub use text::Text;

pub type Predicate = Text;
pub type Constant = Text;

/// Rule-scoped variable, numbered in order of introduction.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy)]
pub struct Variable(pub u16);

#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy)]
pub enum Term {
    Constant(Constant),
    Variable(Variable),
}

/// A ground atom: predicate applied to constants.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone)]
pub struct Fact {
    pub predicate: Predicate,
    pub args: Vec<Constant>,
}

/// A predicate applied to terms, possibly containing variables.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone)]
pub struct Literal {
    pub predicate: Predicate,
    pub args: Vec<Term>,
}

/// Horn clause `body -> head`. An empty body holds unconditionally.
#[derive(Hash, Eq, PartialEq, Clone)]
pub struct Rule {
    head: Literal,
    body: Vec<Literal>,
}

/// A parsed input document: the facts, in input order, and the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub facts: Vec<Fact>,
    pub target: Predicate,
}

impl Fact {
    pub fn new(predicate: Predicate, args: Vec<Constant>) -> Self {
        Self { predicate, args }
    }
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl Literal {
    pub fn new(predicate: Predicate, args: Vec<Term>) -> Self {
        Self { predicate, args }
    }
    pub fn arity(&self) -> usize {
        self.args.len()
    }
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.args.iter().filter_map(|term| match term {
            Term::Variable(v) => Some(*v),
            Term::Constant(_) => None,
        })
    }
}

impl From<&Fact> for Literal {
    fn from(fact: &Fact) -> Self {
        Self {
            predicate: fact.predicate,
            args: fact.args.iter().copied().map(Term::Constant).collect(),
        }
    }
}

impl Rule {
    /// The most general rule for `target`: one distinct variable per argument,
    /// empty body. `arity` is at most [`facts::MAX_ARITY`] for any predicate
    /// that made it into a [`FactStore`].
    pub fn most_general(target: Predicate, arity: usize) -> Self {
        let args = (0..=u16::MAX).take(arity).map(|i| Term::Variable(Variable(i))).collect();
        Self { head: Literal::new(target, args), body: Vec::new() }
    }
    pub fn new(head: Literal, body: Vec<Literal>) -> Self {
        Self { head, body }
    }
    pub fn head(&self) -> &Literal {
        &self.head
    }
    pub fn body(&self) -> &[Literal] {
        &self.body
    }
    /// This rule with `literal` appended to its body. `self` is untouched.
    pub fn extended(&self, literal: Literal) -> Self {
        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.extend(self.body.iter().cloned());
        body.push(literal);
        Self { head: self.head.clone(), body }
    }
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        std::iter::once(&self.head).chain(self.body.iter())
    }
    /// Distinct variables, head first, in order of first occurrence.
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = util::VecSet::default();
        seen.extend(self.literals().flat_map(|literal| literal.variables()));
        seen.into_vec()
    }
    /// A variable not occurring anywhere in this rule.
    pub fn fresh_variable(&self) -> Variable {
        let next = self
            .literals()
            .flat_map(|literal| literal.variables())
            .map(|Variable(v)| v + 1)
            .max()
            .unwrap_or(0);
        Variable(next)
    }
}

/// Parses an input document, learns one rule for its target predicate and
/// renders the single output line.
pub fn run(source: &str, config: &Config) -> Result<String, Error> {
    let problem = parse::problem(source)?;
    let store = FactStore::from_facts(&problem.facts)?;
    if store.is_empty() {
        log::warn!("no background facts given");
    }
    log::debug!(
        "{} facts, {} predicates, {} constants",
        store.len(),
        store.predicates().len(),
        store.constants().len()
    );
    let learned = search::learn_rule(&store, problem.target, config)?;
    Ok(pretty::render_outcome(learned.as_ref().map(|learned| &learned.rule)))
}
