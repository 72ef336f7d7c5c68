//! Internal-form rendering for logs and test failures: variables print as
//! `?0`, `?1`, and rules as `head :- body`.

use crate::{Fact, Literal, Rule, Term, Variable};
use std::fmt::{Debug, Formatter, Result as FmtResult};

impl Debug for Variable {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "?{}", self.0)
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Constant(c) => c.fmt(f),
            Self::Variable(v) => v.fmt(f),
        }
    }
}

fn write_application<T: Debug>(f: &mut Formatter, predicate: &impl Debug, args: &[T]) -> FmtResult {
    write!(f, "{:?}(", predicate)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", arg)?;
    }
    write!(f, ")")
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_application(f, &self.predicate, &self.args)
    }
}

impl Debug for Fact {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write_application(f, &self.predicate, &self.args)
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{:?}", self.head())?;
        if !self.body().is_empty() {
            write!(f, " :- ")?;
            for (i, literal) in self.body().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", literal)?;
            }
        }
        Ok(())
    }
}
