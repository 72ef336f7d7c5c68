//! Human-readable rendering of learned rules.

use crate::{Literal, Rule, Term, Variable};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Printed instead of a rule when the target has no positive examples.
pub const NO_RULE_FOUND: &str = "未找到规则";

/// Readable names for a rule's variables: `x`, `y`, `z`, then `v3`, `v4`, …
/// in order of first occurrence, head first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableNames {
    names: HashMap<Variable, String>,
}

impl VariableNames {
    pub fn for_rule(rule: &Rule) -> Self {
        let names = rule
            .variables()
            .into_iter()
            .enumerate()
            .map(|(i, var)| {
                let name = match i {
                    0 => "x".to_owned(),
                    1 => "y".to_owned(),
                    2 => "z".to_owned(),
                    n => format!("v{n}"),
                };
                (var, name)
            })
            .collect();
        Self { names }
    }
    pub fn get(&self, var: Variable) -> Option<&str> {
        self.names.get(&var).map(String::as_str)
    }
}

pub struct Pretty<'a, T> {
    pub t: &'a T,
    pub names: &'a VariableNames,
}

impl Display for Pretty<'_, Term> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.t {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Variable(v) => match self.names.get(*v) {
                Some(name) => f.write_str(name),
                None => write!(f, "{:?}", v),
            },
        }
    }
}

impl Display for Pretty<'_, Literal> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}(", self.t.predicate)?;
        for (i, arg) in self.t.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Pretty { t: arg, names: self.names })?;
        }
        write!(f, ")")
    }
}

impl Display for Pretty<'_, Rule> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, literal) in self.t.body().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Pretty { t: literal, names: self.names })?;
        }
        if !self.t.body().is_empty() {
            write!(f, " -> ")?;
        }
        write!(f, "{}", Pretty { t: self.t.head(), names: self.names })
    }
}

/// `body -> head` with readable variable names, or just `head`.
pub fn render(rule: &Rule) -> String {
    let names = VariableNames::for_rule(rule);
    Pretty { t: rule, names: &names }.to_string()
}

/// The single output line of a run.
pub fn render_outcome(rule: Option<&Rule>) -> String {
    match rule {
        Some(rule) => render(rule),
        None => NO_RULE_FOUND.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;

    fn t(s: &str) -> Text {
        Text::from_str(s)
    }
    fn v(i: u16) -> Term {
        Term::Variable(Variable(i))
    }

    #[test]
    fn names_follow_first_occurrence() {
        let rule = Rule::most_general(t("T"), 2)
            .extended(Literal::new(t("A"), vec![v(7), v(0)]))
            .extended(Literal::new(t("B"), vec![v(5), v(7), v(9)]));
        let names = VariableNames::for_rule(&rule);
        assert_eq!(names.get(Variable(0)), Some("x"));
        assert_eq!(names.get(Variable(1)), Some("y"));
        assert_eq!(names.get(Variable(7)), Some("z"));
        assert_eq!(names.get(Variable(5)), Some("v3"));
        assert_eq!(names.get(Variable(9)), Some("v4"));
        assert_eq!(render(&rule), "A(z, x), B(v3, z, v4) -> T(x, y)");
    }

    #[test]
    fn bare_head_and_constants() {
        assert_eq!(render(&Rule::most_general(t("Likes"), 2)), "Likes(x, y)");
        let rule = Rule::most_general(t("Blue"), 1)
            .extended(Literal::new(t("Color"), vec![v(0), Term::Constant(t("blue"))]));
        assert_eq!(render(&rule), "Color(x, blue) -> Blue(x)");
    }

    #[test]
    fn missing_rule_is_the_sentinel() {
        assert_eq!(render_outcome(None), NO_RULE_FOUND);
    }
}
