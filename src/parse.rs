use crate::error::ParseError;
use crate::{Constant, Fact, Predicate, Problem};
use nom::{
    bytes::complete::{is_not, take_while1},
    character::complete::{char as nomchar, multispace0},
    combinator::{all_consuming, map as nommap, verify},
    error::ParseError as NomParseError,
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated},
};
pub type IResult<I, O, E = nom::error::VerboseError<I>> = Result<(I, O), nom::Err<E>>;

//////////////////////////////////////

type In<'a> = &'a str;

pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: NomParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    preceded(multispace0, inner)
}

pub fn wsr<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: NomParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    terminated(inner, multispace0)
}

/// `inner`, then only trailing whitespace.
pub fn ended<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: NomParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    all_consuming(wsr(inner))
}

pub fn ident_char(c: char) -> bool {
    !c.is_whitespace() && !"(),".contains(c)
}

pub fn predicate(s: In) -> IResult<In, Predicate> {
    nommap(wsl(take_while1(ident_char)), Predicate::from_str)(s)
}

/// An opaque argument token. Surrounding whitespace is dropped, inner
/// whitespace kept.
pub fn argument(s: In) -> IResult<In, Constant> {
    let token = verify(is_not("(),"), |a: &str| !a.trim().is_empty());
    nommap(token, |a: &str| Constant::from_str(a.trim()))(s)
}

pub fn arguments(s: In) -> IResult<In, Vec<Constant>> {
    delimited(
        wsl(nomchar('(')),
        separated_list0(nomchar(','), argument),
        wsl(nomchar(')')),
    )(s)
}

/// `Predicate(Arg1, Arg2, ...)`; `Predicate()` has no arguments.
pub fn fact(s: In) -> IResult<In, Fact> {
    nommap(pair(predicate, arguments), |(predicate, args)| Fact::new(predicate, args))(s)
}

fn diagnose<'a>(text: In<'a>, err: nom::Err<nom::error::VerboseError<In<'a>>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(text, e),
        nom::Err::Incomplete(_) => "incomplete input".to_owned(),
    }
}

/// Parses one fact line; `line` is 1-based and only used for reporting.
pub fn fact_line(line: usize, text: &str) -> Result<Fact, ParseError> {
    match ended(fact)(text) {
        Ok((_, fact)) => Ok(fact),
        Err(err) => Err(ParseError::MalformedFact {
            line,
            text: text.to_owned(),
            diagnostic: diagnose(text, err),
        }),
    }
}

/// Parses a whole input document: a fact count `n`, `n` fact lines, then the
/// target predicate name. Lines after the target are ignored.
pub fn problem(source: &str) -> Result<Problem, ParseError> {
    let mut lines = source.lines().enumerate().map(|(i, text)| (i + 1, text));

    let (line, text) = lines.next().unwrap_or((1, ""));
    let expected: usize = text
        .trim()
        .parse()
        .map_err(|_| ParseError::BadCount { line, text: text.to_owned() })?;

    let mut facts = Vec::new();
    for found in 0..expected {
        let (line, text) = lines.next().ok_or(ParseError::MissingFacts { expected, found })?;
        facts.push(fact_line(line, text)?);
    }

    let (line, text) = lines.next().ok_or(ParseError::MissingTarget)?;
    let (_, target) = ended(predicate)(text)
        .map_err(|_| ParseError::BadTarget { line, text: text.to_owned() })?;
    Ok(Problem { facts, target })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;

    fn names(fact: &Fact) -> (String, Vec<String>) {
        (
            fact.predicate.as_str().to_owned(),
            fact.args.iter().map(|a| a.as_str().to_owned()).collect(),
        )
    }

    #[test]
    fn fact_trims_around_commas() {
        let got = fact_line(1, "  Mother( James ,Mike )  ").unwrap();
        assert_eq!(names(&got), ("Mother".to_owned(), vec!["James".to_owned(), "Mike".to_owned()]));
    }

    #[test]
    fn argument_keeps_inner_spaces() {
        let got = fact_line(1, "LivesIn(Ann, New York)").unwrap();
        assert_eq!(got.args[1], Text::from_str("New York"));
    }

    #[test]
    fn empty_argument_list_is_nullary() {
        let got = fact_line(1, "Raining()").unwrap();
        assert_eq!(got.arity(), 0);
        assert_eq!(fact_line(1, "Raining( )").unwrap().arity(), 0);
    }

    #[test]
    fn malformed_facts_are_rejected() {
        for bad in ["Parent Tom, Bob", "Parent(Tom, Bob", "Parent(Tom,, Bob)", "(Tom)", "P(a)(b)", "P(a) x"] {
            match fact_line(7, bad) {
                Err(ParseError::MalformedFact { line, text, .. }) => {
                    assert_eq!(line, 7);
                    assert_eq!(text, bad);
                }
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn whole_document() {
        let source = "2\nParent(Tom, Bob)\nParent(Bob, Ann)\nGrandparent\n";
        let problem = problem(source).unwrap();
        assert_eq!(problem.facts.len(), 2);
        assert_eq!(problem.target, Text::from_str("Grandparent"));
    }

    #[test]
    fn document_errors_carry_positions() {
        assert_eq!(
            problem("two\nP(a)\nP\n"),
            Err(ParseError::BadCount { line: 1, text: "two".to_owned() })
        );
        assert_eq!(problem("3\nP(a)\nP(b)\n"), Err(ParseError::MissingFacts { expected: 3, found: 2 }));
        assert_eq!(problem("1\nP(a)\n"), Err(ParseError::MissingTarget));
        assert_eq!(
            problem("1\nP(a)\nP(x)\n"),
            Err(ParseError::BadTarget { line: 3, text: "P(x)".to_owned() })
        );
        assert!(matches!(problem("1\nP(a\nP\n"), Err(ParseError::MalformedFact { line: 2, .. })));
    }

    #[test]
    fn huge_count_runs_out_of_facts() {
        assert_eq!(
            problem("18446744073709551615\nP(a)\nP(b)\n"),
            Err(ParseError::MissingFacts { expected: usize::MAX, found: 2 })
        );
        assert_eq!(
            problem("1000000000000\nP(a)\n"),
            Err(ParseError::MissingFacts { expected: 1_000_000_000_000, found: 1 })
        );
    }
}
