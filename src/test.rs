use crate::binding::BindingStrategy;
use crate::gain::Coverage;
use crate::parse::fact_line;
use crate::pretty::render;
use crate::search::learn_rule;
use crate::{Config, Fact, FactStore, Literal, Rule, Term, Text, Variable};

fn t(s: &str) -> Text {
    Text::from_str(s)
}

fn store(lines: &[&str]) -> FactStore {
    let facts: Vec<Fact> = lines.iter().map(|line| fact_line(1, line).unwrap()).collect();
    FactStore::from_facts(&facts).unwrap()
}

fn grandparent_with_decoy() -> FactStore {
    store(&[
        "Parent(Tom, Liz)",
        "Parent(Tom, Bob)",
        "Parent(Bob, Ann)",
        "Grandparent(Tom, Ann)",
    ])
}

#[test]
fn grandparent_steps() {
    let store = store(&[
        "Parent(Tom, Bob)",
        "Parent(Bob, Ann)",
        "Grandparent(Tom, Ann)",
    ]);
    let learned = learn_rule(&store, t("Grandparent"), &Config::default()).unwrap().unwrap();
    let coverages: Vec<_> = learned.steps.iter().map(|s| s.coverage).collect();
    assert_eq!(coverages, vec![Coverage::new(1, 5), Coverage::new(1, 0)]);
    assert!((learned.steps[0].gain - 1.5f64.log2()).abs() < 1e-9);
    assert!((learned.steps[1].gain - 6f64.log2()).abs() < 1e-9);
    assert_eq!(render(&learned.rule), "Parent(x, z), Parent(z, y) -> Grandparent(x, y)");
}

#[test]
fn backtracking_sees_past_the_first_child() {
    let store = grandparent_with_decoy();
    let config = Config { binding: BindingStrategy::Backtracking, ..Config::default() };
    let learned = learn_rule(&store, t("Grandparent"), &config).unwrap().unwrap();
    assert_eq!(render(&learned.rule), "Parent(x, z), Parent(z, y) -> Grandparent(x, y)");
}

#[test]
fn greedy_is_misled_by_the_first_child() {
    let store = grandparent_with_decoy();
    let learned = learn_rule(&store, t("Grandparent"), &Config::default()).unwrap().unwrap();
    assert_ne!(render(&learned.rule), "Parent(x, z), Parent(z, y) -> Grandparent(x, y)");
    assert_eq!(learned.rule.body()[0], Literal::new(t("Parent"), vec![var(0), var(2)]));
}

fn var(i: u16) -> Term {
    Term::Variable(Variable(i))
}

#[test]
fn extending_a_rule_leaves_the_original_alone() {
    let base = Rule::most_general(t("T"), 2);
    let longer = base.extended(Literal::new(t("E"), vec![var(0), var(2)]));
    assert!(base.body().is_empty());
    assert_eq!(longer.body().len(), 1);
    assert_eq!(base.fresh_variable(), Variable(2));
    assert_eq!(longer.fresh_variable(), Variable(3));
    assert_eq!(longer.variables(), vec![Variable(0), Variable(1), Variable(2)]);
}

#[test]
fn unary_target_gets_unary_head() {
    let store = store(&[
        "Bird(tweety)",
        "Bird(polly)",
        "Flies(tweety)",
        "Flies(polly)",
    ]);
    let learned = learn_rule(&store, t("Flies"), &Config::default()).unwrap().unwrap();
    assert_eq!(render(&learned.rule), "Flies(x)");
    // both constants are positive, so nothing is left to exclude
    assert!(learned.steps.is_empty());
}

#[test]
fn unary_background_predicate_separates() {
    let store = store(&["Bird(tweety)", "Fish(nemo)", "Flies(tweety)"]);
    let learned = learn_rule(&store, t("Flies"), &Config::default()).unwrap().unwrap();
    assert_eq!(render(&learned.rule), "Bird(x) -> Flies(x)");
    assert_eq!(learned.steps[0].coverage, Coverage::new(1, 0));
    assert!((learned.steps[0].gain - 1.0).abs() < 1e-9);
}

#[test]
fn duplicate_facts_count_twice() {
    let store = store(&[
        "Edge(a, b)",
        "Edge(a, b)",
        "Path(a, b)",
        "Path(a, b)",
    ]);
    let pos = crate::closed_world::positive_examples(&store, t("Path"));
    assert_eq!(pos.len(), 2);
    let learned = learn_rule(&store, t("Path"), &Config::default()).unwrap().unwrap();
    assert_eq!(render(&learned.rule), "Edge(x, y) -> Path(x, y)");
    assert_eq!(learned.steps[0].coverage, Coverage::new(2, 0));
}
