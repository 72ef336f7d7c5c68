//! Greedy construction of a single rule, one body literal at a time.

use crate::closed_world::{negative_examples, positive_examples, target_arity};
use crate::error::SearchError;
use crate::facts::FactStore;
use crate::gain::{foil_gain, Coverage};
use crate::util::Tuples;
use crate::{Config, Fact, Literal, Predicate, Rule, Term};
use log::{debug, info, trace};
use rayon::iter::{ParallelBridge, ParallelIterator};

/// One accepted literal and what the rule covered afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub literal: Literal,
    pub gain: f64,
    pub coverage: Coverage,
}

#[derive(Debug, Clone)]
pub struct Learned {
    /// Variables are still in internal form; see [`crate::pretty`].
    pub rule: Rule,
    pub steps: Vec<Step>,
}

/// A scored candidate, tagged with its position in the enumeration order.
struct Scored {
    index: usize,
    literal: Literal,
    gain: f64,
}

impl Scored {
    /// Higher gain wins; on equal gain the earlier candidate does.
    fn better(a: Self, b: Self) -> Self {
        if b.gain > a.gain || (b.gain == a.gain && b.index < a.index) {
            b
        } else {
            a
        }
    }
}

/// Every literal over a non-target predicate whose arguments are drawn, with
/// repetition, from the rule's variables plus one fresh variable.
///
/// Predicates come in first-seen order; within a predicate, argument tuples
/// come in odometer order over that variable pool (head variables first,
/// fresh variable last).
pub fn candidate_literals<'a>(
    store: &'a FactStore,
    target: Predicate,
    rule: &Rule,
) -> impl Iterator<Item = Literal> + Send + 'a {
    let mut pool = rule.variables();
    pool.push(rule.fresh_variable());
    let pool: Vec<Term> = pool.into_iter().map(Term::Variable).collect();
    store.predicates().iter().filter(move |relation| relation.predicate != target).flat_map(
        move |relation| {
            let predicate = relation.predicate;
            Tuples::new(pool.clone(), relation.arity).map(move |args| Literal::new(predicate, args))
        },
    )
}

fn best_candidate(
    store: &FactStore,
    target: Predicate,
    config: &Config,
    rule: &Rule,
    pos: &[Fact],
    neg: &[Fact],
) -> Option<Scored> {
    let score = |(index, literal): (usize, Literal)| {
        let gain = foil_gain(store, config.binding, rule, &literal, pos, neg);
        trace!("candidate {literal:?} gain {gain:.4}");
        Scored { index, literal, gain }
    };
    let candidates = candidate_literals(store, target, rule).enumerate();
    if config.parallel {
        candidates.par_bridge().map(score).reduce_with(Scored::better)
    } else {
        candidates.map(score).reduce(Scored::better)
    }
}

/// Learns one rule for `target` from `store`.
///
/// Returns `Ok(None)` when the target has no positive examples.
pub fn learn_rule(
    store: &FactStore,
    target: Predicate,
    config: &Config,
) -> Result<Option<Learned>, SearchError> {
    let mut pos = positive_examples(store, target);
    if pos.is_empty() {
        info!("no positive examples of {target}");
        return Ok(None);
    }
    let mut neg: Vec<Fact> = negative_examples(store, target).collect();
    let mut rule = Rule::most_general(target, target_arity(store, target));
    let mut steps = Vec::new();
    debug!("learning {rule:?} from {} positive, {} negative examples", pos.len(), neg.len());

    let covers = |rule: &Rule, ex: &Fact| config.binding.covers(store, rule, ex);
    while !neg.is_empty() && neg.iter().any(|ex| covers(&rule, ex)) {
        if rule.body().len() >= config.max_body_literals {
            info!("stopping at the body length limit of {}", config.max_body_literals);
            break;
        }
        let Some(best) = best_candidate(store, target, config, &rule, &pos, &neg) else {
            debug!("no candidate literals");
            break;
        };
        if best.gain <= 0.0 {
            debug!("no literal has positive gain");
            break;
        }

        let next = rule.extended(best.literal.clone());
        let negatives_before = neg.len();
        pos.retain(|ex| covers(&next, ex));
        neg.retain(|ex| covers(&next, ex));
        if neg.len() >= negatives_before {
            return Err(SearchError::Stalled { literal: best.literal, negatives: neg.len() });
        }
        let coverage = Coverage::new(pos.len(), neg.len());
        debug!(
            "added {:?} (gain {:.4}), covering {} positive, {} negative",
            best.literal, best.gain, coverage.positives, coverage.negatives
        );
        steps.push(Step { literal: best.literal, gain: best.gain, coverage });
        rule = next;
    }
    info!("learned {rule:?}");
    Ok(Some(Learned { rule, steps }))
}
