//! Error types, one enum per layer.

use crate::{Literal, Predicate};
use thiserror::Error;

/// Crate-level error returned by [`crate::run`] and the driver.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    FactStore(#[from] FactStoreError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed input document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected the number of facts, found `{text}`")]
    BadCount { line: usize, text: String },

    #[error("line {line}: malformed fact `{text}`\n{diagnostic}")]
    MalformedFact { line: usize, text: String, diagnostic: String },

    #[error("input ended after {found} of {expected} facts")]
    MissingFacts { expected: usize, found: usize },

    #[error("input ended before the target predicate line")]
    MissingTarget,

    #[error("line {line}: malformed target predicate `{text}`")]
    BadTarget { line: usize, text: String },
}

/// Rejected ingestion into a [`crate::FactStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactStoreError {
    #[error("predicate `{predicate}` has arity {expected}, but a fact with {found} arguments was given")]
    ArityMismatch { predicate: Predicate, expected: usize, found: usize },

    #[error("predicate `{predicate}` has {arity} arguments, more than the supported {max}")]
    ArityTooLarge { predicate: Predicate, arity: usize, max: usize },
}

/// Internal invariant violations of the rule search. Never caused by input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("internal error: accepted literal {literal:?} left {negatives} negative examples covered, no fewer than before")]
    Stalled { literal: Literal, negatives: usize },
}
