//! Fallback order for substitution combinations Unicode does not define.
//!
//! A request like `{BOLD, DOUBLE}` has no glyph table. Rather than failing, the
//! codec walks the ranks of a [`Precedence`] from highest to lowest and keeps the
//! highest-ranked tags that still form a [`CombinationKey`]. BOLD and ITALIC are
//! ranked as one unit and, where possible, ride along as modifiers of a higher
//! rank (`{BOLD, ITALIC, FRAKTUR}` resolves to bold fraktur).

use crate::{key::CombinationKey, set::StyleSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// One step of the fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rank {
    Code,
    Double,
    Fraktur,
    Script,
    BoldItalic,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Code,
        Rank::Double,
        Rank::Fraktur,
        Rank::Script,
        Rank::BoldItalic,
    ];

    pub fn styles(self) -> StyleSet {
        match self {
            Rank::Code => StyleSet::CODE,
            Rank::Double => StyleSet::DOUBLE,
            Rank::Fraktur => StyleSet::FRAKTUR,
            Rank::Script => StyleSet::SCRIPT,
            Rank::BoldItalic => StyleSet::BOLD | StyleSet::ITALIC,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Rank::Code => "code",
            Rank::Double => "double",
            Rank::Fraktur => "fraktur",
            Rank::Script => "script",
            Rank::BoldItalic => "bold-italic",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrecedenceError {
    #[error("fallback order must list all 5 ranks, got {0}")]
    WrongLength(usize),

    #[error("rank `{0}` appears more than once in the fallback order")]
    Duplicate(Rank),
}

/// Ordered candidate keys for one request, best first.
pub type Candidates = SmallVec<[CombinationKey; 12]>;

/// A total order over the five fallback ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precedence {
    order: [Rank; 5],
}

impl Default for Precedence {
    /// CODE > DOUBLE > FRAKTUR > SCRIPT > BOLD/ITALIC.
    fn default() -> Self {
        Self { order: Rank::ALL }
    }
}

impl Precedence {
    /// Builds a precedence from `order`, which must name every rank exactly once.
    pub fn new(order: &[Rank]) -> Result<Self, PrecedenceError> {
        let ranks: [Rank; 5] = order
            .try_into()
            .map_err(|_| PrecedenceError::WrongLength(order.len()))?;
        for (i, rank) in ranks.iter().enumerate() {
            if ranks[..i].contains(rank) {
                return Err(PrecedenceError::Duplicate(*rank));
            }
        }
        Ok(Self { order: ranks })
    }

    pub fn order(&self) -> &[Rank] {
        &self.order
    }

    /// Candidate keys for the substitution subset of `requested`, best first.
    ///
    /// The first candidate is the request itself when it is valid. The caller
    /// picks the first candidate with a glyph for its base character; an empty
    /// result (or no candidate with a glyph) means no substitution.
    pub fn candidates(&self, requested: StyleSet) -> Candidates {
        let requested = requested.substitution();
        let modifiers = requested & (StyleSet::BOLD | StyleSet::ITALIC);
        let mut out = Candidates::new();
        let mut push = |set: StyleSet| {
            if let Some(key) = CombinationKey::new(set) {
                if !out.contains(&key) {
                    out.push(key);
                }
            }
        };

        push(requested);
        for rank in self.order {
            let base = rank.styles() & requested;
            if base.is_empty() {
                continue;
            }
            if rank == Rank::BoldItalic {
                push(base);
                push(base & StyleSet::BOLD);
                push(base & StyleSet::ITALIC);
            } else {
                push(base | modifiers);
                push(base | (modifiers & StyleSet::BOLD));
                push(base | (modifiers & StyleSet::ITALIC));
                push(base);
            }
        }
        out
    }
}
