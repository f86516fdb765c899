//! Style vocabulary for unistyle.
//!
//! Styling lives inside the character stream, so a "style" here is not a span
//! attribute but a recipe for which codepoints a base character turns into.
//! Tags fall into two groups with different composition rules:
//!
//! - **Substitution** tags ([`StyleSet::SUBSTITUTION_GROUP`]) swap the base
//!   character for a different codepoint. Only the combinations Unicode defines
//!   are representable, see [`CombinationKey::VALID`].
//! - **Overlay** tags ([`StyleSet::OVERLAY_GROUP`]) append a combining mark and
//!   compose freely with everything.
//!
//! When a requested substitution subset has no codepoint, [`Precedence`] decides
//! which tags survive.

mod key;
mod precedence;
mod set;
mod tag;

pub use key::CombinationKey;
pub use precedence::{Candidates, Precedence, PrecedenceError, Rank};
pub use set::StyleSet;
pub use tag::{ParseStyleError, StyleTag};
