//! Character-class grammars for the three annotation line kinds
//!
//! UR, SR, and gloss lines share one shape: words separated by single
//! spaces, each word one or more morphs, each morph optionally wrapped with
//! a boundary marker (`-` for affixes, `=` for clitics). Morphs carrying a
//! marker may chain within a word, so `un-do` is a prefix followed by a
//! root. What differs per line kind is the segment character class and the
//! `{...}` process production.
//!
//! A line parses completely or fails with a [`GrammarError`]; callers never
//! see partial results.

mod form;
mod gloss;

pub use form::{parse_sr, parse_ur};
pub use gloss::parse_gloss;

use chumsky::error::Simple;
use chumsky::prelude::*;

use crate::ggg::ast::error::{GrammarError, LineKind};
use crate::ggg::ast::morph::MorphType;

/// Wrap a morph-core parser with the boundary-marker alternatives, tried in
/// the same order on every line kind: suffix, enclitic, prefix, proclitic,
/// root.
fn classified<T>(
    core: impl Parser<char, T, Error = Simple<char>> + Clone,
) -> impl Parser<char, (MorphType, T), Error = Simple<char>> + Clone {
    choice((
        just('-')
            .ignore_then(core.clone())
            .map(|m| (MorphType::Suffix, m)),
        just('=')
            .ignore_then(core.clone())
            .map(|m| (MorphType::Enclitic, m)),
        core.clone()
            .then_ignore(just('-'))
            .map(|m| (MorphType::Prefix, m)),
        core.clone()
            .then_ignore(just('='))
            .map(|m| (MorphType::Proclitic, m)),
        core.map(|m| (MorphType::Root, m)),
    ))
}

/// A full line: words separated by single spaces, flattened to the morph
/// sequence. The empty line is legal and parses to zero morphs.
fn line<T>(
    morph: impl Parser<char, T, Error = Simple<char>> + Clone,
) -> impl Parser<char, Vec<T>, Error = Simple<char>> {
    morph
        .repeated()
        .at_least(1)
        .separated_by(just(' '))
        .map(|words: Vec<Vec<T>>| words.into_iter().flatten().collect())
        .then_ignore(end())
}

/// Reduce a chumsky failure to the position and offending character of its
/// first error.
fn grammar_error(line: LineKind, errors: Vec<Simple<char>>) -> GrammarError {
    let (position, found) = errors
        .first()
        .map(|err| (err.span().start, err.found().copied()))
        .unwrap_or((0, None));
    GrammarError {
        line,
        position,
        found,
    }
}
