//! UR and SR form grammars
//!
//! Both form lines share the segment class (everything but `{}>= -`) and
//! differ only in their process production:
//!
//!     UR: {source} or {source>target}   source excludes `}>`, target `}`
//!     SR: {value}                       value non-empty, excludes `}`

use chumsky::error::Simple;
use chumsky::prelude::*;

use super::{classified, grammar_error, line};
use crate::ggg::ast::error::{GrammarError, LineKind};
use crate::ggg::ast::morph::{FormMorph, FormPiece, FormProcess};

/// Characters with structural meaning in form lines.
const STRUCTURAL: &str = "{}>= -";

fn segment() -> impl Parser<char, FormPiece, Error = Simple<char>> + Clone {
    filter(|c: &char| !STRUCTURAL.contains(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(FormPiece::Segment)
}

fn ur_process() -> impl Parser<char, FormPiece, Error = Simple<char>> + Clone {
    let source = filter(|c: &char| *c != '}' && *c != '>')
        .repeated()
        .collect::<String>();
    let target = filter(|c: &char| *c != '}').repeated().collect::<String>();
    just('{')
        .ignore_then(source)
        .then(just('>').ignore_then(target).or_not())
        .then_ignore(just('}'))
        .map(|(source, target)| FormPiece::Process(FormProcess { source, target }))
}

fn sr_process() -> impl Parser<char, FormPiece, Error = Simple<char>> + Clone {
    just('{')
        .ignore_then(
            filter(|c: &char| *c != '}')
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .then_ignore(just('}'))
        .map(|value| {
            FormPiece::Process(FormProcess {
                source: value,
                target: None,
            })
        })
}

fn form_morph(
    process: impl Parser<char, FormPiece, Error = Simple<char>> + Clone,
) -> impl Parser<char, FormMorph, Error = Simple<char>> + Clone {
    let core = process.or(segment()).repeated().at_least(1);
    classified(core).map(|(morph_type, pieces)| FormMorph { morph_type, pieces })
}

/// Parse a complete UR line into its morph sequence.
pub fn parse_ur(input: &str) -> Result<Vec<FormMorph>, GrammarError> {
    line(form_morph(ur_process()))
        .parse(input)
        .map_err(|errors| grammar_error(LineKind::Ur, errors))
}

/// Parse a complete SR line into its morph sequence.
pub fn parse_sr(input: &str) -> Result<Vec<FormMorph>, GrammarError> {
    line(form_morph(sr_process()))
        .parse(input)
        .map_err(|errors| grammar_error(LineKind::Sr, errors))
}
