//! Gloss grammar
//!
//! A gloss morph is a feature label followed by any number of process
//! annotations:
//!
//!     cat{ABLAUT;1}       qualified: explicit target-span offsets
//!     cat{NOUN}           unqualified: the next sequential offset
//!
//! Process feature labels are drawn from `[0-9A-Z.]+`. Target offsets are
//! single decimal digits; the grammar has no multi-digit offsets.

use chumsky::error::Simple;
use chumsky::prelude::*;

use super::{classified, grammar_error, line};
use crate::ggg::ast::error::{GrammarError, LineKind};
use crate::ggg::ast::morph::{GlossMorph, GlossProcess};

/// Characters with structural meaning in gloss lines. `>` and `;` are plain
/// content here, unlike in form lines.
const STRUCTURAL: &str = "{}= -";

fn feature() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| !STRUCTURAL.contains(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

fn process_feature() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '.')
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// A single-digit target-span offset.
fn index() -> impl Parser<char, i64, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_digit()).map(|c| i64::from(c as u8 - b'0'))
}

fn process() -> impl Parser<char, GlossProcess, Error = Simple<char>> + Clone {
    let qualified = just('{')
        .ignore_then(process_feature())
        .then_ignore(just(';'))
        .then(index().separated_by(just(',')).at_least(1))
        .then_ignore(just('}'))
        .map(|(feature, targets)| GlossProcess { feature, targets });
    let unqualified = just('{')
        .ignore_then(process_feature())
        .then_ignore(just('}'))
        .map(|feature| GlossProcess {
            feature,
            targets: Vec::new(),
        });
    qualified.or(unqualified)
}

fn gloss_morph() -> impl Parser<char, GlossMorph, Error = Simple<char>> + Clone {
    let core = feature().then(process().repeated());
    classified(core).map(|(morph_type, (feature, processes))| GlossMorph {
        morph_type,
        feature,
        processes,
    })
}

/// Parse a complete gloss line into its morph sequence.
pub fn parse_gloss(input: &str) -> Result<Vec<GlossMorph>, GrammarError> {
    line(gloss_morph())
        .parse(input)
        .map_err(|errors| grammar_error(LineKind::Gloss, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ggg::ast::morph::MorphType;

    #[test]
    fn test_plain_feature() {
        let morphs = parse_gloss("cat").unwrap();
        assert_eq!(morphs, vec![GlossMorph::new(MorphType::Root, "cat", vec![])]);
    }

    #[test]
    fn test_unqualified_process() {
        let morphs = parse_gloss("cat{NOUN}").unwrap();
        assert_eq!(
            morphs,
            vec![GlossMorph::new(
                MorphType::Root,
                "cat",
                vec![GlossProcess::new("NOUN", vec![])],
            )]
        );
    }

    #[test]
    fn test_qualified_process() {
        let morphs = parse_gloss("cat{ABLAUT;1}").unwrap();
        assert_eq!(
            morphs,
            vec![GlossMorph::new(
                MorphType::Root,
                "cat",
                vec![GlossProcess::new("ABLAUT", vec![1])],
            )]
        );
    }

    #[test]
    fn test_qualified_process_with_index_list() {
        let morphs = parse_gloss("sing{ABLAUT;1,3}").unwrap();
        assert_eq!(
            morphs[0].processes,
            vec![GlossProcess::new("ABLAUT", vec![1, 3])]
        );
    }

    #[test]
    fn test_multiple_processes_on_one_morph() {
        let morphs = parse_gloss("go{PST}{PL;2}").unwrap();
        assert_eq!(
            morphs[0].processes,
            vec![
                GlossProcess::new("PST", vec![]),
                GlossProcess::new("PL", vec![2]),
            ]
        );
    }

    #[test]
    fn test_prefix_chain() {
        let morphs = parse_gloss("un-do").unwrap();
        assert_eq!(
            morphs,
            vec![
                GlossMorph::new(MorphType::Prefix, "un", vec![]),
                GlossMorph::new(MorphType::Root, "do", vec![]),
            ]
        );
    }

    #[test]
    fn test_clitic_morphs() {
        let morphs = parse_gloss("book =LOC").unwrap();
        let types: Vec<MorphType> = morphs.iter().map(|m| m.morph_type).collect();
        assert_eq!(types, vec![MorphType::Root, MorphType::Enclitic]);
    }

    #[test]
    fn test_empty_line_has_no_morphs() {
        assert_eq!(parse_gloss("").unwrap(), vec![]);
    }

    #[test]
    fn test_rejects_multi_digit_index() {
        // Offsets are single digits; `12` is two offsets missing a comma.
        assert!(parse_gloss("cat{ABLAUT;12}").is_err());
    }

    #[test]
    fn test_rejects_lowercase_process_feature() {
        assert!(parse_gloss("cat{noun}").is_err());
    }

    #[test]
    fn test_rejects_empty_index_list() {
        assert!(parse_gloss("cat{ABLAUT;}").is_err());
    }

    #[test]
    fn test_feature_keeps_nonstructural_punctuation() {
        // `.` and digits are ordinary feature content.
        let morphs = parse_gloss("go.PST.3SG").unwrap();
        assert_eq!(morphs[0].feature, "go.PST.3SG");
    }
}
