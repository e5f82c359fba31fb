//! Property-based tests for the gloss grammar
//!
//! The canonical re-rendering of a parsed gloss line must parse back to the
//! same structure, and re-parsing a re-rendering must be idempotent. The
//! strategies stay inside the grammar's character classes: lowercase
//! feature labels, `[A-Z]` process labels, single-digit offsets.

use ggg_parser::ggg::ast::morph::{GlossMorph, GlossProcess, MorphType};
use ggg_parser::ggg::grammar::parse_gloss;
use ggg_parser::ggg::render::gloss_line;
use proptest::prelude::*;

fn morph_type_strategy() -> impl Strategy<Value = MorphType> {
    prop_oneof![
        Just(MorphType::Root),
        Just(MorphType::Prefix),
        Just(MorphType::Suffix),
        Just(MorphType::Proclitic),
        Just(MorphType::Enclitic),
    ]
}

fn feature_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn process_strategy() -> impl Strategy<Value = GlossProcess> {
    (
        "[A-Z][A-Z0-9.]{0,5}",
        prop::collection::vec(0..=9i64, 0..3),
    )
        .prop_map(|(feature, targets)| GlossProcess::new(feature, targets))
}

fn morph_strategy() -> impl Strategy<Value = GlossMorph> {
    (
        morph_type_strategy(),
        feature_strategy(),
        prop::collection::vec(process_strategy(), 0..3),
    )
        .prop_map(|(morph_type, feature, processes)| {
            GlossMorph::new(morph_type, feature, processes)
        })
}

proptest! {
    #[test]
    fn rendered_gloss_lines_parse_back_to_the_same_morphs(
        morphs in prop::collection::vec(morph_strategy(), 1..5)
    ) {
        let rendered = gloss_line(&morphs);
        let parsed = parse_gloss(&rendered).expect("rendered line must parse");
        prop_assert_eq!(parsed, morphs);
    }

    #[test]
    fn reparsing_a_rerendering_is_idempotent(
        morphs in prop::collection::vec(morph_strategy(), 1..5)
    ) {
        let first = gloss_line(&morphs);
        let parsed = parse_gloss(&first).expect("rendered line must parse");
        let second = gloss_line(&parsed);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(parse_gloss(&second).unwrap(), parsed);
    }
}

#[test]
fn fixed_corpus_lines_round_trip() {
    for line in ["un-do", "cat{NOUN}", "walk -ed{PST}", "lo= kitabu =ni", ""] {
        let parsed = parse_gloss(line).unwrap();
        let rendered = gloss_line(&parsed);
        assert_eq!(parse_gloss(&rendered).unwrap(), parsed, "line: {:?}", line);
    }
}
