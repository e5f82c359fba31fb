//! Span Numbering Engine
//!
//! A character state machine over one UR line. The line is split on spaces
//! into morph chunks; within a chunk every grapheme is either a boundary
//! marker, a process delimiter, or content to emit. Spans are allocated
//! morph-locally (base 0, each `>` takes the next id) and then offset by
//! the morph's matrix value, so morph *i*'s base span is *i* and the spans
//! its processes allocate follow at *i+1*, *i+2*, ...
//!
//! The engine works on raw text, not on the grammar's parse: its input
//! contract is only that spaces delimit morphs. Graphemes are Unicode
//! extended grapheme clusters, so combining diacritics stay attached to
//! their base character.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::ggg::ast::character::{Character, Op, Tag};
use crate::ggg::ast::morph::MorphType;

/// Monotonic span-id allocator, scoped to one line or one morph.
#[derive(Debug)]
struct SpanCounter {
    next: i64,
}

impl SpanCounter {
    fn new() -> Self {
        Self { next: 0 }
    }

    fn starting_at(next: i64) -> Self {
        Self { next }
    }

    fn tick(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Number a complete UR line into its BILOU characters, glosses unfilled.
pub fn number_ur(ur: &str) -> Vec<Character> {
    let mut matrix = SpanCounter::new();
    let mut out: Vec<Character> = Vec::new();
    // Seeded so the first morph never takes a leading boundary.
    let mut last_type = MorphType::Prefix;
    for chunk in ur.split(' ') {
        let (morph_type, mut chars) = number_morph(chunk);
        let base = matrix.tick();
        if word_boundary(last_type, morph_type) {
            out.push(Character::boundary());
        }
        for ch in &mut chars {
            ch.span += base;
        }
        out.append(&mut chars);
        last_type = morph_type;
    }
    out
}

/// Number one space-delimited morph chunk with morph-local span ids.
fn number_morph(chunk: &str) -> (MorphType, Vec<Character>) {
    let graphemes: Vec<&str> = chunk.graphemes(true).collect();
    let mut alloc = SpanCounter::starting_at(1);
    let mut chars: Vec<Character> = Vec::new();
    let matrix: i64 = 0;
    let mut span = matrix;
    let mut tag = Tag::Begin;
    let mut op = Op::Standard;
    let mut morph_type = MorphType::Root;
    let last = graphemes.len().saturating_sub(1);
    for (i, grapheme) in graphemes.iter().enumerate() {
        match *grapheme {
            "-" => {
                if i == 0 {
                    morph_type = MorphType::Suffix;
                } else if i == last {
                    morph_type = MorphType::Prefix;
                }
            }
            "=" => {
                if i == 0 {
                    morph_type = MorphType::Enclitic;
                } else if i == last {
                    morph_type = MorphType::Proclitic;
                }
            }
            "{" => {
                op = Op::Deletion;
            }
            ">" => {
                span = alloc.tick();
                trace!(span, "allocated alignment span");
                tag = Tag::Begin;
                op = Op::Alignment;
            }
            "}" => {
                close_process(&mut chars, span);
                span = matrix;
                op = Op::Standard;
            }
            _ => {
                chars.push(Character::new(*grapheme, tag, op, span));
                if tag == Tag::Begin {
                    tag = Tag::Inside;
                }
            }
        }
    }
    // Morph end forces Last, whatever the character carried before.
    if let Some(ch) = chars.last_mut() {
        ch.tag = Tag::Last;
    }
    (morph_type, chars)
}

/// Close a `{...}` region: the final alignment character becomes Last, or
/// Unit when the character before it belongs to a different span.
fn close_process(chars: &mut [Character], span: i64) {
    let n = chars.len();
    if n == 0 {
        return;
    }
    if chars[n - 1].op == Op::Alignment {
        chars[n - 1].tag = Tag::Last;
        if n > 1 && chars[n - 2].span != span {
            chars[n - 1].tag = Tag::Unit;
        }
    }
}

/// A boundary character separates two morphs only when neither side is an
/// affix or clitic attachment.
fn word_boundary(prev: MorphType, next: MorphType) -> bool {
    matches!(
        (prev, next),
        (MorphType::Root, MorphType::Root)
            | (MorphType::Root, MorphType::Prefix)
            | (MorphType::Suffix, MorphType::Root)
            | (MorphType::Suffix, MorphType::Prefix)
    )
}
