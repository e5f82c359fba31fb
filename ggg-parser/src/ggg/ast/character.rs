//! Glossed characters
//!
//! The output unit of span numbering and gloss binding: one grapheme of a
//! UR line together with its BILOU tag, operation code, span id, and (after
//! binding) its gloss label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Span id of synthetic word-boundary characters, which sit outside every
/// span.
pub const BOUNDARY_SPAN: i64 = -1;

/// BILOU position of a character within its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// First character of a multi-character span
    #[serde(rename = "B")]
    Begin,
    /// Interior character of a span
    #[serde(rename = "I")]
    Inside,
    /// Final character of a span
    #[serde(rename = "L")]
    Last,
    /// Outside every span (word boundaries)
    #[serde(rename = "O")]
    Outside,
    /// Sole character of a single-character span
    #[serde(rename = "U")]
    Unit,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Tag::Begin => "B",
            Tag::Inside => "I",
            Tag::Last => "L",
            Tag::Outside => "O",
            Tag::Unit => "U",
        };
        write!(f, "{}", letter)
    }
}

/// Operation a character takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Ordinary segmental material
    #[serde(rename = "S")]
    Standard,
    /// Inside a `{...}` region before `>`: underlying material a process
    /// deletes or replaces
    #[serde(rename = "D")]
    Deletion,
    /// After `>` inside a `{...}` region: material realized in the process's
    /// target span
    #[serde(rename = "A")]
    Alignment,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Op::Standard => "S",
            Op::Deletion => "D",
            Op::Alignment => "A",
        };
        write!(f, "{}", letter)
    }
}

/// One grapheme of a numbered UR line.
///
/// The grapheme itself is immutable once emitted; the tag may be rewritten
/// once, at process closure or morph end. `gloss` is empty until the binder
/// stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "char")]
    pub grapheme: String,
    pub tag: Tag,
    pub op: Op,
    pub span: i64,
    pub gloss: String,
}

impl Character {
    pub fn new<S: Into<String>>(grapheme: S, tag: Tag, op: Op, span: i64) -> Self {
        Self {
            grapheme: grapheme.into(),
            tag,
            op,
            span,
            gloss: String::new(),
        }
    }

    /// Synthetic word-boundary character.
    pub fn boundary() -> Self {
        Self::new(" ", Tag::Outside, Op::Standard, BOUNDARY_SPAN)
    }

    pub fn is_boundary(&self) -> bool {
        self.span == BOUNDARY_SPAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(format!("{}", Tag::Begin), "B");
        assert_eq!(format!("{}", Tag::Unit), "U");
        assert_eq!(format!("{}", Op::Alignment), "A");
    }

    #[test]
    fn test_boundary_character() {
        let ch = Character::boundary();
        assert_eq!(ch.grapheme, " ");
        assert_eq!(ch.tag, Tag::Outside);
        assert_eq!(ch.span, BOUNDARY_SPAN);
        assert!(ch.is_boundary());
    }

    #[test]
    fn test_character_serializes_with_letter_codes() {
        let ch = Character::new("a", Tag::Begin, Op::Standard, 0);
        let json = serde_json::to_string(&ch).unwrap();
        assert_eq!(
            json,
            r#"{"char":"a","tag":"B","op":"S","span":0,"gloss":""}"#
        );
    }
}
