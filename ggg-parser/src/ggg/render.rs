//! Output rendering for encoded character sequences and parsed glosses
//!
//! The character table is the human-readable form (one character per line);
//! JSON is the machine-readable form the CLI emits for downstream training
//! pipelines.

use crate::ggg::ast::character::Character;
use crate::ggg::ast::morph::GlossMorph;

/// Render characters one per line: quoted grapheme, tag, op, span, quoted
/// gloss.
pub fn character_table(chars: &[Character]) -> String {
    let mut out = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{:?} {} {} {} {:?}",
            ch.grapheme, ch.tag, ch.op, ch.span, ch.gloss
        ));
    }
    out
}

/// Render characters as a JSON array.
pub fn character_json(chars: &[Character]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(chars)
}

/// Canonical re-rendering of a parsed gloss line. Re-parsing the result
/// yields the same morph sequence.
pub fn gloss_line(glosses: &[GlossMorph]) -> String {
    glosses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ggg::ast::character::{Op, Tag};
    use crate::ggg::ast::morph::{GlossProcess, MorphType};

    #[test]
    fn test_character_table() {
        let chars = vec![
            Character::new("a", Tag::Begin, Op::Standard, 0),
            Character::boundary(),
        ];
        assert_eq!(
            character_table(&chars),
            "\"a\" B S 0 \"\"\n\" \" O S -1 \"\""
        );
    }

    #[test]
    fn test_gloss_line_round_trip() {
        let glosses = vec![
            GlossMorph::new(MorphType::Prefix, "un", vec![]),
            GlossMorph::new(
                MorphType::Root,
                "do",
                vec![GlossProcess::new("ABLAUT", vec![1])],
            ),
        ];
        assert_eq!(gloss_line(&glosses), "un- do{ABLAUT;1}");
    }

    #[test]
    fn test_character_json_is_an_array() {
        let chars = vec![Character::new("a", Tag::Unit, Op::Standard, 0)];
        let json = character_json(&chars).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"tag\": \"U\""));
    }
}
