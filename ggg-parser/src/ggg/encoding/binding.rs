//! Gloss-to-Span Binder
//!
//! Replays the numbering engine's span arithmetic on the gloss side: each
//! gloss morph's base feature lands on its matrix id, and its processes
//! land on matrix-relative offsets: either the next sequential offset (an
//! unqualified process) or the offsets the annotator listed. The resulting
//! map stamps every numbered UR character with its feature label.

use std::collections::HashMap;

use tracing::debug;

use crate::ggg::ast::character::Character;
use crate::ggg::ast::error::{BindingError, EncodeError};
use crate::ggg::ast::morph::GlossMorph;
use crate::ggg::encoding::spans::number_ur;
use crate::ggg::grammar;

/// Build the span-id → feature-label map for one gloss line.
pub fn bind_glosses(glosses: &[GlossMorph]) -> HashMap<i64, String> {
    let mut offset: i64 = 1;
    let mut span_glosses = HashMap::new();
    for (matrix, morph) in glosses.iter().enumerate() {
        let matrix = matrix as i64;
        span_glosses.insert(matrix, morph.feature.clone());
        for process in &morph.processes {
            if process.targets.is_empty() {
                span_glosses.insert(matrix + offset, process.feature.clone());
                offset += 1;
            } else {
                let mut max_target = offset;
                for &target in &process.targets {
                    span_glosses.insert(matrix + target, process.feature.clone());
                    max_target = max_target.max(target);
                }
                // Advance past the largest explicit offset.
                offset = max_target + 1;
            }
        }
    }
    span_glosses
}

/// Merge a UR line and its gloss line into fully labeled characters.
///
/// Word-boundary characters sit outside every span and take the empty
/// gloss; for any other character, a span with no binding is an error.
pub fn encode_ur(ur: &str, gloss: &str) -> Result<Vec<Character>, EncodeError> {
    let glosses = grammar::parse_gloss(gloss)?;
    let span_glosses = bind_glosses(&glosses);
    let mut chars = number_ur(ur);
    for (index, ch) in chars.iter_mut().enumerate() {
        if ch.is_boundary() {
            continue;
        }
        match span_glosses.get(&ch.span) {
            Some(feature) => ch.gloss = feature.clone(),
            None => {
                return Err(EncodeError::Binding(BindingError {
                    span: ch.span,
                    index,
                    grapheme: ch.grapheme.clone(),
                }))
            }
        }
    }
    debug!(characters = chars.len(), "encoded form/gloss pair");
    Ok(chars)
}
