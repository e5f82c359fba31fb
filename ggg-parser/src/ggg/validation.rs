//! Cross-field validation
//!
//! One record's UR, SR, and GL lines must tell the same story: the same
//! number of morphs, the same morph type at every position, and the same
//! number of phonological processes at every position. Validation stops at
//! a record's first failing check; document validation stops at the first
//! failing record.

use tracing::debug;

use crate::ggg::ast::document::{Document, Seg};
use crate::ggg::ast::error::{AlignmentError, StructureError, ValidationError};
use crate::ggg::ast::morph::{FormMorph, GlossMorph};
use crate::ggg::grammar;

/// Validate every record of a document, stopping at the first failure.
pub fn validate_document(doc: &Document) -> Result<(), ValidationError> {
    for (seg_id, seg) in doc.segs.iter().enumerate() {
        validate_seg(seg_id, seg)?;
    }
    Ok(())
}

/// Validate one record: grammar conformance of all three lines, then
/// token-count, token-type, and process-count agreement.
pub fn validate_seg(seg_id: usize, seg: &Seg) -> Result<(), ValidationError> {
    debug!(seg_id, "validating record");
    let ur = grammar::parse_ur(&seg.ur)
        .map_err(|source| StructureError::Grammar { seg: seg_id, source })?;
    let sr = grammar::parse_sr(&seg.sr)
        .map_err(|source| StructureError::Grammar { seg: seg_id, source })?;
    let gl = grammar::parse_gloss(&seg.gl)
        .map_err(|source| StructureError::Grammar { seg: seg_id, source })?;

    if ur.len() != sr.len() || sr.len() != gl.len() {
        return Err(AlignmentError::TokenCount {
            seg: seg_id,
            ur: ur.len(),
            sr: sr.len(),
            gl: gl.len(),
        }
        .into());
    }

    for (token_id, ((u, s), g)) in ur.iter().zip(sr.iter()).zip(gl.iter()).enumerate() {
        validate_token(seg_id, token_id, u, s, g)?;
    }
    Ok(())
}

fn validate_token(
    seg: usize,
    token: usize,
    ur: &FormMorph,
    sr: &FormMorph,
    gl: &GlossMorph,
) -> Result<(), ValidationError> {
    if ur.morph_type != sr.morph_type || sr.morph_type != gl.morph_type {
        return Err(AlignmentError::TokenType { seg, token }.into());
    }
    let counts = (ur.process_count(), sr.process_count(), gl.process_count());
    if counts.0 != counts.1 || counts.1 != counts.2 {
        return Err(AlignmentError::ProcessCount {
            seg,
            token,
            ur: counts.0,
            sr: counts.1,
            gl: counts.2,
        }
        .into());
    }
    Ok(())
}
