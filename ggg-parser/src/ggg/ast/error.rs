//! Error types for grammar, structure, alignment, and binding failures
//!
//! Validation of a record halts at its first failing check, so every error
//! here carries enough context (record id, token id, the disagreeing
//! counts) to locate the fault without replaying the parse. Errors that
//! wrap an underlying cause expose it through `source()`.

use std::fmt;

/// Which annotation line an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Ur,
    Sr,
    Gloss,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Ur => "UR",
            LineKind::Sr => "SR",
            LineKind::Gloss => "GL",
        };
        write!(f, "{}", name)
    }
}

/// A line does not match its grammar.
///
/// Lines parse completely or not at all; there are no partial results.
#[derive(Debug, Clone)]
pub struct GrammarError {
    pub line: LineKind,
    /// Character offset of the failure
    pub position: usize,
    /// The offending character, if the failure was not at end of input
    pub found: Option<char>,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(ch) => write!(
                f,
                "{} line does not match its grammar at position {} (found {:?})",
                self.line, self.position, ch
            ),
            None => write!(
                f,
                "{} line does not match its grammar at position {} (unexpected end of line)",
                self.line, self.position
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// Document or record does not match the expected shape.
#[derive(Debug)]
pub enum StructureError {
    /// A key not present in the document schema
    UnknownField { path: String },
    /// A leaf value of the wrong runtime type
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Typed decoding failed (missing or malformed field)
    Decode { path: String, message: String },
    /// A grammar failure, resurfaced at the document layer
    Grammar { seg: usize, source: GrammarError },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnknownField { path } => {
                write!(f, "Field '{}' does not exist in schema.", path)
            }
            StructureError::TypeMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "Value at '{}' is not of type '{}' (found {}).",
                path, expected, found
            ),
            StructureError::Decode { path, message } => {
                write!(f, "Cannot decode document at '{}': {}.", path, message)
            }
            StructureError::Grammar { seg, source } => {
                write!(f, "Error parsing {} in Segment {}.", source.line, seg)
            }
        }
    }
}

impl std::error::Error for StructureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StructureError::Grammar { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Morph counts, morph types, or process counts disagree across UR/SR/GL.
#[derive(Debug, Clone)]
pub enum AlignmentError {
    /// The three lines parse to different numbers of morphs
    TokenCount {
        seg: usize,
        ur: usize,
        sr: usize,
        gl: usize,
    },
    /// Corresponding morphs have different types
    TokenType { seg: usize, token: usize },
    /// Corresponding morphs encode different numbers of processes
    ProcessCount {
        seg: usize,
        token: usize,
        ur: usize,
        sr: usize,
        gl: usize,
    },
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentError::TokenCount { seg, ur, sr, gl } => write!(
                f,
                "Number of tokens in Segment {} do not agree. UR: {}, SR: {}, GL: {}.",
                seg, ur, sr, gl
            ),
            AlignmentError::TokenType { seg, token } => write!(
                f,
                "Types of tokens in Segment {}, Token {} do not align.",
                seg, token
            ),
            AlignmentError::ProcessCount {
                seg,
                token,
                ur,
                sr,
                gl,
            } => write!(
                f,
                "Number of processes in Segment {}, Token {} do not agree. UR: {}, SR: {}, GL: {}.",
                seg, token, ur, sr, gl
            ),
        }
    }
}

impl std::error::Error for AlignmentError {}

/// A numbered character's span has no gloss binding.
///
/// Surfaced as an error rather than defaulted: a silently unlabeled
/// character would corrupt downstream training data.
#[derive(Debug, Clone)]
pub struct BindingError {
    pub span: i64,
    /// Index of the character in the numbered sequence
    pub index: usize,
    pub grapheme: String,
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No gloss bound for span {} (character {}, {:?}).",
            self.span, self.index, self.grapheme
        )
    }
}

impl std::error::Error for BindingError {}

/// Errors from the encoding pipeline.
#[derive(Debug)]
pub enum EncodeError {
    /// The gloss line failed to parse
    Grammar(GrammarError),
    /// A character's span had no gloss binding
    Binding(BindingError),
    /// SR-side encoding has no span scheme yet
    SrUnsupported,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Grammar(err) => write!(f, "Cannot encode: {}", err),
            EncodeError::Binding(err) => write!(f, "Cannot encode: {}", err),
            EncodeError::SrUnsupported => {
                write!(f, "SR encoding is not yet supported.")
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Grammar(err) => Some(err),
            EncodeError::Binding(err) => Some(err),
            EncodeError::SrUnsupported => None,
        }
    }
}

impl From<GrammarError> for EncodeError {
    fn from(err: GrammarError) -> Self {
        EncodeError::Grammar(err)
    }
}

impl From<BindingError> for EncodeError {
    fn from(err: BindingError) -> Self {
        EncodeError::Binding(err)
    }
}

/// Record-level validation failure.
#[derive(Debug)]
pub enum ValidationError {
    Structure(StructureError),
    Alignment(AlignmentError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Structure(err) => write!(f, "{}", err),
            ValidationError::Alignment(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::Structure(err) => Some(err),
            ValidationError::Alignment(err) => Some(err),
        }
    }
}

impl From<StructureError> for ValidationError {
    fn from(err: StructureError) -> Self {
        ValidationError::Structure(err)
    }
}

impl From<AlignmentError> for ValidationError {
    fn from(err: AlignmentError) -> Self {
        ValidationError::Alignment(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError {
            line: LineKind::Ur,
            position: 3,
            found: Some('>'),
        };
        assert_eq!(
            err.to_string(),
            "UR line does not match its grammar at position 3 (found '>')"
        );
    }

    #[test]
    fn test_structure_error_exposes_cause() {
        use std::error::Error;

        let err = StructureError::Grammar {
            seg: 2,
            source: GrammarError {
                line: LineKind::Gloss,
                position: 0,
                found: None,
            },
        };
        assert_eq!(err.to_string(), "Error parsing GL in Segment 2.");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_alignment_error_names_counts() {
        let err = AlignmentError::ProcessCount {
            seg: 0,
            token: 1,
            ur: 0,
            sr: 0,
            gl: 1,
        };
        assert_eq!(
            err.to_string(),
            "Number of processes in Segment 0, Token 1 do not agree. UR: 0, SR: 0, GL: 1."
        );
    }
}
