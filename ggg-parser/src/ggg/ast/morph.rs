//! Morph-level parse results
//!
//! A parsed annotation line is an ordered sequence of morphs. UR and SR
//! morphs hold literal segments and `{...}` processes; gloss morphs hold a
//! feature label and the processes attached to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Morpheme classification, derived from the `-`/`=` boundary markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphType {
    Root,
    Prefix,
    Suffix,
    Proclitic,
    Enclitic,
}

impl fmt::Display for MorphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MorphType::Root => "root",
            MorphType::Prefix => "prefix",
            MorphType::Suffix => "suffix",
            MorphType::Proclitic => "proclitic",
            MorphType::Enclitic => "enclitic",
        };
        write!(f, "{}", name)
    }
}

/// A `{source}` or `{source>target}` process annotation in a form line.
///
/// In the UR the target names where the process's realization lands; in the
/// SR a process carries only its realized value and `target` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormProcess {
    pub source: String,
    pub target: Option<String>,
}

/// One piece of a UR or SR morph: a literal run or a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPiece {
    Segment(String),
    Process(FormProcess),
}

/// A UR or SR morph: boundary classification plus ordered pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMorph {
    pub morph_type: MorphType,
    pub pieces: Vec<FormPiece>,
}

impl FormMorph {
    pub fn new(morph_type: MorphType, pieces: Vec<FormPiece>) -> Self {
        Self { morph_type, pieces }
    }

    /// Number of process pieces in this morph.
    pub fn process_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|piece| matches!(piece, FormPiece::Process(_)))
            .count()
    }
}

/// A gloss process: feature label plus explicit target-span offsets.
///
/// An empty target list is the sentinel for "the next sequential offset";
/// the binder resolves it against its running offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossProcess {
    pub feature: String,
    pub targets: Vec<i64>,
}

impl GlossProcess {
    pub fn new<S: Into<String>>(feature: S, targets: Vec<i64>) -> Self {
        Self {
            feature: feature.into(),
            targets,
        }
    }

    /// Offsets this process contributes to its token's process count. An
    /// unqualified process still names one offset.
    pub fn index_count(&self) -> usize {
        self.targets.len().max(1)
    }
}

impl fmt::Display for GlossProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.targets.is_empty() {
            write!(f, "{{{}}}", self.feature)
        } else {
            let targets = self
                .targets
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "{{{};{}}}", self.feature, targets)
        }
    }
}

/// A gloss morph: base feature plus attached processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossMorph {
    pub morph_type: MorphType,
    pub feature: String,
    pub processes: Vec<GlossProcess>,
}

impl GlossMorph {
    pub fn new<S: Into<String>>(
        morph_type: MorphType,
        feature: S,
        processes: Vec<GlossProcess>,
    ) -> Self {
        Self {
            morph_type,
            feature: feature.into(),
            processes,
        }
    }

    /// Total process count for cross-field agreement checks.
    pub fn process_count(&self) -> usize {
        self.processes.iter().map(GlossProcess::index_count).sum()
    }
}

impl fmt::Display for GlossMorph {
    /// Canonical re-rendering in the `{FEAT;i,j}` syntax, with the morph's
    /// boundary marker restored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut core = self.feature.clone();
        for process in &self.processes {
            core.push_str(&process.to_string());
        }
        match self.morph_type {
            MorphType::Suffix => write!(f, "-{}", core),
            MorphType::Enclitic => write!(f, "={}", core),
            MorphType::Prefix => write!(f, "{}-", core),
            MorphType::Proclitic => write!(f, "{}=", core),
            MorphType::Root => write!(f, "{}", core),
        }
    }
}
