//! Typed document model
//!
//! A GGG document pairs language metadata with an ordered sequence of
//! utterance records. Documents are read-only inputs to validation and
//! encoding; nothing in the library mutates them.

use serde::{Deserialize, Serialize};

/// A single utterance record with its annotation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seg {
    /// Utterance start time, in seconds
    pub start: f64,
    /// Utterance end time, in seconds
    pub end: f64,
    /// Speaker id
    pub speaker: i64,
    /// Underlying (phonemic) representation
    pub ur: String,
    /// Surface (phonetic) representation
    pub sr: String,
    /// Morpheme-by-morpheme gloss
    pub gl: String,
    /// Free translation
    pub tr: String,
}

/// A GGG document: the object language, the metalanguages, and the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub obj_lang: String,
    pub meta_lang: Vec<String>,
    pub segs: Vec<Seg>,
}
