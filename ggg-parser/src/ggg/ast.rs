//! Data model for GGG annotation lines and documents
//!
//! All types here are plain values: a parse call produces them, the next
//! stage consumes them. Nothing holds back-references or shared state.

pub mod character;
pub mod document;
pub mod error;
pub mod morph;

pub use character::{Character, Op, Tag};
pub use document::{Document, Seg};
pub use morph::{FormMorph, FormPiece, FormProcess, GlossMorph, GlossProcess, MorphType};
