//! BILOU span encoding
//!
//! Two stages over one record: [`spans`] numbers a raw UR line into tagged,
//! span-identified characters, and [`binding`] resolves a parsed gloss line
//! onto those span ids and stamps each character with its feature label.
//! The result is the per-character training representation for a
//! sequence-labeling model.

pub mod binding;
pub mod spans;

pub use binding::{bind_glosses, encode_ur};
pub use spans::number_ur;

use crate::ggg::ast::character::Character;
use crate::ggg::ast::error::EncodeError;

/// SR-side encoding has no span scheme yet; callers get an explicit error
/// instead of a guessed alignment.
pub fn encode_sr(_sr: &str) -> Result<Vec<Character>, EncodeError> {
    Err(EncodeError::SrUnsupported)
}
