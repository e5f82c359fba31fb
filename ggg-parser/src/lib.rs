//! # ggg
//!
//! A parser, validator, and BILOU encoder for the GGG interlinear gloss
//! format.
//!
//! A GGG document is a YAML container holding utterance records. Each record
//! carries four annotation lines: the underlying representation (`ur`), the
//! surface representation (`sr`), the morpheme-by-morpheme gloss (`gl`), and
//! a free translation (`tr`). The first three are written in a small
//! annotation syntax where `-`/`=` mark affix and clitic boundaries and
//! `{...}` marks phonological processes:
//!
//!     ur: c{a>o}t
//!     sr: c{o}t
//!     gl: cat{ABLAUT;1}
//!
//! The library has two independent pipelines over that syntax:
//!
//! - **Validation** ([`ggg::validation`]): parse all three lines with the
//!   grammars in [`ggg::grammar`] and check that morph counts, morph types,
//!   and process counts agree token by token.
//! - **Encoding** ([`ggg::encoding`]): number the UR's characters into
//!   spans with BILOU tags, bind gloss features to those spans, and emit the
//!   labeled character sequence a sequence-labeling model trains on.
//!
//! Document loading and schema checking live in [`ggg::loader`] and
//! [`ggg::schema`]; the `ggg` binary in the sibling `ggg-cli` crate wraps
//! both pipelines.

pub mod ggg;
