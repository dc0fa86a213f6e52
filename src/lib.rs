//! Romanizes Tamil script into a phonetic Latin transliteration, for
//! producing pronunciation guides from song and verse text.
//!
//! The engine itself is [`translit::convert`]: one line of Tamil in, one
//! line of romanized text out, with everything unmapped passing through
//! unchanged. [`walker`] and [`format`] wrap it with the line-oriented file
//! rewrite and songbook markup.

pub mod format;
pub mod script;
pub mod trace_init;
pub mod translit;
pub mod walker;

pub use translit::convert;
