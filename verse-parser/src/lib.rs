//! # verse-parser
//!
//! Parsers for the compact notation used to select bible chapters and verses.
//!
//! Two independent notations are supported:
//!
//!     - Chapter notation, e.g. `150:10-12,14 2:10,12-17`, parsed by
//!       [ChapterVerseParser](notation::chapters::ChapterVerseParser) into a
//!       [ChapterMap](notation::chapters::ChapterMap).
//!     - Flat range notation, e.g. `10-11,13-15`, expanded by
//!       [RangeExpander](notation::ranges::RangeExpander) into a list of verses.
//!
//! Both are pure functions of their input. See the [notation module](notation) for the grammar.

pub mod notation;

pub use notation::chapters::{parse_chapters, ChapterMap, ChapterVerseParser};
pub use notation::error::NotationError;
pub use notation::limits::Limits;
pub use notation::ranges::{expand_ranges, RangeExpander};
pub use notation::{Chapter, Verse};
