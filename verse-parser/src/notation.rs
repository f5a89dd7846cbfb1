//! Verse Notation
//!
//!     The notation is the compact text grammar carried in query parameters to denote a
//!     selection of verses. It comes in two flavours which look alike but expand ranges
//!     differently, so they are kept apart on purpose.
//!
//! Chapter Notation
//!
//!     <chapter>:<verselist>( <chapter>:<verselist>)*
//!     <verselist> = <verse>(-<verse>)?(,<verse>(-<verse>)?)*
//!
//!     Example: `150:10-12,14,16-18,20 2:10,12-17,19 3:15`
//!
//!     A range inside a verse list is anchored to the value emitted just before the dash:
//!     `5:3-6` contributes 3, then 4, 5, 6. Parsing is done by a token-driven state
//!     machine, see [chapters](chapters).
//!
//! Range Notation
//!
//!     <item>(,<item>)*   where <item> = <n> | <n>-<m>
//!
//!     Example: `10-11,13-15`
//!
//!     Each range is an explicit inclusive pair. The expander is lenient and picks out
//!     whatever items it can find, see [ranges](ranges).
//!
//! Pipeline
//!
//!     1. Tokenization with logos, see [token](token) and [lexing](lexing). Only the chapter
//!        notation is tokenized; the range notation is scanned with a regex.
//!     2. The chapter state machine consumes the token stream in one pass.
//!     3. Results can be rendered back into a canonical notation, see [canonical](canonical),
//!        and turned into a verse predicate, see [selection](selection).

pub mod canonical;
pub mod chapters;
pub mod error;
pub mod lexing;
pub mod limits;
pub mod ranges;
pub mod selection;
pub mod token;

/// Chapter number as written in the notation.
pub type Chapter = u32;

/// Verse number as written in the notation.
pub type Verse = u32;
