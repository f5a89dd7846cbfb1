//! Chapter Notation Parser
//!
//!     Parses `<chapter>:<verselist>( <chapter>:<verselist>)*` into a [ChapterMap] in a
//!     single pass over the token stream, with no backtracking.
//!
//! States
//!
//!     AwaitKey        Initial state, no chapter read yet. A digit run (or a space followed
//!                     by one) becomes the chapter key.
//!     AwaitListInit   A key is known but its list is not registered yet. Verses go to a
//!                     detached buffer that never reaches the output. The next `:`
//!                     registers (or resets) the key's list in the map.
//!     InList          Verses are appended to the list registered for the current key.
//!
//!     A space followed by a digit run is the only way to switch chapters after the first
//!     one, and it always lands in AwaitListInit. Registration happens at `:` only, so a
//!     trailing ` <digits>` with no `:` never shows up in the result.
//!
//! Ranges
//!
//!     A `-` is followed by the range end. The start is implicit: the range contributes
//!     every verse strictly greater than the last verse in the active list, up to and
//!     including the end. `5:3-6` is therefore 3, then 4, 5, 6. See [extend_from_last].
//!
//! Output Ownership
//!
//!     The map owns every list. The active list is an `ActiveList` handle: either a detached
//!     buffer or the index of a registered entry, so later verses land in the registered list
//!     without aliasing.

use super::error::NotationError;
use super::lexing::TokenCursor;
use super::limits::Limits;
use super::token::Token;
use super::{Chapter, Verse};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Range;
use tracing::{debug, trace};

/// Chapter to verse list mapping, enumerated in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct ChapterMap {
    entries: Vec<(Chapter, Vec<Verse>)>,
    index: HashMap<Chapter, usize>,
}

impl ChapterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty list for `chapter`, resetting any previous one in place.
    ///
    /// Returns the arena index of the list.
    pub fn register(&mut self, chapter: Chapter) -> usize {
        if let Some(&idx) = self.index.get(&chapter) {
            self.entries[idx].1.clear();
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push((chapter, Vec::new()));
        self.index.insert(chapter, idx);
        idx
    }

    fn list_mut(&mut self, idx: usize) -> &mut Vec<Verse> {
        &mut self.entries[idx].1
    }

    /// Insert a whole list, replacing the list of an already present chapter.
    pub fn insert(&mut self, chapter: Chapter, verses: Vec<Verse>) {
        let idx = self.register(chapter);
        *self.list_mut(idx) = verses;
    }

    pub fn get(&self, chapter: Chapter) -> Option<&[Verse]> {
        self.index
            .get(&chapter)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains_chapter(&self, chapter: Chapter) -> bool {
        self.index.contains_key(&chapter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Chapter, &[Verse])> + '_ {
        self.entries
            .iter()
            .map(|(chapter, verses)| (*chapter, verses.as_slice()))
    }

    pub fn chapters(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.entries.iter().map(|(chapter, _)| *chapter)
    }

    /// Total number of verses across all chapters, duplicates included.
    pub fn verse_count(&self) -> usize {
        self.entries.iter().map(|(_, verses)| verses.len()).sum()
    }

    pub fn into_inner(self) -> Vec<(Chapter, Vec<Verse>)> {
        self.entries
    }
}

// Equality follows enumeration order; the lookup table is derived from it.
impl PartialEq for ChapterMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ChapterMap {}

impl FromIterator<(Chapter, Vec<Verse>)> for ChapterMap {
    fn from_iter<I: IntoIterator<Item = (Chapter, Vec<Verse>)>>(iter: I) -> Self {
        let mut map = ChapterMap::new();
        for (chapter, verses) in iter {
            map.insert(chapter, verses);
        }
        map
    }
}

impl IntoIterator for ChapterMap {
    type Item = (Chapter, Vec<Verse>);
    type IntoIter = std::vec::IntoIter<(Chapter, Vec<Verse>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ChapterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (chapter, verses) in &self.entries {
            map.serialize_entry(chapter, verses)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitKey,
    AwaitListInit,
    InList,
}

/// Where verses read right now end up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveList {
    /// Not linked into the map; dropped unless a `:` follows.
    Detached(Vec<Verse>),
    /// Index of a registered list in the map's arena.
    Linked(usize),
}

/// Contribute every verse after the last one in `list` up to `end` inclusive.
///
/// An `end` at or below the last verse contributes nothing. `position` is the byte
/// offset of the `-`, used for errors.
pub fn extend_from_last(
    list: &mut Vec<Verse>,
    end: Verse,
    position: usize,
    limits: &Limits,
) -> Result<(), NotationError> {
    let last = *list
        .last()
        .ok_or(NotationError::MalformedRange { position })?;
    let start = match last.checked_add(1) {
        Some(start) if start <= end => start,
        _ => return Ok(()),
    };
    let len = u64::from(end - start) + 1;
    if let Some(limit) = limits.exceeded_by(len) {
        return Err(NotationError::RangeTooLong { position, len, limit });
    }
    list.extend(start..=end);
    Ok(())
}

/// State of a single parse call.
#[derive(Debug)]
struct ParseRun {
    state: ParserState,
    key: Option<Chapter>,
    active: ActiveList,
    result: ChapterMap,
    limits: Limits,
}

impl ParseRun {
    fn new(limits: Limits) -> Self {
        Self {
            state: ParserState::AwaitKey,
            key: None,
            active: ActiveList::Detached(Vec::new()),
            result: ChapterMap::new(),
            limits,
        }
    }

    fn active_list(&mut self) -> &mut Vec<Verse> {
        match self.active {
            ActiveList::Detached(ref mut buffer) => buffer,
            ActiveList::Linked(idx) => self.result.list_mut(idx),
        }
    }

    /// Apply one token. Space and dash pull their trailing digit run from `cursor`.
    fn transition(
        &mut self,
        token: Token,
        span: Range<usize>,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<(), NotationError> {
        trace!(state = ?self.state, %token, position = span.start, "transition");

        match (self.state, token) {
            (_, Token::Comma) => {}
            (ParserState::AwaitKey, Token::Digits) => {
                let chapter = cursor.number(&span)?;
                self.key = Some(chapter);
                self.state = ParserState::AwaitListInit;
            }
            (ParserState::AwaitListInit | ParserState::InList, Token::Digits) => {
                let verse = cursor.number(&span)?;
                self.active_list().push(verse);
            }
            (_, Token::Colon) => {
                let chapter = self.key.ok_or(NotationError::MissingChapter {
                    position: span.start,
                })?;
                let idx = self.result.register(chapter);
                self.active = ActiveList::Linked(idx);
                self.state = ParserState::InList;
            }
            (_, Token::Space) => {
                let (chapter, _) = cursor.expect_number(span.end)?;
                self.key = Some(chapter);
                self.active = ActiveList::Detached(Vec::new());
                self.state = ParserState::AwaitListInit;
            }
            (_, Token::Dash) => {
                let (end, _) = cursor.expect_number(span.end)?;
                let limits = self.limits;
                extend_from_last(self.active_list(), end, span.start, &limits)?;
            }
        }

        Ok(())
    }

    fn finish(self) -> ChapterMap {
        self.result
    }
}

/// Parser for chapter notation.
///
/// Holds only its limits; every call to [parse](ChapterVerseParser::parse) starts from a
/// fresh state, so one parser can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChapterVerseParser {
    limits: Limits,
}

impl ChapterVerseParser {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn parse(&self, input: &str) -> Result<ChapterMap, NotationError> {
        let mut cursor = TokenCursor::new(input)?;
        let mut run = ParseRun::new(self.limits);

        while let Some((token, span)) = cursor.next_token() {
            run.transition(token, span, &mut cursor)?;
        }

        let result = run.finish();
        debug!(
            chapters = result.len(),
            verses = result.verse_count(),
            "parsed chapter notation"
        );
        Ok(result)
    }
}

/// Parse chapter notation with the default limits.
pub fn parse_chapters(input: &str) -> Result<ChapterMap, NotationError> {
    ChapterVerseParser::default().parse(input)
}
