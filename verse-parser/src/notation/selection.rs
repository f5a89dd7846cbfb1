//! Verse selection predicates
//!
//! Parsed notation is consumed as a filter over stored verses. A chapter map selects
//! a verse when its chapter has an entry listing that verse, i.e. an OR over chapters
//! of `chapter == c AND verse IN list`. An empty selection places no constraint at all
//! and callers are expected to run the unfiltered query.

use super::chapters::ChapterMap;
use super::{Chapter, Verse};

impl ChapterMap {
    /// Whether `chapter:verse` is selected by this map.
    pub fn matches(&self, chapter: Chapter, verse: Verse) -> bool {
        if self.is_empty() {
            return true;
        }
        self.get(chapter)
            .is_some_and(|verses| verses.contains(&verse))
    }

    /// Every selected `(chapter, verse)` pair in enumeration order, duplicates included.
    pub fn pairs(&self) -> impl Iterator<Item = (Chapter, Verse)> + '_ {
        self.iter()
            .flat_map(|(chapter, verses)| verses.iter().map(move |&verse| (chapter, verse)))
    }
}

/// Whether `verse` is selected by a flat list; an empty list selects every verse.
pub fn verse_matches(verses: &[Verse], verse: Verse) -> bool {
    verses.is_empty() || verses.contains(&verse)
}
