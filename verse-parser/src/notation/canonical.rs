//! Canonical serialization
//!
//! Renders parsed results back into the shortest equivalent notation. Runs of two or
//! more consecutive ascending verses become `start-end`; everything else is written as
//! comma-separated numbers. Order and duplicates are kept, so re-parsing the output
//! yields the same structure.
//!
//! The run syntax is read correctly by both notations: the chapter parser anchors the
//! range at the run start that was emitted just before it.

use super::chapters::ChapterMap;
use super::Verse;
use std::fmt::{self, Write};

/// Render a flat verse list, e.g. `[1, 2, 3, 5]` as `1-3,5`.
pub fn to_range_notation(verses: &[Verse]) -> String {
    RunList(verses).to_string()
}

/// Display adapter writing a verse list with runs compressed.
struct RunList<'a>(&'a [Verse]);

impl fmt::Display for RunList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verses = self.0;
        let mut i = 0;
        while i < verses.len() {
            let start = verses[i];
            let mut end = start;
            let mut j = i + 1;
            while j < verses.len() && end.checked_add(1) == Some(verses[j]) {
                end = verses[j];
                j += 1;
            }

            if i > 0 {
                f.write_char(',')?;
            }
            if end == start {
                write!(f, "{}", start)?;
            } else {
                write!(f, "{}-{}", start, end)?;
            }
            i = j;
        }
        Ok(())
    }
}

impl ChapterMap {
    /// Canonical chapter notation for this map.
    pub fn to_notation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChapterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (chapter, verses)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}:{}", chapter, RunList(verses))?;
        }
        Ok(())
    }
}
