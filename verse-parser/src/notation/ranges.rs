//! Range Notation Expander
//!
//!     Expands `10-11,13-15` into `[10, 11, 13, 14, 15]`. Each item is either a bare
//!     number or an explicit `start-end` pair, expanded inclusively and in input order.
//!
//!     The expander never fails. It scans for `<digits>(-<digits>)?` and skips anything
//!     else, so `1,,2`, `x3` or `4-` still yield whatever items can be found. Items it
//!     cannot honour (a number above `u32::MAX`, a range longer than a
//!     configured [Limits::max_range_len]) are skipped with a warning.
//!
//!     Unlike the chapter notation, the start of a range is written out. Do not route one
//!     notation through the other's range rule: `3,1-2` is `[3, 1, 2]` here, while `3,1-2`
//!     in a chapter list would anchor at 1.

use super::limits::Limits;
use super::Verse;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Matches one item: a number, optionally followed by `-` and a range end.
static RANGE_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)(?:-([0-9]+))?").unwrap());

/// Lenient expander for flat range notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeExpander {
    limits: Limits,
}

impl RangeExpander {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn expand(&self, input: &str) -> Vec<Verse> {
        let mut verses = Vec::new();

        for captures in RANGE_ITEM_REGEX.captures_iter(input) {
            let whole = captures.get(0).map(|m| m.as_str()).unwrap_or_default();
            let Some(start) = captures.get(1).and_then(|m| m.as_str().parse::<Verse>().ok())
            else {
                warn!(item = whole, "skipping number that does not fit a verse");
                continue;
            };

            match captures.get(2) {
                None => verses.push(start),
                Some(end) => {
                    let Ok(end) = end.as_str().parse::<Verse>() else {
                        warn!(item = whole, "skipping range end that does not fit a verse");
                        continue;
                    };
                    if let Err(len) = expand_explicit_range(&mut verses, start, end, &self.limits)
                    {
                        warn!(
                            item = whole,
                            len,
                            limit = ?self.limits.max_range_len,
                            "skipping range longer than the limit"
                        );
                    }
                }
            }
        }

        debug!(verses = verses.len(), "expanded range notation");
        verses
    }
}

/// Append `start..=end` to `verses`; nothing when `start > end`.
///
/// Fails with the would-be length when the range exceeds a configured cap, leaving `verses`
/// untouched.
pub fn expand_explicit_range(
    verses: &mut Vec<Verse>,
    start: Verse,
    end: Verse,
    limits: &Limits,
) -> Result<(), u64> {
    if start > end {
        return Ok(());
    }
    let len = u64::from(end - start) + 1;
    if limits.exceeded_by(len).is_some() {
        return Err(len);
    }
    verses.extend(start..=end);
    Ok(())
}

/// Expand range notation with the default limits.
pub fn expand_ranges(input: &str) -> Vec<Verse> {
    RangeExpander::default().expand(input)
}
