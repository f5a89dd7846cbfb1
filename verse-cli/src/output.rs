//! Rendering of parse results for the terminal

use verse_config::OutputFormat;
use verse_parser::notation::canonical::to_range_notation;
use verse_parser::{ChapterMap, NotationError, Verse};

/// Result of one of the two notations
#[derive(Debug)]
pub enum Parsed {
    Chapters(ChapterMap),
    Verses(Vec<Verse>),
}

/// Render a parse result in the requested format
pub fn render(parsed: &Parsed, format: OutputFormat) -> Result<String, serde_json::Error> {
    let rendered = match (parsed, format) {
        (Parsed::Chapters(map), OutputFormat::Json) => serde_json::to_string(map)?,
        (Parsed::Verses(verses), OutputFormat::Json) => serde_json::to_string(verses)?,
        (Parsed::Chapters(map), OutputFormat::Pretty) => serde_json::to_string_pretty(map)?,
        (Parsed::Verses(verses), OutputFormat::Pretty) => serde_json::to_string_pretty(verses)?,
        (Parsed::Chapters(map), OutputFormat::Debug) => {
            format!("{:?}", map.iter().collect::<Vec<_>>())
        }
        (Parsed::Verses(verses), OutputFormat::Debug) => format!("{:?}", verses),
        (Parsed::Chapters(map), OutputFormat::Notation) => map.to_notation(),
        (Parsed::Verses(verses), OutputFormat::Notation) => to_range_notation(verses),
    };
    Ok(rendered)
}

/// Error message followed by the input with a caret under the offending position
pub fn render_error(input: &str, err: &NotationError) -> String {
    let column = input
        .get(..err.position())
        .map_or(0, |prefix| prefix.chars().count());
    format!("error: {}\n  {}\n  {}^", err, input, " ".repeat(column))
}
