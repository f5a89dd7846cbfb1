//! Integration tests for chapter notation parsing
//!
//! Each case pins the full output of the parser for one input, including the
//! permissive corner cases of the grammar (dropped trailing chapters, resets on
//! repeated chapters, ranges anchored to the previous verse).

use rstest::rstest;
use verse_parser::{parse_chapters, ChapterMap, ChapterVerseParser, Limits, NotationError};

fn map(entries: &[(u32, &[u32])]) -> ChapterMap {
    entries
        .iter()
        .map(|(chapter, verses)| (*chapter, verses.to_vec()))
        .collect()
}

#[rstest]
#[case::reference(
    "150:10-12,14,16-18,20 2:10,12-17,19 3:15",
    map(&[
        (150, &[10, 11, 12, 14, 16, 17, 18, 20]),
        (2, &[10, 12, 13, 14, 15, 16, 17, 19]),
        (3, &[15]),
    ])
)]
#[case::empty("", map(&[]))]
#[case::single_chapter("5:1-3", map(&[(5, &[1, 2, 3])]))]
#[case::single_verse("1:1", map(&[(1, &[1])]))]
#[case::colon_only("5:", map(&[(5, &[])]))]
#[case::key_without_colon("150", map(&[]))]
#[case::trailing_key_dropped("5:1-3 6", map(&[(5, &[1, 2, 3])]))]
#[case::only_last_key_registers("1 2:3", map(&[(2, &[3])]))]
#[case::detached_verses_are_discarded("1,2-4:5", map(&[(1, &[5])]))]
#[case::repeated_chapter_resets("5:1,2 6:1 5:9", map(&[(5, &[9]), (6, &[1])]))]
#[case::second_colon_resets("5:1:2", map(&[(5, &[2])]))]
#[case::range_after_range("1:1-3-5", map(&[(1, &[1, 2, 3, 4, 5])]))]
#[case::reversed_range("1:9-3,4", map(&[(1, &[9, 4])]))]
#[case::duplicates_kept("1:2,2,1", map(&[(1, &[2, 2, 1])]))]
#[case::leading_space(" 4:2", map(&[(4, &[2])]))]
#[case::stray_commas("1:,,2,", map(&[(1, &[2])]))]
#[case::key_change_without_list("5:1 2 3:4", map(&[(5, &[1]), (3, &[4])]))]
fn test_parses(#[case] input: &str, #[case] expected: ChapterMap) {
    assert_eq!(parse_chapters(input).unwrap(), expected);
}

#[rstest]
#[case::dash_first_in_list("5:-3", NotationError::MalformedRange { position: 2 })]
#[case::dash_before_any_verse("1 2-3:4", NotationError::MalformedRange { position: 3 })]
#[case::dangling_dash("5:1-", NotationError::MalformedNumber { position: 4 })]
#[case::dash_dash("5:1--2", NotationError::MalformedNumber { position: 4 })]
#[case::bare_dash("-", NotationError::MalformedNumber { position: 1 })]
#[case::double_space("1:1  2:3", NotationError::MalformedNumber { position: 4 })]
#[case::trailing_space("1:1 ", NotationError::MalformedNumber { position: 4 })]
#[case::space_then_colon("1:1 :2", NotationError::MalformedNumber { position: 4 })]
#[case::colon_first(":1", NotationError::MissingChapter { position: 0 })]
#[case::letters("1:a", NotationError::UnexpectedCharacter { found: 'a', position: 2 })]
#[case::tab("1:1\t2:3", NotationError::UnexpectedCharacter { found: '\t', position: 3 })]
#[case::overflow("1:4294967296", NotationError::NumberOverflow { position: 2 })]
#[case::overflowing_key("4294967296:1", NotationError::NumberOverflow { position: 0 })]
fn test_rejects(#[case] input: &str, #[case] expected: NotationError) {
    assert_eq!(parse_chapters(input), Err(expected));
}

#[test]
fn test_range_limit_is_configurable() {
    let strict = ChapterVerseParser::new(Limits::new(10));
    assert_eq!(
        strict.parse("1:1-100"),
        Err(NotationError::RangeTooLong {
            position: 3,
            len: 99,
            limit: 10
        })
    );

    let relaxed = ChapterVerseParser::new(Limits::new(100));
    assert_eq!(relaxed.parse("1:1-100").unwrap().verse_count(), 100);
}

#[test]
fn test_parser_is_reusable() {
    let parser = ChapterVerseParser::default();
    let first = parser.parse("1:1-2").unwrap();
    let failed = parser.parse("1:-2");
    let second = parser.parse("2:3").unwrap();

    assert_eq!(first, map(&[(1, &[1, 2])]));
    assert!(failed.is_err());
    assert_eq!(second, map(&[(2, &[3])]));
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = ChapterVerseParser::default();
    let handles: Vec<_> = (1..=4u32)
        .map(|chapter| {
            std::thread::spawn(move || parser.parse(&format!("{chapter}:1-{chapter}")))
        })
        .collect();

    for (chapter, handle) in (1..=4u32).zip(handles) {
        let result = handle.join().expect("thread panicked").unwrap();
        assert_eq!(result.get(chapter).map(<[u32]>::len), Some(chapter as usize));
    }
}

#[test]
fn test_canonical_notation() {
    let map = parse_chapters("150:10,11,12,14,16-18,20 2:10,12-17,19 3:15").unwrap();
    insta::assert_snapshot!(map.to_notation(), @"150:10-12,14,16-18,20 2:10,12-17,19 3:15");
}

#[test]
fn test_json_output() {
    let map = parse_chapters("150:10-12 3:15").unwrap();
    insta::assert_snapshot!(serde_json::to_string(&map).unwrap(), @r#"{"150":[10,11,12],"3":[15]}"#);
}

#[test]
fn test_error_messages() {
    let err = parse_chapters("5:-3").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"range at byte 2 has no preceding verse to start from");
}
