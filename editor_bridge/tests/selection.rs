use std::collections::BTreeMap;

use editor_bridge::{Converter, EditorPosition, NativeRange, OffsetIndex, PositionEncoding};
use source_pos::{SourceLocation, SourceMap, SourceRange, slice_source_range};

const SOURCE: &str = "import Foundation\n\nlet greeting = \"héllo 😀\"\nprint(greeting)\n";

#[test]
fn selection_maps_to_source_range_and_back() {
    let selection: NativeRange = serde_json::from_str(r#"{"start":37,"end":44}"#).unwrap();
    let range = Converter::native_range_to_source_range(
        SOURCE,
        Some("main.swift".to_string()),
        selection,
        PositionEncoding::Utf16,
    )
    .expect("selection should map");

    insta::assert_snapshot!(range.to_string(), @"main.swift@38..47");
    assert_eq!(slice_source_range(SOURCE, &range), Ok("llo 😀\""));
    assert_eq!(
        Converter::source_range_to_native_range(SOURCE, &range, PositionEncoding::Utf16),
        Some(selection)
    );

    let start = SourceMap::new(SOURCE)
        .line_col(range.start().offset)
        .expect("start is in bounds");
    assert_eq!((start.line, start.column), (3, 20));
}

#[test]
fn cursor_inside_surrogate_pair_is_rejected() {
    // Column 23 on row 2 falls between the two halves of the emoji.
    let pos = EditorPosition { row: 2, column: 23 };
    assert_eq!(
        Converter::editor_position_to_byte(SOURCE, pos, PositionEncoding::Utf16),
        None
    );

    let index = OffsetIndex::new(SOURCE, PositionEncoding::Utf16);
    let emoji = SOURCE.find('😀').unwrap() as u32;
    assert_eq!(index.to_native(source_pos::ByteOffset::new(emoji + 1)), None);
}

#[test]
fn source_ranges_sort_by_file_then_offset() {
    let loc = |file: &str, offset: u32| SourceLocation::in_file(file, offset);
    let mut diagnostics = BTreeMap::new();
    diagnostics.insert(
        SourceRange::new(loc("b.swift", 0), loc("b.swift", 4)).unwrap(),
        "second file",
    );
    diagnostics.insert(
        SourceRange::new(loc("a.swift", 100), loc("a.swift", 120)).unwrap(),
        "late in first file",
    );
    diagnostics.insert(
        SourceRange::new(loc("a.swift", 3), loc("a.swift", 9)).unwrap(),
        "early in first file",
    );

    let order: Vec<_> = diagnostics.values().copied().collect();
    assert_eq!(
        order,
        ["early in first file", "late in first file", "second file"]
    );
}
