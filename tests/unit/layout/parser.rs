use super::*;

#[test]
fn empty_and_garbled_input_yield_the_empty_tree() {
    for definition in ["", "   ", "garbage", "S|50", "2X|50:50", "|", "2S", "2S|"] {
        let tree = parse_layout(definition);
        assert!(tree.is_empty(), "{definition:?} should not parse");
        assert_eq!(tree, LayoutTree::default());
    }
}

#[test]
fn zero_columns_yield_the_empty_tree() {
    assert!(parse_layout("0S|100").is_empty());
}

#[test]
fn two_column_layout_assigns_contiguous_area_indices() {
    let tree = parse_layout("2S|50:50/1R|100/2R|40:60");
    assert_eq!(tree.area_count, 3);
    assert_eq!(tree.columns.len(), 2);

    let left = &tree.columns[0];
    assert_eq!(left.start_index, 0);
    assert_eq!(left.width_percent, 50.0);
    assert_eq!(left.rows.len(), 1);
    assert_eq!(left.rows[0].area_index, 0);
    assert_eq!(left.rows[0].height_percent, 100.0);

    let right = &tree.columns[1];
    assert_eq!(right.start_index, 1);
    assert_eq!(right.rows.len(), 2);
    assert_eq!(right.rows[0].area_index, 1);
    assert_eq!(right.rows[0].height_percent, 40.0);
    assert_eq!(right.rows[1].area_index, 2);
    assert_eq!(right.rows[1].height_percent, 60.0);
}

#[test]
fn area_count_matches_manual_enumeration() {
    for definition in [
        "1S|100/1R|100",
        "2S|60:40/1R:100/1R:100",
        "3S|20:60:20/2R|50:50/1R|100/2R|50:50",
        "3S|12.5:75:12.5/3R|34:33:33/1R|100/3R|34:33:33",
    ] {
        let tree = parse_layout(definition);
        let enumerated: usize = tree.columns.iter().map(|c| c.rows.len()).sum();
        assert_eq!(tree.area_count, enumerated, "{definition}");
        let indices: Vec<usize> = tree.slots().map(|s| s.area_index).collect();
        assert_eq!(indices, (0..tree.area_count).collect::<Vec<_>>());
    }
}

#[test]
fn missing_column_segments_default_to_one_full_row() {
    let tree = parse_layout("3S|20:60:20");
    assert_eq!(tree.area_count, 3);
    for column in &tree.columns {
        assert_eq!(column.rows.len(), 1);
        assert_eq!(column.rows[0].height_percent, 100.0);
    }
}

#[test]
fn malformed_row_segment_defaults_to_one_full_row() {
    let tree = parse_layout("2S|50:50/bogus/2R|50:50");
    assert_eq!(tree.columns[0].rows.len(), 1);
    assert_eq!(tree.columns[0].rows[0].height_percent, 100.0);
    assert_eq!(tree.columns[1].rows.len(), 2);
    assert_eq!(tree.area_count, 3);
}

#[test]
fn zero_row_segment_defaults_to_one_full_row() {
    // `0R` counts as a malformed segment, not a zero-row column; the rest of
    // the layout stays intact.
    let tree = parse_layout("1S|100/0R|50");
    assert_eq!(tree.area_count, 1);
    assert_eq!(tree.columns[0].rows.len(), 1);
    assert_eq!(tree.columns[0].rows[0].height_percent, 100.0);
}

#[test]
fn markers_are_case_insensitive_and_tolerate_whitespace() {
    let tree = parse_layout("2 s|50:50/1 r|100/2 r|40:60");
    assert_eq!(tree.area_count, 3);
}

#[test]
fn colon_separated_row_form_is_accepted() {
    // The built-in presets write single rows as `1R:100`.
    let tree = parse_layout("2S|60:40/1R:100/2R:30:70");
    assert_eq!(tree.columns[0].rows[0].height_percent, 100.0);
    assert_eq!(tree.columns[1].rows[0].height_percent, 30.0);
    assert_eq!(tree.columns[1].rows[1].height_percent, 70.0);
}

#[test]
fn extra_column_segments_are_ignored() {
    let tree = parse_layout("1S|100/1R|100/2R|50:50");
    assert_eq!(tree.area_count, 1);
    assert_eq!(tree.columns.len(), 1);
}

#[test]
fn pinned_tags_are_parsed_from_row_tokens() {
    let tree = parse_layout("2S|60:40/1R|100#7/2R|30:70#9");
    assert_eq!(tree.columns[0].rows[0].pinned_tag.as_deref(), Some("7"));
    assert_eq!(tree.columns[1].rows[0].pinned_tag, None);
    assert_eq!(tree.columns[1].rows[1].pinned_tag.as_deref(), Some("9"));
}

#[test]
fn pinned_tag_does_not_disturb_sizing() {
    let tree = parse_layout("1S|100/2R|30#5:70");
    assert_eq!(tree.columns[0].rows[0].height_percent, 30.0);
    assert_eq!(tree.columns[0].rows[1].height_percent, 70.0);
}

#[test]
fn duplicate_pinned_tag_first_occurrence_wins() {
    let tree = parse_layout("1S|100/3R|30#5:30#5:40");
    let tags: Vec<Option<&str>> = tree.slots().map(|s| s.pinned_tag.as_deref()).collect();
    assert_eq!(tags, vec![Some("5"), None, None]);
}

#[test]
fn slot_at_finds_positional_indices() {
    let tree = parse_layout("2S|50:50/1R|100/2R|40:60");
    assert_eq!(tree.slot_at(2).map(|s| s.column_index), Some(1));
    assert_eq!(tree.slot_at(2).map(|s| s.row_index), Some(1));
    assert!(tree.slot_at(3).is_none());
}

#[test]
fn tree_round_trips_through_json() {
    let tree = parse_layout("2S|60:40/1R|100#7/2R|30:70");
    let json = serde_json::to_string(&tree).unwrap();
    let back: LayoutTree = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, back);
}
