use super::*;
use crate::layout::parser::parse_layout;

fn assert_rect_close(rect: Rect, expected: (f64, f64, f64, f64)) {
    let (x0, y0, x1, y1) = expected;
    for (got, want) in [
        (rect.x0, x0),
        (rect.y0, y0),
        (rect.x1, x1),
        (rect.y1, y1),
    ] {
        assert!((got - want).abs() < 1e-9, "{rect:?} vs {expected:?}");
    }
}

#[test]
fn rects_tile_the_unit_square_in_traversal_order() {
    let tree = parse_layout("2S|60:40/2R|50:50/1R|100");
    let rects = area_rects(&tree);
    assert_eq!(rects.len(), 3);
    assert_rect_close(rects[0].rect, (0.0, 0.0, 0.6, 0.5));
    assert_rect_close(rects[1].rect, (0.0, 0.5, 0.6, 1.0));
    assert_rect_close(rects[2].rect, (0.6, 0.0, 1.0, 1.0));
    assert_eq!(rects[0].area_index, 0);
    assert_eq!(rects[2].address, AreaAddress::from_index(2));
}

#[test]
fn rect_addresses_prefer_pinned_tags() {
    let tree = parse_layout("1S|100/2R|50#7:50");
    let rects = area_rects(&tree);
    assert_eq!(rects[0].address, AreaAddress::from_tag("7"));
    assert_eq!(rects[1].address, AreaAddress::from_index(1));
}

#[test]
fn hit_test_resolves_drop_points() {
    let tree = parse_layout("2S|60:40/2R|50:50/1R|100");
    let hit = |x, y| hit_test(&tree, Point::new(x, y));
    assert_eq!(hit(0.3, 0.25), Some(AreaAddress::from_index(0)));
    assert_eq!(hit(0.3, 0.75), Some(AreaAddress::from_index(1)));
    assert_eq!(hit(0.8, 0.5), Some(AreaAddress::from_index(2)));
    assert_eq!(hit(1.5, 0.5), None);
}

#[test]
fn hit_test_skips_degenerate_areas() {
    let tree = parse_layout("2S|0:100/1R|100/1R|100");
    // Column 0 has zero width; the point on its edge belongs to column 1.
    assert_eq!(
        hit_test(&tree, Point::new(0.0, 0.5)),
        Some(AreaAddress::from_index(1))
    );
}

#[test]
fn empty_tree_has_no_rects_and_no_hits() {
    let tree = parse_layout("not a layout");
    assert!(area_rects(&tree).is_empty());
    assert_eq!(hit_test(&tree, Point::new(0.5, 0.5)), None);
}
