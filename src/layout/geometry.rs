use kurbo::{Point, Rect};

use crate::{layout::parser::LayoutTree, slide::address::AreaAddress};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One area of a resolved tree flattened into the unit square, ready for the
/// preview widget to scale into device pixels.
pub struct AreaRect {
    /// Resolved address of the area (pinned tag or positional index).
    pub address: AreaAddress,
    /// Positional area index, for callers that track traversal order.
    pub area_index: usize,
    /// Fractional bounds within `[0, 1] x [0, 1]`.
    pub rect: Rect,
}

/// Flatten a tree into fractional rectangles, columns advancing in x and rows
/// in y, in area traversal order. Zero-sized columns or rows still occupy
/// their slot and produce degenerate rects.
pub fn area_rects(tree: &LayoutTree) -> Vec<AreaRect> {
    let mut rects = Vec::with_capacity(tree.area_count);
    let mut x = 0.0;
    for column in &tree.columns {
        let width = column.width_percent / 100.0;
        let mut y = 0.0;
        for slot in &column.rows {
            let height = slot.height_percent / 100.0;
            rects.push(AreaRect {
                address: AreaAddress::for_slot(slot),
                area_index: slot.area_index,
                rect: Rect::new(x, y, x + width, y + height),
            });
            y += height;
        }
        x += width;
    }
    rects
}

/// Address of the area containing a fractional point, used to resolve drop
/// targets. Degenerate (zero-area) rects never match. Returns `None` outside
/// every area, including for the empty tree.
pub fn hit_test(tree: &LayoutTree, point: Point) -> Option<AreaAddress> {
    area_rects(tree)
        .into_iter()
        .find(|area| area.rect.contains(point))
        .map(|area| area.address)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
