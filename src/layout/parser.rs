use std::collections::BTreeSet;

use crate::layout::normalize::{normalize, split_identity};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rectangular region of a resolved grid layout.
pub struct AreaSlot {
    /// 0-based position in column-then-row traversal order. This is the
    /// positional address of the slot.
    pub area_index: usize,
    /// Index of the owning column.
    pub column_index: usize,
    /// Index of this row within its column.
    pub row_index: usize,
    /// Resolved width of the owning column, in percent of the slide.
    pub width_percent: f64,
    /// Resolved height of this row, in percent of the owning column.
    pub height_percent: f64,
    /// User-pinned durable identity (`#<tag>` in the grammar). When present
    /// it overrides the positional address for content mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_tag: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One column of a resolved grid layout.
pub struct LayoutColumn {
    /// Resolved column width, in percent of the slide.
    pub width_percent: f64,
    /// Running area counter value before this column's rows were enumerated;
    /// `rows[i].area_index == start_index + i`.
    pub start_index: usize,
    /// Rows in this column, top to bottom.
    pub rows: Vec<AreaSlot>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fully resolved two-level grid: columns, each containing rows.
///
/// Produced by [`parse_layout`], which is total: malformed input yields the
/// empty tree (`area_count == 0`) instead of an error. Callers wanting strict
/// validation can treat an empty tree as a low-confidence parse.
pub struct LayoutTree {
    /// Columns, left to right.
    pub columns: Vec<LayoutColumn>,
    /// Total number of area slots across all columns. Area indices are
    /// contiguous `0..area_count`.
    pub area_count: usize,
}

impl LayoutTree {
    /// True when nothing parsed (the designated malformed-input result).
    pub fn is_empty(&self) -> bool {
        self.area_count == 0
    }

    /// All slots in traversal order (column 0's rows first, then column 1's).
    pub fn slots(&self) -> impl Iterator<Item = &AreaSlot> {
        self.columns.iter().flat_map(|c| c.rows.iter())
    }

    /// Slot at a positional area index, if in range.
    pub fn slot_at(&self, area_index: usize) -> Option<&AreaSlot> {
        self.slots().find(|s| s.area_index == area_index)
    }
}

/// Parse a grid layout definition such as `2S|60:40/1R|100/2R|30:70#5`.
///
/// The header names the column count and column size spec; each following
/// `/`-segment names one column's row count and row size spec. The grammar is
/// user-typed and parsing never fails: a malformed header yields the empty
/// tree, a malformed row segment falls back to a single full-height row, and
/// missing row segments default the same way.
#[tracing::instrument]
pub fn parse_layout(definition: &str) -> LayoutTree {
    let mut segments = definition.trim().split('/');
    let Some((column_count, column_spec)) = parse_header(segments.next().unwrap_or("")) else {
        tracing::debug!("layout header did not match, yielding empty tree");
        return LayoutTree::default();
    };

    let column_widths = normalize(column_count, column_spec);
    let row_segments: Vec<&str> = segments.collect();

    let mut columns = Vec::with_capacity(column_count);
    let mut claimed_tags = BTreeSet::new();
    let mut next_index = 0usize;

    for (column_index, width_percent) in column_widths.into_iter().enumerate() {
        let row_spec = row_segments
            .get(column_index)
            .copied()
            .and_then(parse_row_segment);
        // Missing or malformed row segments default to one full-height row.
        let (row_count, row_spec) = row_spec.unwrap_or((1, "100"));

        let start_index = next_index;
        let heights = normalize(row_count, row_spec);
        let row_tokens: Vec<&str> = row_spec.split(':').collect();

        let rows = heights
            .into_iter()
            .enumerate()
            .map(|(row_index, height_percent)| {
                let tag = row_tokens
                    .get(row_index)
                    .copied()
                    .and_then(|t| split_identity(t).tag)
                    .filter(|t| claimed_tags.insert((*t).to_owned()))
                    .map(str::to_owned);
                AreaSlot {
                    area_index: start_index + row_index,
                    column_index,
                    row_index,
                    width_percent,
                    height_percent,
                    pinned_tag: tag,
                }
            })
            .collect::<Vec<_>>();

        next_index += rows.len();
        columns.push(LayoutColumn {
            width_percent,
            start_index,
            rows,
        });
    }

    LayoutTree {
        columns,
        area_count: next_index,
    }
}

/// Match the header `<N>S|<colspec>` (case-insensitive `S`, optional
/// whitespace before it). Returns the column count and the column size spec.
fn parse_header(segment: &str) -> Option<(usize, &str)> {
    let (count, rest) = take_count(segment.trim(), 'S')?;
    let spec = rest.strip_prefix('|')?;
    if count == 0 || spec.is_empty() {
        return None;
    }
    Some((count, spec))
}

/// Match a row segment `<N>R|<rowspec>`, `<N>R:<rowspec>` or `<N>R<rowspec>`
/// (case-insensitive `R`, separator optional). Returns `None` on mismatch so
/// the caller can apply the single-row default.
fn parse_row_segment(segment: &str) -> Option<(usize, &str)> {
    let (count, rest) = take_count(segment.trim(), 'R')?;
    if count == 0 {
        return None;
    }
    let spec = rest
        .strip_prefix('|')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    Some((count, spec))
}

/// Consume `<digits><ws><marker>` from the front of `segment`.
fn take_count(segment: &str, marker: char) -> Option<(usize, &str)> {
    let digits_end = segment.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let count = segment[..digits_end].parse::<usize>().ok()?;
    let rest = segment[digits_end..].trim_start();
    let next = rest.chars().next()?;
    if !next.eq_ignore_ascii_case(&marker) {
        return None;
    }
    Some((count, &rest[next.len_utf8()..]))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/parser.rs"]
mod tests;
