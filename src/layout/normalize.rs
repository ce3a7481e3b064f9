use smallvec::SmallVec;

/// One size entry in a colon-separated size spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeToken {
    /// Literal percentage. Kept untouched until the final rescale, even when
    /// the fixed values alone over- or under-shoot 100.
    Fixed(f64),
    /// Proportional token (`*`, empty, or unparsable text): receives an even
    /// share of whatever percentage the fixed tokens leave over.
    Star,
}

/// A size token split into its size text and optional `#<tag>` identity suffix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SplitToken<'a> {
    pub size: &'a str,
    pub tag: Option<&'a str>,
}

/// Splits `40#2` into size text `40` and tag `2`. An empty tag (`40#`) is
/// treated as no tag at all.
pub(crate) fn split_identity(token: &str) -> SplitToken<'_> {
    match token.split_once('#') {
        Some((size, tag)) => {
            let tag = tag.trim();
            SplitToken {
                size: size.trim(),
                tag: (!tag.is_empty()).then_some(tag),
            }
        }
        None => SplitToken {
            size: token.trim(),
            tag: None,
        },
    }
}

/// Classify one size segment. Empty text and `*` are star tokens; anything
/// that fails to parse as a finite number (after stripping an optional
/// trailing `%`) is leniently reclassified as a star, never an error.
pub fn classify(segment: &str) -> SizeToken {
    let text = segment.trim();
    if text.is_empty() || text == "*" {
        return SizeToken::Star;
    }
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => SizeToken::Fixed(value),
        _ => SizeToken::Star,
    }
}

/// Resolve a colon-separated size spec into `count` percentages summing to 100.
///
/// Missing segments count as stars. Star tokens split the leftover after the
/// fixed tokens; when the fixed tokens already consume 100 or more, stars fall
/// back to an even `100 / count` share instead of collapsing to zero. The
/// final vector is rescaled so it always sums to exactly 100, whatever the
/// fixed tokens claimed; an all-zero intermediate result is overridden with a
/// uniform split. `count == 0` yields an empty vector.
pub fn normalize(count: usize, spec: &str) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let segments: SmallVec<[&str; 8]> = spec.split(':').collect();
    let tokens: SmallVec<[SizeToken; 8]> = (0..count)
        .map(|i| classify(split_identity(segments.get(i).copied().unwrap_or("")).size))
        .collect();

    let fixed_total: f64 = tokens
        .iter()
        .map(|t| match t {
            SizeToken::Fixed(v) => *v,
            SizeToken::Star => 0.0,
        })
        .sum();
    let star_count = tokens.iter().filter(|t| matches!(t, SizeToken::Star)).count();

    let leftover = (100.0 - fixed_total).max(0.0);
    let star_share = if star_count > 0 && leftover > 0.0 {
        leftover / star_count as f64
    } else {
        // Fixed tokens already claim everything; stars still get a nonzero
        // share rather than vanishing.
        100.0 / count as f64
    };

    let mut values: Vec<f64> = tokens
        .iter()
        .map(|t| match t {
            SizeToken::Fixed(v) => *v,
            SizeToken::Star => star_share,
        })
        .collect();

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        let uniform = 100.0 / count as f64;
        values.iter_mut().for_each(|v| *v = uniform);
    } else if total != 100.0 {
        let scale = 100.0 / total;
        values.iter_mut().for_each(|v| *v *= scale);
    }
    values
}

#[cfg(test)]
#[path = "../../tests/unit/layout/normalize.rs"]
mod tests;
