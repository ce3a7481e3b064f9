#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A built-in grid preset offered by the layout picker.
pub struct LayoutPreset {
    /// Display title.
    pub title: &'static str,
    /// Short description shown under the title.
    pub subtitle: &'static str,
    /// Picker grouping label.
    pub group: &'static str,
    /// Layout definition string for [`crate::parse_layout`].
    pub definition: &'static str,
}

/// The built-in presets, in picker order. Every definition here parses to a
/// non-empty tree.
pub const BUILTIN_PRESETS: &[LayoutPreset] = &[
    LayoutPreset {
        title: "Single column",
        subtitle: "Full-frame stage",
        group: "Standard",
        definition: "1S|100/1R|100",
    },
    LayoutPreset {
        title: "Two columns",
        subtitle: "60/40 balance",
        group: "Standard",
        definition: "2S|60:40/1R:100/1R:100",
    },
    LayoutPreset {
        title: "Three columns",
        subtitle: "Left/right sidebars",
        group: "Standard",
        definition: "3S|20:60:20/1R:100/1R:100/1R:100",
    },
    LayoutPreset {
        title: "Moderator panel",
        subtitle: "Wide stage with four slots",
        group: "Show",
        definition: "2S|75:25/1R|100/4R|25:25:25:25",
    },
    LayoutPreset {
        title: "Focus 3-1-3",
        subtitle: "Center stage with sidebars",
        group: "Show",
        definition: "3S|20:60:20/2R|50:50/1R|100/2R|50:50",
    },
    LayoutPreset {
        title: "Matrix 3-1-3",
        subtitle: "Three columns with 3/1/3 rows",
        group: "Show",
        definition: "3S|12.5:75:12.5/3R|34:33:33/1R|100/3R|34:33:33",
    },
];

/// The preset used for freshly created slides.
pub fn default_preset() -> &'static LayoutPreset {
    &BUILTIN_PRESETS[0]
}

/// Look a preset up by its definition string.
pub fn find_preset(definition: &str) -> Option<&'static LayoutPreset> {
    BUILTIN_PRESETS.iter().find(|p| p.definition == definition)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/catalog.rs"]
mod tests;
