use std::fmt;

use crate::layout::parser::AreaSlot;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Durable address of a grid area: the pinned tag when the layout declares
/// one, otherwise the decimal form of the positional area index.
///
/// Addresses compare as plain text, so the pinned tag `"3"` and positional
/// index 3 are the same address. That aliasing is deliberate: media assigned
/// against a positional address stays attached when a later layout pins the
/// same number as an explicit tag, and vice versa.
pub struct AreaAddress(String);

impl AreaAddress {
    /// Address of a positional area index.
    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Address of a user-pinned tag.
    pub fn from_tag(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Resolved address of a slot: the pinned tag wins over the position.
    pub fn for_slot(slot: &AreaSlot) -> Self {
        match &slot.pinned_tag {
            Some(tag) => Self::from_tag(tag.clone()),
            None => Self::from_index(slot.area_index),
        }
    }

    /// The address as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The positional index this address denotes, when it is numeric.
    pub fn as_index(&self) -> Option<usize> {
        self.0.parse().ok()
    }
}

impl fmt::Display for AreaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/address.rs"]
mod tests;
