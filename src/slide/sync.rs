use std::collections::BTreeMap;

use crate::{layout::parser::LayoutTree, slide::address::AreaAddress};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A slide's media-to-area mapping, keyed by resolved [`AreaAddress`].
///
/// The mapping deliberately outlives any single layout: entries whose address
/// has no slot in the active tree are *orphaned*, never deleted, and become
/// visible again as soon as a layout reintroduces a matching address. Media
/// references are opaque paths/URLs; the storage collaborator owns them.
pub struct ContentAssignment {
    entries: BTreeMap<AreaAddress, String>,
}

impl ContentAssignment {
    /// Empty assignment for a freshly authored slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, orphaned ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no media has been assigned anywhere.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Media at an address, visible or orphaned.
    pub fn get(&self, address: &AreaAddress) -> Option<&str> {
        self.entries.get(address).map(String::as_str)
    }

    /// Assign media to an address, replacing any previous entry there.
    pub fn assign(&mut self, address: AreaAddress, media: impl Into<String>) {
        self.entries.insert(address, media.into());
    }

    /// Remove the entry at an address, returning the displaced media.
    pub fn clear(&mut self, address: &AreaAddress) -> Option<String> {
        self.entries.remove(address)
    }

    /// All entries in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&AreaAddress, &str)> {
        self.entries.iter().map(|(a, m)| (a, m.as_str()))
    }

    /// Media for each slot of `tree` in traversal order; `None` for slots
    /// with no entry at their resolved address.
    pub fn visible(&self, tree: &LayoutTree) -> Vec<(AreaAddress, Option<String>)> {
        tree.slots()
            .map(|slot| {
                let address = AreaAddress::for_slot(slot);
                let media = self.entries.get(&address).cloned();
                (address, media)
            })
            .collect()
    }

    /// Entries whose address resolves to no slot in `tree`. These are the
    /// candidates for re-visibility under a future layout, not garbage.
    pub fn orphans(&self, tree: &LayoutTree) -> Vec<(AreaAddress, String)> {
        let live: std::collections::BTreeSet<AreaAddress> =
            tree.slots().map(AreaAddress::for_slot).collect();
        self.entries
            .iter()
            .filter(|(address, _)| !live.contains(address))
            .map(|(a, m)| (a.clone(), m.clone()))
            .collect()
    }

    /// Build an assignment from the on-disk ordered content list, where list
    /// position is the positional address and empty strings are holes.
    pub fn from_content_list(content: &[String]) -> Self {
        let entries = content
            .iter()
            .enumerate()
            .filter(|(_, media)| !media.is_empty())
            .map(|(index, media)| (AreaAddress::from_index(index), media.clone()))
            .collect();
        Self { entries }
    }

    /// Flatten back into the ordered content list schema. Only numeric
    /// addresses have a list position; tag-addressed entries stay in the map
    /// form and are skipped here.
    pub fn to_content_list(&self) -> Vec<String> {
        let indexed: Vec<(usize, &str)> = self
            .entries
            .iter()
            .filter_map(|(address, media)| Some((address.as_index()?, media.as_str())))
            .collect();
        let len = indexed.iter().map(|(i, _)| i + 1).max().unwrap_or(0);
        let mut list = vec![String::new(); len];
        for (index, media) in indexed {
            list[index] = media.to_owned();
        }
        list
    }
}

/// Recompute a slide's assignment against a newly parsed tree.
///
/// Entries whose address resolves to a slot in `tree` are carried over
/// unchanged; every other entry is retained verbatim as an orphan. A layout
/// switch therefore never loses media, and reconciling against the empty tree
/// (the malformed-grammar fallback) simply orphans everything. The operation
/// is idempotent: reconciling twice against the same tree is a no-op.
#[tracing::instrument(skip(previous, tree), fields(entries = previous.len(), areas = tree.area_count))]
pub fn reconcile(previous: &ContentAssignment, tree: &LayoutTree) -> ContentAssignment {
    let mut entries = BTreeMap::new();

    // Visible portion first, in traversal order.
    for slot in tree.slots() {
        let address = AreaAddress::for_slot(slot);
        if let Some(media) = previous.get(&address) {
            entries.insert(address, media.to_owned());
        }
    }

    // Everything the new tree does not address survives as an orphan.
    for (address, media) in previous.iter() {
        entries
            .entry(address.clone())
            .or_insert_with(|| media.to_owned());
    }

    ContentAssignment { entries }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/sync.rs"]
mod tests;
