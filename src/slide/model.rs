use crate::{
    foundation::error::{SlidegridError, SlidegridResult},
    layout::parser::{LayoutTree, parse_layout},
    notify::ChangeNotifier,
    slide::address::AreaAddress,
    slide::sync::{ContentAssignment, reconcile},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A slide record as exchanged with the storage collaborator.
///
/// The slide is a plain value: editing operations mutate a caller-owned
/// instance explicitly and report whether anything changed, so the caller
/// decides when to persist and when to fire its [`ChangeNotifier`].
pub struct Slide {
    /// Stable slide identifier, used as the change-notification payload.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    #[serde(default)]
    pub subtitle: String,
    /// Grouping label used by the slide browser.
    #[serde(default)]
    pub group: String,
    /// Layout payload: active definition string plus per-area media.
    pub layout: SlideLayout,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// The layout-facing portion of a slide record.
pub struct SlideLayout {
    /// Active layout definition string (the grammar of [`parse_layout`]).
    pub active_layout: String,
    /// Thumbnail location owned by the external renderer; empty until the
    /// first render completes.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Media-to-area assignment, orphaned entries included.
    #[serde(default)]
    pub content: ContentAssignment,
}

impl Slide {
    /// New slide with an empty assignment on the given layout.
    pub fn new(id: impl Into<String>, title: impl Into<String>, active_layout: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            group: String::new(),
            layout: SlideLayout {
                active_layout: active_layout.into(),
                thumbnail_url: String::new(),
                content: ContentAssignment::new(),
            },
        }
    }

    /// Parse the active layout definition. Total; a garbled definition yields
    /// the empty tree and the slide's media all become orphans.
    pub fn tree(&self) -> LayoutTree {
        parse_layout(&self.layout.active_layout)
    }

    /// Switch the active layout and re-synchronize the assignment against the
    /// new tree. Fires `notifier` and returns `true` when the slide changed;
    /// switching to the already-active definition is a no-op.
    pub fn set_layout(&mut self, definition: &str, notifier: &dyn ChangeNotifier) -> bool {
        if self.layout.active_layout == definition {
            return false;
        }
        self.layout.active_layout = definition.to_owned();
        self.layout.content = reconcile(&self.layout.content, &self.tree());
        notifier.slide_changed(&self.id);
        true
    }

    /// Assign media to an area address. Fires `notifier` and returns `true`
    /// unless the address already held exactly this media.
    pub fn assign_media(
        &mut self,
        address: AreaAddress,
        media: &str,
        notifier: &dyn ChangeNotifier,
    ) -> bool {
        if self.layout.content.get(&address) == Some(media) {
            return false;
        }
        self.layout.content.assign(address, media);
        notifier.slide_changed(&self.id);
        true
    }

    /// Clear the media at an area address. Fires `notifier` and returns
    /// `true` when an entry was actually removed.
    pub fn clear_area(&mut self, address: &AreaAddress, notifier: &dyn ChangeNotifier) -> bool {
        if self.layout.content.clear(address).is_none() {
            return false;
        }
        notifier.slide_changed(&self.id);
        true
    }

    /// Validate record invariants for the persistence boundary.
    ///
    /// The layout grammar itself is never a failure here (it degrades to the
    /// empty tree by design); this checks the record shape around it.
    pub fn validate(&self) -> SlidegridResult<()> {
        if self.id.trim().is_empty() {
            return Err(SlidegridError::validation("slide id must be non-empty"));
        }
        if self.layout.active_layout.trim().is_empty() {
            return Err(SlidegridError::validation(
                "slide active_layout must be non-empty",
            ));
        }
        for (address, media) in self.layout.content.iter() {
            if address.as_str().trim().is_empty() {
                return Err(SlidegridError::validation(
                    "content address must be non-empty",
                ));
            }
            if media.trim().is_empty() {
                return Err(SlidegridError::validation(format!(
                    "content entry at '{address}' must reference media"
                )));
            }
        }
        Ok(())
    }
}

/// Deserialize a slide record from its JSON form and validate it.
pub fn slide_from_json(json: &str) -> SlidegridResult<Slide> {
    let slide: Slide =
        serde_json::from_str(json).map_err(|e| SlidegridError::serde(e.to_string()))?;
    slide.validate()?;
    Ok(slide)
}

/// Serialize a slide record to its JSON form.
pub fn slide_to_json(slide: &Slide) -> SlidegridResult<String> {
    serde_json::to_string(slide).map_err(|e| SlidegridError::serde(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/slide/model.rs"]
mod tests;
