// src/core/models/editable.rs

/// Authoritative state of one editable text region. The rendered anchor is
/// a derived, disposable view of `current_html`; while an edit is open the
/// anchor additionally holds a transient live value that only enters this
/// struct at the explicit save point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableRegion {
    /// Content the region had when first discovered in the document.
    pub original_html: String,
    /// Last saved content; what cancel restores to.
    pub current_html: String,
    /// Whether an admin edit is currently open on this region.
    pub editing: bool,
}

impl EditableRegion {
    pub fn new(initial_html: impl Into<String>) -> Self {
        let html = initial_html.into();
        Self {
            original_html: html.clone(),
            current_html: html,
            editing: false,
        }
    }
}
