// src/core/services/content_service.rs
// Edit-in-place controller for labeled text regions. The authoritative
// value lives here; the rendered anchor is a disposable view that is only
// read back at the explicit save point, where the host hands over the live
// content.

use crate::{
    models::editable::EditableRegion,
    models::session::SharedSession,
    storage::{keys, SharedStore},
    utils::guards,
};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Which control triplet the host should show for a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditControls {
    /// Not logged in: no controls at all.
    Hidden,
    /// Logged in, viewing: the Edit button.
    Edit,
    /// Logged in, editing: Save and Cancel.
    SaveCancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableRegionView {
    pub id: String,
    pub html: String,
    pub editing: bool,
    pub controls: EditControls,
}

pub struct ContentController {
    regions: BTreeMap<String, EditableRegion>,
    store: SharedStore,
    session: SharedSession,
}

impl ContentController {
    pub fn new(store: SharedStore, session: SharedSession) -> Self {
        Self {
            regions: BTreeMap::new(),
            store,
            session,
        }
    }

    /// Registers the editable anchors found in the document, then overlays
    /// any persisted content onto the ones that matched. Persisted entries
    /// for unknown ids are ignored.
    pub fn discover(&mut self, regions: impl IntoIterator<Item = (String, String)>) {
        for (id, initial_html) in regions {
            self.regions.insert(id, EditableRegion::new(initial_html));
        }
        self.load_saved();
    }

    pub fn start_edit(&mut self, id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("content edit dropped: not logged in");
            return;
        }
        if let Some(region) = self.regions.get_mut(id) {
            region.editing = true;
        }
    }

    /// Commits the live anchor content, ends editing, and persists the full
    /// id-to-content map as one flat object.
    pub fn save_edit(&mut self, id: &str, live_html: &str) {
        if !guards::is_admin(&self.session) {
            return;
        }
        if let Some(region) = self.regions.get_mut(id) {
            region.current_html = live_html.to_string();
            region.editing = false;
            self.persist();
        }
    }

    /// Discards the live edit; the anchor is restored to the last saved
    /// content by the next render.
    pub fn cancel_edit(&mut self, id: &str) {
        if !guards::is_admin(&self.session) {
            return;
        }
        if let Some(region) = self.regions.get_mut(id) {
            region.editing = false;
        }
    }

    /// Applied on every session change: a non-admin session forces every
    /// region out of editing.
    pub fn reconcile_session(&mut self) {
        if !guards::is_admin(&self.session) {
            for region in self.regions.values_mut() {
                region.editing = false;
            }
        }
    }

    pub fn current_html(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(|r| r.current_html.as_str())
    }

    pub fn region(&self, id: &str) -> Option<&EditableRegion> {
        self.regions.get(id)
    }

    pub fn views(&self) -> Vec<EditableRegionView> {
        let admin = guards::is_admin(&self.session);
        self.regions
            .iter()
            .map(|(id, region)| EditableRegionView {
                id: id.clone(),
                html: region.current_html.clone(),
                editing: region.editing,
                controls: match (admin, region.editing) {
                    (false, _) => EditControls::Hidden,
                    (true, false) => EditControls::Edit,
                    (true, true) => EditControls::SaveCancel,
                },
            })
            .collect()
    }

    fn persist(&self) {
        let map: BTreeMap<&str, &str> = self
            .regions
            .iter()
            .map(|(id, region)| (id.as_str(), region.current_html.as_str()))
            .collect();
        match serde_json::to_string(&map) {
            Ok(json) => self.store.borrow_mut().set(keys::EDITABLE_CONTENT, &json),
            Err(err) => warn!("failed to serialize editable content: {err}"),
        }
    }

    fn load_saved(&mut self) {
        let Some(raw) = self.store.borrow().get(keys::EDITABLE_CONTENT) else {
            return;
        };
        match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
            Ok(saved) => {
                for (id, html) in saved {
                    if let Some(region) = self.regions.get_mut(&id) {
                        region.current_html = html;
                    }
                }
            }
            Err(err) => warn!("failed to parse editable content from storage: {err}"),
        }
    }
}
