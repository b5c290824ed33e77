// src/core/services/offerings_service.rs
// CRUD over the service-offering list. The only manager with an in-place
// edit flow: one admin entry at a time can be swapped into edit mode.

use crate::{
    models::common::ItemId,
    models::service_item::{ServiceInput, ServiceItem},
    models::session::SharedSession,
    services::status::StatusChannel,
    storage::{collection, defaults, keys, SharedStore},
    utils::{guards, rng, time::SharedClock},
};
use log::debug;
use validator::Validate;

/// Public grid card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCardView {
    pub title: String,
    pub description: String,
}

/// Admin list entry; `editing` swaps the entry's content into input
/// controls with Save/Cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminServiceEntry {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub editing: bool,
}

pub struct OfferingsManager {
    items: Vec<ServiceItem>,
    editing: Option<ItemId>,
    pub status: StatusChannel,
    store: SharedStore,
    session: SharedSession,
    clock: SharedClock,
}

impl OfferingsManager {
    pub fn new(store: SharedStore, session: SharedSession, clock: SharedClock) -> Self {
        Self {
            items: Vec::new(),
            editing: None,
            status: StatusChannel::new(),
            store,
            session,
            clock,
        }
    }

    pub fn init(&mut self) {
        self.items =
            collection::load_or_seed(&self.store, keys::SERVICES, &defaults::service_items());
    }

    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    pub fn tick(&mut self) {
        self.status.tick(self.clock.now_ms());
    }

    pub fn handle_add(&mut self, title: &str, description: &str) {
        if !guards::is_admin(&self.session) {
            debug!("service add dropped: not logged in");
            return;
        }
        let now = self.clock.now_ms();
        let input = ServiceInput::new(title, description);
        if input.validate().is_err() {
            self.status
                .show_error("Please enter both a title and description.", now);
            return;
        }
        self.items.push(ServiceItem {
            id: rng::timestamp_id("service", now),
            title: input.title,
            description: input.description,
        });
        self.persist();
        self.status.show_success("Service added successfully!", now);
    }

    pub fn handle_delete(&mut self, service_id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("service delete dropped: not logged in");
            return;
        }
        self.items.retain(|item| item.id != service_id);
        if self.editing.as_deref() == Some(service_id) {
            self.editing = None;
        }
        self.persist();
        self.status
            .show_success("Service deleted.", self.clock.now_ms());
    }

    /// Opens the in-place edit widgets for one admin entry.
    pub fn start_edit(&mut self, service_id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("service edit dropped: not logged in");
            return;
        }
        if self.items.iter().any(|item| item.id == service_id) {
            self.editing = Some(service_id.to_string());
        }
    }

    /// Validates and commits the in-place edit, then persists. The edit
    /// widgets are discarded by the full re-render that follows.
    pub fn save_edit(&mut self, service_id: &str, title: &str, description: &str) {
        if !guards::is_admin(&self.session) {
            return;
        }
        let now = self.clock.now_ms();
        let input = ServiceInput::new(title, description);
        if input.validate().is_err() {
            self.status
                .show_error("Title and description cannot be empty.", now);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == service_id) {
            item.title = input.title;
            item.description = input.description;
            self.editing = None;
            self.persist();
            self.status.show_success("Service updated successfully!", now);
        }
    }

    /// Cancel just drops the edit state; the next render rebuilds from the
    /// unmodified list.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn view(&self) -> Vec<ServiceCardView> {
        self.items
            .iter()
            .map(|item| ServiceCardView {
                title: item.title.clone(),
                description: item.description.clone(),
            })
            .collect()
    }

    pub fn admin_view(&self) -> Vec<AdminServiceEntry> {
        self.items
            .iter()
            .map(|item| AdminServiceEntry {
                id: item.id.clone(),
                title: item.title.clone(),
                description: item.description.clone(),
                editing: self.editing.as_deref() == Some(item.id.as_str()),
            })
            .collect()
    }

    fn persist(&self) {
        collection::save_collection(&self.store, keys::SERVICES, &self.items);
    }
}
