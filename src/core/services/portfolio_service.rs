// src/core/services/portfolio_service.rs
use crate::{
    models::common::{DataRef, FileReader, FileUpload, ItemId},
    models::portfolio::PortfolioItem,
    models::session::SharedSession,
    services::status::StatusChannel,
    storage::{collection, keys, SharedStore},
    utils::{guards, rng, time::SharedClock},
};
use log::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioCardView {
    pub title: String,
    pub image_src: DataRef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminPortfolioEntry {
    pub id: ItemId,
    pub title: String,
    pub image_src: DataRef,
}

/// Portfolio items are add/delete only; there is no default content, so a
/// fresh site starts with an empty grid.
pub struct PortfolioManager {
    items: Vec<PortfolioItem>,
    pub status: StatusChannel,
    store: SharedStore,
    session: SharedSession,
    clock: SharedClock,
}

impl PortfolioManager {
    pub fn new(store: SharedStore, session: SharedSession, clock: SharedClock) -> Self {
        Self {
            items: Vec::new(),
            status: StatusChannel::new(),
            store,
            session,
            clock,
        }
    }

    pub fn init(&mut self) {
        self.items = collection::load_or_seed(&self.store, keys::PORTFOLIO, &[]);
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn tick(&mut self) {
        self.status.tick(self.clock.now_ms());
    }

    /// Admin add: requires a selected image and a non-empty title.
    pub fn handle_add(&mut self, file: Option<&FileUpload>, title: &str, reader: &dyn FileReader) {
        if !guards::is_admin(&self.session) {
            debug!("portfolio add dropped: not logged in");
            return;
        }
        let now = self.clock.now_ms();
        let title = title.trim();
        let (Some(file), false) = (file, title.is_empty()) else {
            self.status
                .show_error("Please select an image and enter a title.", now);
            return;
        };
        match reader.read_as_data_url(file) {
            Ok(image_src) => {
                self.items.push(PortfolioItem {
                    id: rng::suffixed_id("portfolio", now),
                    title: title.to_string(),
                    image_src,
                });
                self.persist();
                self.status
                    .show_success("Portfolio item added successfully!", now);
            }
            Err(err) => {
                warn!("portfolio image read failed: {err}");
                self.status.show_error("Error reading image file.", now);
            }
        }
    }

    pub fn handle_delete(&mut self, item_id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("portfolio delete dropped: not logged in");
            return;
        }
        self.items.retain(|item| item.id != item_id);
        self.persist();
        self.status
            .show_success("Portfolio item deleted.", self.clock.now_ms());
    }

    pub fn view(&self) -> Vec<PortfolioCardView> {
        self.items
            .iter()
            .map(|item| PortfolioCardView {
                title: item.title.clone(),
                image_src: item.image_src.clone(),
            })
            .collect()
    }

    pub fn admin_view(&self) -> Vec<AdminPortfolioEntry> {
        self.items
            .iter()
            .map(|item| AdminPortfolioEntry {
                id: item.id.clone(),
                title: item.title.clone(),
                image_src: item.image_src.clone(),
            })
            .collect()
    }

    fn persist(&self) {
        collection::save_collection(&self.store, keys::PORTFOLIO, &self.items);
    }
}
