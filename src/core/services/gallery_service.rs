// src/core/services/gallery_service.rs
use crate::{
    models::common::{DataRef, FileReader, FileUpload, ItemId, MediaType},
    models::gallery::GalleryItem,
    models::session::SharedSession,
    services::status::StatusChannel,
    storage::{collection, defaults, keys, SharedStore},
    utils::{guards, rng, time::SharedClock},
};
use log::{debug, warn};

pub const MAX_FILE_SIZE_MB: u64 = 50;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryCardView {
    pub id: ItemId,
    pub title: String,
    pub media_type: MediaType,
    pub src: DataRef,
    pub file_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminGalleryEntry {
    pub id: ItemId,
    pub title: String,
    pub media_type: MediaType,
    pub src: DataRef,
}

pub struct GalleryManager {
    items: Vec<GalleryItem>,
    pub status: StatusChannel,
    store: SharedStore,
    session: SharedSession,
    clock: SharedClock,
}

impl GalleryManager {
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
        self.items =
            collection::load_or_seed(&self.store, keys::GALLERY, &defaults::gallery_items());
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn tick(&mut self) {
        self.status.tick(self.clock.now_ms());
    }

    /// Admin add. The size ceiling is enforced before the file is encoded;
    /// the MIME sniff happens after, on the encoding result being in hand,
    /// and rejects anything that is not `image/*` or `video/*`.
    pub fn handle_add(&mut self, file: Option<&FileUpload>, title: &str, reader: &dyn FileReader) {
        if !guards::is_admin(&self.session) {
            debug!("gallery add dropped: not logged in");
            return;
        }
        let now = self.clock.now_ms();
        let title = title.trim();
        let (Some(file), false) = (file, title.is_empty()) else {
            self.status
                .show_error("Please select a file and enter a title.", now);
            return;
        };
        if file.size_bytes > MAX_FILE_SIZE_BYTES {
            self.status.show_error(
                format!("File is too large. Maximum size is {MAX_FILE_SIZE_MB}MB."),
                now,
            );
            return;
        }
        match reader.read_as_data_url(file) {
            Ok(src) => {
                let Some(media_type) = MediaType::from_mime(&file.mime_type) else {
                    self.status.show_error("Unsupported file type.", now);
                    return;
                };
                self.items.push(GalleryItem {
                    id: rng::suffixed_id("gallery", now),
                    media_type,
                    src,
                    title: title.to_string(),
                    file_type: file.mime_type.clone(),
                });
                self.persist();
                self.status
                    .show_success("Gallery item added successfully!", now);
            }
            Err(err) => {
                warn!("gallery file read failed: {err}");
                self.status.show_error("Error reading file.", now);
            }
        }
    }

    pub fn handle_delete(&mut self, item_id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("gallery delete dropped: not logged in");
            return;
        }
        self.items.retain(|item| item.id != item_id);
        self.persist();
        self.status
            .show_success("Gallery item deleted.", self.clock.now_ms());
    }

    pub fn view(&self) -> Vec<GalleryCardView> {
        self.items
            .iter()
            .map(|item| GalleryCardView {
                id: item.id.clone(),
                title: item.title.clone(),
                media_type: item.media_type,
                src: item.src.clone(),
                file_type: item.file_type.clone(),
            })
            .collect()
    }

    pub fn admin_view(&self) -> Vec<AdminGalleryEntry> {
        self.items
            .iter()
            .map(|item| AdminGalleryEntry {
                id: item.id.clone(),
                title: item.title.clone(),
                media_type: item.media_type,
                src: item.src.clone(),
            })
            .collect()
    }

    fn persist(&self) {
        collection::save_collection(&self.store, keys::GALLERY, &self.items);
    }
}
