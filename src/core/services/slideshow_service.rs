// src/core/services/slideshow_service.rs
use crate::{
    models::common::{DataRef, FileReader, FileUpload, ItemId, TimestampMs},
    models::session::SharedSession,
    models::slideshow::SlideItem,
    services::status::StatusChannel,
    storage::{collection, SharedStore},
    utils::{guards, rng, time::SharedClock},
};
use log::{debug, warn};

/// Auto-advance delay between slides.
pub const ROTATION_INTERVAL_MS: u64 = 5_000;

/// Static configuration for one carousel instance. `attached` is false when
/// the public container for this carousel is absent from the current page,
/// in which case `init` is a no-op and the instance stays inert.
#[derive(Clone, Debug)]
pub struct SlideshowConfig {
    pub storage_key: &'static str,
    pub default_items: Vec<SlideItem>,
    pub attached: bool,
}

/// Public carousel view model, rebuilt from state after every mutation.
/// Indicator dots are index-aligned with `slides`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideshowView {
    pub slides: Vec<SlideView>,
    /// 1-based active index; `None` when there are no slides.
    pub active_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideView {
    pub id: ItemId,
    pub src: DataRef,
    pub active: bool,
}

/// Admin management list entry, with a delete affordance per item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminSlideEntry {
    pub id: ItemId,
    pub src: DataRef,
    /// Truncated id label shown next to the preview, e.g. `...1717171717171`.
    pub short_id: String,
}

pub struct SlideshowManager {
    config: SlideshowConfig,
    items: Vec<SlideItem>,
    /// 1-based rotation cursor, kept in `[1, items.len()]` while non-empty.
    slide_index: usize,
    /// Absolute deadline for the next auto-advance. Replacing it is the
    /// cancellation of the previous timer; there is never more than one.
    next_advance_at: Option<TimestampMs>,
    pub status: StatusChannel,
    store: SharedStore,
    session: SharedSession,
    clock: SharedClock,
}

impl SlideshowManager {
    pub fn new(
        config: SlideshowConfig,
        store: SharedStore,
        session: SharedSession,
        clock: SharedClock,
    ) -> Self {
        Self {
            config,
            items: Vec::new(),
            slide_index: 1,
            next_advance_at: None,
            status: StatusChannel::new(),
            store,
            session,
            clock,
        }
    }

    /// Loads from storage and starts rotation. No-op when the carousel is
    /// not present on the page.
    pub fn init(&mut self) {
        if !self.config.attached {
            return;
        }
        self.items = collection::load_or_seed(
            &self.store,
            self.config.storage_key,
            &self.config.default_items,
        );
        if !self.items.is_empty() {
            self.show_slides(Some(self.slide_index as i64));
        }
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn next_advance_at(&self) -> Option<TimestampMs> {
        self.next_advance_at
    }

    /// Activates the slide at `target` (1-based, wrapping) or re-shows the
    /// current one, and arms a fresh auto-advance deadline. No-op with zero
    /// slides.
    pub fn show_slides(&mut self, target: Option<i64>) {
        if self.items.is_empty() {
            return;
        }
        let count = self.items.len() as i64;
        let mut index = target.unwrap_or(self.slide_index as i64);
        if index > count {
            index = 1;
        }
        if index < 1 {
            index = count;
        }
        self.slide_index = index as usize;
        self.next_advance_at = Some(self.clock.now_ms() + ROTATION_INTERVAL_MS);
    }

    pub fn plus_slides(&mut self, delta: i64) {
        self.show_slides(Some(self.slide_index as i64 + delta));
    }

    pub fn current_slide(&mut self, n: usize) {
        self.show_slides(Some(n as i64));
    }

    /// Pointer-enter: cancel the pending auto-advance.
    pub fn pause_rotation(&mut self) {
        self.next_advance_at = None;
    }

    /// Pointer-leave: restart from a full delay, never a partial countdown.
    pub fn resume_rotation(&mut self) {
        if !self.items.is_empty() {
            self.next_advance_at = Some(self.clock.now_ms() + ROTATION_INTERVAL_MS);
        }
    }

    /// Host-driven pump: fires the auto-advance once its deadline passes
    /// and expires the status message.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.status.tick(now);
        if let Some(deadline) = self.next_advance_at {
            if deadline <= now {
                self.next_advance_at = None;
                self.plus_slides(1);
            }
        }
    }

    /// Admin add: encodes the selected file and appends a new slide, then
    /// jumps to it. Requires exactly one selected file.
    pub fn handle_add(&mut self, file: Option<&FileUpload>, reader: &dyn FileReader) {
        if !guards::is_admin(&self.session) {
            debug!("slideshow add dropped: not logged in");
            return;
        }
        let now = self.clock.now_ms();
        let Some(file) = file else {
            self.status.show_error("Please select an image file.", now);
            return;
        };
        match reader.read_as_data_url(file) {
            Ok(src) => {
                self.items.push(SlideItem {
                    id: rng::timestamp_id("slide", now),
                    src,
                });
                collection::save_collection(&self.store, self.config.storage_key, &self.items);
                let last = self.items.len() as i64;
                self.show_slides(Some(last));
                self.status.show_success("Slide added successfully!", now);
            }
            Err(err) => {
                warn!("slide file read failed: {err}");
                self.status.show_error("Error reading file.", now);
            }
        }
    }

    /// Admin delete by id, clamping the rotation cursor to the new count.
    pub fn handle_delete(&mut self, slide_id: &str) {
        if !guards::is_admin(&self.session) {
            debug!("slideshow delete dropped: not logged in");
            return;
        }
        self.items.retain(|item| item.id != slide_id);
        collection::save_collection(&self.store, self.config.storage_key, &self.items);

        let count = self.items.len();
        if self.slide_index > count && count > 0 {
            self.slide_index = count;
        } else if count == 0 {
            self.slide_index = 1;
        }
        self.show_slides(None);
        self.status
            .show_success("Slide deleted.", self.clock.now_ms());
    }

    pub fn view(&self) -> SlideshowView {
        let active_index = (!self.items.is_empty()).then_some(self.slide_index);
        let slides = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| SlideView {
                id: item.id.clone(),
                src: item.src.clone(),
                active: active_index == Some(i + 1),
            })
            .collect();
        SlideshowView {
            slides,
            active_index,
        }
    }

    pub fn admin_view(&self) -> Vec<AdminSlideEntry> {
        self.items
            .iter()
            .map(|item| AdminSlideEntry {
                id: item.id.clone(),
                src: item.src.clone(),
                short_id: short_id_label(&item.id),
            })
            .collect()
    }
}

fn short_id_label(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(12)..].iter().collect();
    format!("...{tail}")
}
