// src/core/services/share_service.rs
// Share-sheet handoff. The controller only builds the payload and tracks
// the in-flight flag; invoking the platform share surface (and the
// clipboard fallback) is the host's job, which reports back via `finish`.

use crate::services::{content_service::ContentController, settings_service::SettingsManager};
use log::error;

pub const SETTING_SITE_TITLE: &str = "siteTitle";
const TAGLINE_REGION: &str = "homeTagline";
const FALLBACK_TITLE: &str = "LOGAN'S DESIGN";
const FALLBACK_TAGLINE: &str = "Creative Solutions, Beautifully Executed.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// How the host's share attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet; not worth reporting.
    Cancelled,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ShareController {
    in_flight: bool,
}

impl ShareController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Builds the share payload from the current site title and tagline,
    /// with markup stripped from the tagline. Returns `None` while an
    /// earlier share is still in flight; the trigger stays disabled until
    /// `finish` is called.
    pub fn begin(
        &mut self,
        settings: &SettingsManager,
        content: &ContentController,
        origin: &str,
    ) -> Option<SharePayload> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;

        let title = settings
            .value(SETTING_SITE_TITLE)
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_TITLE);
        let text = match content.current_html(TAGLINE_REGION) {
            Some(html) => strip_markup(html),
            None => FALLBACK_TAGLINE.to_string(),
        };

        Some(SharePayload {
            title: title.to_string(),
            text,
            url: origin.to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<(), ShareError>) {
        self.in_flight = false;
        match result {
            Ok(()) | Err(ShareError::Cancelled) => {}
            Err(ShareError::Failed(reason)) => error!("share failed: {reason}"),
        }
    }
}

/// Drops `<...>` spans, keeping everything outside them.
fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::new_shared_session;
    use crate::models::settings::SettingDescriptor;
    use crate::storage::{new_shared_store, MemoryStore, SharedStore};
    use crate::utils::time::ManualClock;
    use std::rc::Rc;

    fn settings(store: &SharedStore, title: &str) -> SettingsManager {
        let mut mgr = SettingsManager::new(
            store.clone(),
            new_shared_session(),
            Rc::new(ManualClock::new(0)),
        );
        mgr.init(vec![SettingDescriptor::text(SETTING_SITE_TITLE, title)]);
        mgr
    }

    fn content(store: &SharedStore, tagline: Option<&str>) -> ContentController {
        let mut ctrl = ContentController::new(store.clone(), new_shared_session());
        if let Some(tagline) = tagline {
            ctrl.discover(vec![("homeTagline".to_string(), tagline.to_string())]);
        }
        ctrl
    }

    #[test]
    fn payload_uses_title_and_stripped_tagline() {
        let store = new_shared_store(MemoryStore::new());
        let settings = settings(&store, "Studio North");
        let content = content(&store, Some("Bold <em>ideas</em>, built well."));

        let mut share = ShareController::new();
        let payload = share
            .begin(&settings, &content, "https://example.com")
            .unwrap();
        assert_eq!(payload.title, "Studio North");
        assert_eq!(payload.text, "Bold ideas, built well.");
        assert_eq!(payload.url, "https://example.com");
    }

    #[test]
    fn falls_back_when_title_and_tagline_are_missing() {
        let store = new_shared_store(MemoryStore::new());
        let settings = settings(&store, "");
        let content = content(&store, None);

        let mut share = ShareController::new();
        let payload = share.begin(&settings, &content, "https://example.com").unwrap();
        assert_eq!(payload.title, "LOGAN'S DESIGN");
        assert_eq!(payload.text, "Creative Solutions, Beautifully Executed.");
    }

    #[test]
    fn second_share_is_refused_until_the_first_finishes() {
        let store = new_shared_store(MemoryStore::new());
        let settings = settings(&store, "Studio North");
        let content = content(&store, None);

        let mut share = ShareController::new();
        assert!(share.begin(&settings, &content, "o").is_some());
        assert!(share.is_in_flight());
        assert!(share.begin(&settings, &content, "o").is_none());

        share.finish(Err(ShareError::Cancelled));
        assert!(!share.is_in_flight());
        assert!(share.begin(&settings, &content, "o").is_some());
    }

    #[test]
    fn strip_markup_handles_nested_and_unclosed_tags() {
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<p>a <b>b</b> c</p>"), "a b c");
        assert_eq!(strip_markup("dangling <em"), "dangling ");
    }
}
