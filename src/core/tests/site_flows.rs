// src/core/tests/site_flows.rs
// End-to-end flows through the application facade: first-run seeding,
// persistence across reloads, the login-gated admin paths, and fragment
// navigation.

use site_core::api::{SiteApp, SiteConfig, ADMIN_PASSWORD, ADMIN_USERNAME};
use site_core::error::SiteError;
use site_core::models::common::{DataRef, FileReader, FileUpload, MediaType};
use site_core::models::settings::SettingDescriptor;
use site_core::storage::{new_shared_store, MemoryStore, SharedStore};
use site_core::utils::time::ManualClock;
use std::rc::Rc;

struct OkReader;
impl FileReader for OkReader {
    fn read_as_data_url(&self, file: &FileUpload) -> Result<DataRef, SiteError> {
        Ok(format!("data:{};base64,deadbeef", file.mime_type))
    }
}

fn upload(name: &str, mime: &str) -> FileUpload {
    FileUpload {
        name: name.to_string(),
        mime_type: mime.to_string(),
        size_bytes: 1_024,
        bytes: vec![0; 16],
    }
}

fn config() -> SiteConfig {
    SiteConfig {
        sections: ["home", "services", "portfolio", "gallery", "about"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        editable_regions: vec![
            (
                "homeTagline".to_string(),
                "Creative Solutions, Beautifully Executed.".to_string(),
            ),
            ("aboutText".to_string(), "<p>We design things.</p>".to_string()),
        ],
        setting_descriptors: vec![
            SettingDescriptor::text("siteTitle", "LOGAN'S DESIGN"),
            SettingDescriptor::href("contactEmail", "hello@example.com", Some("mailto:")),
        ],
        home_slideshow_attached: true,
        portfolio_slideshow_attached: true,
        about_slideshow_attached: true,
    }
}

fn app_on(store: &SharedStore) -> SiteApp {
    let mut app = SiteApp::new(config(), store.clone(), Rc::new(ManualClock::new(1_000)));
    app.init("");
    app
}

#[test]
fn gallery_survives_reload_without_reseeding() {
    let store = new_shared_store(MemoryStore::new());
    let mut app = app_on(&store);

    assert_eq!(app.gallery.items().len(), 4);
    let video_id = app
        .gallery
        .items()
        .iter()
        .find(|i| i.media_type == MediaType::Video)
        .map(|i| i.id.clone())
        .unwrap();

    app.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    app.gallery.handle_delete(&video_id);
    assert_eq!(app.gallery.items().len(), 3);

    // A fresh app on the same store sees the trimmed list, not the seeds.
    let reloaded = app_on(&store);
    assert_eq!(reloaded.gallery.items().len(), 3);
    assert!(reloaded
        .gallery
        .items()
        .iter()
        .all(|i| i.media_type == MediaType::Image));
}

#[test]
fn admin_mutations_require_an_open_session() {
    let store = new_shared_store(MemoryStore::new());
    let mut app = app_on(&store);

    // Everything is a silent no-op while logged out.
    app.offerings.handle_add("Photography", "Studio shoots.");
    app.home_slideshow.handle_add(Some(&upload("a.png", "image/png")), &OkReader);
    assert_eq!(app.offerings.items().len(), 7);
    assert_eq!(app.home_slideshow.items().len(), 3);

    app.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    app.offerings.handle_add("Photography", "Studio shoots.");
    assert_eq!(app.offerings.items().len(), 8);
    let added = app.offerings.items().last().unwrap().clone();
    assert_eq!(added.title, "Photography");

    app.logout();
    app.offerings.start_edit(&added.id);
    assert!(app.offerings.admin_view().iter().all(|e| !e.editing));

    let reloaded = app_on(&store);
    assert_eq!(reloaded.offerings.items().len(), 8);
}

#[test]
fn dashboard_is_unreachable_until_login() {
    let store = new_shared_store(MemoryStore::new());
    let mut app = app_on(&store);

    let outcome = app.sync_fragment("#admin-dashboard");
    assert_eq!(outcome.active_section, "admin-login");
    assert_eq!(outcome.rewrite_fragment.as_deref(), Some("#admin-login"));

    app.login(ADMIN_USERNAME, ADMIN_PASSWORD);
    let outcome = app.sync_fragment("#admin-dashboard");
    assert_eq!(outcome.active_section, "admin-dashboard");
    assert_eq!(outcome.rewrite_fragment, None);
    assert!(outcome.admin_controls_visible);
}

#[test]
fn edited_tagline_feeds_the_share_payload() {
    let store = new_shared_store(MemoryStore::new());
    let mut app = app_on(&store);
    app.login(ADMIN_USERNAME, ADMIN_PASSWORD);

    app.content.start_edit("homeTagline");
    app.content
        .save_edit("homeTagline", "We build <strong>bold</strong> brands.");

    let payload = app
        .share
        .begin(&app.settings, &app.content, "https://logansdesign.example")
        .unwrap();
    assert_eq!(payload.title, "LOGAN'S DESIGN");
    assert_eq!(payload.text, "We build bold brands.");

    // The saved edit also survives a reload.
    let reloaded = app_on(&store);
    assert_eq!(
        reloaded.content.current_html("homeTagline"),
        Some("We build <strong>bold</strong> brands.")
    );
}

#[test]
fn settings_save_commits_the_staged_logo() {
    let store = new_shared_store(MemoryStore::new());
    let mut app = app_on(&store);
    app.login(ADMIN_USERNAME, ADMIN_PASSWORD);

    app.settings
        .handle_logo_upload(Some(&upload("logo.png", "image/png")), &OkReader);
    // Staged only: a reload before saving must not see it.
    assert_eq!(app_on(&store).settings.logo_src(), None);

    let form = app.settings.admin_form();
    app.settings.save_all(form);
    assert_eq!(
        app_on(&store).settings.logo_src(),
        Some("data:image/png;base64,deadbeef")
    );
}
