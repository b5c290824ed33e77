// src/core/api.rs
// Top-level application facade: owns the session, every section manager,
// and the login flow, and fans the host's tick out to all of them.

use crate::{
    models::session::{new_shared_session, SharedSession},
    models::settings::SettingDescriptor,
    services::{
        content_service::ContentController,
        gallery_service::GalleryManager,
        navigation_service::{NavigationMachine, SyncOutcome},
        offerings_service::OfferingsManager,
        portfolio_service::PortfolioManager,
        settings_service::SettingsManager,
        share_service::ShareController,
        slideshow_service::{SlideshowConfig, SlideshowManager},
    },
    storage::{defaults, keys, SharedStore},
    utils::{guards, time::SharedClock},
};
use log::{debug, info};

// Hardcoded placeholder credentials, matched verbatim at login. This is a
// convenience gate for a single-operator site, not a security boundary:
// all data lives client-side anyway.
pub const ADMIN_USERNAME: &str = "LOGAN'S DESIGN";
pub const ADMIN_PASSWORD: &str = "LOGAN'S";

const LOGIN_FAILED: &str = "Invalid username or password. Please try again.";

/// Page-shape configuration the host derives from the document: which
/// sections exist, which text regions are editable, which settings are
/// tracked, and which carousels are actually present.
pub struct SiteConfig {
    pub sections: Vec<String>,
    pub editable_regions: Vec<(String, String)>,
    pub setting_descriptors: Vec<SettingDescriptor>,
    pub home_slideshow_attached: bool,
    pub portfolio_slideshow_attached: bool,
    pub about_slideshow_attached: bool,
}

pub struct SiteApp {
    pub session: SharedSession,
    pub navigation: NavigationMachine,
    pub content: ContentController,
    pub settings: SettingsManager,
    pub home_slideshow: SlideshowManager,
    pub portfolio_slideshow: SlideshowManager,
    pub about_slideshow: SlideshowManager,
    pub offerings: OfferingsManager,
    pub portfolio: PortfolioManager,
    pub gallery: GalleryManager,
    pub share: ShareController,
    editable_regions: Vec<(String, String)>,
    setting_descriptors: Vec<SettingDescriptor>,
    login_error: Option<String>,
}

impl SiteApp {
    pub fn new(config: SiteConfig, store: SharedStore, clock: SharedClock) -> Self {
        let session = new_shared_session();
        let slideshow = |key, items, attached| {
            SlideshowManager::new(
                SlideshowConfig {
                    storage_key: key,
                    default_items: items,
                    attached,
                },
                store.clone(),
                session.clone(),
                clock.clone(),
            )
        };
        Self {
            navigation: NavigationMachine::new(config.sections, session.clone()),
            content: ContentController::new(store.clone(), session.clone()),
            settings: SettingsManager::new(store.clone(), session.clone(), clock.clone()),
            home_slideshow: slideshow(
                keys::SLIDESHOW,
                defaults::home_slides(),
                config.home_slideshow_attached,
            ),
            portfolio_slideshow: slideshow(
                keys::PORTFOLIO_SLIDESHOW,
                defaults::portfolio_slides(),
                config.portfolio_slideshow_attached,
            ),
            about_slideshow: slideshow(
                keys::ABOUT_SLIDESHOW,
                defaults::about_slides(),
                config.about_slideshow_attached,
            ),
            offerings: OfferingsManager::new(store.clone(), session.clone(), clock.clone()),
            portfolio: PortfolioManager::new(store.clone(), session.clone(), clock.clone()),
            gallery: GalleryManager::new(store, session.clone(), clock),
            share: ShareController::new(),
            editable_regions: config.editable_regions,
            setting_descriptors: config.setting_descriptors,
            login_error: None,
            session,
        }
    }

    /// Loads every manager from storage (seeding defaults on first run) and
    /// resolves the initial fragment.
    pub fn init(&mut self, fragment: &str) -> SyncOutcome {
        self.content
            .discover(std::mem::take(&mut self.editable_regions));
        self.settings
            .init(std::mem::take(&mut self.setting_descriptors));
        self.home_slideshow.init();
        self.portfolio_slideshow.init();
        self.about_slideshow.init();
        self.offerings.init();
        self.portfolio.init();
        self.gallery.init();
        info!("site state loaded");
        self.sync_fragment(fragment)
    }

    /// Resolves a fragment change. Section visibility and open edits are
    /// both reconciled against the current session here.
    pub fn sync_fragment(&mut self, fragment: &str) -> SyncOutcome {
        let outcome = self.navigation.sync(fragment);
        self.content.reconcile_session();
        outcome
    }

    /// Verbatim credential match. Success lands on the dashboard; failure
    /// sets an inline form error and leaves the fragment alone.
    pub fn login(&mut self, username: &str, password: &str) -> SyncOutcome {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.session.borrow_mut().set_logged_in(true);
            self.login_error = None;
            info!("admin session opened");
            self.sync_fragment("#admin-dashboard")
        } else {
            debug!("login rejected");
            self.login_error = Some(LOGIN_FAILED.to_string());
            let current = format!("#{}", self.navigation.current_section());
            self.sync_fragment(&current)
        }
    }

    pub fn logout(&mut self) -> SyncOutcome {
        self.session.borrow_mut().set_logged_in(false);
        self.login_error = None;
        info!("admin session closed");
        self.sync_fragment("#home")
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        guards::is_admin(&self.session)
    }

    /// Host-driven pump for every deadline in the app: slideshow rotation
    /// and status-message expiry.
    pub fn tick(&mut self) {
        self.home_slideshow.tick();
        self.portfolio_slideshow.tick();
        self.about_slideshow.tick();
        self.offerings.tick();
        self.portfolio.tick();
        self.gallery.tick();
        self.settings.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::navigation_service::ScrollTarget;
    use crate::storage::{new_shared_store, MemoryStore};
    use crate::utils::time::ManualClock;
    use std::rc::Rc;

    fn config() -> SiteConfig {
        SiteConfig {
            sections: ["home", "services", "portfolio", "gallery", "about"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            editable_regions: vec![(
                "homeTagline".to_string(),
                "Creative Solutions, Beautifully Executed.".to_string(),
            )],
            setting_descriptors: vec![SettingDescriptor::href(
                "contactEmail",
                "hello@example.com",
                Some("mailto:"),
            )],
            home_slideshow_attached: true,
            portfolio_slideshow_attached: true,
            about_slideshow_attached: true,
        }
    }

    fn app() -> SiteApp {
        SiteApp::new(
            config(),
            new_shared_store(MemoryStore::new()),
            Rc::new(ManualClock::new(1_000)),
        )
    }

    #[test]
    fn init_seeds_defaults_and_lands_on_home() {
        let mut app = app();
        let outcome = app.init("");
        assert_eq!(outcome.active_section, "home");
        assert_eq!(outcome.scroll, ScrollTarget::Top);
        assert!(!outcome.admin_controls_visible);

        assert_eq!(app.home_slideshow.items().len(), 3);
        assert_eq!(app.offerings.items().len(), 7);
        assert_eq!(app.gallery.items().len(), 4);
        assert!(app.portfolio.items().is_empty());
        assert_eq!(
            app.content.current_html("homeTagline"),
            Some("Creative Solutions, Beautifully Executed.")
        );
    }

    #[test]
    fn login_round_trip() {
        let mut app = app();
        app.init("");

        let outcome = app.login(ADMIN_USERNAME, "wrong");
        assert!(!app.is_admin());
        assert_eq!(app.login_error(), Some(LOGIN_FAILED));
        // Failure re-syncs the current section instead of navigating.
        assert_eq!(outcome.active_section, "home");

        let outcome = app.login(ADMIN_USERNAME, ADMIN_PASSWORD);
        assert!(app.is_admin());
        assert_eq!(app.login_error(), None);
        assert_eq!(outcome.active_section, "admin-dashboard");
        assert!(outcome.admin_controls_visible);

        let outcome = app.logout();
        assert!(!app.is_admin());
        assert_eq!(outcome.active_section, "home");
    }

    #[test]
    fn tick_fans_out_to_slideshows() {
        let store = new_shared_store(MemoryStore::new());
        let clock = Rc::new(ManualClock::new(1_000));
        let mut app = SiteApp::new(config(), store, clock.clone());
        app.init("");
        assert_eq!(app.home_slideshow.slide_index(), 1);

        clock.advance(crate::services::slideshow_service::ROTATION_INTERVAL_MS);
        app.tick();
        assert_eq!(app.home_slideshow.slide_index(), 2);
        assert_eq!(app.about_slideshow.slide_index(), 2);
    }

    #[test]
    fn fragment_sync_closes_stale_edits_after_logout() {
        let mut app = app();
        app.init("");
        app.login(ADMIN_USERNAME, ADMIN_PASSWORD);
        app.content.start_edit("homeTagline");

        app.session.borrow_mut().set_logged_in(false);
        let outcome = app.sync_fragment("#admin-dashboard");
        assert_eq!(outcome.active_section, "admin-login");
        assert!(!app.content.region("homeTagline").unwrap().editing);
    }
}
