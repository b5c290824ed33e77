// src/core/services/navigation_service.rs
// Fragment-driven section switching. The URL fragment is the single source
// of truth for which section is visible; every transition funnels through
// `sync`, which also enforces the admin gate on the two reserved sections.

use crate::models::session::SharedSession;
use crate::utils::guards;
use log::debug;

pub const DEFAULT_SECTION: &str = "home";
pub const SECTION_ADMIN_LOGIN: &str = "admin-login";
pub const SECTION_ADMIN_DASHBOARD: &str = "admin-dashboard";

/// Where the host should scroll after a section switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Top of the page (the home section).
    Top,
    /// Top of the named section element.
    Section(String),
}

/// Everything the host needs to apply after a fragment sync: which section
/// to show, whether the address bar fragment must be rewritten, where to
/// scroll, and whether admin-only chrome is visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncOutcome {
    pub active_section: String,
    pub rewrite_fragment: Option<String>,
    pub scroll: ScrollTarget,
    pub admin_controls_visible: bool,
}

pub struct NavigationMachine {
    known_sections: Vec<String>,
    current_section: String,
    session: SharedSession,
}

impl NavigationMachine {
    /// `known_sections` are the section ids present in the document; the
    /// two admin sections are reserved whether or not they are listed.
    pub fn new(known_sections: Vec<String>, session: SharedSession) -> Self {
        Self {
            known_sections,
            current_section: DEFAULT_SECTION.to_string(),
            session,
        }
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Resolves a raw fragment (leading `#` included or not) to a section
    /// and records it as current.
    ///
    /// Redirect rules, in order: the dashboard without a login bounces to
    /// the login form; the login form while logged in bounces to the
    /// dashboard; anything unrecognized falls back to the default section.
    pub fn sync(&mut self, fragment: &str) -> SyncOutcome {
        let requested = fragment.strip_prefix('#').unwrap_or(fragment);
        let requested = if requested.is_empty() {
            DEFAULT_SECTION
        } else {
            requested
        };
        let admin = guards::is_admin(&self.session);

        let active = if requested == SECTION_ADMIN_DASHBOARD && !admin {
            debug!("dashboard requested without login, redirecting");
            SECTION_ADMIN_LOGIN
        } else if requested == SECTION_ADMIN_LOGIN && admin {
            SECTION_ADMIN_DASHBOARD
        } else if self.is_known(requested) {
            requested
        } else {
            DEFAULT_SECTION
        };
        self.current_section = active.to_string();

        let canonical = format!("#{active}");
        SyncOutcome {
            active_section: active.to_string(),
            rewrite_fragment: (fragment != canonical).then_some(canonical),
            scroll: if active == DEFAULT_SECTION {
                ScrollTarget::Top
            } else {
                ScrollTarget::Section(active.to_string())
            },
            admin_controls_visible: admin,
        }
    }

    fn is_known(&self, section: &str) -> bool {
        section == SECTION_ADMIN_LOGIN
            || section == SECTION_ADMIN_DASHBOARD
            || self.known_sections.iter().any(|s| s == section)
    }
}
