// src/core/services/settings_service.rs
// Named site-wide values (contact email, phone, social links) plus the
// logo. The logo has a two-phase flow: an upload only stages a preview;
// nothing touches the store until the whole settings form is saved.

use crate::{
    models::common::{DataRef, FileReader, FileUpload},
    models::session::SharedSession,
    models::settings::{PersistedSetting, SettingDescriptor, SiteSetting},
    services::status::StatusChannel,
    storage::{keys, SharedStore},
    utils::{guards, time::SharedClock},
};
use log::{debug, warn};
use std::collections::BTreeMap;

const LOGO_PREVIEW_NOTICE_MS: u64 = 5_000;

pub const SETTING_CONTACT_EMAIL: &str = "contactEmail";
pub const SETTING_CONTACT_EMAIL_SECONDARY: &str = "contactEmailSecondary";
pub const SETTING_PRIMARY_PHONE: &str = "primaryPhone";

/// One row of the admin settings form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingFormField {
    pub key: String,
    pub value: String,
    pub suffix: Option<String>,
}

/// How a setting renders on the public page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingDisplay {
    pub key: String,
    /// Display text to apply; `None` means the element's existing content
    /// (an icon, say) is left alone.
    pub text: Option<String>,
    /// Full link target for href-style settings, `None` for plain text.
    pub href: Option<String>,
}

pub struct SettingsManager {
    settings: BTreeMap<String, SiteSetting>,
    current_logo: Option<DataRef>,
    pending_logo: Option<DataRef>,
    pub status: StatusChannel,
    pub logo_status: StatusChannel,
    store: SharedStore,
    session: SharedSession,
    clock: SharedClock,
}

impl SettingsManager {
    pub fn new(store: SharedStore, session: SharedSession, clock: SharedClock) -> Self {
        Self {
            settings: BTreeMap::new(),
            current_logo: None,
            pending_logo: None,
            status: StatusChannel::new(),
            logo_status: StatusChannel::new(),
            store,
            session,
            clock,
        }
    }

    /// Registers the known settings from their descriptors, then overlays
    /// persisted values. The logo is kept under its own key as a raw
    /// string, not part of the settings map.
    pub fn init(&mut self, descriptors: impl IntoIterator<Item = SettingDescriptor>) {
        for descriptor in descriptors {
            self.settings.insert(
                descriptor.key.clone(),
                SiteSetting::from_descriptor(descriptor),
            );
        }
        self.load_saved();
        self.current_logo = self.store.borrow().get(keys::SITE_LOGO);
    }

    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.status.tick(now);
        self.logo_status.tick(now);
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(|s| s.current_value.as_str())
    }

    /// The logo the page should show right now: a staged preview wins over
    /// the saved one.
    pub fn logo_src(&self) -> Option<&str> {
        self.pending_logo
            .as_deref()
            .or(self.current_logo.as_deref())
    }

    /// Stages a logo preview. The store is untouched until `save_all`.
    pub fn handle_logo_upload(&mut self, file: Option<&FileUpload>, reader: &dyn FileReader) {
        if !guards::is_admin(&self.session) {
            debug!("logo upload dropped: not logged in");
            return;
        }
        let Some(file) = file else {
            return;
        };
        let now = self.clock.now_ms();
        match reader.read_as_data_url(file) {
            Ok(data) => {
                self.pending_logo = Some(data);
                self.logo_status.show(
                    "Logo preview updated. Click \"Save Site Settings\" to apply.",
                    crate::services::status::StatusLevel::Success,
                    now,
                    LOGO_PREVIEW_NOTICE_MS,
                );
            }
            Err(err) => {
                warn!("logo read failed: {err}");
                self.logo_status.show_error("Error reading file.", now);
            }
        }
    }

    /// Commits the whole form in one shot: every field value, and the
    /// staged logo if there is one.
    pub fn save_all(&mut self, inputs: impl IntoIterator<Item = SettingFormField>) {
        if !guards::is_admin(&self.session) {
            debug!("settings save dropped: not logged in");
            return;
        }
        for input in inputs {
            if let Some(setting) = self.settings.get_mut(&input.key) {
                setting.current_value = input.value;
                if setting.descriptor.original_suffix.is_some() {
                    setting.current_suffix = input.suffix;
                }
            }
        }
        self.persist();
        if let Some(logo) = self.pending_logo.take() {
            self.store.borrow_mut().set(keys::SITE_LOGO, &logo);
            self.current_logo = Some(logo);
        }
        self.logo_status.clear();
        self.status
            .show_success("Site settings saved successfully!", self.clock.now_ms());
    }

    /// Message behind the login form's forgot-password link. Resets are
    /// manual; the message points at whichever contact settings are filled
    /// in, or says none are available.
    pub fn password_reset_message(&self) -> String {
        let email = self
            .value(SETTING_CONTACT_EMAIL)
            .filter(|v| !v.is_empty());
        let phone = self
            .value(SETTING_PRIMARY_PHONE)
            .filter(|v| !v.is_empty());
        if email.is_none() && phone.is_none() {
            return "Password reset instructions are not available. \
                    Please contact support through other channels."
                .to_string();
        }
        let mut message = String::from(
            "Password reset must be done manually. \
             Please contact the site administrator for assistance.\n\n",
        );
        if let Some(email) = email {
            message.push_str(&format!("Email: {email}\n"));
        }
        if let Some(phone) = phone {
            message.push_str(&format!("Phone: {phone}"));
        }
        message
    }

    /// Rows for the admin form, in key order.
    pub fn admin_form(&self) -> Vec<SettingFormField> {
        self.settings
            .values()
            .map(|setting| SettingFormField {
                key: setting.descriptor.key.clone(),
                value: setting.current_value.clone(),
                suffix: setting.current_suffix.clone(),
            })
            .collect()
    }

    /// Public-page projection. Href-style settings with a prefix get the
    /// prefix prepended to the stored value and show the value as text;
    /// prefix-less hrefs use the value verbatim as the target and leave the
    /// element's existing text content untouched.
    pub fn display(&self) -> Vec<SettingDisplay> {
        self.settings
            .values()
            .map(|setting| {
                let descriptor = &setting.descriptor;
                let href = if descriptor.is_href {
                    Some(match &descriptor.href_prefix {
                        Some(prefix) => format!("{prefix}{}", setting.current_value),
                        None => setting.current_value.clone(),
                    })
                } else {
                    None
                };
                let text = if descriptor.is_href && descriptor.href_prefix.is_none() {
                    None
                } else {
                    Some(match &setting.current_suffix {
                        Some(suffix) => format!("{}{suffix}", setting.current_value),
                        None => setting.current_value.clone(),
                    })
                };
                SettingDisplay {
                    key: descriptor.key.clone(),
                    text,
                    href,
                }
            })
            .collect()
    }

    fn persist(&self) {
        let map: BTreeMap<&str, PersistedSetting> = self
            .settings
            .iter()
            .map(|(key, setting)| {
                (
                    key.as_str(),
                    PersistedSetting {
                        current_value: setting.current_value.clone(),
                        current_suffix_value: setting.current_suffix.clone(),
                    },
                )
            })
            .collect();
        match serde_json::to_string(&map) {
            Ok(json) => self.store.borrow_mut().set(keys::SITE_SETTINGS, &json),
            Err(err) => warn!("failed to serialize site settings: {err}"),
        }
    }

    fn load_saved(&mut self) {
        let Some(raw) = self.store.borrow().get(keys::SITE_SETTINGS) else {
            return;
        };
        match serde_json::from_str::<BTreeMap<String, PersistedSetting>>(&raw) {
            Ok(saved) => {
                for (key, persisted) in saved {
                    if let Some(setting) = self.settings.get_mut(&key) {
                        setting.current_value = persisted.current_value;
                        if persisted.current_suffix_value.is_some() {
                            setting.current_suffix = persisted.current_suffix_value;
                        }
                    }
                }
            }
            Err(err) => warn!("failed to parse site settings from storage: {err}"),
        }
    }
}
