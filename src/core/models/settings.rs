// src/core/models/settings.rs
use serde::{Deserialize, Serialize};

/// Describes one tracked site setting: its key, the value discovered in the
/// document, and how it renders (plain text, or an href with an optional
/// prefix and an optional suffix pair, e.g. a phone number plus extension).
#[derive(Clone, Debug)]
pub struct SettingDescriptor {
    pub key: String,
    pub original_value: String,
    pub is_href: bool,
    pub href_prefix: Option<String>,
    pub original_suffix: Option<String>,
}

impl SettingDescriptor {
    pub fn text(key: &str, original_value: &str) -> Self {
        Self {
            key: key.to_string(),
            original_value: original_value.to_string(),
            is_href: false,
            href_prefix: None,
            original_suffix: None,
        }
    }

    pub fn href(key: &str, original_value: &str, href_prefix: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            original_value: original_value.to_string(),
            is_href: true,
            href_prefix: href_prefix.map(str::to_string),
            original_suffix: None,
        }
    }

    pub fn with_suffix(mut self, original_suffix: &str) -> Self {
        self.original_suffix = Some(original_suffix.to_string());
        self
    }
}

/// Live state of one tracked setting.
#[derive(Clone, Debug)]
pub struct SiteSetting {
    pub descriptor: SettingDescriptor,
    pub current_value: String,
    pub current_suffix: Option<String>,
}

impl SiteSetting {
    pub fn from_descriptor(descriptor: SettingDescriptor) -> Self {
        let current_value = descriptor.original_value.clone();
        let current_suffix = descriptor.original_suffix.clone();
        Self {
            descriptor,
            current_value,
            current_suffix,
        }
    }
}

/// Persisted shape of one setting entry under the site-settings key.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSetting {
    pub current_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_suffix_value: Option<String>,
}
