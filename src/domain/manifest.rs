//! Board manifest domain model.
//!
//! Wire names follow the published manifest format (camelCase, plus the
//! free-form keys used under `hardware.specs`). Unknown fields are ignored
//! here; the bundle always writes the original JSON document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::AppError;

/// One device manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub maintainer: String,
    #[serde(rename = "hostOperatingsystem")]
    pub host_operating_system: Vec<String>,
    pub environment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Hardware>,
    pub description: String,
    pub short_description: String,
    pub url_to_clone: String,
    pub logos: Vec<String>,
    pub image: String,
    #[serde(default, rename = "buy_now_links", skip_serializing_if = "Vec::is_empty")]
    pub buy_now_links: Vec<String>,
    pub branches: Vec<String>,
    pub settings: Vec<Setting>,
}

impl Manifest {
    /// Interpret an already schema-checked JSON value.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        Manifest::deserialize(value)
            .map_err(|e| AppError::Parse { what: "manifest".into(), details: e.to_string() })
    }

    /// Every asset URL the manifest references, in check order: clone URL,
    /// logos, image, purchase links.
    pub fn asset_links(&self) -> Vec<&str> {
        let mut links = Vec::with_capacity(2 + self.logos.len() + self.buy_now_links.len());
        links.push(self.url_to_clone.as_str());
        links.extend(self.logos.iter().map(String::as_str));
        links.push(self.image.as_str());
        links.extend(self.buy_now_links.iter().map(String::as_str));
        links
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    pub chip_vendor: String,
    pub manufacturer: String,
    pub specs: Specs,
}

/// Hardware specs. Only RAM and Flash are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    #[serde(rename = "RAM")]
    pub ram: String,
    #[serde(rename = "Flash")]
    pub flash: String,
    #[serde(rename = "MCU", default, skip_serializing_if = "Option::is_none")]
    pub mcu: Option<String>,
    #[serde(rename = "GPU", default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<String>,
    #[serde(rename = "Resolution", default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(rename = "Display Size", default, skip_serializing_if = "Option::is_none")]
    pub display_size: Option<String>,
    #[serde(rename = "Interface", default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(rename = "Color Depth", default, skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<String>,
    #[serde(rename = "Technology", default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(rename = "DPI", default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<String>,
    #[serde(rename = "Touch Pad", default, skip_serializing_if = "Option::is_none")]
    pub touch_pad: Option<String>,
}

/// A configurable build option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub options: Vec<SettingOption>,
    #[serde(default)]
    pub actions: Vec<SettingAction>,
}

impl Setting {
    /// The option flagged as default, if any.
    pub fn default_option(&self) -> Option<&SettingOption> {
        self.options.iter().find(|option| option.default == Some(DefaultFlag::True))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingOption {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultFlag>,
}

/// Default marker, serialized as the strings `"true"` / `"false"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultFlag {
    #[serde(rename = "true")]
    True,
    #[default]
    #[serde(rename = "false")]
    False,
}

/// File mutation applied when a setting takes a given value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_append: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_replace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
