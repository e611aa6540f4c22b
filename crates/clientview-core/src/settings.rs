//! View settings - initial caps for disclosable lists and route wiring.
//!
//! Settings are TOML encoded. Every field has a default, so an empty file
//! (or no file at all) yields [`ViewSettings::default`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::disclosure::ListId;
use crate::error::{CoreError, Result};
use crate::route::SOURCE_FLOW_ID_PARAM;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Route parameter holding the selection anchor.
    pub anchor_param: String,

    /// Disclosure caps.
    pub disclosure: DisclosureSettings,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            anchor_param: SOURCE_FLOW_ID_PARAM.to_string(),
            disclosure: DisclosureSettings::default(),
        }
    }
}

impl ViewSettings {
    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let settings: Self = toml::from_str(&content).map_err(|e| CoreError::toml(path, e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| CoreError::toml("<inline>", e))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.anchor_param.trim().is_empty() {
            return Err(CoreError::InvalidSettings {
                message: "anchor_param must not be empty".to_string(),
            });
        }
        if let Some(name) = self.disclosure.caps.keys().find(|name| name.trim().is_empty()) {
            return Err(CoreError::InvalidSettings {
                message: format!("list name {name:?} must not be empty"),
            });
        }
        Ok(())
    }
}

// =============================================================================
// DISCLOSURE SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureSettings {
    /// Cap for lists without an explicit entry in `caps`.
    pub default_cap: usize,

    /// Initial number of items shown, keyed by list field name.
    pub caps: BTreeMap<String, usize>,
}

impl Default for DisclosureSettings {
    fn default() -> Self {
        let caps = [
            (ListId::USERS, 1),
            (ListId::INTERFACES, 3),
            (ListId::VOLUMES, 2),
        ]
        .into_iter()
        .map(|(name, cap)| (name.to_string(), cap))
        .collect();
        Self {
            default_cap: 3,
            caps,
        }
    }
}

impl DisclosureSettings {
    pub fn cap_for(&self, list: &ListId) -> usize {
        self.caps
            .get(list.as_str())
            .copied()
            .unwrap_or(self.default_cap)
    }

    /// Lists that get a disclosure control, in name order.
    pub fn lists(&self) -> impl Iterator<Item = ListId> + '_ {
        self.caps.keys().map(ListId::new)
    }
}
