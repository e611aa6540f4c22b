//! Field metadata: display labels and ordering for snapshot fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display metadata for one snapshot field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Field name as stored in [`crate::VersionSnapshot::fields`].
    pub name: String,
    /// Human readable label.
    pub label: String,
}

impl FieldMeta {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Ordered field metadata.
///
/// Fields listed here are shown first, in catalog order; unknown fields
/// follow in name order and are labelled with their raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    fields: Vec<FieldMeta>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::client_defaults()
    }
}

impl FieldCatalog {
    pub fn new(fields: Vec<FieldMeta>) -> Self {
        Self { fields }
    }

    /// Labels for the fields a client snapshot usually carries.
    pub fn client_defaults() -> Self {
        Self::new(vec![
            FieldMeta::new("client_id", "Client ID"),
            FieldMeta::new("fqdn", "FQDN"),
            FieldMeta::new("os", "Operating system"),
            FieldMeta::new("os_release", "OS release"),
            FieldMeta::new("os_version", "OS version"),
            FieldMeta::new("kernel", "Kernel"),
            FieldMeta::new("install_time", "Install date"),
            FieldMeta::new("users", "Users"),
            FieldMeta::new("interfaces", "Network interfaces"),
            FieldMeta::new("volumes", "Volumes"),
            FieldMeta::new("memory_size", "Memory size"),
            FieldMeta::new("client_name", "Client name"),
            FieldMeta::new("client_version", "Client version"),
            FieldMeta::new("build_time", "Build time"),
            FieldMeta::new("client_binary_name", "Client binary name"),
            FieldMeta::new("client_description", "Client description"),
            FieldMeta::new("sandbox_support", "Sandboxing"),
            FieldMeta::new("fleetspeak_enabled", "Fleetspeak"),
            FieldMeta::new("system_manufacturer", "System manufacturer"),
            FieldMeta::new("serial_number", "Serial number"),
            FieldMeta::new("bios_version", "BIOS version"),
            FieldMeta::new("source_flow_id", "Source flow"),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|meta| meta.name == name)
    }

    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).map_or(name, |meta| meta.label.as_str())
    }

    /// Catalog position of a field, `None` for unknown fields.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|meta| meta.name == name)
    }

    /// Orders field names: catalog fields first, then the rest by name.
    pub fn ordered<'a, I>(&self, names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut known: BTreeMap<usize, &'a str> = BTreeMap::new();
        let mut unknown: Vec<&'a str> = Vec::new();
        for name in names {
            match self.rank(name) {
                Some(rank) => {
                    known.insert(rank, name);
                }
                None => unknown.push(name),
            }
        }
        unknown.sort_unstable();
        unknown.dedup();
        known.into_values().chain(unknown).collect()
    }
}
