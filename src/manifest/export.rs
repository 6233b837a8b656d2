//! Collection metadata export.
//!
//! Serializes a set of instances' trait manifests into the marketplace
//! document shape: one JSON object per instance with `name`,
//! `description`, `image`, `external_url`, `attributes`, `seed`,
//! `collection`, `edition` and `total_supply` fields.

use crate::foundation::error::OculyteResult;
use crate::manifest::traits::TraitManifest;

/// One attribute of a collection entry, marketplace-shaped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: String,
}

/// One exported collection entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub description: String,
    pub image: String,
    pub external_url: String,
    pub attributes: Vec<TraitAttribute>,
    pub seed: u32,
    pub collection: String,
    pub edition: u64,
    pub total_supply: u64,
}

/// Fixed fields shared by every entry of one export run.
#[derive(Clone, Debug)]
pub struct CollectionInfo {
    pub collection: String,
    pub description: String,
    pub external_url: String,
    /// Prefix for per-edition image paths, e.g. `"images/"`.
    pub image_base: String,
}

impl CollectionEntry {
    /// Build the entry for one instance.
    pub fn new(seed: u32, manifest: &TraitManifest, edition: u64, info: &CollectionInfo) -> Self {
        let attributes = manifest
            .entries()
            .iter()
            .map(|e| TraitAttribute {
                trait_type: e.name.clone(),
                value: e.value.clone(),
            })
            .collect();
        Self {
            name: format!("{} #{edition}", info.collection),
            description: info.description.clone(),
            image: format!("{}{edition}.png", info.image_base),
            external_url: info.external_url.clone(),
            attributes,
            seed,
            collection: info.collection.clone(),
            edition,
            // Filled in by export_collection once the run size is known.
            total_supply: 0,
        }
    }
}

/// Serialize one object per (seed, manifest) pair, editions starting at 1.
pub fn export_collection(
    items: &[(u32, TraitManifest)],
    info: &CollectionInfo,
) -> OculyteResult<String> {
    let total = items.len() as u64;
    let entries: Vec<CollectionEntry> = items
        .iter()
        .enumerate()
        .map(|(i, (seed, manifest))| {
            let mut e = CollectionEntry::new(*seed, manifest, i as u64 + 1, info);
            e.total_supply = total;
            e
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| anyhow::anyhow!("serialize collection: {e}"))?;
    Ok(json)
}
