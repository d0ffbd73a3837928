//! YAML seed file of vendors and their sale cards, used by `db seed`.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::input::{NewVendor, SaleCardDraft, SaleCardInput};
use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct SeedFile {
    vendors: Vec<SeedVendor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedVendor {
    #[serde(flatten)]
    vendor: NewVendor,
    #[serde(default)]
    sale_card: Option<SaleCardInput>,
}

/// One validated vendor from a seed file.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedEntry {
    pub vendor: NewVendor,
    pub sale_card: Option<SaleCardDraft>,
}

/// Load and validate a seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, if any vendor
/// or sale card fails validation, or if two vendors share an id.
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedEntry>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&content)
}

fn parse_seed(content: &str) -> Result<Vec<SeedEntry>, ConfigError> {
    let file: SeedFile = serde_yaml::from_str(content)?;
    let mut seen_ids = HashSet::new();
    let mut entries = Vec::with_capacity(file.vendors.len());

    for SeedVendor { vendor, sale_card } in file.vendors {
        vendor
            .validate()
            .map_err(|e| ConfigError::Validation(format!("vendor '{}': {e}", vendor.id)))?;

        if !seen_ids.insert(vendor.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor id: '{}'",
                vendor.id
            )));
        }

        let sale_card = sale_card
            .map(|card| card.validate())
            .transpose()
            .map_err(|e| {
                ConfigError::Validation(format!("sale card of vendor '{}': {e}", vendor.id))
            })?;

        entries.push(SeedEntry { vendor, sale_card });
    }

    Ok(entries)
}
