//! Catalog Models
//!
//! Data structures matching the server's item API.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CatalogError;

/// Which subset of the catalog to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Male,
    Female,
    Both,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Both => "both",
        }
    }

    /// Label shown above the item grid
    pub fn heading(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Category::Male),
            "female" => Ok(Category::Female),
            "both" => Ok(Category::Both),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// Item data structure (matches `/getitems/{category}` payload)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
