//! Read-only medicine catalog.
//!
//! The catalog is fixed at startup: either the compiled-in table from
//! [`Catalog::builtin`] or a JSON asset loaded with [`Catalog::load`].

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::MedicineRecord;

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate medicine id: {0}")]
    DuplicateId(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Immutable, ordered list of medicine records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    medicines: Vec<MedicineRecord>,
}

impl Catalog {
    /// The compiled-in demo catalog.
    pub fn builtin() -> Self {
        Self {
            medicines: builtin::medicines(),
        }
    }

    /// Build a catalog from records, rejecting duplicate ids.
    pub fn from_records(medicines: Vec<MedicineRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for med in &medicines {
            if !seen.insert(med.id.as_str()) {
                return Err(CatalogError::DuplicateId(med.id.clone()));
            }
        }
        Ok(Self { medicines })
    }

    /// Parse a JSON array of medicine records.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let medicines: Vec<MedicineRecord> = serde_json::from_str(json)?;
        Self::from_records(medicines)
    }

    /// Load a catalog asset from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Get a medicine by id.
    pub fn get(&self, id: &str) -> Option<&MedicineRecord> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MedicineRecord> {
        self.medicines.iter()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
