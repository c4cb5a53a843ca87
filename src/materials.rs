//! Material catalog
//!
//! Each material carries the density used to turn volume into weight and a
//! default price per kilogram.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    /// g/cm³
    pub density: f64,
    pub price_per_kg: f64,
}

impl Material {
    pub fn new(id: &str, name: &str, density: f64, price_per_kg: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            density,
            price_per_kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// Look up a material by id, ignoring ASCII case and surrounding whitespace
    pub fn get(&self, id: &str) -> Option<&Material> {
        let id = id.trim();
        self.materials.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }

    /// Look up a material, failing with `UnknownMaterial` when it is not listed
    pub fn require(&self, id: &str) -> Result<&Material, AppError> {
        self.get(id).ok_or_else(|| AppError::UnknownMaterial {
            id: id.trim().to_string(),
            available: self.ids().join(", "),
        })
    }

    pub fn ids(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Check ids are unique and non-empty, densities positive and prices non-negative
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for material in &self.materials {
            let id = material.id.trim();
            if id.is_empty() {
                return Err(AppError::Config("Material id cannot be empty".to_string()));
            }
            if !seen.insert(id.to_ascii_lowercase()) {
                return Err(AppError::Config(format!("Duplicate material id '{}'", id)));
            }
            if !(material.density.is_finite() && material.density > 0.0) {
                return Err(AppError::Config(format!(
                    "Material '{}' must have a positive density, got {}",
                    id, material.density
                )));
            }
            if !(material.price_per_kg.is_finite() && material.price_per_kg >= 0.0) {
                return Err(AppError::Config(format!(
                    "Material '{}' must have a non-negative price per kg, got {}",
                    id, material.price_per_kg
                )));
            }
        }
        Ok(())
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new(vec![
            Material::new("pla", "PLA", 1.24, 80_000.0),
            Material::new("petg", "PETG", 1.27, 90_000.0),
            Material::new("abs", "ABS", 1.04, 85_000.0),
            Material::new("asa", "ASA", 1.07, 110_000.0),
            Material::new("tpu", "TPU", 1.21, 140_000.0),
            Material::new("resin", "Resina", 1.10, 180_000.0),
        ])
    }
}
