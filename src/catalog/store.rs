//! Read-only catalog store
//!
//! Populated once at startup and never mutated. Lookups are linear scans,
//! which is plenty for a shop window of a few dozen phones.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::builtin::builtin_products;
use crate::catalog::Product;
use crate::core::{Result, StorefrontError};

/// Delimiter used when listing product names for the model
pub const NAME_DELIMITER: &str = ", ";

/// TOML catalog files hold a `[[products]]` array
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Immutable list of product records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate names
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.name.as_str()) {
                return Err(StorefrontError::config(format!(
                    "Duplicate product name in catalog: {}",
                    product.name
                )));
            }
        }

        Ok(Self { products })
    }

    /// The compiled-in phone list
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// Load a catalog from a `.json` or `.toml` file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StorefrontError::config(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let products = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str::<Vec<Product>>(&content)?,
            Some("toml") => toml::from_str::<CatalogFile>(&content)?.products,
            _ => {
                return Err(StorefrontError::config(format!(
                    "Unsupported catalog format: {} (expected .json or .toml)",
                    path.display()
                )))
            }
        };

        Self::new(products)
    }

    /// Load from `path` when given, else the builtin list
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Find a product by exact name
    ///
    /// Only the query is trimmed; the comparison is case-sensitive.
    pub fn find(&self, query: &str) -> Option<&Product> {
        let query = query.trim();
        self.products.iter().find(|p| p.name == query)
    }

    /// All names in catalog order, joined by `delimiter`
    pub fn joined_names(&self, delimiter: &str) -> String {
        self.products
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Iterate products in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn phonex() -> Catalog {
        Catalog::new(vec![Product::new("PhoneX", 100, "d")]).unwrap()
    }

    #[test]
    fn test_find_every_builtin_product() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for product in catalog.iter() {
            assert_eq!(catalog.find(&product.name), Some(product));
        }
    }

    #[test]
    fn test_find_trims_query_only() {
        let catalog = phonex();
        assert_eq!(catalog.find(" PhoneX ").and_then(|p| p.price.as_u64()), Some(100));
        assert_eq!(catalog.find("\tPhoneX\n").map(|p| p.name.as_str()), Some("PhoneX"));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let catalog = phonex();
        assert!(catalog.find("phonex").is_none());
        assert!(catalog.find("Phone").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_trim_does_not_apply_to_catalog_names() {
        let catalog = Catalog::new(vec![Product::new(" Padded ", 1, "")]).unwrap();
        assert!(catalog.find(" Padded ").is_none());
        assert!(catalog.find("Padded").is_none());
    }

    #[test]
    fn test_joined_names() {
        let catalog = Catalog::new(vec![
            Product::new("A", 1, ""),
            Product::new("B", 2, ""),
            Product::new("C", 3, ""),
        ])
        .unwrap();
        assert_eq!(catalog.joined_names(NAME_DELIMITER), "A, B, C");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(catalog.joined_names(NAME_DELIMITER), "");
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::new(vec![
            Product::new("PhoneX", 100, "a"),
            Product::new("PhoneX", 200, "b"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("PhoneX"));
    }

    #[test]
    fn test_builtin_names_are_unique() {
        assert!(Catalog::new(builtin_products()).is_ok());
    }

    #[test]
    fn test_load_toml_catalog() {
        let dir = std::env::temp_dir().join(format!("storefront-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[[products]]
name = "PhoneX"
price = 100
description = "d"

[products.specs]
ram_gb = 8
"#
        )
        .unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        let product = catalog.find("PhoneX").unwrap();
        assert_eq!(product.price, serde_json::Number::from(100));
        assert_eq!(product.specs["ram_gb"], 8);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = std::env::temp_dir().join(format!("storefront-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");
        fs::write(
            &path,
            r#"[{"name": "PhoneX", "price": 100, "specs": {}, "description": "d"}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = std::env::temp_dir().join(format!("storefront-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.csv");
        fs::write(&path, "name,price").unwrap();

        assert!(matches!(
            Catalog::from_path(&path),
            Err(StorefrontError::Config(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
