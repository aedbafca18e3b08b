//! Product records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A sellable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, unique across the catalog and used as the lookup key
    pub name: String,
    /// Price in US dollars, kept exactly as written in the catalog
    pub price: Number,
    /// Free-form technical attributes
    #[serde(default)]
    pub specs: Map<String, Value>,
    /// Marketing description
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product without specs
    pub fn new(
        name: impl Into<String>,
        price: impl Into<Number>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            specs: Map::new(),
            description: description.into(),
        }
    }

    /// Add a spec attribute
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// JSON form handed to the model
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "price": self.price,
            "specs": self.specs,
            "description": self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_keeps_its_written_form() {
        let whole: Product =
            serde_json::from_value(json!({"name": "PhoneX", "price": 100})).unwrap();
        assert_eq!(whole.to_value()["price"], json!(100));
        assert!(whole.to_value().to_string().contains(r#""price":100,"#));

        let cents: Product =
            serde_json::from_value(json!({"name": "PhoneY", "price": 99.5})).unwrap();
        assert_eq!(cents.to_value()["price"], json!(99.5));
    }

    #[test]
    fn test_to_value_shape() {
        let product = Product::new("PhoneX", 100, "d").with_spec("ram_gb", 8);
        assert_eq!(
            product.to_value(),
            json!({"name": "PhoneX", "price": 100, "specs": {"ram_gb": 8}, "description": "d"})
        );
    }
}
