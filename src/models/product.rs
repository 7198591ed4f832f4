use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Equipment,
    Apparel,
    Supplements,
    Accessories,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Equipment => "equipment",
            ProductCategory::Apparel => "apparel",
            ProductCategory::Supplements => "supplements",
            ProductCategory::Accessories => "accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "equipment" => Some(ProductCategory::Equipment),
            "apparel" => Some(ProductCategory::Apparel),
            "supplements" => Some(ProductCategory::Supplements),
            "accessories" => Some(ProductCategory::Accessories),
            _ => None,
        }
    }
}

/// Shop item. The catalog-browsing surface is out of scope; the entity store
/// still owns the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: Option<String>,
    pub category: ProductCategory,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: Option<String>,
    pub category: ProductCategory,
    pub in_stock: bool,
}
