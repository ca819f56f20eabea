//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{FieldSpec, FieldType, Record, RecordKind};

/// Dish on the menu
///
/// Read-only through the API; documents are seeded out-of-band, possibly
/// with snake_case flag keys (`is_vegan`, `is_spicy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// e.g. Antipasti, Pasta, Pizza, Secondi, Dolci
    pub category: String,
    #[serde(rename = "isVegan", alias = "is_vegan", default)]
    pub is_vegan: bool,
    #[serde(rename = "isSpicy", alias = "is_spicy", default)]
    pub is_spicy: bool,
    /// Public image URL
    pub image: Option<String>,
    /// Shown in the highlights section
    #[serde(default)]
    pub featured: bool,
}

impl Record for MenuItem {
    const KIND: RecordKind = RecordKind::MenuItem;
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldType::String),
        FieldSpec::optional("description", FieldType::String),
        FieldSpec::required("price", FieldType::Number),
        FieldSpec::required("category", FieldType::String),
        FieldSpec::defaulted("isVegan", FieldType::Boolean).alias("is_vegan"),
        FieldSpec::defaulted("isSpicy", FieldType::Boolean).alias("is_spicy"),
        FieldSpec::optional("image", FieldType::String),
        FieldSpec::defaulted("featured", FieldType::Boolean),
    ];
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            is_vegan: false,
            is_spicy: false,
            image: None,
            featured: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
