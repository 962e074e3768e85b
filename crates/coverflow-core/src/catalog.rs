//! Items shown by the carousel, supplied as external configuration.

use crate::error::CarouselError;
use serde::Deserialize;

/// One media card. Its position in the list is its identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub title: String,
    pub year: String,
    #[serde(default, alias = "imageRef")]
    pub image: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>, year: impl Into<String>, image: Option<&str>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            image: image.map(str::to_owned),
        }
    }
}

/// Parse a JSON array of items. An empty list is rejected.
pub fn parse_items(json: &str) -> Result<Vec<Item>, CarouselError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(CarouselError::EmptyCatalog);
    }
    Ok(items)
}
