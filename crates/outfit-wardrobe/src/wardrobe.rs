use std::collections::BTreeMap;
use std::sync::Arc;

use crate::category::Category;
use crate::error::WardrobeError;
use crate::item::{ClothingItem, NewClothing, TemperatureRange};

/// Clothing items grouped by category, in insertion order.
///
/// Every category is always present, possibly empty. Sequences are shared
/// behind `Arc`, so `add_item` only copies the category it touches.
#[derive(Debug, Clone, PartialEq)]
pub struct Wardrobe {
    categories: BTreeMap<Category, Arc<Vec<ClothingItem>>>,
}

impl Wardrobe {
    /// Empty wardrobe with all categories present.
    pub fn new() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|c| (c, Arc::new(Vec::new())))
                .collect(),
        }
    }

    /// Wardrobe seeded with the built-in catalog.
    pub fn with_defaults() -> Self {
        let mut wardrobe = Self::new();
        for (category, name, range) in default_catalog() {
            wardrobe.push(category, ClothingItem::new(name, range));
        }
        wardrobe
    }

    /// Return a new wardrobe with `item` appended to its category, fields as
    /// submitted.
    ///
    /// # Errors
    ///
    /// `InvalidCategory` if the category name isn't an exact match. `self`
    /// is never modified.
    pub fn add_item(&self, item: NewClothing) -> Result<Wardrobe, WardrobeError> {
        let category: Category = item.category.parse()?;
        let item = item.into_item();

        let mut next = self.clone();
        next.push(category, item);
        Ok(next)
    }

    fn push(&mut self, category: Category, item: ClothingItem) {
        let items = self.categories.entry(category).or_default();
        Arc::make_mut(items).push(item);
    }

    pub fn items(&self, category: Category) -> &[ClothingItem] {
        self.categories
            .get(&category)
            .map(|items| items.as_slice())
            .unwrap_or(&[])
    }

    /// Categories with their items, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ClothingItem])> + '_ {
        self.categories
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(|items| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Wardrobe {
    fn default() -> Self {
        Self::new()
    }
}

fn default_catalog() -> Vec<(Category, &'static str, TemperatureRange)> {
    use Category::*;
    use TemperatureRange as R;

    vec![
        (Tops, "T-shirt", R::at_least(60.0)),
        (Tops, "Sweatshirt", R::new(35.0, 60.0)),
        (Tops, "Tanktop", R::at_least(60.0)),
        (Tops, "Puffer Jacket", R::at_most(35.0)),
        (Tops, "Parka", R::at_most(35.0)),
        (Bottoms, "Jeans", R::unbounded()),
        (Bottoms, "Shorts", R::at_least(60.0)),
        (Bottoms, "Sweatpants", R::at_least(30.0)),
        (Bottoms, "Cargo Pants", R::at_least(30.0)),
        (Footwear, "Sneakers", R::at_least(30.0)),
        (Footwear, "Sandals", R::at_least(60.0)),
        (Footwear, "Winter Boots", R::at_most(35.0)),
        (Footwear, "Timbs", R::at_least(30.0)),
    ]
}
