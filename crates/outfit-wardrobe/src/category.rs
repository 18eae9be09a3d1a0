use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WardrobeError;

/// Clothing categories. The set is fixed; ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Footwear,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tops, Category::Bottoms, Category::Footwear];

    pub fn name(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Footwear => "Footwear",
        }
    }

    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(Category::name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = WardrobeError;

    /// Exact match on the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| WardrobeError::InvalidCategory {
                name: s.to_string(),
            })
    }
}
