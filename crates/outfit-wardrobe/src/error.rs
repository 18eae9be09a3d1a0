use crate::category::Category;

/// Wardrobe mutation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WardrobeError {
    #[error("Invalid category: {name} (expected one of {expected})", expected = Category::names().join(", "))]
    InvalidCategory { name: String },
}
