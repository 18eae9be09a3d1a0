//! Wardrobe and temperature-based outfit recommendations.
//!
//! A [`Wardrobe`] holds clothing items grouped by [`Category`]. Given a
//! temperature, [`recommend`] picks one fitting item per category at random.
//! [`OutfitSession`] owns the wardrobe and the last recommendation the way a
//! screen controller would.

pub mod category;
pub mod error;
pub mod item;
pub mod recommend;
pub mod session;
pub mod wardrobe;

pub use category::Category;
pub use error::WardrobeError;
pub use item::{ClothingItem, NewClothing, TemperatureRange};
pub use recommend::{recommend, Recommendation, Suggestion};
pub use session::OutfitSession;
pub use wardrobe::Wardrobe;
