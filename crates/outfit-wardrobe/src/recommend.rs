use std::collections::BTreeMap;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::wardrobe::Wardrobe;

/// Outcome for one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suggestion {
    /// Label of the picked item
    Item(String),
    /// Nothing in the category fits the temperature
    NoItemFound,
}

impl Suggestion {
    pub fn label(&self) -> Option<&str> {
        match self {
            Suggestion::Item(label) => Some(label),
            Suggestion::NoItemFound => None,
        }
    }
}

/// One suggestion per wardrobe category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recommendation {
    picks: BTreeMap<Category, Suggestion>,
}

impl Recommendation {
    pub fn get(&self, category: Category) -> Option<&Suggestion> {
        self.picks.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Suggestion)> + '_ {
        self.picks.iter().map(|(c, s)| (*c, s))
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

impl fmt::Display for Recommendation {
    /// One line per category, e.g. "Tops: Red Hoodie" or
    /// "Footwear: No suitable footwear found".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, suggestion)) in self.picks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match suggestion {
                Suggestion::Item(label) => write!(f, "{}: {}", category, label)?,
                Suggestion::NoItemFound => write!(
                    f,
                    "{}: No suitable {} found",
                    category,
                    category.name().to_lowercase()
                )?,
            }
        }
        Ok(())
    }
}

/// Pick one item per category whose range contains `temperature`.
///
/// Each category present in the wardrobe gets an entry; categories with no
/// fitting item get [`Suggestion::NoItemFound`]. The pick is uniform over the
/// fitting items and draws only from `rng`.
pub fn recommend<R: Rng + ?Sized>(
    wardrobe: &Wardrobe,
    temperature: f64,
    rng: &mut R,
) -> Recommendation {
    let picks = wardrobe
        .iter()
        .map(|(category, items)| {
            let matching: Vec<_> = items
                .iter()
                .filter(|item| item.temperature.contains(temperature))
                .collect();

            let suggestion = match matching.choose(&mut *rng) {
                Some(item) => Suggestion::Item(item.label()),
                None => Suggestion::NoItemFound,
            };
            tracing::debug!(
                %category,
                candidates = matching.len(),
                ?suggestion,
                "Picked item"
            );
            (category, suggestion)
        })
        .collect();

    Recommendation { picks }
}
