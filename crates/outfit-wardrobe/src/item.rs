use serde::{Deserialize, Serialize};

/// Inclusive temperature band in Fahrenheit. Infinite bounds mean "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    #[serde(default = "unbounded_min")]
    pub min: f64,
    #[serde(default = "unbounded_max")]
    pub max: f64,
}

fn unbounded_min() -> f64 {
    f64::NEG_INFINITY
}

fn unbounded_max() -> f64 {
    f64::INFINITY
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(f64::NEG_INFINITY, max)
    }

    /// `min <= temperature <= max`. NaN is never contained.
    pub fn contains(&self, temperature: f64) -> bool {
        temperature >= self.min && temperature <= self.max
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A clothing item in the wardrobe. Immutable once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub temperature: TemperatureRange,
}

impl ClothingItem {
    pub fn new(name: impl Into<String>, temperature: TemperatureRange) -> Self {
        Self {
            name: name.into(),
            color: None,
            temperature,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = normalize_color(Some(color.into()));
        self
    }

    /// Display label: "{color} {name}", or just the name when there's no color.
    pub fn label(&self) -> String {
        match &self.color {
            Some(color) => format!("{} {}", color, self.name),
            None => self.name.clone(),
        }
    }
}

/// An item as submitted by the add-clothes form, before its category has
/// been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClothing {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub temperature: TemperatureRange,
}

impl NewClothing {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        color: Option<String>,
        temperature: TemperatureRange,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            color,
            temperature,
        }
    }

    /// Build the stored item. Fields are kept as submitted; a blank color
    /// counts as no color. The category is checked by the wardrobe.
    pub(crate) fn into_item(self) -> ClothingItem {
        ClothingItem {
            name: self.name,
            color: normalize_color(self.color),
            temperature: self.temperature,
        }
    }
}

fn normalize_color(color: Option<String>) -> Option<String> {
    color.filter(|c| !c.trim().is_empty())
}
