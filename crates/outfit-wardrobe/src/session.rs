//! State owned by the outfit screen: the wardrobe plus the last
//! recommendation and the weather reading it was made for.

use outfit_weather::{WeatherError, WeatherLookup};
use rand::Rng;

use crate::error::WardrobeError;
use crate::item::NewClothing;
use crate::recommend::{recommend, Recommendation};
use crate::wardrobe::Wardrobe;

#[derive(Debug, Clone, Default)]
pub struct OutfitSession {
    wardrobe: Wardrobe,
    recommendation: Option<Recommendation>,
    temperature: Option<f64>,
    location_label: Option<String>,
}

impl OutfitSession {
    pub fn new(wardrobe: Wardrobe) -> Self {
        Self {
            wardrobe,
            ..Default::default()
        }
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn location_label(&self) -> Option<&str> {
        self.location_label.as_deref()
    }

    /// Add an item from the add-clothes form.
    ///
    /// # Errors
    ///
    /// Propagates `Wardrobe::add_item` errors; the wardrobe is unchanged then.
    pub fn add_clothes(&mut self, item: NewClothing) -> Result<(), WardrobeError> {
        tracing::debug!(category = %item.category, name = %item.name, "Adding clothing item");
        match self.wardrobe.add_item(item) {
            Ok(next) => {
                self.wardrobe = next;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected clothing item: {}", e);
                Err(e)
            }
        }
    }

    /// Read the weather and replace the recommendation.
    ///
    /// Temperature and location are both read before any state changes, so a
    /// failing lookup leaves the previous recommendation, temperature and
    /// location in place.
    ///
    /// # Errors
    ///
    /// Any error from the lookup accessors.
    pub fn generate_outfit<W, R>(
        &mut self,
        weather: &W,
        rng: &mut R,
    ) -> Result<&Recommendation, WeatherError>
    where
        W: WeatherLookup + ?Sized,
        R: Rng + ?Sized,
    {
        let temperature = weather.current_temperature()?;
        let label = weather.location_label()?;

        tracing::info!(temperature, location = %label, "Generating outfit");
        self.location_label = Some(label);
        Ok(self.apply(temperature, rng))
    }

    /// Recommend for a known temperature without a weather lookup. Clears
    /// the location label.
    pub fn recommend_for<R: Rng + ?Sized>(&mut self, temperature: f64, rng: &mut R) -> &Recommendation {
        self.location_label = None;
        self.apply(temperature, rng)
    }

    fn apply<R: Rng + ?Sized>(&mut self, temperature: f64, rng: &mut R) -> &Recommendation {
        self.temperature = Some(temperature);
        self.recommendation
            .insert(recommend(&self.wardrobe, temperature, rng))
    }
}
